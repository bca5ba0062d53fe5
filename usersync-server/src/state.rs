use std::sync::Arc;

use crate::db::{Database, SqliteStore, UserStore};
use crate::remote::RemoteSource;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub remote: Arc<dyn RemoteSource>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, remote: Arc<dyn RemoteSource>) -> Self {
        Self { store, remote }
    }

    /// State backed by the SQLite store of an initialized database
    pub fn with_database(db: Database, remote: Arc<dyn RemoteSource>) -> Self {
        Self::new(Arc::new(SqliteStore::new(db.pool)), remote)
    }
}
