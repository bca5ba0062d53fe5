use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usersync_server::{app, config, db, remote::HttpRemoteSource, state::AppState};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usersync_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::Settings::new().expect("Failed to load settings");

    // Without its schema the service cannot answer correctly, so failures here are fatal
    let db = db::Database::new(&settings.database.path).expect("Failed to create database");
    db.initialize()
        .expect("Failed to initialize database schema");
    tracing::info!("Database initialized at {}", settings.database.path);

    let remote = HttpRemoteSource::new(settings.remote.base_url.clone(), settings.remote.user_limit);
    tracing::info!(
        "Mirroring {} (first {} users)",
        settings.remote.base_url,
        settings.remote.user_limit
    );

    let state = AppState::with_database(db, Arc::new(remote));
    let app = app::router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .expect("Failed to parse server address");
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}
