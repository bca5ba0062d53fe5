use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use usersync_types::{Comment, Post, User};

/// The three collections pulled from the remote source
#[derive(Debug, Clone, Default)]
pub struct RemoteData {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

/// Source of the users, posts and comments to mirror
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch all three collections. Fails if any one of them fails.
    async fn load_remote_data(&self) -> Result<RemoteData>;
}

/// JSONPlaceholder-style HTTP source: `{base}/users`, `{base}/posts`, `{base}/comments`
#[derive(Clone)]
pub struct HttpRemoteSource {
    client: Client,
    base_url: String,
    user_limit: usize,
}

impl HttpRemoteSource {
    pub fn new(base_url: impl Into<String>, user_limit: usize) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_limit,
        }
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, resource);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(anyhow!("Request to {} failed with status {}", url, status));
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", resource))
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn load_remote_data(&self) -> Result<RemoteData> {
        // First failure drops the other in-flight requests
        let (mut users, posts, comments) = tokio::try_join!(
            self.fetch_collection::<User>("users"),
            self.fetch_collection::<Post>("posts"),
            self.fetch_collection::<Comment>("comments"),
        )?;

        users.truncate(self.user_limit);

        tracing::info!(
            users = users.len(),
            posts = posts.len(),
            comments = comments.len(),
            "Fetched remote data"
        );

        Ok(RemoteData {
            users,
            posts,
            comments,
        })
    }
}
