use crate::db::UserStore;
use crate::error::{ServiceError, ServiceResult};
use crate::projection::flatten_user;
use crate::remote::{RemoteData, RemoteSource};

/// Rows newly written by one load; ids already present are not counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
}

/// Write every user, then that user's posts, then each post's comments.
///
/// Rows whose id already exists are skipped, so repeating a load with the
/// same data is a no-op. Posts not owned by one of `data.users` and comments
/// not attached to one of those posts are not written.
pub fn project_and_store(store: &dyn UserStore, data: &RemoteData) -> ServiceResult<LoadSummary> {
    let mut summary = LoadSummary::default();

    for user in &data.users {
        if store.insert_user_if_absent(&flatten_user(user))? {
            summary.users += 1;
        }

        for post in data.posts.iter().filter(|p| p.user_id == user.id) {
            if store.insert_post_if_absent(post)? {
                summary.posts += 1;
            }

            for comment in data.comments.iter().filter(|c| c.post_id == post.id) {
                if store.insert_comment_if_absent(comment)? {
                    summary.comments += 1;
                }
            }
        }
    }

    Ok(summary)
}

/// Fetch from the remote source and project the result into storage.
/// Nothing is written unless all three collections arrived.
pub async fn load(source: &dyn RemoteSource, store: &dyn UserStore) -> ServiceResult<LoadSummary> {
    let data = source
        .load_remote_data()
        .await
        .map_err(ServiceError::Fetch)?;

    let summary = project_and_store(store, &data)?;
    tracing::info!(
        users = summary.users,
        posts = summary.posts,
        comments = summary.comments,
        "Stored remote data"
    );
    Ok(summary)
}
