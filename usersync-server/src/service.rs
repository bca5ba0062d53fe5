use usersync_types::{CreateUserRequest, UserAggregate};

use crate::db::UserStore;
use crate::error::{ServiceError, ServiceResult};
use crate::projection::{assemble_aggregate, flatten_user, owned_comment, owned_post};

/// Read a user with its posts and their comments
pub fn get_user_aggregate(store: &dyn UserStore, user_id: i64) -> ServiceResult<UserAggregate> {
    let row = store
        .get_user(user_id)?
        .ok_or(ServiceError::NotFound(user_id))?;

    let posts = store.posts_by_user(user_id)?;
    let post_ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    let comments = store.comments_for_posts(&post_ids)?;

    Ok(assemble_aggregate(row, posts, comments))
}

pub fn delete_all(store: &dyn UserStore) -> ServiceResult<()> {
    store.delete_all()?;
    Ok(())
}

/// Delete a user and everything attached to it
pub fn delete_user(store: &dyn UserStore, user_id: i64) -> ServiceResult<()> {
    if store.delete_user_cascade(user_id)? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(user_id))
    }
}

/// Create a user with its posts and comments.
///
/// The existence check and the inserts are separate statements: two
/// concurrent creates with the same id can both pass the check, and the
/// loser then fails on the primary key with a storage error.
pub fn create_user(store: &dyn UserStore, request: &CreateUserRequest) -> ServiceResult<()> {
    let user_id = request.user.id;
    if store.user_exists(user_id)? {
        return Err(ServiceError::Conflict(user_id));
    }

    store.insert_user(&flatten_user(&request.user))?;

    for post in &request.posts {
        store.insert_post(&owned_post(user_id, post))?;
        for comment in &post.comments {
            store.insert_comment(&owned_comment(post.id, comment))?;
        }
    }

    tracing::info!(user_id, posts = request.posts.len(), "Created user");
    Ok(())
}
