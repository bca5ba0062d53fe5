use anyhow::Result;

use usersync_types::{Comment, Post};

use crate::db::repositories::{CommentRepository, PostRepository, UserRepository};
use crate::db::rows::{TableCounts, UserRow};
use crate::db::DbPool;

/// Storage operations the sync, read and mutation paths run against.
///
/// Each call is an independent statement; nothing here spans a transaction.
pub trait UserStore: Send + Sync {
    /// Insert a user unless its id exists. Returns true when written.
    fn insert_user_if_absent(&self, user: &UserRow) -> Result<bool>;

    /// Insert a post unless its id exists. Returns true when written.
    fn insert_post_if_absent(&self, post: &Post) -> Result<bool>;

    /// Insert a comment unless its id exists. Returns true when written.
    fn insert_comment_if_absent(&self, comment: &Comment) -> Result<bool>;

    /// Insert a user, failing on an existing id
    fn insert_user(&self, user: &UserRow) -> Result<()>;

    fn insert_post(&self, post: &Post) -> Result<()>;

    fn insert_comment(&self, comment: &Comment) -> Result<()>;

    fn user_exists(&self, user_id: i64) -> Result<bool>;

    fn get_user(&self, user_id: i64) -> Result<Option<UserRow>>;

    fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>>;

    /// Comments for all given posts, fetched in a single lookup
    fn comments_for_posts(&self, post_ids: &[i64]) -> Result<Vec<Comment>>;

    /// Remove every comment, post and user, children first
    fn delete_all(&self) -> Result<()>;

    /// Remove a user's comments, then posts, then the user row.
    /// Returns false if there was no user row to remove.
    fn delete_user_cascade(&self, user_id: i64) -> Result<bool>;

    fn counts(&self) -> Result<TableCounts>;
}

/// SQLite-backed store built on the table repositories
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    fn posts(&self) -> PostRepository {
        PostRepository::new(self.pool.clone())
    }

    fn comments(&self) -> CommentRepository {
        CommentRepository::new(self.pool.clone())
    }
}

impl UserStore for SqliteStore {
    fn insert_user_if_absent(&self, user: &UserRow) -> Result<bool> {
        self.users().create_if_absent(user)
    }

    fn insert_post_if_absent(&self, post: &Post) -> Result<bool> {
        self.posts().create_if_absent(post)
    }

    fn insert_comment_if_absent(&self, comment: &Comment) -> Result<bool> {
        self.comments().create_if_absent(comment)
    }

    fn insert_user(&self, user: &UserRow) -> Result<()> {
        self.users().create(user)
    }

    fn insert_post(&self, post: &Post) -> Result<()> {
        self.posts().create(post)
    }

    fn insert_comment(&self, comment: &Comment) -> Result<()> {
        self.comments().create(comment)
    }

    fn user_exists(&self, user_id: i64) -> Result<bool> {
        self.users().exists(user_id)
    }

    fn get_user(&self, user_id: i64) -> Result<Option<UserRow>> {
        self.users().get_by_id(user_id)
    }

    fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>> {
        self.posts().get_by_user(user_id)
    }

    fn comments_for_posts(&self, post_ids: &[i64]) -> Result<Vec<Comment>> {
        self.comments().get_by_post_ids(post_ids)
    }

    fn delete_all(&self) -> Result<()> {
        let comments = self.comments().delete_all()?;
        let posts = self.posts().delete_all()?;
        let users = self.users().delete_all()?;
        tracing::debug!(users, posts, comments, "Deleted all rows");
        Ok(())
    }

    fn delete_user_cascade(&self, user_id: i64) -> Result<bool> {
        let comments = self.comments().delete_by_post_owner(user_id)?;
        let posts = self.posts().delete_by_user(user_id)?;
        let removed = self.users().delete(user_id)?;
        tracing::debug!(user_id, posts, comments, removed, "Cascading user delete");
        Ok(removed)
    }

    fn counts(&self) -> Result<TableCounts> {
        Ok(TableCounts {
            users: self.users().count()?,
            posts: self.posts().count()?,
            comments: self.comments().count()?,
        })
    }
}
