use anyhow::{Context, Result};
use rusqlite::params;

use usersync_types::Post;

use crate::db::DbPool;

pub struct PostRepository {
    pool: DbPool,
}

impl PostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new post
    pub fn create(&self, post: &Post) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO posts (id, userId, title, body) VALUES (?1, ?2, ?3, ?4)",
            params![post.id, post.user_id, post.title, post.body],
        )
        .with_context(|| format!("Failed to create post {}", post.id))?;
        Ok(())
    }

    /// Insert a post unless one with the same id exists.
    /// Returns true when a row was written.
    pub fn create_if_absent(&self, post: &Post) -> Result<bool> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute(
                "INSERT INTO posts (id, userId, title, body)
                 SELECT ?1, ?2, ?3, ?4
                 WHERE NOT EXISTS (SELECT 1 FROM posts WHERE id = ?1)",
                params![post.id, post.user_id, post.title, post.body],
            )
            .with_context(|| format!("Failed to store post {}", post.id))?;
        Ok(changed > 0)
    }

    /// Get posts owned by a user, in id order
    pub fn get_by_user(&self, user_id: i64) -> Result<Vec<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, userId, title, body
             FROM posts
             WHERE userId = ?
             ORDER BY id",
        )?;

        let posts = stmt
            .query_map([user_id], |row| {
                Ok(Post {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    title: row.get(2)?,
                    body: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(posts)
    }

    pub fn delete_by_user(&self, user_id: i64) -> Result<usize> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute("DELETE FROM posts WHERE userId = ?", [user_id])
            .context("Failed to delete posts")?;
        Ok(changed)
    }

    pub fn delete_all(&self) -> Result<usize> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute("DELETE FROM posts", [])
            .context("Failed to delete posts")?;
        Ok(changed)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        let count = conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?;
        Ok(count)
    }
}
