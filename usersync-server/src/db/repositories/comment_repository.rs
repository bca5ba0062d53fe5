use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter};

use usersync_types::Comment;

use crate::db::DbPool;

pub struct CommentRepository {
    pool: DbPool,
}

impl CommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, comment: &Comment) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO comments (id, postId, name, email, body) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![comment.id, comment.post_id, comment.name, comment.email, comment.body],
        )
        .with_context(|| format!("Failed to create comment {}", comment.id))?;
        Ok(())
    }

    /// Insert a comment unless one with the same id exists.
    /// Returns true when a row was written.
    pub fn create_if_absent(&self, comment: &Comment) -> Result<bool> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute(
                "INSERT INTO comments (id, postId, name, email, body)
                 SELECT ?1, ?2, ?3, ?4, ?5
                 WHERE NOT EXISTS (SELECT 1 FROM comments WHERE id = ?1)",
                params![comment.id, comment.post_id, comment.name, comment.email, comment.body],
            )
            .with_context(|| format!("Failed to store comment {}", comment.id))?;
        Ok(changed > 0)
    }

    /// Get every comment attached to any of the given posts, in one query
    pub fn get_by_post_ids(&self, post_ids: &[i64]) -> Result<Vec<Comment>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.pool.get()?;
        let placeholders = vec!["?"; post_ids.len()].join(", ");
        let query = format!(
            "SELECT id, postId, name, email, body
             FROM comments
             WHERE postId IN ({})
             ORDER BY id",
            placeholders
        );

        let mut stmt = conn.prepare(&query)?;
        let comments = stmt
            .query_map(params_from_iter(post_ids.iter()), |row| {
                Ok(Comment {
                    id: row.get(0)?,
                    post_id: row.get(1)?,
                    name: row.get(2)?,
                    email: row.get(3)?,
                    body: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(comments)
    }

    /// Delete comments on every post owned by a user
    pub fn delete_by_post_owner(&self, user_id: i64) -> Result<usize> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute(
                "DELETE FROM comments WHERE postId IN (SELECT id FROM posts WHERE userId = ?)",
                [user_id],
            )
            .context("Failed to delete comments")?;
        Ok(changed)
    }

    pub fn delete_all(&self) -> Result<usize> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute("DELETE FROM comments", [])
            .context("Failed to delete comments")?;
        Ok(changed)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        let count = conn.query_row("SELECT COUNT(*) FROM comments", [], |row| row.get(0))?;
        Ok(count)
    }
}
