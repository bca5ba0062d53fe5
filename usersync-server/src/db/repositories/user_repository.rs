use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension, Row};

use crate::db::rows::UserRow;
use crate::db::DbPool;

pub struct UserRepository {
    pool: DbPool,
}

fn map_user_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        name: row.get(1)?,
        username: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        website: row.get(5)?,
        street: row.get(6)?,
        suite: row.get(7)?,
        city: row.get(8)?,
        zipcode: row.get(9)?,
        lat: row.get(10)?,
        lng: row.get(11)?,
        company_name: row.get(12)?,
        catch_phrase: row.get(13)?,
        bs: row.get(14)?,
    })
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub fn get_by_id(&self, user_id: i64) -> Result<Option<UserRow>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, username, email, phone, website, street, suite, city, zipcode,
                    lat, lng, companyName, catchPhrase, bs
             FROM users
             WHERE id = ?",
        )?;

        let user = stmt.query_row([user_id], map_user_row).optional()?;

        Ok(user)
    }

    /// Check whether a user row exists
    pub fn exists(&self, user_id: i64) -> Result<bool> {
        let conn = self.pool.get()?;
        let found = conn
            .query_row("SELECT 1 FROM users WHERE id = ?", [user_id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// Insert a user; fails if the id is already taken
    pub fn create(&self, user: &UserRow) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO users (id, name, username, email, phone, website, street, suite, city,
                                zipcode, lat, lng, companyName, catchPhrase, bs)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                user.id,
                user.name,
                user.username,
                user.email,
                user.phone,
                user.website,
                user.street,
                user.suite,
                user.city,
                user.zipcode,
                user.lat,
                user.lng,
                user.company_name,
                user.catch_phrase,
                user.bs,
            ],
        )
        .with_context(|| format!("Failed to create user {}", user.id))?;
        Ok(())
    }

    /// Insert a user unless one with the same id exists.
    /// Returns true when a row was written.
    pub fn create_if_absent(&self, user: &UserRow) -> Result<bool> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute(
                "INSERT INTO users (id, name, username, email, phone, website, street, suite, city,
                                    zipcode, lat, lng, companyName, catchPhrase, bs)
                 SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15
                 WHERE NOT EXISTS (SELECT 1 FROM users WHERE id = ?1)",
                params![
                    user.id,
                    user.name,
                    user.username,
                    user.email,
                    user.phone,
                    user.website,
                    user.street,
                    user.suite,
                    user.city,
                    user.zipcode,
                    user.lat,
                    user.lng,
                    user.company_name,
                    user.catch_phrase,
                    user.bs,
                ],
            )
            .with_context(|| format!("Failed to store user {}", user.id))?;
        Ok(changed > 0)
    }

    /// Delete a user row only. Returns true if a row was removed.
    pub fn delete(&self, user_id: i64) -> Result<bool> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute("DELETE FROM users WHERE id = ?", [user_id])
            .context("Failed to delete user")?;
        Ok(changed > 0)
    }

    pub fn delete_all(&self) -> Result<usize> {
        let conn = self.pool.get()?;
        let changed = conn
            .execute("DELETE FROM users", [])
            .context("Failed to delete users")?;
        Ok(changed)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }
}
