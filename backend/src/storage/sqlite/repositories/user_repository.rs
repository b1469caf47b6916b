use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::user::User;
use crate::storage::sqlite::db::DbConnection;
use crate::storage::traits::UserStore;

/// Repository for user lookups by API token
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM users
            WHERE api_token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(User {
                id: r.get("id"),
                name: r.get("name"),
            })),
            None => Ok(None),
        }
    }

    async fn insert_user(&self, user: &User, token: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, api_token)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(token)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }
}
