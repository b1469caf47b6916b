use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

/// DbConnection manages the SQLite pool and owns schema setup.
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection, creating the database file and
    /// schema when missing.
    pub async fn new(url: &str) -> Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;

        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Shared-cache in-memory databases keep the schema visible across
        // pool connections; the uuid isolates parallel tests.
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                api_token TEXT NOT NULL UNIQUE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Timestamps are RFC 3339 UTC strings so lexicographic ORDER BY
        // matches chronological order.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS availabilities (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                morning_available INTEGER NOT NULL,
                morning_status TEXT NOT NULL,
                afternoon_available INTEGER NOT NULL,
                afternoon_status TEXT NOT NULL,
                evening_available INTEGER NOT NULL,
                evening_status TEXT NOT NULL,
                night_available INTEGER NOT NULL,
                night_status TEXT NOT NULL,
                repeat_schedule TEXT NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT,
                notes TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Candidate queries filter by owner and start_date range.
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_availabilities_user_start
            ON availabilities(user_id, start_date);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_users_api_token
            ON users(api_token);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
