#![allow(dead_code)]

use std::env;

use address_proximity::infrastructure::db::migrations::run_migrations;
use once_cell::sync::Lazy;
use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};
use sqlx::Connection;
use tokio::sync::{Mutex, MutexGuard};

pub mod fixtures;
pub mod mocks;

static TEST_DB_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub struct TestDb {
    pool: PgPool,
    _db_lock_conn: PgConnection,
    _lock: MutexGuard<'static, ()>,
}

impl TestDb {
    /// Connects to `TEST_DATABASE_URL` (or `DATABASE_URL`), migrates and
    /// truncates the schema. Returns `None` when no database is configured
    /// so the calling test can skip; panics in CI instead.
    pub async fn new() -> Option<Self> {
        dotenvy::dotenv().ok();
        let url = env::var("TEST_DATABASE_URL")
            .ok()
            .or_else(|| env::var("DATABASE_URL").ok());

        let url = match url {
            Some(u) => u,
            None => {
                if env::var("CI").is_ok() {
                    panic!(
                        "DATABASE_URL or TEST_DATABASE_URL not set in CI. \
                        Integration tests require a database connection."
                    );
                }
                eprintln!("Skipping test: DATABASE_URL or TEST_DATABASE_URL not set");
                return None;
            }
        };

        let lock = Lazy::force(&TEST_DB_MUTEX).lock().await;

        // Serializes schema resets across test binaries.
        let mut db_lock_conn = PgConnection::connect(&url).await.ok()?;
        sqlx::query("SELECT pg_advisory_lock($1)")
            .bind(4242_i64)
            .execute(&mut db_lock_conn)
            .await
            .ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .ok()?;

        run_migrations(&pool).await.ok()?;
        sqlx::query("TRUNCATE TABLE addresses RESTART IDENTITY")
            .execute(&pool)
            .await
            .ok()?;

        Some(Self {
            pool,
            _db_lock_conn: db_lock_conn,
            _lock: lock,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
