use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

/// Persisted representation of one registered user. Created once at
/// registration, read once per authentication attempt, never mutated.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Credential store consumed by the registration and authentication flows.
/// Failures are infrastructure errors and surface as a generic server error
/// at the flow boundary.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>>;
    async fn insert(&self, identity: &Identity) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>> {
        let query = r"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            LIMIT 1
        ";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .context("failed to look up user by email")?;

        Ok(row.map(|row| Identity {
            id: row.get("id"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
        }))
    }

    async fn insert(&self, identity: &Identity) -> Result<()> {
        let query = r"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
        ";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        sqlx::query(query)
            .bind(identity.id)
            .bind(&identity.email)
            .bind(&identity.password_hash)
            .execute(&self.pool)
            .instrument(span)
            .await
            .context("failed to insert user")?;

        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryUserStore;

#[cfg(test)]
mod memory {
    use super::{Identity, UserStore};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    /// In-memory store used by flow and handler tests.
    #[derive(Default)]
    pub struct MemoryUserStore {
        users: Mutex<HashMap<String, Identity>>,
    }

    impl MemoryUserStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn count(&self) -> usize {
            self.users.lock().await.len()
        }
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<Identity>> {
            Ok(self.users.lock().await.get(email).cloned())
        }

        async fn insert(&self, identity: &Identity) -> Result<()> {
            self.users
                .lock()
                .await
                .insert(identity.email.clone(), identity.clone());

            Ok(())
        }
    }
}
