// src/repositories/short_link.rs - Data access
use async_trait::async_trait;
use log::{debug, error};
use sqlx::PgPool;

#[cfg(test)]
use mockall::automock;

use crate::db::Database;
use crate::errors::RepositoryError;
use crate::models::ShortLink;

type Result<T> = std::result::Result<T, RepositoryError>;

/// Record store for short links. The core relies on exactly these two operations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShortLinkRepositoryTrait: Send + Sync {
    /// Finds a short link by exact token match
    ///
    /// ### Returns
    /// * `Result<Option<ShortLink>>` - The short link if found, or `None` if not found
    ///
    /// ### Errors
    /// * `RepositoryError::Unavailable` - If the store cannot be reached
    /// * `RepositoryError::Database` - If any other database error occurs
    async fn find_by_token(&self, token: &str) -> Result<Option<ShortLink>>;

    /// Inserts a new short link; never overwrites an existing token
    ///
    /// ### Returns
    /// * `Result<ShortLink>` - The stored record
    ///
    /// ### Errors
    /// * `RepositoryError::Duplicate` - If the token is already taken
    /// * `RepositoryError::Unavailable` - If the store cannot be reached
    /// * `RepositoryError::Database` - If any other database error occurs
    async fn insert(&self, link: &ShortLink) -> Result<ShortLink>;
}

// Implementation using actual database
pub struct ShortLinkRepository {
    pool: PgPool,
}

impl ShortLinkRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.get_pool().clone(),
        }
    }
}

#[async_trait]
impl ShortLinkRepositoryTrait for ShortLinkRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<ShortLink>> {
        sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT token, long_url, short_url, created_at
            FROM short_links
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to look up token '{}': {}", token, e);
            RepositoryError::from(e)
        })
    }

    async fn insert(&self, link: &ShortLink) -> Result<ShortLink> {
        // The primary key on token rejects a concurrent insert of the same token
        let record = sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO short_links (token, long_url, short_url, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING token, long_url, short_url, created_at
            "#,
        )
        .bind(&link.token)
        .bind(&link.long_url)
        .bind(&link.short_url)
        .bind(link.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let err = RepositoryError::from(e);
            if err.is_duplicate() {
                debug!("Insert of token '{}' lost to a concurrent request", link.token);
            } else {
                error!("Failed to insert short link: {}", err);
            }
            err
        })?;

        Ok(record)
    }
}
