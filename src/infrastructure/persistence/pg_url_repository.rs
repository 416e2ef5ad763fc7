//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::UrlError;
use crate::domain::entities::{NewUrlRecord, UpdateOutcome, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::utils::db_error::is_unique_violation_on_code;

const RECORD_COLUMNS: &str =
    "id, short_code, long_url, created_at, expires_at, owner_id, clicks, last_clicked_at";

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    owner_id: Option<i64>,
    clicks: i64,
    last_clicked_at: Option<DateTime<Utc>>,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        Self {
            id: r.id,
            short_code: r.short_code,
            long_url: r.long_url,
            created_at: r.created_at,
            expires_at: r.expires_at,
            owner_id: r.owner_id,
            clicks: r.clicks,
            last_clicked_at: r.last_clicked_at,
        }
    }
}

/// PostgreSQL repository for URL records.
///
/// Uniqueness of `short_code` is enforced by the `urls_short_code_key`
/// constraint, so two concurrent inserts of the same code resolve to exactly
/// one success and one [`UrlError::DuplicateCode`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, UrlError> {
        let sql = format!(
            "INSERT INTO urls (short_code, long_url) VALUES ($1, $2) RETURNING {RECORD_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(&new_record.short_code)
            .bind(&new_record.long_url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_code(&e) {
                    UrlError::DuplicateCode(new_record.short_code.clone())
                } else {
                    e.into()
                }
            })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, UrlError> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM urls WHERE short_code = $1");

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn exists(&self, code: &str) -> Result<bool, UrlError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM urls WHERE short_code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, UrlError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET clicks = clicks + 1, last_clicked_at = now()
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_long_url(
        &self,
        code: &str,
        long_url: &str,
    ) -> Result<UpdateOutcome, UrlError> {
        let sql = format!(
            "UPDATE urls SET long_url = $2 \
             WHERE short_code = $1 AND long_url IS DISTINCT FROM $2 \
             RETURNING {RECORD_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(code)
            .bind(long_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        if let Some(row) = updated {
            return Ok(UpdateOutcome::Modified(row.into()));
        }

        // Zero rows: either the code is unknown or the value is already current.
        match self.find_by_code(code).await? {
            Some(record) => Ok(UpdateOutcome::Unchanged(record)),
            None => Err(UrlError::NotFound(code.to_string())),
        }
    }

    async fn delete(&self, code: &str) -> Result<bool, UrlError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, UrlError> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM urls");

        let rows = sqlx::query_as::<_, UrlRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn ping(&self) -> Result<(), UrlError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
