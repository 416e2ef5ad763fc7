//! Repository decorator that puts a deadline on every store call.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::domain::UrlError;
use crate::domain::entities::{NewUrlRecord, UpdateOutcome, UrlRecord};
use crate::domain::repositories::UrlRepository;

/// Wraps any [`UrlRepository`] and fails calls that exceed `timeout` with
/// [`UrlError::Timeout`].
///
/// Only the in-flight call is abandoned. Work the store already committed
/// (an increment that landed just before the deadline, say) stays committed.
pub struct TimedUrlRepository {
    inner: Arc<dyn UrlRepository>,
    timeout: Duration,
}

impl TimedUrlRepository {
    pub fn new(inner: Arc<dyn UrlRepository>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn run<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T, UrlError>> + Send,
    ) -> Result<T, UrlError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation, timeout = ?self.timeout, "Store operation timed out");
                Err(UrlError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl UrlRepository for TimedUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, UrlError> {
        self.run("insert", self.inner.insert(new_record)).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, UrlError> {
        self.run("find_by_code", self.inner.find_by_code(code)).await
    }

    async fn exists(&self, code: &str) -> Result<bool, UrlError> {
        self.run("exists", self.inner.exists(code)).await
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, UrlError> {
        self.run("increment_clicks", self.inner.increment_clicks(code))
            .await
    }

    async fn update_long_url(
        &self,
        code: &str,
        long_url: &str,
    ) -> Result<UpdateOutcome, UrlError> {
        self.run(
            "update_long_url",
            self.inner.update_long_url(code, long_url),
        )
        .await
    }

    async fn delete(&self, code: &str) -> Result<bool, UrlError> {
        self.run("delete", self.inner.delete(code)).await
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, UrlError> {
        self.run("list", self.inner.list()).await
    }

    async fn ping(&self) -> Result<(), UrlError> {
        self.run("ping", self.inner.ping()).await
    }
}
