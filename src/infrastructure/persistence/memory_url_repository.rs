//! Process-local implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::UrlError;
use crate::domain::entities::{NewUrlRecord, UpdateOutcome, UrlRecord};
use crate::domain::repositories::UrlRepository;

/// In-memory URL repository backed by a `DashMap` keyed by short code.
///
/// Inserts go through the map's entry API, which holds the shard lock for the
/// duration of the check, so duplicate codes are rejected atomically just
/// like the PostgreSQL constraint does. Records are lost on restart.
#[derive(Debug)]
pub struct InMemoryUrlRepository {
    records: DashMap<String, UrlRecord>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, UrlError> {
        match self.records.entry(new_record.short_code.clone()) {
            Entry::Occupied(_) => Err(UrlError::DuplicateCode(new_record.short_code)),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let record = UrlRecord::new(
                    id,
                    new_record.short_code,
                    new_record.long_url,
                    Utc::now(),
                );
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, UrlError> {
        Ok(self.records.get(code).map(|entry| entry.value().clone()))
    }

    async fn exists(&self, code: &str) -> Result<bool, UrlError> {
        Ok(self.records.contains_key(code))
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, UrlError> {
        let Some(mut entry) = self.records.get_mut(code) else {
            return Ok(false);
        };

        entry.register_click(Utc::now());
        Ok(true)
    }

    async fn update_long_url(
        &self,
        code: &str,
        long_url: &str,
    ) -> Result<UpdateOutcome, UrlError> {
        let Some(mut entry) = self.records.get_mut(code) else {
            return Err(UrlError::NotFound(code.to_string()));
        };

        if entry.long_url == long_url {
            return Ok(UpdateOutcome::Unchanged(entry.value().clone()));
        }

        entry.long_url = long_url.to_string();
        Ok(UpdateOutcome::Modified(entry.value().clone()))
    }

    async fn delete(&self, code: &str) -> Result<bool, UrlError> {
        Ok(self.records.remove(code).is_some())
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, UrlError> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn ping(&self) -> Result<(), UrlError> {
        Ok(())
    }
}
