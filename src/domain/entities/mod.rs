//! Core domain entities representing the business data model.
//!
//! The service has a single entity, [`UrlRecord`]. Creation input is carried
//! by [`NewUrlRecord`] and the result of an edit by [`UpdateOutcome`].

pub mod url_record;

pub use url_record::{NewUrlRecord, UpdateOutcome, UrlRecord};
