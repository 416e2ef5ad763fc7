//! Storage implementations of [`crate::domain::repositories::UrlRepository`].
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL storage with a unique constraint on the code
//! - [`InMemoryUrlRepository`] - process-local storage for development and tests
//! - [`TimedUrlRepository`] - deadline decorator applied around either backend

pub mod memory_url_repository;
pub mod pg_url_repository;
pub mod timed_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
pub use timed_url_repository::TimedUrlRepository;
