//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume the repository trait and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Free short code selection
//! - [`services::url_service::UrlService`] - Record creation, redirects and management

pub mod services;
