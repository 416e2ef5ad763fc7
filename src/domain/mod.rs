//! Domain layer containing business entities and logic.
//!
//! This module defines the URL record entity, the storage contract and the
//! typed failures shared by every layer, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Domain error taxonomy
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::UrlError;
