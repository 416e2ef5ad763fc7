//! Utility functions for code generation, URL validation and storage errors.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`url_validator`] - Destination URL checks
//! - [`db_error`] - `sqlx` error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
