//! Notary Core Library
//!
//! This crate provides core domain models, error types, and configuration
//! that are shared across all components of the notary document service.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
