//! Data models for the application
//!
//! This module contains all data structures used throughout the application,
//! organized by domain. Each sub-module represents a specific feature area.

mod generated;
mod submission;

// Re-export all models for convenient imports
pub use generated::*;
pub use submission::*;
