//! Application services

pub mod ingestion;

pub use ingestion::{IngestionOutcome, IngestionService};
