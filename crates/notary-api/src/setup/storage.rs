//! Storage setup and initialization

use anyhow::Result;
use notary_core::Config;
use notary_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Create the two storage capabilities: uploads (served under `/file/`) and
/// generated documents (served under `/generated/`).
pub async fn setup_storage(config: &Config) -> Result<(Arc<dyn Storage>, Arc<dyn Storage>)> {
    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        generated_dir = %config.generated_dir.display(),
        "Initializing storage directories"
    );

    let uploads = LocalStorage::new(
        &config.upload_dir,
        format!("{}/file", config.public_base_url),
    )
    .await?;

    let generated = LocalStorage::new(
        &config.generated_dir,
        format!("{}/generated", config.public_base_url),
    )
    .await?;

    Ok((Arc::new(uploads), Arc::new(generated)))
}
