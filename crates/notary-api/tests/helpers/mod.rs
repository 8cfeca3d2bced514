//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p notary-api --test upload_test` or
//! `cargo test -p notary-api`. Storage directories are per-test tempdirs, the
//! face detector runs without a model (zero faces), and the OCR engine points
//! at the regular `tesseract` lookup; tests never assert on recognized text.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use notary_api::setup::routes;
use notary_api::state::AppState;
use notary_core::Config;
use notary_processing::{FaceDetector, OcrEngine, QrBuilder};
use notary_storage::{LocalStorage, Storage};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus owned storage directories.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: TempDir,
    pub generated_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently persisted in the generated-documents directory.
    pub fn generated_file_count(&self) -> usize {
        std::fs::read_dir(self.generated_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Setup a test application with isolated storage directories.
pub async fn setup_test_app() -> TestApp {
    let upload_dir = tempfile::tempdir().expect("Failed to create upload temp directory");
    let generated_dir = tempfile::tempdir().expect("Failed to create generated temp directory");

    let config = Config {
        upload_dir: upload_dir.path().to_path_buf(),
        generated_dir: generated_dir.path().to_path_buf(),
        ..Config::default()
    };

    let uploads: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(
            upload_dir.path(),
            format!("{}/file", config.public_base_url),
        )
        .await
        .expect("Failed to create upload storage"),
    );
    let generated: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(
            generated_dir.path(),
            format!("{}/generated", config.public_base_url),
        )
        .await
        .expect("Failed to create generated storage"),
    );

    let state = Arc::new(AppState {
        uploads,
        generated,
        ocr: Arc::new(OcrEngine::new(
            config.tesseract_cmd.clone(),
            config.ocr_language.clone(),
        )),
        faces: Arc::new(FaceDetector::new(None)),
        qr: QrBuilder::default(),
        config,
    });

    let router =
        routes::setup_routes(&state.config, state.clone()).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        upload_dir,
        generated_dir,
    }
}
