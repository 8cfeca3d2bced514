//! Application state
//!
//! Every dependency the handlers need (both storage directories, the OCR
//! engine, the face detector, and the QR builder) is constructed once in
//! `setup` and injected here. Handlers never touch directory paths or
//! executable locations directly.

use notary_core::Config;
use notary_processing::{FaceDetector, OcrEngine, QrBuilder};
use notary_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Raw uploads and their QR codes, served under `/file/`.
    pub uploads: Arc<dyn Storage>,
    /// Generated documents and their QR codes, served under `/generated/`.
    pub generated: Arc<dyn Storage>,
    pub ocr: Arc<OcrEngine>,
    pub faces: Arc<FaceDetector>,
    pub qr: QrBuilder,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
