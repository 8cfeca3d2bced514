//! Configuration module
//!
//! Typed, env-backed configuration for the API and its processing components.
//! Every knob has a default so the service starts with no environment at all;
//! `.env` files are honoured via dotenvy.
//!
//! The OCR executable path and the face-detection model path live here and are
//! handed to the components that need them at construction time. Nothing in
//! this crate mutates process-wide state.

use std::env;
use std::path::PathBuf;

const DEFAULT_SERVER_PORT: u16 = 8000;
const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_GENERATED_DIR: &str = "generated";
const DEFAULT_TESSERACT_CMD: &str = "tesseract";
const DEFAULT_OCR_LANGUAGE: &str = "eng";
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 10;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server binds on.
    pub server_port: u16,
    /// Base URL prefixed to the file and generated-document URLs returned to
    /// clients. Not derived from the request host.
    pub public_base_url: String,
    /// Origins allowed by CORS (credentials are permitted for these).
    pub cors_origins: Vec<String>,
    /// Directory raw uploads and their QR codes are written to.
    pub upload_dir: PathBuf,
    /// Directory generated documents and their QR codes are written to.
    pub generated_dir: PathBuf,
    /// OCR executable. A bare name is resolved through `PATH`.
    pub tesseract_cmd: String,
    /// Language passed to the OCR engine.
    pub ocr_language: String,
    /// SeetaFace model file. Face detection reports zero faces when unset.
    pub face_model_path: Option<PathBuf>,
    /// Request body cap for uploads, in bytes.
    pub max_upload_size_bytes: usize,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            generated_dir: PathBuf::from(DEFAULT_GENERATED_DIR),
            tesseract_cmd: DEFAULT_TESSERACT_CMD.to_string(),
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
            face_model_path: None,
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_MB * 1024 * 1024,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let server_port = match env::var("NOTARY_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid NOTARY_PORT '{}': {}", v, e))?,
            Err(_) => defaults.server_port,
        };

        let max_upload_size_bytes = match env::var("MAX_UPLOAD_SIZE_MB") {
            Ok(v) => {
                let mb = v
                    .parse::<usize>()
                    .map_err(|e| anyhow::anyhow!("Invalid MAX_UPLOAD_SIZE_MB '{}': {}", v, e))?;
                mb * 1024 * 1024
            }
            Err(_) => defaults.max_upload_size_bytes,
        };

        Ok(Config {
            server_port,
            public_base_url: env::var("PUBLIC_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_base_url),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or(defaults.cors_origins),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            generated_dir: env::var("GENERATED_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.generated_dir),
            tesseract_cmd: env::var("TESSERACT_CMD").unwrap_or(defaults.tesseract_cmd),
            ocr_language: env::var("OCR_LANGUAGE").unwrap_or(defaults.ocr_language),
            face_model_path: env::var("FACE_MODEL_PATH").ok().map(PathBuf::from),
            max_upload_size_bytes,
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
