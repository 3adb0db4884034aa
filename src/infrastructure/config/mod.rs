use std::env;
use std::path::PathBuf;

use crate::infrastructure::repositories::gemini_synthesis_repository::{
    DEFAULT_BASE_URL, DEFAULT_MODEL,
};

#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the hosted speech service. Optional so that commands
    /// that never synthesize (voices, history, settings) work without one.
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub tts_model: String,
    /// Directory holding settings.json and history.json.
    pub data_dir: PathBuf,
    pub preview_cache_enabled: bool,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.trim().is_empty()),
            api_base_url: env::var("VOXPRO_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            tts_model: env::var("VOXPRO_TTS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            data_dir: env::var("VOXPRO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            preview_cache_enabled: env::var("VOXPRO_PREVIEW_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(true),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voxpro")
}
