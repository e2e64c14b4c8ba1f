use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Backend root, without the /api suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Parking status poll cadence in seconds.
    #[serde(default = "default_status_poll_secs")]
    pub status_poll_secs: u64,

    /// System stats poll cadence in seconds.
    #[serde(default = "default_stats_poll_secs")]
    pub stats_poll_secs: u64,

    /// Render staged images with terminal graphics protocols.
    #[serde(default = "default_true")]
    pub image_preview: bool,

    /// Where exports are saved. Defaults to the platform download
    /// directory, then the current directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_status_poll_secs() -> u64 {
    10
}

fn default_stats_poll_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            status_poll_secs: default_status_poll_secs(),
            stats_poll_secs: default_stats_poll_secs(),
            image_preview: true,
            download_dir: None,
        }
    }
}

impl Config {
    /// Directory exports are written into.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
