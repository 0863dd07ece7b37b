use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "quizwiz.cfg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub asset_dir: PathBuf,
    pub feedback_delay_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub shuffle_questions: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("images"),
            feedback_delay_ms: 1000,
            window_width: 800.0,
            window_height: 600.0,
            shuffle_questions: false,
        }
    }
}

impl UserConfig {
    /// Reads `quizwiz.cfg` from the working directory, then from the user
    /// config directory. Falls back to defaults when neither is usable.
    pub fn load() -> Self {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("quizwiz").join(CONFIG_FILE));
        }

        for path in candidates {
            if let Some(config) = Self::load_from(&path) {
                log::info!("Loaded config from {}", path.display());
                return config;
            }
        }
        log::info!("No config file found, using defaults");
        Self::default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Some(Self::default())
            }
        }
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn window_size(&self) -> [u32; 2] {
        [self.window_width as u32, self.window_height as u32]
    }
}
