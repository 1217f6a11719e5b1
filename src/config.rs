use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_lives")]
    pub lives: u32,
    #[serde(default = "default_emit_json")]
    pub emit_json: bool,
}

fn default_difficulty() -> String {
    "easy".to_string()
}
fn default_lives() -> u32 {
    3
}
fn default_emit_json() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            lives: default_lives(),
            emit_json: default_emit_json(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    fn load_from(path: PathBuf) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_path())
    }

    fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("maklid")
            .join("config.toml")
    }

    /// Reset stale values from old config files. Call after deserialization.
    pub fn normalize(&mut self) {
        if !matches!(self.difficulty.as_str(), "easy" | "medium" | "hard") {
            self.difficulty = default_difficulty();
        }
        if self.lives == 0 {
            self.lives = default_lives();
        }
    }
}
