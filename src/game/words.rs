use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "assets/words/"]
struct WordAssets;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Cap on simultaneously live words.
    pub fn max_words(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 6,
            Difficulty::Hard => 8,
        }
    }

    /// Ticks between spawns (50 ms ticks).
    pub fn spawn_interval_ticks(self) -> u32 {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 30,
            Difficulty::Hard => 22,
        }
    }

    /// Fall speed in percent of the field per tick, before the elapsed-time
    /// ramp.
    pub fn base_speed(self) -> f64 {
        match self {
            Difficulty::Easy => 0.6,
            Difficulty::Medium => 0.9,
            Difficulty::Hard => 1.2,
        }
    }

    /// Pools are cumulative: harder difficulties include every easier word,
    /// so vocabulary never shrinks as difficulty rises.
    fn asset_files(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &["easy.txt"],
            Difficulty::Medium => &["easy.txt", "medium.txt"],
            Difficulty::Hard => &["easy.txt", "medium.txt", "hard.txt"],
        }
    }
}

#[derive(Debug, Error)]
pub enum WordPoolError {
    #[error("word list asset missing: {0}")]
    MissingAsset(&'static str),
    #[error("word list asset is not valid UTF-8: {0}")]
    InvalidEncoding(&'static str),
    #[error("word pool for difficulty '{0}' is empty")]
    EmptyPool(&'static str),
}

/// Load the word pool for a difficulty from the embedded assets.
pub fn pool_for(difficulty: Difficulty) -> Result<Vec<String>, WordPoolError> {
    let mut pool = Vec::new();
    for file in difficulty.asset_files() {
        let asset = WordAssets::get(file).ok_or(WordPoolError::MissingAsset(file))?;
        let text = std::str::from_utf8(asset.data.as_ref())
            .map_err(|_| WordPoolError::InvalidEncoding(file))?;
        pool.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    if pool.is_empty() {
        return Err(WordPoolError::EmptyPool(difficulty.as_str()));
    }
    Ok(pool)
}
