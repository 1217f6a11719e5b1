pub mod rain;
pub mod words;

pub use rain::{FallingWord, GamePhase, WordRain};
pub use words::Difficulty;
