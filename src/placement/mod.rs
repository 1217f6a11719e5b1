pub mod classify;
pub mod technique;

pub use classify::{FreeTypingSample, PlacementResult, SkillLevel};
pub use technique::FingerTechnique;
