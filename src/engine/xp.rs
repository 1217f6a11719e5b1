use serde::{Deserialize, Serialize};

use crate::engine::stats::SessionStats;

const BASE_XP: u32 = 50;
const WPM_BONUS_PER_POINT: u32 = 2;
const ACCURACY_BONUS_PER_POINT: u32 = 3;
const STREAK_STEP: f64 = 0.1;
const STREAK_CAP_DAYS: u32 = 10;

/// Both thresholds must hold; speed cannot buy back missing accuracy.
pub fn is_lesson_complete(stats: &SessionStats, pass_wpm: u32, pass_accuracy: u32) -> bool {
    stats.wpm >= pass_wpm && stats.accuracy >= pass_accuracy
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct XpReward {
    pub base: u32,
    pub streak_multiplier: f64,
    pub total: u32,
}

/// XP for a finished lesson attempt. The base is awarded for completing the
/// attempt at all; bonuses scale with how far the run exceeded the pass
/// thresholds, and consecutive daily practice compounds the whole reward up
/// to a capped multiplier.
pub fn calculate_xp_reward(
    stats: &SessionStats,
    pass_wpm: u32,
    pass_accuracy: u32,
    streak_days: u32,
) -> XpReward {
    let wpm_bonus = stats.wpm.saturating_sub(pass_wpm) * WPM_BONUS_PER_POINT;
    let accuracy_bonus = stats.accuracy.saturating_sub(pass_accuracy) * ACCURACY_BONUS_PER_POINT;
    let streak_multiplier = 1.0 + STREAK_STEP * streak_days.min(STREAK_CAP_DAYS) as f64;
    let total = ((BASE_XP + wpm_bonus + accuracy_bonus) as f64 * streak_multiplier).round() as u32;

    XpReward {
        base: BASE_XP,
        streak_multiplier,
        total,
    }
}
