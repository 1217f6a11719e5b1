use serde::{Deserialize, Serialize};

use crate::engine::keystroke::Keystroke;
use crate::engine::stats;
use crate::placement::technique::{self, FingerTechnique};

pub const LESSON_MIN: u8 = 1;
pub const LESSON_MAX: u8 = 20;

/// Skill levels, lowest to highest, named after the growth of a tree:
/// seedling, sprout, trunk, branch, treetop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Shatil,
    Nevet,
    Geza,
    Anaf,
    Tzameret,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Shatil => "shatil",
            SkillLevel::Nevet => "nevet",
            SkillLevel::Geza => "geza",
            SkillLevel::Anaf => "anaf",
            SkillLevel::Tzameret => "tzameret",
        }
    }

    fn band_min(self) -> u32 {
        match self {
            SkillLevel::Shatil => 0,
            SkillLevel::Nevet => 5,
            SkillLevel::Geza => 15,
            SkillLevel::Anaf => 30,
            SkillLevel::Tzameret => 50,
        }
    }

    /// WPM span of the band. The top band is unbounded above, so it uses a
    /// fixed width of 20 for the within-band offset calculation.
    fn band_size(self) -> u32 {
        match self {
            SkillLevel::Shatil => 5,
            SkillLevel::Nevet => 10,
            SkillLevel::Geza => 15,
            SkillLevel::Anaf => 20,
            SkillLevel::Tzameret => 20,
        }
    }

    fn base_lesson(self) -> u8 {
        match self {
            SkillLevel::Shatil => 1,
            SkillLevel::Nevet => 3,
            SkillLevel::Geza => 6,
            SkillLevel::Anaf => 11,
            SkillLevel::Tzameret => 16,
        }
    }
}

/// Stage-1 input: the raw free-typing diagnostic sample.
#[derive(Clone, Debug)]
pub struct FreeTypingSample {
    pub keystrokes: Vec<Keystroke>,
    pub duration_ms: u64,
}

/// Outcome of one placement run. Built once from the three stage inputs,
/// never mutated afterward.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacementResult {
    pub level: SkillLevel,
    pub wpm: u32,
    pub accuracy: u32,
    pub known_keys: Vec<char>,
    pub known_shortcuts: Vec<String>,
    pub finger_technique: FingerTechnique,
    pub recommended_lesson: u8,
}

/// Fixed WPM bands, lower-inclusive.
pub fn determine_level(wpm: u32) -> SkillLevel {
    match wpm {
        0..=4 => SkillLevel::Shatil,
        5..=14 => SkillLevel::Nevet,
        15..=29 => SkillLevel::Geza,
        30..=49 => SkillLevel::Anaf,
        _ => SkillLevel::Tzameret,
    }
}

/// Per-level base lesson plus a 0-2 offset for where the WPM falls within
/// its band, clamped to the catalog. Faster learners in the same band start
/// slightly further in without skipping past the catalog.
pub fn recommended_lesson(level: SkillLevel, wpm: u32) -> u8 {
    let within = wpm.saturating_sub(level.band_min()) as f64 / level.band_size() as f64;
    let offset = ((within * 2.0).floor() as u8).min(2);
    (level.base_lesson() + offset).clamp(LESSON_MIN, LESSON_MAX)
}

/// Compose the three stage inputs into one result. Pure and deterministic:
/// identical inputs always produce an identical result.
pub fn compute_placement_result(
    sample: &FreeTypingSample,
    known_keys: Vec<char>,
    known_shortcuts: Vec<String>,
) -> PlacementResult {
    let sample_stats = stats::compute_session_stats(&sample.keystrokes, 0, sample.duration_ms);
    let finger_technique = technique::calculate_finger_technique(&sample.keystrokes);
    let level = determine_level(sample_stats.wpm);

    PlacementResult {
        level,
        wpm: sample_stats.wpm,
        accuracy: sample_stats.accuracy,
        known_keys,
        known_shortcuts,
        finger_technique,
        recommended_lesson: recommended_lesson(level, sample_stats.wpm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_band_boundaries() {
        assert_eq!(determine_level(0), SkillLevel::Shatil);
        assert_eq!(determine_level(4), SkillLevel::Shatil);
        assert_eq!(determine_level(5), SkillLevel::Nevet);
        assert_eq!(determine_level(14), SkillLevel::Nevet);
        assert_eq!(determine_level(15), SkillLevel::Geza);
        assert_eq!(determine_level(29), SkillLevel::Geza);
        assert_eq!(determine_level(30), SkillLevel::Anaf);
        assert_eq!(determine_level(49), SkillLevel::Anaf);
        assert_eq!(determine_level(50), SkillLevel::Tzameret);
        assert_eq!(determine_level(60), SkillLevel::Tzameret);
    }

    #[test]
    fn test_levels_order() {
        assert!(SkillLevel::Shatil < SkillLevel::Nevet);
        assert!(SkillLevel::Nevet < SkillLevel::Geza);
        assert!(SkillLevel::Geza < SkillLevel::Anaf);
        assert!(SkillLevel::Anaf < SkillLevel::Tzameret);
    }

    #[test]
    fn test_recommended_lesson_base_at_band_start() {
        assert_eq!(recommended_lesson(SkillLevel::Shatil, 0), 1);
        assert_eq!(recommended_lesson(SkillLevel::Nevet, 5), 3);
        assert_eq!(recommended_lesson(SkillLevel::Geza, 15), 6);
        assert_eq!(recommended_lesson(SkillLevel::Anaf, 30), 11);
        assert_eq!(recommended_lesson(SkillLevel::Tzameret, 50), 16);
    }

    #[test]
    fn test_recommended_lesson_offset_within_band() {
        // Nevet band is 5..15: wpm 10 sits at the midpoint -> offset 1.
        assert_eq!(recommended_lesson(SkillLevel::Nevet, 10), 4);
        // Top of the band never reaches offset 2 exactly from flooring...
        assert_eq!(recommended_lesson(SkillLevel::Nevet, 14), 4);
        // ...but the unbounded top band caps at +2.
        assert_eq!(recommended_lesson(SkillLevel::Tzameret, 120), 18);
    }

    #[test]
    fn test_recommended_lesson_always_in_catalog() {
        for wpm in 0..200 {
            let level = determine_level(wpm);
            let lesson = recommended_lesson(level, wpm);
            assert!((LESSON_MIN..=LESSON_MAX).contains(&lesson), "wpm {wpm} -> {lesson}");
        }
    }

    #[test]
    fn test_compute_placement_result_deterministic() {
        // 1200 correct chars over 2 minutes: ~10 chars/sec.
        let keystrokes: Vec<Keystroke> = (0..1200)
            .map(|i| Keystroke::new('ש', 'ש', Some("KeyA"), i * 100))
            .collect();
        let sample = FreeTypingSample {
            keystrokes,
            duration_ms: 120_000,
        };

        let a = compute_placement_result(&sample, vec!['ש', 'ד'], vec!["ctrl+c".into()]);
        let b = compute_placement_result(&sample, vec!['ש', 'ד'], vec!["ctrl+c".into()]);

        // (1200 / 5.5) words over 2 minutes = 109 wpm.
        assert_eq!(a.wpm, 109);
        assert_eq!(a.level, SkillLevel::Tzameret);
        assert!(a.recommended_lesson >= 16);
        assert_eq!(a.finger_technique, FingerTechnique::Full);
        assert_eq!(a.level, b.level);
        assert_eq!(a.recommended_lesson, b.recommended_lesson);
    }

    #[test]
    fn test_stage_two_and_three_pass_through() {
        let sample = FreeTypingSample {
            keystrokes: Vec::new(),
            duration_ms: 60_000,
        };
        let keys = vec!['ש', 'ל', 'ם'];
        let shortcuts = vec!["ctrl+c".to_string(), "ctrl+v".to_string()];
        let result = compute_placement_result(&sample, keys.clone(), shortcuts.clone());

        assert_eq!(result.known_keys, keys);
        assert_eq!(result.known_shortcuts, shortcuts);
        // Empty sample: no penalty, no credit, no technique signal.
        assert_eq!(result.wpm, 0);
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.finger_technique, FingerTechnique::None);
        assert_eq!(result.level, SkillLevel::Shatil);
    }
}
