use serde::{Deserialize, Serialize};

use crate::engine::keystroke::Keystroke;
use crate::keyboard::layout;

const FULL_THRESHOLD: f64 = 0.8;
const PARTIAL_THRESHOLD: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerTechnique {
    None,
    Partial,
    Full,
}

/// How much of the sample was struck on the layout-correct physical key.
/// Only keystrokes whose expected character the layout knows are eligible;
/// a sample with no eligible keystrokes says nothing about technique.
pub fn calculate_finger_technique(keystrokes: &[Keystroke]) -> FingerTechnique {
    let mut eligible = 0usize;
    let mut matched = 0usize;

    for ks in keystrokes {
        let Some(mapping) = layout::key_for(ks.expected) else {
            continue;
        };
        eligible += 1;
        if ks.code == Some(mapping.code) {
            matched += 1;
        }
    }

    if eligible == 0 {
        return FingerTechnique::None;
    }

    let ratio = matched as f64 / eligible as f64;
    if ratio >= FULL_THRESHOLD {
        FingerTechnique::Full
    } else if ratio >= PARTIAL_THRESHOLD {
        FingerTechnique::Partial
    } else {
        FingerTechnique::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_key(expected: char, code: &'static str) -> Keystroke {
        Keystroke::new(expected, expected, Some(code), 0)
    }

    #[test]
    fn test_no_eligible_keystrokes_is_none() {
        assert_eq!(calculate_finger_technique(&[]), FingerTechnique::None);
        // Latin chars are outside the layout table.
        let sample = vec![on_key('a', "KeyA"), on_key('b', "KeyB")];
        assert_eq!(calculate_finger_technique(&sample), FingerTechnique::None);
    }

    #[test]
    fn test_all_layout_correct_is_full() {
        let sample = vec![
            on_key('ש', "KeyA"),
            on_key('ד', "KeyS"),
            on_key('ג', "KeyD"),
            on_key('כ', "KeyF"),
            on_key('ח', "KeyJ"),
        ];
        assert_eq!(calculate_finger_technique(&sample), FingerTechnique::Full);
    }

    #[test]
    fn test_half_correct_is_partial() {
        let sample = vec![
            on_key('ש', "KeyA"),
            on_key('ד', "KeyS"),
            on_key('ג', "KeyQ"),
            on_key('כ', "KeyW"),
        ];
        assert_eq!(calculate_finger_technique(&sample), FingerTechnique::Partial);
    }

    #[test]
    fn test_mostly_wrong_keys_is_none() {
        let sample = vec![
            on_key('ש', "KeyQ"),
            on_key('ד', "KeyW"),
            on_key('ג', "KeyE"),
            on_key('כ', "KeyF"),
        ];
        assert_eq!(calculate_finger_technique(&sample), FingerTechnique::None);
    }

    #[test]
    fn test_missing_code_counts_against() {
        let mut sample: Vec<Keystroke> = (0..4).map(|_| on_key('ש', "KeyA")).collect();
        sample.push(Keystroke::new('ד', 'ד', None, 0));
        // 4 of 5 eligible matched = 0.8 exactly.
        assert_eq!(calculate_finger_technique(&sample), FingerTechnique::Full);
        sample.push(Keystroke::new('ג', 'ג', None, 0));
        // 4 of 6 = 0.67 -> partial.
        assert_eq!(calculate_finger_technique(&sample), FingerTechnique::Partial);
    }

    #[test]
    fn test_boundary_ratios() {
        // 2 of 5 = 0.4 exactly -> partial (lower-inclusive).
        let sample = vec![
            on_key('ש', "KeyA"),
            on_key('ד', "KeyS"),
            on_key('ג', "KeyQ"),
            on_key('כ', "KeyQ"),
            on_key('ע', "KeyQ"),
        ];
        assert_eq!(calculate_finger_technique(&sample), FingerTechnique::Partial);
    }
}
