use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::keystroke::Keystroke;

/// Average Hebrew word length in characters. Every WPM figure in the program
/// is derived with this constant, not the generic 5-char convention.
pub const CHARS_PER_WORD: f64 = 5.5;

/// A key can only be ranked weak once it has this many attempts.
const MIN_KEY_SAMPLES: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTally {
    pub correct: usize,
    pub total: usize,
}

/// Derived snapshot of a keystroke sequence. Never mutated; recompute from
/// the keystroke list instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_keystrokes: usize,
    pub correct_keystrokes: usize,
    pub error_keystrokes: usize,
    pub accuracy: u32,
    pub wpm: u32,
    pub duration_ms: u64,
    pub key_accuracy: HashMap<char, KeyTally>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakKey {
    pub key: char,
    pub accuracy: u32,
    pub total: usize,
}

/// Words per minute from correct characters over elapsed wall time.
/// Zero for an empty or instantaneous sample.
pub fn calculate_wpm(correct_chars: usize, elapsed_ms: u64) -> u32 {
    if elapsed_ms == 0 || correct_chars == 0 {
        return 0;
    }
    let words = correct_chars as f64 / CHARS_PER_WORD;
    let minutes = elapsed_ms as f64 / 60_000.0;
    (words / minutes).round() as u32
}

/// Percentage of correct keystrokes. An empty sample is not a failure.
pub fn calculate_accuracy(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

/// Single pass over the keystroke list. Per-key tallies are keyed by the
/// expected character, so a miss counts against the key the learner was
/// supposed to hit.
pub fn compute_session_stats(
    keystrokes: &[Keystroke],
    started_at_ms: u64,
    now_ms: u64,
) -> SessionStats {
    let mut correct = 0usize;
    let mut key_accuracy: HashMap<char, KeyTally> = HashMap::new();

    for ks in keystrokes {
        let tally = key_accuracy.entry(ks.expected).or_default();
        tally.total += 1;
        if ks.is_correct {
            tally.correct += 1;
            correct += 1;
        }
    }

    let total = keystrokes.len();
    let duration_ms = now_ms.saturating_sub(started_at_ms);

    SessionStats {
        total_keystrokes: total,
        correct_keystrokes: correct,
        error_keystrokes: total - correct,
        accuracy: calculate_accuracy(correct, total),
        wpm: calculate_wpm(correct, duration_ms),
        duration_ms,
        key_accuracy,
    }
}

/// Keys ranked weakest first. Keys with fewer than `MIN_KEY_SAMPLES` attempts
/// are skipped; ties go to the key with more attempts, since more evidence of
/// a weakness outranks a low-sample anomaly.
pub fn find_weak_keys(stats: &SessionStats) -> Vec<WeakKey> {
    let mut weak: Vec<WeakKey> = stats
        .key_accuracy
        .iter()
        .filter(|(_, tally)| tally.total >= MIN_KEY_SAMPLES)
        .map(|(&key, tally)| WeakKey {
            key,
            accuracy: calculate_accuracy(tally.correct, tally.total),
            total: tally.total,
        })
        .collect();

    weak.sort_by(|a, b| a.accuracy.cmp(&b.accuracy).then(b.total.cmp(&a.total)));
    weak
}

/// WPM over the span between the first and most recent keystroke in the
/// buffer. Independent of when the session officially started, so it gives
/// feedback from the second keystroke on.
pub fn calculate_realtime_wpm(keystrokes: &[Keystroke]) -> u32 {
    if keystrokes.len() < 2 {
        return 0;
    }
    let first = keystrokes[0].timestamp_ms;
    let last = keystrokes[keystrokes.len() - 1].timestamp_ms;
    let correct = keystrokes.iter().filter(|ks| ks.is_correct).count();
    calculate_wpm(correct, last.saturating_sub(first))
}
