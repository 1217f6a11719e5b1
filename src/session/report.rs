use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::stats::{self, SessionStats, WeakKey};
use crate::engine::xp::{self, XpReward};
use crate::session::state::TypingSession;

/// End-of-session record handed to the external gamification/reporting
/// consumer. The engine never stores these itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionReport {
    pub stats: SessionStats,
    pub weak_keys: Vec<WeakKey>,
    pub lesson_id: Option<u8>,
    pub lines_completed: usize,
    pub passed: bool,
    pub xp: XpReward,
    pub timestamp: DateTime<Utc>,
}

impl SessionReport {
    /// `None` when the session never produced a keystroke; there is nothing
    /// to report on an untouched buffer.
    pub fn from_session(
        session: &TypingSession,
        pass_wpm: u32,
        pass_accuracy: u32,
        streak_days: u32,
    ) -> Option<Self> {
        let session_stats = session.get_stats()?;
        let weak_keys = stats::find_weak_keys(&session_stats);
        let passed = xp::is_lesson_complete(&session_stats, pass_wpm, pass_accuracy);
        let reward = xp::calculate_xp_reward(&session_stats, pass_wpm, pass_accuracy, streak_days);

        Some(Self {
            stats: session_stats,
            weak_keys,
            lesson_id: session.lesson_id,
            lines_completed: session.current_line + usize::from(session.is_complete()),
            passed,
            xp: reward,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_report_for_untouched_session() {
        let mut session = TypingSession::new();
        session.start_session("שד", Some(1));
        assert!(SessionReport::from_session(&session, 10, 90, 0).is_none());
    }

    #[test]
    fn test_report_carries_session_fields() {
        let mut session = TypingSession::new();
        session.start_session("שד", Some(4));
        session.type_key_at('ש', None, 0);
        session.type_key_at('ד', None, 500);

        let report = SessionReport::from_session(&session, 0, 0, 0).unwrap();
        assert_eq!(report.lesson_id, Some(4));
        assert_eq!(report.stats.total_keystrokes, 2);
        assert!(report.passed);
        assert_eq!(report.lines_completed, 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut session = TypingSession::new();
        session.start_session("שד", None);
        session.type_key_at('ש', None, 0);
        session.type_key_at('ד', None, 500);

        let report = SessionReport::from_session(&session, 10, 90, 2).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_keystrokes\":2"));
        let back: SessionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stats.total_keystrokes, 2);
    }
}
