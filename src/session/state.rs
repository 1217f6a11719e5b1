use std::time::Instant;

use crate::engine::keystroke::Keystroke;
use crate::engine::stats::{self, SessionStats};

/// Live typing buffer for one practice attempt.
/// Lifecycle: idle -> active <-> paused -> ended (terminal); a fresh attempt
/// needs `start_session` again. While paused or inactive no keystrokes are
/// accepted. The cursor advances only on correct keystrokes, so the learner
/// must retype a missed character.
pub struct TypingSession {
    pub text: Vec<char>,
    pub current_index: usize,
    pub keystrokes: Vec<Keystroke>,
    started_at: Option<Instant>,
    pub is_active: bool,
    pub is_paused: bool,
    pub lesson_id: Option<u8>,
    pub current_line: usize,
}

impl TypingSession {
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            current_index: 0,
            keystrokes: Vec::new(),
            started_at: None,
            is_active: false,
            is_paused: false,
            lesson_id: None,
            current_line: 0,
        }
    }

    pub fn start_session(&mut self, text: &str, lesson_id: Option<u8>) {
        self.text = text.chars().collect();
        self.current_index = 0;
        self.keystrokes.clear();
        self.started_at = Some(Instant::now());
        self.is_active = true;
        self.is_paused = false;
        self.lesson_id = lesson_id;
        self.current_line = 0;
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed_ms(&self) -> u64 {
        match self.started_at {
            Some(start) => start.elapsed().as_millis() as u64,
            None => 0,
        }
    }

    /// Classify one input event against the expected character at the cursor.
    /// Timestamp is read from the session clock at call time.
    pub fn type_key(&mut self, actual: char, code: Option<&'static str>) -> Option<Keystroke> {
        let timestamp_ms = self.elapsed_ms();
        self.type_key_at(actual, code, timestamp_ms)
    }

    /// Deterministic entry point: same as `type_key` with an explicit
    /// timestamp. Silently ignores input while idle, paused, ended, or past
    /// the end of the text.
    pub fn type_key_at(
        &mut self,
        actual: char,
        code: Option<&'static str>,
        timestamp_ms: u64,
    ) -> Option<Keystroke> {
        if !self.is_active || self.is_paused || self.current_index >= self.text.len() {
            return None;
        }

        let expected = self.text[self.current_index];
        let keystroke = Keystroke::new(expected, actual, code, timestamp_ms);
        self.keystrokes.push(keystroke);

        if keystroke.is_correct {
            self.current_index += 1;
        }

        Some(keystroke)
    }

    pub fn pause(&mut self) {
        if self.is_active {
            self.is_paused = true;
        }
    }

    pub fn resume(&mut self) {
        if self.is_active {
            self.is_paused = false;
        }
    }

    /// Swap in the next line of a multi-line lesson. Accumulated keystrokes
    /// stay, so the whole lesson yields one combined stat set.
    pub fn next_line(&mut self, text: &str) {
        if !self.is_active {
            return;
        }
        self.text = text.chars().collect();
        self.current_index = 0;
        self.current_line += 1;
    }

    /// Terminal for this instance.
    pub fn end_session(&mut self) {
        self.is_active = false;
        self.is_paused = false;
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.text.len()
    }

    /// Stats for the session so far. `None` until there is at least one
    /// keystroke and a start anchor; callers must not assume availability.
    pub fn get_stats(&self) -> Option<SessionStats> {
        self.get_stats_at(self.elapsed_ms())
    }

    pub fn get_stats_at(&self, now_ms: u64) -> Option<SessionStats> {
        if self.keystrokes.is_empty() || self.started_at.is_none() {
            return None;
        }
        Some(stats::compute_session_stats(&self.keystrokes, 0, now_ms))
    }

    pub fn realtime_wpm(&self) -> u32 {
        stats::calculate_realtime_wpm(&self.keystrokes)
    }
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new()
    }
}
