/// One classified input event. Immutable once created; correctness is decided
/// purely by character comparison, the physical key code is recorded only for
/// finger-technique analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keystroke {
    pub expected: char,
    pub actual: char,
    pub code: Option<&'static str>,
    pub timestamp_ms: u64,
    pub is_correct: bool,
}

impl Keystroke {
    pub fn new(
        expected: char,
        actual: char,
        code: Option<&'static str>,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            expected,
            actual,
            code,
            timestamp_ms,
            is_correct: expected == actual,
        }
    }
}
