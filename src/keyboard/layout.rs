use crate::keyboard::finger::{self, Finger, FingerAssignment, Hand};

/// Where a character lives on the physical board: key code plus the hand and
/// finger that should strike it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyMapping {
    pub code: &'static str,
    pub assignment: FingerAssignment,
}

/// Hebrew standard layout (SI-1452) on a QWERTY physical board.
/// Letters only, including final forms, plus space. Codes use the W3C
/// `KeyboardEvent.code` names so placement samples recorded in a browser
/// front-end line up with the same table.
const HEBREW_STANDARD: &[(char, &str)] = &[
    // top row
    ('ק', "KeyE"),
    ('ר', "KeyR"),
    ('א', "KeyT"),
    ('ט', "KeyY"),
    ('ו', "KeyU"),
    ('ן', "KeyI"),
    ('ם', "KeyO"),
    ('פ', "KeyP"),
    // home row
    ('ש', "KeyA"),
    ('ד', "KeyS"),
    ('ג', "KeyD"),
    ('כ', "KeyF"),
    ('ע', "KeyG"),
    ('י', "KeyH"),
    ('ח', "KeyJ"),
    ('ל', "KeyK"),
    ('ך', "KeyL"),
    ('ף', "Semicolon"),
    // bottom row
    ('ז', "KeyZ"),
    ('ס', "KeyX"),
    ('ב', "KeyC"),
    ('ה', "KeyV"),
    ('נ', "KeyB"),
    ('מ', "KeyN"),
    ('צ', "KeyM"),
    ('ת', "Comma"),
    ('ץ', "Period"),
    (' ', "Space"),
];

/// Look up the physical key for a character. `None` for anything the layout
/// does not cover (digits, punctuation, Latin letters).
pub fn key_for(ch: char) -> Option<KeyMapping> {
    HEBREW_STANDARD.iter().find(|(c, _)| *c == ch).map(|&(_, code)| KeyMapping {
        code,
        // Every code in the table has an assignment; the fallback is never hit.
        assignment: finger::assignment_for_code(code)
            .unwrap_or(FingerAssignment::new(Hand::Right, Finger::Index)),
    })
}

/// Inverse lookup: which character a physical key produces under this layout.
pub fn char_for(code: &str) -> Option<char> {
    HEBREW_STANDARD.iter().find(|(_, c)| *c == code).map(|(ch, _)| *ch)
}
