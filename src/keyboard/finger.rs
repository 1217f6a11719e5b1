#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Pinky,
    Ring,
    Middle,
    Index,
    Thumb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerAssignment {
    pub hand: Hand,
    pub finger: Finger,
}

impl FingerAssignment {
    pub fn new(hand: Hand, finger: Finger) -> Self {
        Self { hand, finger }
    }
}

/// Touch-typing assignment for a physical key, by W3C `KeyboardEvent.code`
/// name. Assignments follow the physical column, so they hold for any
/// character layout mapped onto the board.
pub fn assignment_for_code(code: &str) -> Option<FingerAssignment> {
    use Finger::*;
    use Hand::*;

    let assignment = match code {
        "KeyQ" | "KeyA" | "KeyZ" | "Digit1" => FingerAssignment::new(Left, Pinky),
        "KeyW" | "KeyS" | "KeyX" | "Digit2" => FingerAssignment::new(Left, Ring),
        "KeyE" | "KeyD" | "KeyC" | "Digit3" => FingerAssignment::new(Left, Middle),
        "KeyR" | "KeyF" | "KeyV" | "KeyT" | "KeyG" | "KeyB" | "Digit4" | "Digit5" => {
            FingerAssignment::new(Left, Index)
        }
        "KeyY" | "KeyH" | "KeyN" | "KeyU" | "KeyJ" | "KeyM" | "Digit6" | "Digit7" => {
            FingerAssignment::new(Right, Index)
        }
        "KeyI" | "KeyK" | "Comma" | "Digit8" => FingerAssignment::new(Right, Middle),
        "KeyO" | "KeyL" | "Period" | "Digit9" => FingerAssignment::new(Right, Ring),
        "KeyP" | "Semicolon" | "Slash" | "Quote" | "Digit0" | "Minus" | "Equal"
        | "BracketLeft" | "BracketRight" | "Backslash" => FingerAssignment::new(Right, Pinky),
        "Space" => FingerAssignment::new(Right, Thumb),
        _ => return None,
    };
    Some(assignment)
}
