//! Minutes/seconds entry fields and their keyboard rules

/// Discrete key events delivered by the host. `Digit` carries 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Up,
    Down,
    Left,
    Right,
    Tab,
    Enter,
}

/// Which entry field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Minutes,
    Seconds,
}

impl Field {
    fn other(self) -> Field {
        match self {
            Field::Minutes => Field::Seconds,
            Field::Seconds => Field::Minutes,
        }
    }
}

/// What a key press asked the control window to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The key edited a field or moved focus
    Edited,
    /// Enter: request a start with the current configuration
    StartRequested,
}

/// Pre-start minutes/seconds configuration.
///
/// Arrow adjustments clamp to [0,59]. Digit entry is the rolling two-digit
/// rule and is deliberately unclamped, matching the entry widget it models:
/// 59 followed by digit 9 reads 99.
#[derive(Debug, Clone)]
pub struct TimerInput {
    minutes: u32,
    seconds: u32,
    focus: Field,
}

impl TimerInput {
    pub fn new() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
            focus: Field::Minutes,
        }
    }

    /// Apply one key press to the focused field
    pub fn handle_key(&mut self, key: Key) -> InputAction {
        match key {
            Key::Digit(digit) => {
                let field = self.focused_value_mut();
                *field = roll_digit(*field, digit);
                InputAction::Edited
            }
            Key::Up => {
                let field = self.focused_value_mut();
                *field = (*field + 1).min(59);
                InputAction::Edited
            }
            Key::Down => {
                let field = self.focused_value_mut();
                *field = field.saturating_sub(1);
                InputAction::Edited
            }
            Key::Left | Key::Right | Key::Tab => {
                self.focus = self.focus.other();
                InputAction::Edited
            }
            Key::Enter => InputAction::StartRequested,
        }
    }

    fn focused_value_mut(&mut self) -> &mut u32 {
        match self.focus {
            Field::Minutes => &mut self.minutes,
            Field::Seconds => &mut self.seconds,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Countdown duration the current configuration asks for
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// Zero both fields (the reset path)
    pub fn clear(&mut self) {
        self.minutes = 0;
        self.seconds = 0;
    }

    /// Two-digit rendering of both fields, the way the entry widgets draw them
    pub fn display(&self) -> (String, String) {
        (format!("{:02}", self.minutes), format!("{:02}", self.seconds))
    }
}

impl Default for TimerInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolling two-digit entry: keep the last digit of the current value and
/// append the new one
fn roll_digit(current: u32, digit: u8) -> u32 {
    (current % 10) * 10 + u32::from(digit)
}
