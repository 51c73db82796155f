//! Virtual on-screen keyboard: layout, shift state and per-field key filtering.

use super::widget::WidgetId;

static KEYS: &[&[char]] = &[
    &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'],
    &['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p'],
    &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l'],
    &['z', 'x', 'c', 'v', 'b', 'n', 'm'],
];

static SHIFT_KEYS: &[&[char]] = &[
    &['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'],
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M'],
];

/// A key on the virtual keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKey {
    /// A printable key producing this glyph.
    Glyph(char),
    Shift,
    Space,
    Backspace,
    Enter,
    /// The hide/show control.
    Toggle,
}

/// Special keys on the bottom row, left to right.
pub static BOTTOM_ROW: &[KeyboardKey] = &[
    KeyboardKey::Shift,
    KeyboardKey::Space,
    KeyboardKey::Backspace,
    KeyboardKey::Enter,
];

impl KeyboardKey {
    /// Caption drawn on the key.
    pub fn caption(self, shift: bool) -> String {
        match self {
            Self::Glyph(ch) => ch.to_string(),
            Self::Shift if shift => "SHIFT".to_string(),
            Self::Shift => "shift".to_string(),
            Self::Space => "Space".to_string(),
            Self::Backspace => "←".to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Toggle => "Hide Keyboard".to_string(),
        }
    }
}

/// Visibility and shift state of the on-screen keyboard.
///
/// The keyboard holds no text; key presses are forwarded to whichever
/// field the form has active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualKeyboard {
    visible: bool,
    shift: bool,
}

impl VirtualKeyboard {
    /// Creates a hidden, unshifted keyboard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_shifted(&self) -> bool {
        self.shift
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Flips visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Flips the shift flag.
    pub fn toggle_shift(&mut self) {
        self.shift = !self.shift;
    }

    /// Glyph rows for the current shift state.
    pub fn rows(&self) -> &'static [&'static [char]] {
        rows(self.shift)
    }

    /// Glyph at a row/column of the current layout.
    pub fn glyph_at(&self, row: usize, col: usize) -> Option<char> {
        self.rows().get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Glyph rows for the given shift state.
pub fn rows(shift: bool) -> &'static [&'static [char]] {
    if shift { SHIFT_KEYS } else { KEYS }
}

/// The glyph rows as plain text, one row per line.
pub fn layout_text(shift: bool) -> String {
    rows(shift)
        .iter()
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns `true` if `field` accepts `ch` given its `current` contents.
///
/// The number field takes digits and at most one `-`; other text fields
/// take anything.
pub fn accepts(field: WidgetId, current: &str, ch: char) -> bool {
    match field {
        WidgetId::Number => ch.is_ascii_digit() || (ch == '-' && !current.contains('-')),
        _ => field.accepts_text(),
    }
}
