use std::fmt;

/// One of the three options offered by the radio group and the select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Choice {
    #[default]
    Option1,
    Option2,
    Option3,
}

static ALL_CHOICES: &[Choice] = &[Choice::Option1, Choice::Option2, Choice::Option3];

impl Choice {
    /// Returns all options in display order.
    pub fn all() -> &'static [Choice] {
        ALL_CHOICES
    }

    /// The form value of this option, e.g. `option1`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Option1 => "option1",
            Self::Option2 => "option2",
            Self::Option3 => "option3",
        }
    }

    /// The caption shown next to this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Option1 => "Option 1",
            Self::Option2 => "Option 2",
            Self::Option3 => "Option 3",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colors offered by the color picker, as `(name, hex)`.
static PALETTE: &[(&str, &str)] = &[
    ("Black", "#000000"),
    ("Red", "#ff0000"),
    ("Green", "#00ff00"),
    ("Blue", "#0000ff"),
    ("Yellow", "#ffff00"),
    ("Magenta", "#ff00ff"),
    ("Cyan", "#00ffff"),
    ("White", "#ffffff"),
];

/// Returns the color picker palette; the first entry is the initial color.
pub fn palette() -> &'static [(&'static str, &'static str)] {
    PALETTE
}

/// Steps through `len` positions from `current`, wrapping around.
pub fn cycle_index(len: usize, current: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
