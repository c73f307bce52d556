//! The outcome table: what a runner's single-character result code means
//! for color, marker lookup, and debug labeling.

use termcolor::{Color, ColorSpec};

/// Classified result of a single finished test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Pass,
    Skipped,
    Incomplete,
    Fail,
    Error,
}

impl Outcome {
    /// Classifies a raw result code, case-insensitively.
    ///
    /// Codes outside the table return `None`; the renderer passes those
    /// through verbatim with no color or marker substitution.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            '.' => Some(Self::Pass),
            'S' => Some(Self::Skipped),
            'I' => Some(Self::Incomplete),
            'F' => Some(Self::Fail),
            'E' => Some(Self::Error),
            _ => None,
        }
    }

    /// The canonical single-character code; also the glyph in simple mode.
    pub const fn code(self) -> char {
        match self {
            Self::Pass => '.',
            Self::Skipped => 'S',
            Self::Incomplete => 'I',
            Self::Fail => 'F',
            Self::Error => 'E',
        }
    }

    /// Label appended after the glyph in debug mode.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => " Passed",
            Self::Skipped => " Skipped",
            Self::Incomplete => " Incomplete",
            Self::Fail => " Fail",
            Self::Error => " Error",
        }
    }

    /// Bold foreground color the glyph is drawn in.
    pub fn color(self) -> ColorSpec {
        let fg = match self {
            Self::Pass => Color::Green,
            Self::Skipped => Color::Yellow,
            Self::Incomplete => Color::Blue,
            Self::Fail | Self::Error => Color::Red,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(fg)).set_bold(true);
        spec
    }
}
