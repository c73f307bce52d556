//! Terminal capability probes: width detection and color choice.

use termcolor::ColorChoice;
use terminal_size::{terminal_size, Width};

use crate::layout::FALLBACK_COLUMNS;

/// Current terminal width in columns, or [`FALLBACK_COLUMNS`] when stdout
/// is not a terminal or the size cannot be queried.
pub fn detect_columns() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .filter(|&w| w > 0)
        .unwrap_or(FALLBACK_COLUMNS)
}

/// Color stdout only when it is an interactive terminal.
pub fn stdout_color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
