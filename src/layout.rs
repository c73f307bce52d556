//! Session layout policy: how much of the terminal a progress line may
//! occupy before it wraps, and how wide a group header may grow.

/// Columns assumed when the terminal width cannot be determined (piped
/// output, CI environments, no controlling terminal).
pub const FALLBACK_COLUMNS: usize = 96;

/// Upper bound on the group-header budget regardless of terminal width.
pub const HEADER_CEILING: usize = 50;

/// Fixed per-session layout: the wrap column and the group-header budget.
///
/// Computed once when a session starts and held for its lifetime; a mid-run
/// terminal resize does not re-flow output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Terminal width in columns; statuses wrap when the column counter
    /// reaches this.
    pub max_columns: usize,
    /// Maximum printed width of a group header.
    pub max_header_len: usize,
}

impl Layout {
    /// Derives the layout from a terminal width.
    ///
    /// The header budget is half the terminal, capped at [`HEADER_CEILING`]
    /// so very wide terminals still leave most of the line to the glyphs.
    pub fn compute(terminal_width: usize) -> Self {
        Self {
            max_columns: terminal_width,
            max_header_len: (terminal_width / 2).min(HEADER_CEILING),
        }
    }
}
