//! Group-header formatting: a fixed-prefix banner for the test group,
//! right-padded or tail-truncated to the session's header budget.

/// Leads every group header.
pub const HEADER_PREFIX: &str = " ==> ";

/// Separates the header from the first status glyph.
pub const HEADER_SUFFIX: &str = "   ";

const ELLIPSIS: &str = "...";

/// Formats a group name into a header exactly `max_len` characters wide.
///
/// Names that fit are right-padded with spaces. Names too long for the
/// budget keep their tail (the most specific part of a namespaced name)
/// behind an ellipsis:
///
/// ```
/// use glyphline::header::format_group_header;
///
/// assert_eq!(format_group_header("Short", 16), " ==> Short      ");
/// assert_eq!(
///     format_group_header("Very\\Long\\Namespace\\ClassName", 20),
///     " ==> ...ClassName   ",
/// );
/// ```
///
/// When `max_len` cannot even hold the prefix, ellipsis, and suffix, the
/// result is the bare truncation scaffold and its length is not `max_len`;
/// callers accept that output as-is.
pub fn format_group_header(name: &str, max_len: usize) -> String {
    let mut header = format!("{HEADER_PREFIX}{name}{HEADER_SUFFIX}");
    let full_len = header.chars().count();
    if full_len <= max_len {
        header.extend(std::iter::repeat(' ').take(max_len - full_len));
        return header;
    }

    let overhead = HEADER_PREFIX.len() + ELLIPSIS.len() + HEADER_SUFFIX.len();
    let budget = max_len.saturating_sub(overhead);
    format!(
        "{HEADER_PREFIX}{ELLIPSIS}{}{HEADER_SUFFIX}",
        tail_chars(name, budget)
    )
}

/// Last `count` characters of `name`, respecting char boundaries.
fn tail_chars(name: &str, count: usize) -> &str {
    let skip = name.chars().count().saturating_sub(count);
    match name.char_indices().nth(skip) {
        Some((idx, _)) => &name[idx..],
        None => "",
    }
}
