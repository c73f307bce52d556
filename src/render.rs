//! The progress renderer: tracks the active group and the output column,
//! emits colored status glyphs, and wraps long glyph runs under the header
//! indent.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::config::{MarkerSet, RenderOptions};
use crate::header::format_group_header;
use crate::layout::Layout;
use crate::outcome::Outcome;

fn header_color() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Cyan)).set_bold(true);
    spec
}

/// Streams one test run's worth of headers and status glyphs to `out`.
///
/// State is mutated only by [`enter_group`](Self::enter_group) and
/// [`write_status`](Self::write_status); the type is single-stream by
/// design and must not be fed from concurrent outcome sources.
pub struct ProgressRenderer<W: WriteColor> {
    out: W,
    layout: Layout,
    options: RenderOptions,
    markers: MarkerSet,
    column: usize,
    current_group: String,
    last_rendered_group: String,
    midline: bool,
}

impl<W: WriteColor> ProgressRenderer<W> {
    pub fn new(out: W, layout: Layout, options: RenderOptions, markers: MarkerSet) -> Self {
        Self {
            out,
            layout,
            options,
            markers,
            column: 0,
            current_group: String::new(),
            last_rendered_group: String::new(),
            midline: false,
        }
    }

    /// Columns consumed on the current output line.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Behavior switches the renderer was constructed with.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Group the most recently started test belongs to.
    pub fn current_group(&self) -> &str {
        &self.current_group
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Records `name` as the active group and draws its header when it
    /// differs from the last one rendered. The header opens a fresh line
    /// and the column restarts at the header's printed width.
    pub fn enter_group(&mut self, name: &str) -> io::Result<()> {
        if self.current_group != name {
            self.current_group.clear();
            self.current_group.push_str(name);
        }
        if self.options.hide_group_header || self.last_rendered_group == name {
            return Ok(());
        }

        writeln!(self.out)?;
        let header = format_group_header(name, self.layout.max_header_len);
        self.write_colored(&header_color(), &header)?;
        self.out.flush()?;
        self.column = header.as_str().width();
        self.midline = true;
        self.last_rendered_group.clear();
        self.last_rendered_group.push_str(name);
        Ok(())
    }

    /// Emits the glyph for one outcome code, wrapping first when the line
    /// is full. Recognized codes are colored per outcome; anything else
    /// passes through verbatim and unstyled. The column advances by two
    /// per call regardless of glyph width.
    pub fn write_status(&mut self, code: char) -> io::Result<()> {
        if self.column >= self.layout.max_columns {
            self.wrap()?;
        }

        let mut text = String::new();
        match Outcome::from_code(code) {
            Some(outcome) => {
                if self.options.simple_output {
                    text.push(outcome.code());
                } else {
                    text.push_str(self.markers.glyph(outcome));
                }
                if self.options.debug_mode {
                    text.push_str(outcome.label());
                }
                text.push(' ');
                self.write_colored(&outcome.color(), &text)?;
            }
            None => {
                text.push(code);
                text.push(' ');
                write!(self.out, "{text}")?;
            }
        }
        self.midline = true;
        if self.options.debug_mode {
            self.newline()?;
        }
        self.out.flush()?;
        self.column += 2;
        Ok(())
    }

    /// Terminates the output with a newline if a line is open. Call once
    /// when the run ends.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.midline {
            self.newline()?;
        }
        self.out.flush()
    }

    fn wrap(&mut self) -> io::Result<()> {
        self.newline()?;
        let indent = self.layout.max_header_len;
        write!(self.out, "{}", " ".repeat(indent))?;
        self.column = indent;
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.column = 0;
        self.midline = false;
        Ok(())
    }

    fn write_colored(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{text}")?;
        self.out.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn renderer(width: usize, options: RenderOptions) -> ProgressRenderer<Buffer> {
        ProgressRenderer::new(
            Buffer::no_color(),
            Layout::compute(width),
            options,
            MarkerSet::default(),
        )
    }

    fn rendered(r: ProgressRenderer<Buffer>) -> String {
        String::from_utf8(r.into_inner().into_inner()).unwrap()
    }

    fn simple() -> RenderOptions {
        RenderOptions {
            simple_output: true,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn header_opens_a_fresh_line_and_sets_the_column() {
        let mut r = renderer(96, simple());
        r.enter_group("Unit\\Parser").unwrap();

        assert_eq!(r.column(), 48);
        assert_eq!(r.current_group(), "Unit\\Parser");
        let out = rendered(r);
        assert!(out.starts_with("\n ==> Unit\\Parser"));
        assert_eq!(out.len(), 1 + 48);
    }

    #[test]
    fn header_is_rendered_once_per_group_change() {
        let mut r = renderer(96, simple());
        r.enter_group("Alpha").unwrap();
        r.write_status('.').unwrap();
        r.enter_group("Alpha").unwrap();
        r.write_status('.').unwrap();
        r.enter_group("Beta").unwrap();

        let out = rendered(r);
        assert_eq!(out.matches(" ==> ").count(), 2);
    }

    #[test]
    fn hidden_headers_emit_nothing() {
        let options = RenderOptions {
            hide_group_header: true,
            ..simple()
        };
        let mut r = renderer(96, options);
        r.enter_group("Alpha").unwrap();

        assert_eq!(r.column(), 0);
        assert_eq!(r.current_group(), "Alpha");
        assert!(rendered(r).is_empty());
    }

    #[test]
    fn column_advances_by_two_per_status() {
        let mut r = renderer(96, simple());
        r.enter_group("Alpha").unwrap();
        let start = r.column();
        for _ in 0..3 {
            r.write_status('.').unwrap();
        }

        assert_eq!(r.column(), start + 6);
        assert!(rendered(r).ends_with(". . . "));
    }

    #[test]
    fn full_line_wraps_under_the_header_indent() {
        // Width 20 gives a 10-column header, so five statuses fill the
        // line and the sixth wraps.
        let mut r = renderer(20, simple());
        r.enter_group("G").unwrap();
        assert_eq!(r.column(), 10);
        for _ in 0..6 {
            r.write_status('.').unwrap();
        }

        assert_eq!(r.column(), 12);
        let out = rendered(r);
        assert!(out.contains(". . . . . \n          . "));
    }

    #[test]
    fn column_overshoot_is_bounded_by_one_status() {
        let mut r = renderer(25, simple());
        r.enter_group("G").unwrap();
        for _ in 0..40 {
            r.write_status('.').unwrap();
            assert!(r.column() <= r.layout().max_columns + 1);
        }
    }

    #[test]
    fn simple_mode_draws_canonical_codes() {
        let mut r = renderer(96, simple());
        for code in ['.', 's', 'i', 'f', 'e'] {
            r.write_status(code).unwrap();
        }
        assert_eq!(rendered(r), ". S I F E ");
    }

    #[test]
    fn rich_markers_replace_codes_by_default() {
        let mut r = renderer(96, RenderOptions::default());
        r.write_status('.').unwrap();
        r.write_status('F').unwrap();
        assert_eq!(rendered(r), "✓ ✖ ");
    }

    #[test]
    fn error_outcome_draws_the_error_marker() {
        let markers = MarkerSet {
            error: "⊗".to_string(),
            ..MarkerSet::default()
        };
        let mut r = ProgressRenderer::new(
            Buffer::no_color(),
            Layout::compute(96),
            RenderOptions::default(),
            markers,
        );
        r.write_status('E').unwrap();
        r.write_status('e').unwrap();
        assert_eq!(rendered(r), "⊗ ⊗ ");
    }

    #[test]
    fn unrecognized_codes_pass_through_unstyled() {
        let mut r = ProgressRenderer::new(
            Buffer::ansi(),
            Layout::compute(96),
            simple(),
            MarkerSet::default(),
        );
        r.write_status('r').unwrap();
        assert_eq!(rendered(r), "r ");
    }

    #[test]
    fn recognized_codes_are_styled() {
        let mut r = ProgressRenderer::new(
            Buffer::ansi(),
            Layout::compute(96),
            simple(),
            MarkerSet::default(),
        );
        r.write_status('.').unwrap();
        assert!(rendered(r).contains('\x1b'));
    }

    #[test]
    fn debug_mode_writes_one_labeled_line_per_outcome() {
        let options = RenderOptions {
            debug_mode: true,
            ..RenderOptions::default()
        };
        let mut r = renderer(96, options);
        r.write_status('.').unwrap();
        assert_eq!(r.column(), 2);
        r.write_status('F').unwrap();
        assert_eq!(r.column(), 2);

        assert_eq!(rendered(r), "✓ Passed \n✖ Fail \n");
    }

    #[test]
    fn wide_markers_still_advance_two_columns() {
        let markers = MarkerSet {
            pass: "OK".to_string(),
            ..MarkerSet::default()
        };
        let mut r = ProgressRenderer::new(
            Buffer::no_color(),
            Layout::compute(96),
            RenderOptions::default(),
            markers,
        );
        r.write_status('.').unwrap();
        assert_eq!(r.column(), 2);
        assert_eq!(rendered(r), "OK ");
    }

    #[test]
    fn finish_closes_an_open_line_exactly_once() {
        let mut r = renderer(96, simple());
        r.enter_group("Alpha").unwrap();
        r.write_status('.').unwrap();
        r.finish().unwrap();
        r.finish().unwrap();

        let out = rendered(r);
        assert!(out.ends_with(". \n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn finish_after_debug_lines_adds_nothing() {
        let options = RenderOptions {
            debug_mode: true,
            simple_output: true,
            ..RenderOptions::default()
        };
        let mut r = renderer(96, options);
        r.write_status('.').unwrap();
        r.finish().unwrap();
        assert_eq!(rendered(r), ". Passed \n");
    }
}
