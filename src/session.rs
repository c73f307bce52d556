//! One rendering session per test run: announces the tool, reports the
//! configuration outcome, then forwards every test outcome to the renderer.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::config::{Config, ConfigError, RenderOptions};
use crate::layout::Layout;
use crate::render::ProgressRenderer;

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

/// Replaces a leading home directory with `~` for display.
fn abbreviate_home(path: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if !home.is_empty() && path.starts_with(home) => {
            format!("~{}", &path[home.len()..])
        }
        _ => path.to_string(),
    }
}

/// A live test-run session. Construction prints the banner exactly once;
/// afterwards each completed test is fed through [`outcome`](Self::outcome).
pub struct Session<W: WriteColor> {
    renderer: ProgressRenderer<W>,
    /// Headers are useless when every outcome gets its own line.
    skip_headers: bool,
}

impl<W: WriteColor> Session<W> {
    /// Opens a session on `out`: reports a failed configuration load in
    /// red, prints the banner, and echoes the configuration path when
    /// asked to. Rendering proceeds on `config` as the caller resolved
    /// it (typically [`Config::fallback`] after a failed load, with any
    /// command-line overrides already merged in).
    pub fn begin(
        mut out: W,
        terminal_width: usize,
        config: Config,
        load_error: Option<ConfigError>,
        debug: bool,
        verbose: bool,
    ) -> io::Result<Self> {
        if let Some(err) = load_error {
            let report = format!("Unable to load configuration: {err}");
            write_line(&mut out, &fg(Color::Red), &report)?;
        }

        writeln!(out)?;
        let banner = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        write_line(&mut out, &fg(Color::Green), &banner)?;

        if config.show_config {
            let home = std::env::var("HOME").ok();
            let shown = abbreviate_home(&config.origin.display().to_string(), home.as_deref());
            write_line(&mut out, &fg(Color::Yellow), &format!("Configuration: {shown}"))?;
            writeln!(out)?;
        }
        out.flush()?;

        let options = RenderOptions {
            hide_group_header: config.hide_group_header,
            simple_output: config.simple_output,
            debug_mode: debug,
        };
        let renderer = ProgressRenderer::new(
            out,
            Layout::compute(terminal_width),
            options,
            config.markers,
        );
        Ok(Self {
            renderer,
            skip_headers: debug || verbose,
        })
    }

    /// Renders one completed test: its group header when due, then its
    /// status glyph. Output failures never interrupt the run.
    pub fn outcome(&mut self, group: &str, code: char) {
        if !self.skip_headers {
            let _ = self.renderer.enter_group(group);
        }
        let _ = self.renderer.write_status(code);
    }

    /// Closes the final output line.
    pub fn finish(&mut self) {
        let _ = self.renderer.finish();
    }

    pub fn into_renderer(self) -> ProgressRenderer<W> {
        self.renderer
    }
}

fn write_line<W: WriteColor>(out: &mut W, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    writeln!(out, "{text}")?;
    out.reset()
}
