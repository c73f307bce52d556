//! The glyphline Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use crate::cli::args::{Command, GlyphlineArgs, RenderFlags};
use crate::config::{Config, ConfigError};
use crate::layout::FALLBACK_COLUMNS;
use crate::session::Session;
use crate::term;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use termcolor::{ColorChoice, StandardStream};

pub mod args;

/// Demonstration event stream rendered by `glyphline sample`.
const SAMPLE_STREAM: &str = "\
. Tests\\Unit\\ParserTest
.
.
F
.
S Tests\\Unit\\LexerTest
.
I
.
E Tests\\Integration\\PipelineTest
.
.
R
.
";

/// The main entry point for the CLI.
pub fn run() {
    let args = GlyphlineArgs::parse();

    let result = match args.command {
        Command::Render { file, flags } => handle_render(file.as_deref(), &flags),
        Command::Sample { flags } => handle_sample(&flags),
        Command::Config { config } => handle_config(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Handles the `render` subcommand.
fn handle_render(
    file: Option<&Path>,
    flags: &RenderFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    match file {
        Some(path) => replay(BufReader::new(File::open(path)?), flags),
        None => replay(io::stdin().lock(), flags),
    }
}

/// Handles the `sample` subcommand.
fn handle_sample(flags: &RenderFlags) -> Result<(), Box<dyn std::error::Error>> {
    replay(SAMPLE_STREAM.as_bytes(), flags)
}

/// Handles the `config` subcommand.
fn handle_config(explicit: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(explicit)?;
    println!("Configuration: {}", config.origin.display());
    println!("  hide-group-header: {}", config.hide_group_header);
    println!("  simple-output: {}", config.simple_output);
    println!("  show-config: {}", config.show_config);
    println!(
        "  markers: pass {} / fail {} / error {} / skipped {} / incomplete {}",
        config.markers.pass,
        config.markers.fail,
        config.markers.error,
        config.markers.skipped,
        config.markers.incomplete,
    );
    Ok(())
}

/// Feeds every event in `input` through one rendering session.
fn replay<R: BufRead>(input: R, flags: &RenderFlags) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(flags)?;
    let mut group = String::new();
    for line in input.lines() {
        let line = line?;
        let Some((code, event_group)) = parse_event(&line) else {
            continue;
        };
        if let Some(name) = event_group {
            group.clear();
            group.push_str(name);
        }
        session.outcome(&group, code);
    }
    session.finish();
    Ok(())
}

fn open_session(flags: &RenderFlags) -> io::Result<Session<StandardStream>> {
    // Flag overrides outrank both a loaded file and the fallback.
    let (mut config, load_error) = match resolve_config(flags.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (Config::fallback(), Some(err)),
    };
    if flags.simple {
        config.simple_output = true;
    }
    if flags.hide_headers {
        config.hide_group_header = true;
    }

    let width = match flags.width {
        Some(w) if w > 0 => w,
        Some(_) => FALLBACK_COLUMNS,
        None => term::detect_columns(),
    };
    let choice = if flags.no_color {
        ColorChoice::Never
    } else {
        term::stdout_color_choice()
    };

    let out = StandardStream::stdout(choice);
    Session::begin(out, width, config, load_error, flags.debug, flags.verbose)
}

fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::discover(&cwd)
        }
    }
}

/// Splits one stream line into an outcome code and an optional group name.
/// Blank lines and `#` comments yield nothing.
fn parse_event(line: &str) -> Option<(char, Option<&str>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut chars = line.chars();
    let code = chars.next()?;
    let group = chars.as_str().trim();
    Some((code, (!group.is_empty()).then_some(group)))
}
