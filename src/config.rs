//! Typed configuration for the renderer: behavior switches and the marker
//! set, read once from the nearest `glyphline.yml`.
//!
//! Configuration can never fail a run. Any problem loading it is handed
//! back as a [`ConfigError`] for the session to report once, and rendering
//! proceeds on [`Config::fallback`]: plain ASCII codes, headers on.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::outcome::Outcome;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = "glyphline.yml";

// =============================================================================
// RENDERER-FACING TYPES
// =============================================================================

/// Behavior switches the renderer consults on every write. Fixed for the
/// session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Suppress group headers entirely.
    pub hide_group_header: bool,
    /// Draw the raw result codes instead of configured markers.
    pub simple_output: bool,
    /// One labeled outcome per line; headers are skipped upstream.
    pub debug_mode: bool,
}

/// Display glyph for each recognized outcome. Immutable after load.
///
/// Missing entries in the `markers` section fall back to the defaults
/// below, so a config file may override a single glyph.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkerSet {
    pub pass: String,
    pub fail: String,
    pub error: String,
    pub skipped: String,
    pub incomplete: String,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            pass: "✓".to_string(),
            fail: "✖".to_string(),
            error: "⚈".to_string(),
            skipped: "➦".to_string(),
            incomplete: "ℹ".to_string(),
        }
    }
}

impl MarkerSet {
    /// The configured glyph for an outcome.
    pub fn glyph(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Pass => &self.pass,
            Outcome::Fail => &self.fail,
            Outcome::Error => &self.error,
            Outcome::Skipped => &self.skipped,
            Outcome::Incomplete => &self.incomplete,
        }
    }
}

// =============================================================================
// ON-DISK SHAPE
// =============================================================================

/// On-disk shape of `glyphline.yml`. Both sections are optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
struct ConfigFile {
    options: OptionsSection,
    markers: MarkerSet,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct OptionsSection {
    hide_group_header: bool,
    simple_output: bool,
    show_config: bool,
}

// =============================================================================
// RESOLVED CONFIG
// =============================================================================

/// Resolved configuration plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub hide_group_header: bool,
    pub simple_output: bool,
    /// Echo the configuration path under the session banner.
    pub show_config: bool,
    pub markers: MarkerSet,
    /// The file the values were read from; empty for the fallback.
    pub origin: PathBuf,
}

impl Config {
    /// Safe defaults used when no configuration can be loaded.
    pub fn fallback() -> Self {
        Self {
            hide_group_header: false,
            simple_output: true,
            show_config: false,
            markers: MarkerSet::default(),
            origin: PathBuf::new(),
        }
    }

    /// Reads and parses a specific configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_yaml::from_str(&text).map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::resolve(file, path.to_path_buf()))
    }

    /// Loads the nearest `glyphline.yml`, searching `start` and then each
    /// ancestor directory. The first hit wins.
    pub fn discover(start: &Path) -> Result<Self, ConfigError> {
        match locate(start) {
            Some(path) => Self::load(&path),
            None => Err(ConfigError::NotFound),
        }
    }

    fn resolve(file: ConfigFile, origin: PathBuf) -> Self {
        Self {
            hide_group_header: file.options.hide_group_header,
            simple_output: file.options.simple_output,
            show_config: file.options.show_config,
            markers: file.markers,
            origin,
        }
    }
}

/// First `glyphline.yml` found in `start` or any ancestor directory.
pub fn locate(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Why configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no glyphline.yml found in the working directory or its ancestors")]
    NotFound,
    #[error("could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn full_file_parses_into_typed_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "options:\n  hide-group-header: true\n  simple-output: true\n  show-config: true\nmarkers:\n  pass: \"+\"\n  fail: \"-\"\n  error: \"!\"\n  skipped: \">\"\n  incomplete: \"?\"\n",
        );

        let config = Config::load(&path).unwrap();
        assert!(config.hide_group_header);
        assert!(config.simple_output);
        assert!(config.show_config);
        assert_eq!(config.markers.pass, "+");
        assert_eq!(config.markers.incomplete, "?");
        assert_eq!(config.origin, path);
    }

    #[test]
    fn missing_markers_fall_back_individually() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "markers:\n  error: \"⊗\"\n");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.markers.error, "⊗");
        assert_eq!(config.markers.pass, MarkerSet::default().pass);
        assert!(!config.simple_output);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "options:\n  simple-output: true\n  some-future-switch: 9\nbanner: ignored\n",
        );

        let config = Config::load(&path).unwrap();
        assert!(config.simple_output);
    }

    #[test]
    fn unreadable_file_reports_its_path() {
        let missing = Path::new("/definitely/not/here/glyphline.yml");
        let err = Config::load(missing).unwrap_err();
        match err {
            ConfigError::Unreadable { ref path, .. } => assert_eq!(path, missing),
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn malformed_yaml_reports_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "options: [not, a, mapping]\n");
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn discovery_walks_up_to_a_parent_directory() {
        let root = TempDir::new().unwrap();
        write_config(root.path(), "options:\n  show-config: true\n");
        let nested = root.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let config = Config::discover(&nested).unwrap();
        assert!(config.show_config);
        assert_eq!(config.origin, root.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn nearest_file_shadows_an_ancestor() {
        let root = TempDir::new().unwrap();
        write_config(root.path(), "options:\n  simple-output: true\n");
        let nested = root.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        write_config(&nested, "options:\n  simple-output: false\n");

        let config = Config::discover(&nested).unwrap();
        assert!(!config.simple_output);
        assert_eq!(config.origin, nested.join(CONFIG_FILE_NAME));
    }

    #[test]
    fn discovery_without_any_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::discover(dir.path()),
            Err(ConfigError::NotFound)
        ));
    }

    #[test]
    fn fallback_uses_plain_codes_with_headers_on() {
        let fallback = Config::fallback();
        assert!(fallback.simple_output);
        assert!(!fallback.hide_group_header);
        assert_eq!(fallback.origin, PathBuf::new());
    }
}
