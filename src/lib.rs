pub use crate::config::{Config, ConfigError, MarkerSet, RenderOptions};
pub use crate::header::format_group_header;
pub use crate::layout::Layout;
pub use crate::outcome::Outcome;
pub use crate::render::ProgressRenderer;
pub use crate::session::Session;

pub mod cli;
pub mod config;
pub mod header;
pub mod layout;
pub mod outcome;
pub mod render;
pub mod session;
pub mod term;
