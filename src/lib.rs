//! apptemplate - application template with environment-based configuration
//! and semantic version stamping.
//!
//! The version model lives in [`domain`]: [`SemanticVersion`] parses the
//! traditional `major.minor.patch[.segment]` string and provides a total
//! ordering in which pre-release segments sort before the plain release
//! and post-release segments after it. [`config`] selects and resolves the
//! TOML configuration file, and [`about`] stamps the package release
//! identifier once at startup.

pub mod about;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use about::{about, About};
pub use config::{ConfigFile, Settings};
pub use domain::{Segment, SegmentKind, SemanticVersion};
pub use error::{AppTemplateError, Result};
