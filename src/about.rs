//! Package metadata and data-directory resolution
//!
//! The package version is stamped once at startup from the fixed literal
//! in the package manifest and exposed read-only as a [`SemanticVersion`].

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::domain::SemanticVersion;
use crate::error::{AppTemplateError, Result};

/// Information about the package, built from the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
    /// Package name
    pub name: &'static str,
    /// Package description
    pub description: &'static str,
    /// Package release identifier
    pub version: SemanticVersion,
    /// Package authors
    pub author: &'static str,
    /// Base data directory for this package
    pub datadir: PathBuf,
}

impl About {
    /// Build the metadata from the package manifest.
    ///
    /// # Errors
    /// - version errors when the manifest version does not follow the
    ///   version model
    /// - `Config` when the platform provides no data directory
    pub fn new() -> Result<Self> {
        Ok(About {
            name: env!("CARGO_PKG_NAME"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            version: SemanticVersion::from_string(env!("CARGO_PKG_VERSION"))?,
            author: env!("CARGO_PKG_AUTHORS"),
            datadir: base_storage()?,
        })
    }

    /// The data directory associated with one configuration environment
    pub fn env_datadir(&self, environment: &str) -> PathBuf {
        self.datadir.join(environment)
    }
}

/// The `{name}_data` subdirectory of the platform data directory.
///
/// That is %LOCALAPPDATA% on Windows and $XDG_DATA_HOME (or its standard
/// fallback under $HOME/.local/share) elsewhere.
fn base_storage() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| AppTemplateError::config("No data directory available on this platform"))?;
    Ok(base.join(format!("{}_data", env!("CARGO_PKG_NAME"))))
}

/// Process-wide package metadata, built once on first use.
pub fn about() -> Result<&'static About> {
    static ABOUT: OnceLock<About> = OnceLock::new();
    if let Some(existing) = ABOUT.get() {
        return Ok(existing);
    }
    let built = About::new()?;
    Ok(ABOUT.get_or_init(|| built))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_builds() {
        let about = About::new().unwrap();
        assert_eq!(about.name, "apptemplate");
        assert!(!about.description.is_empty());
    }

    #[test]
    fn test_version_matches_manifest() {
        let about = About::new().unwrap();
        assert_eq!(about.version.to_string(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_datadir_uses_package_name() {
        let about = About::new().unwrap();
        assert!(about.datadir.ends_with("apptemplate_data"));
    }

    #[test]
    fn test_env_datadir_is_subdirectory() {
        let about = About::new().unwrap();
        let env_dir = about.env_datadir("development");
        assert!(env_dir.starts_with(&about.datadir));
        assert!(env_dir.ends_with("development"));
    }

    #[test]
    fn test_about_singleton_is_stable() {
        let first = about().unwrap();
        let second = about().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
