//! Management of the configuration file and environment selection.
//!
//! A configuration file is a TOML document whose top-level tables are
//! environments. The `default` table provides values shared by every
//! environment and is not selectable. The file is taken from an explicit
//! path, from the `APPTEMPLATE_CONFIG_FILE` environment variable, or from
//! the default file embedded in the package.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toml::Value;

use crate::error::{AppTemplateError, Result};

/// Environment variable naming the configuration file to use
pub const CONFIG_FILE_ENVVAR: &str = "APPTEMPLATE_CONFIG_FILE";

/// Placeholder replaced by the environment data directory
pub const STORAGE_PLACEHOLDER: &str = "{{STORAGE}}";

const EXPECTED_SUFFIX: &str = "toml";
const DEFAULT_TABLE: &str = "default";
const DEFAULT_CONFIG: &str = include_str!("../data/default_config.toml");

/// Typed view over a resolved environment configuration.
///
/// Unknown keys are preserved in `extra` so environments can carry
/// application-specific values.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub testing: bool,

    #[serde(default)]
    pub secret_key: Option<String>,

    #[serde(default)]
    pub data_path: Option<PathBuf>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(flatten)]
    pub extra: toml::Table,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A loaded configuration file with environment resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    document: toml::Table,
}

impl ConfigFile {
    /// Load the configuration document.
    ///
    /// Selection order: the explicit path, then `APPTEMPLATE_CONFIG_FILE`,
    /// then the embedded default file. A selected path must carry the
    /// `.toml` extension.
    ///
    /// # Errors
    /// * `BadFileExtension` - selected path is not a `.toml` file
    /// * `Io` - selected file cannot be read
    /// * `Toml` - file contents do not parse
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let text = match Self::selected_path(path)? {
            Some(p) => fs::read_to_string(&p)?,
            None => DEFAULT_CONFIG.to_string(),
        };
        let document: toml::Table = toml::from_str(&text)?;
        Ok(ConfigFile { document })
    }

    /// The configuration file path in effect, if any.
    ///
    /// `None` means the embedded default file is used.
    pub fn selected_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        let candidate = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_FILE_ENVVAR).map(PathBuf::from),
        };
        if let Some(path) = &candidate {
            check_file_extension(path)?;
        }
        Ok(candidate)
    }

    /// The selectable environments, sorted by name.
    pub fn environments(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .document
            .keys()
            .filter(|name| name.as_str() != DEFAULT_TABLE)
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Resolve the configuration of one environment.
    ///
    /// The named table is completed with the `default` table: missing keys
    /// are copied, array values are extended with the default elements not
    /// already present. Only scalars and arrays are supported. Every
    /// `{{STORAGE}}` occurrence in string values is then replaced by the
    /// storage path.
    ///
    /// # Errors
    /// * `UnknownEnvironment` - name is `default` or not in the file
    /// * `Config` - the environment entry is not a table
    pub fn environment(&self, name: &str, storage: &Path) -> Result<toml::Table> {
        let available = self.environments();
        if !available.iter().any(|env| env == name) {
            return Err(AppTemplateError::UnknownEnvironment {
                requested: name.to_string(),
                available,
            });
        }

        let mut resolved = self
            .document
            .get(name)
            .and_then(Value::as_table)
            .cloned()
            .ok_or_else(|| {
                AppTemplateError::config(format!("Environment '{}' is not a table", name))
            })?;

        if let Some(defaults) = self.document.get(DEFAULT_TABLE).and_then(Value::as_table) {
            merge_defaults(&mut resolved, defaults);
        }

        let storage_text = storage.to_string_lossy();
        for (_, value) in resolved.iter_mut() {
            replace_storage(value, &storage_text);
        }

        Ok(resolved)
    }

    /// Typed [`Settings`] for one environment.
    pub fn settings(&self, name: &str, storage: &Path) -> Result<Settings> {
        let resolved = self.environment(name, storage)?;
        Ok(resolved.try_into::<Settings>()?)
    }
}

fn merge_defaults(resolved: &mut toml::Table, defaults: &toml::Table) {
    for (key, default_value) in defaults {
        match resolved.get_mut(key) {
            None => {
                resolved.insert(key.clone(), default_value.clone());
            }
            Some(Value::Array(existing)) => {
                if let Value::Array(default_items) = default_value {
                    for item in default_items {
                        if !existing.contains(item) {
                            existing.push(item.clone());
                        }
                    }
                }
            }
            Some(_) => {}
        }
    }
}

fn replace_storage(value: &mut Value, storage: &str) {
    match value {
        Value::String(text) => {
            *text = text.replace(STORAGE_PLACEHOLDER, storage);
        }
        Value::Array(items) => {
            for item in items {
                replace_storage(item, storage);
            }
        }
        _ => {}
    }
}

/// Verify that a configuration path carries the `.toml` extension.
pub fn check_file_extension(path: &Path) -> Result<()> {
    let ok = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(EXPECTED_SUFFIX))
        .unwrap_or(false);
    if ok {
        Ok(())
    } else {
        Err(AppTemplateError::BadFileExtension {
            path: path.to_path_buf(),
            expected: EXPECTED_SUFFIX,
        })
    }
}

/// Write the embedded default configuration file to `dest`.
///
/// The copy is a starting point for a custom configuration, to be selected
/// later through `APPTEMPLATE_CONFIG_FILE` or an explicit path.
pub fn export_default(dest: &Path) -> Result<()> {
    check_file_extension(dest)?;
    fs::write(dest, DEFAULT_CONFIG)?;
    Ok(())
}
