use crate::emit::INDEX_STEM;
use convert_case::{Case, Casing};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Config file looked up next to the consuming crate's manifest.
pub const CONFIG_FILE: &str = "docmeta.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{key}': {message}")]
    Invalid { key: &'static str, message: String },
}

///
/// GeneratorConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub class_prefix: String,
    pub registry_ident: String,
    pub multi_field_postfix: String,
    pub field_paths: bool,
    pub report_path: Option<PathBuf>,
    pub core_crate: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_prefix: "Meta".to_string(),
            registry_ident: "Metamodels".to_string(),
            multi_field_postfix: "MultiField".to_string(),
            field_paths: true,
            report_path: None,
            core_crate: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // the prefix may be empty, everything else forms a whole identifier
        if !self.class_prefix.is_empty() {
            check_ident("class_prefix", &self.class_prefix)?;
        }
        check_ident("registry_ident", &self.registry_ident)?;
        if self.registry_ident.to_case(Case::Snake) == INDEX_STEM {
            return Err(ConfigError::Invalid {
                key: "registry_ident",
                message: format!(
                    "'{}' would be written over the index file '{INDEX_STEM}.rs'",
                    self.registry_ident
                ),
            });
        }
        check_ident("multi_field_postfix", &self.multi_field_postfix)?;

        if let Some(core) = &self.core_crate {
            syn::parse_str::<syn::Path>(core).map_err(|err| ConfigError::Invalid {
                key: "core_crate",
                message: err.to_string(),
            })?;
        }

        Ok(())
    }
}

fn check_ident(key: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::Invalid {
        key,
        message: format!("'{value}' {message}"),
    };

    let mut chars = value.chars();
    match chars.next() {
        None => return Err(invalid("is empty")),
        Some(c) if c.is_ascii_digit() => return Err(invalid("starts with a digit")),
        _ => {}
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("is not an identifier"));
    }

    Ok(())
}

///
/// TESTS
///
