use crate::{Error, node::Schema, validate::validate_schema};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// SourceError
///
/// The descriptor source could not be read or parsed. Always fatal.
///

#[derive(Debug, ThisError)]
pub enum SourceError {
    #[error("cannot read schema file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported schema format for '{}' (expected .toml or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid TOML schema: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// DescriptorSource
///
/// Supplies the read-only type graph for one generation run. Implementations
/// must return a validated schema.
///

pub trait DescriptorSource {
    fn load(&self) -> Result<Schema, Error>;
}

impl DescriptorSource for Schema {
    fn load(&self) -> Result<Schema, Error> {
        validate_schema(self).map_err(Error::Validation)?;

        Ok(self.clone())
    }
}

///
/// Format
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse and validate schema text in this format.
    pub fn parse(self, text: &str) -> Result<Schema, Error> {
        let schema: Schema = match self {
            Self::Toml => toml::from_str(text).map_err(SourceError::from)?,
            Self::Json => serde_json::from_str(text).map_err(SourceError::from)?,
        };
        validate_schema(&schema).map_err(Error::Validation)?;

        Ok(schema)
    }
}

///
/// FileSource
///

#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
    format: Format,
}

impl FileSource {
    /// Source backed by a schema file; the format follows the extension.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();
        let format =
            Format::from_path(&path).ok_or_else(|| SourceError::UnsupportedFormat { path: path.clone() })?;

        Ok(Self { path, format })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }
}

impl DescriptorSource for FileSource {
    fn load(&self) -> Result<Schema, Error> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let schema = self.format.parse(&text)?;

        tracing::debug!(
            path = %self.path.display(),
            types = schema.len(),
            documents = schema.documents().count(),
            "loaded schema"
        );

        Ok(schema)
    }
}

///
/// TESTS
///
