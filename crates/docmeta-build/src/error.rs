use crate::{config::ConfigError, sink::SinkError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Fatal generation errors. Anything reported here aborts the run and no
/// emitted unit is considered valid; non-fatal findings travel in the
/// `Report` instead.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] docmeta_schema::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("environment variable '{0}' is not set")]
    MissingEnv(&'static str),

    #[error("cannot emit '{unit}': {message}")]
    Emit { unit: String, message: String },
}

impl Error {
    pub(crate) fn emit(unit: impl Into<String>, message: impl ToString) -> Self {
        Self::Emit {
            unit: unit.into(),
            message: message.to_string(),
        }
    }
}
