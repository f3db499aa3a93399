//! Type Descriptor Source: the read-only, pre-materialised graph of declared
//! types and their document-mapping markers that the generator consumes.

pub mod error;
pub mod node;
pub mod source;
pub mod validate;

/// Maximum length for type identifiers.
pub const MAX_TYPE_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum length for index names.
pub const MAX_INDEX_NAME_LEN: usize = 255;

use crate::{error::ErrorTree, source::SourceError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        source::{DescriptorSource, FileSource, Format},
    };
    pub use docmeta_core::FieldType;
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("schema validation failed:\n{0}")]
    Validation(ErrorTree),
}
