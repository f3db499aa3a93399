//! Runtime surface linked by generated metamodel mirrors.
//!
//! Generated code only ever names items from this crate (through the
//! `docmeta::core` facade path or `docmeta_core` directly). Nothing here knows
//! about schemas or generation.

pub mod node;
pub mod path;
pub mod registry;
pub mod traits;
pub mod types;

pub use node::{DateField, Field, Node};
pub use registry::DocumentEntry;
pub use traits::{Container, Document, Metamodel, MultiField};
pub use types::FieldType;

/// Separator between path segments in a query path.
pub const PATH_SEPARATOR: char = '.';

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        node::{DateField, Field, Node},
        registry::DocumentEntry,
        traits::{Container, Document, Metamodel, MultiField},
        types::FieldType,
    };
}
