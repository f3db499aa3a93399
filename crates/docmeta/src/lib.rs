//! ## Crate layout
//! - `build`: the generator, its config and sinks; used from build scripts.
//! - `core`: runtime types that generated mirrors are built on.
//! - `schema`: type descriptors, loading and validation.
//!
//! A consuming crate calls `docmeta::build!("schema.toml")` from `build.rs`
//! and `docmeta::start!()` once in its library to pull the mirrors in.

pub use docmeta_build as build;
pub use docmeta_core as core;
pub use docmeta_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use docmeta_build::build;

/// Include every mirror generated by `build!` into the current module.
#[macro_export]
macro_rules! start {
    () => {
        include!(concat!(env!("OUT_DIR"), "/docmeta.rs"));
    };
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        Container, DateField, Document, DocumentEntry, Field, FieldType, Metamodel, MultiField, Node,
    };
}
