//! Structural schema validation.
//!
//! These checks enforce the descriptor contract itself (well-formed
//! identifiers, unique names). A schema that fails them cannot be walked
//! meaningfully, so failures are fatal. Semantic mismatches between markers
//! and shapes are not checked here; the generator reports those as findings.

pub mod naming;
pub mod node;

use crate::{error::ErrorTree, node::Schema};

/// Run full schema validation in a staged, deterministic order.
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    // Phase 1: validate each type (structural + local invariants).
    let mut errors = validate_nodes(schema);

    // Phase 2: enforce schema-wide invariants.
    validate_global(schema, &mut errors);

    errors.result()
}

fn validate_nodes(schema: &Schema) -> ErrorTree {
    let mut errors = ErrorTree::new();
    for ty in &schema.types {
        errors.add_result(ty.def.path(), node::validate_type(ty));
    }

    errors
}

fn validate_global(schema: &Schema, errors: &mut ErrorTree) {
    naming::validate_type_naming(schema, errors);
}

///
/// TESTS
///
