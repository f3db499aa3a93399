use crate::diagnostics::FindingKind;
use docmeta_core::FieldType;
use docmeta_schema::node::{FieldDescriptor, InnerField, Marker, Schema, Shape, TypeDescriptor};
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// Catalog
///
/// Qualified-path index over a schema's types.
///

#[derive(Debug)]
pub struct Catalog<'a> {
    types: BTreeMap<String, &'a TypeDescriptor>,
}

impl<'a> Catalog<'a> {
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        let types = schema.types.iter().map(|ty| (ty.def.path(), ty)).collect();

        Self { types }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'a TypeDescriptor> {
        self.types.get(path).copied()
    }
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug)]
pub enum FieldKind<'a> {
    /// No marker and no identifier flag.
    Excluded,

    Scalar(FieldType),
    ObjectRef(&'a TypeDescriptor),
    NestedRef(&'a TypeDescriptor),

    MultiField {
        main: FieldType,
        siblings: &'a [InnerField],
    },
}

///
/// Rejection
///
/// Why a field could not be classified. Becomes a finding at its location.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rejection {
    pub kind: FindingKind,
    pub message: String,
}

impl Rejection {
    pub(crate) fn inconsistent(message: String) -> Self {
        Self {
            kind: FindingKind::SchemaInconsistency,
            message,
        }
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Map one field and its marker to the accessor it needs.
pub fn classify<'a>(
    catalog: &Catalog<'a>,
    field: &'a FieldDescriptor,
) -> Result<FieldKind<'a>, Rejection> {
    let Some(marker) = &field.marker else {
        return Ok(if field.identifier {
            FieldKind::Scalar(FieldType::Keyword)
        } else {
            FieldKind::Excluded
        });
    };

    match marker {
        Marker::Field(marker) => classify_kind(catalog, &field.shape, marker.field_type),
        Marker::MultiField(multi) => {
            let main = multi.main.field_type;
            if main.is_reference() {
                return Err(Rejection::inconsistent(format!(
                    "multi-field main marker must be a leaf kind, found '{}'",
                    main.mapping_name()
                )));
            }

            Ok(FieldKind::MultiField {
                main,
                siblings: &multi.siblings,
            })
        }
    }
}

// Leaf kinds erase any wrapping; reference kinds need an object at the leaf.
fn classify_kind<'a>(
    catalog: &Catalog<'a>,
    shape: &'a Shape,
    kind: FieldType,
) -> Result<FieldKind<'a>, Rejection> {
    if kind.is_scalar() {
        return Ok(FieldKind::Scalar(kind));
    }

    match shape.leaf() {
        Shape::Object(path) => {
            let target = catalog
                .get(path)
                .ok_or_else(|| Rejection::inconsistent(format!("unknown type '{path}'")))?;

            Ok(if kind.is_nested() {
                FieldKind::NestedRef(target)
            } else {
                FieldKind::ObjectRef(target)
            })
        }
        Shape::Generic { param, .. } => Err(Rejection {
            kind: FindingKind::UnsupportedShape,
            message: format!(
                "'{}' marker over unbounded generic parameter '{param}'",
                kind.mapping_name()
            ),
        }),
        Shape::Scalar | Shape::Collection(_) | Shape::Map(_) => Err(Rejection::inconsistent(
            format!("'{}' marker on a field that does not reference a type", kind.mapping_name()),
        )),
    }
}

///
/// TESTS
///
