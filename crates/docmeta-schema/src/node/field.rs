use crate::node::{FieldMarker, InnerField, Marker, MultiFieldMarker, Shape};
use docmeta_core::FieldType;
use serde::{Deserialize, Serialize};
use std::ops::Not;

///
/// FieldDescriptor
///
/// One declared field: simple name, declared value shape, at most one
/// marker, and the identifier flag.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub ident: String,

    #[serde(default)]
    pub shape: Shape,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub identifier: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl FieldDescriptor {
    /// Unmarked field with the given shape.
    #[must_use]
    pub fn new(ident: impl Into<String>, shape: Shape) -> Self {
        Self {
            ident: ident.into(),
            shape,
            marker: None,
            identifier: false,
            comments: None,
        }
    }

    #[must_use]
    pub fn scalar(ident: impl Into<String>, field_type: FieldType) -> Self {
        Self::new(ident, Shape::Scalar).marked(FieldMarker::new(field_type))
    }

    /// Field of kind `Object` pointing directly at `target`.
    #[must_use]
    pub fn object(ident: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ident, Shape::object(target)).marked(FieldMarker::new(FieldType::Object))
    }

    /// Field of kind `Nested` over a collection of `target`.
    #[must_use]
    pub fn nested(ident: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ident, Shape::collection(Shape::object(target)))
            .marked(FieldMarker::new(FieldType::Nested))
    }

    #[must_use]
    pub fn multi(ident: impl Into<String>, main: FieldMarker, siblings: Vec<InnerField>) -> Self {
        let mut field = Self::new(ident, Shape::Scalar);
        field.marker = Some(Marker::MultiField(MultiFieldMarker { main, siblings }));
        field
    }

    #[must_use]
    pub fn marked(mut self, marker: FieldMarker) -> Self {
        self.marker = Some(Marker::Field(marker));
        self
    }

    #[must_use]
    pub const fn identifier(mut self) -> Self {
        self.identifier = true;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Fields with neither a marker nor the identifier flag are not mapped.
    #[must_use]
    pub const fn is_mapped(&self) -> bool {
        self.marker.is_some() || self.identifier
    }

    #[must_use]
    pub fn multi_field(&self) -> Option<&MultiFieldMarker> {
        match &self.marker {
            Some(Marker::MultiField(multi)) => Some(multi),
            _ => None,
        }
    }
}

///
/// TESTS
///
