use docmeta_core::FieldType;
use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

///
/// Marker
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Field(FieldMarker),
    MultiField(MultiFieldMarker),
}

impl Marker {
    /// The marker describing the field's primary accessor.
    #[must_use]
    pub const fn main(&self) -> &FieldMarker {
        match self {
            Self::Field(marker) => marker,
            Self::MultiField(multi) => &multi.main,
        }
    }

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.main().field_type
    }
}

///
/// FieldMarker
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldMarker {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_analyzer: Option<String>,

    /// Date formats, only meaningful on temporal kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub format: Vec<String>,

    #[serde(default = "default_true")]
    pub index: bool,
}

impl FieldMarker {
    #[must_use]
    pub const fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            analyzer: None,
            search_analyzer: None,
            format: Vec::new(),
            index: true,
        }
    }

    #[must_use]
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format.push(format.into());
        self
    }

    #[must_use]
    pub const fn not_indexed(mut self) -> Self {
        self.index = false;
        self
    }
}

///
/// MultiFieldMarker
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MultiFieldMarker {
    pub main: FieldMarker,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub siblings: Vec<InnerField>,
}

///
/// InnerField
///
/// A named sibling of a multi-field, addressed as `<field>.<suffix>`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InnerField {
    pub suffix: String,

    #[serde(flatten)]
    pub marker: FieldMarker,
}

impl InnerField {
    #[must_use]
    pub fn new(suffix: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            suffix: suffix.into(),
            marker: FieldMarker::new(field_type),
        }
    }
}
