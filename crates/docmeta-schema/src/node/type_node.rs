use crate::node::{Def, FieldDescriptor};
use serde::{Deserialize, Serialize};

///
/// DocumentMarker
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DocumentMarker {
    pub index_name: String,
}

///
/// TypeDescriptor
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeDescriptor {
    #[serde(flatten)]
    pub def: Def,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentMarker>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(module_path: impl Into<String>, ident: impl Into<String>) -> Self {
        Self {
            def: Def::new(module_path, ident),
            document: None,
            fields: Vec::new(),
        }
    }

    /// Mark this type as a document root stored in `index_name`.
    #[must_use]
    pub fn document(mut self, index_name: impl Into<String>) -> Self {
        self.document = Some(DocumentMarker {
            index_name: index_name.into(),
        });
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.def.comments = Some(comments.into());
        self
    }

    #[must_use]
    pub const fn is_document(&self) -> bool {
        self.document.is_some()
    }

    #[must_use]
    pub fn index_name(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.index_name.as_str())
    }

    #[must_use]
    pub fn get_field(&self, ident: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.ident == ident)
    }
}
