mod def;
mod field;
mod marker;
mod shape;
mod type_node;

pub use def::*;
pub use field::*;
pub use marker::*;
pub use shape::*;
pub use type_node::*;

use serde::{Deserialize, Serialize};

///
/// Schema
///
/// Every declared type handed to one generation run, in declaration order.
/// Declaration order is significant: it fixes the order in which document
/// roots are processed and therefore identifier assignment.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeDescriptor>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self { types: Vec::new() }
    }

    #[must_use]
    pub fn from_types(types: Vec<TypeDescriptor>) -> Self {
        Self { types }
    }

    pub fn insert(&mut self, ty: TypeDescriptor) {
        self.types.push(ty);
    }

    #[must_use]
    pub fn with(mut self, ty: TypeDescriptor) -> Self {
        self.insert(ty);
        self
    }

    /// Look a type up by its qualified path (`module::Ident`).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|ty| ty.def.path() == path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Types carrying a document marker, in declaration order.
    pub fn documents(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().filter(|ty| ty.is_document())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use docmeta_core::FieldType;

    #[test]
    fn documents_keep_declaration_order() {
        let schema = Schema::new()
            .with(TypeDescriptor::new("blog", "Zed").document("zed"))
            .with(TypeDescriptor::new("blog", "Address"))
            .with(TypeDescriptor::new("blog", "Alpha").document("alpha"));

        let idents: Vec<_> = schema.documents().map(|ty| ty.def.ident.as_str()).collect();
        assert_eq!(idents, ["Zed", "Alpha"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn get_resolves_qualified_paths() {
        let schema = Schema::new()
            .with(TypeDescriptor::new("a", "Tag").field(FieldDescriptor::scalar("x", FieldType::Text)))
            .with(TypeDescriptor::new("b::Outer", "Tag"));

        assert_eq!(schema.get("a::Tag").map(|ty| ty.fields.len()), Some(1));
        assert!(schema.contains("b::Outer::Tag"));
        assert!(!schema.contains("Tag"));
    }
}
