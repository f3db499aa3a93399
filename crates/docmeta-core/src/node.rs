use crate::{path, traits::Metamodel, types::FieldType};
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

///
/// Node
///
/// Position of one accessor inside a document: the field's simple name, its
/// dotted path from the document root, its indexing kind and the paths of
/// any nested ancestors. Generated mirrors hold a `Node` and derive every
/// child node from it, so the same mirror type reports the right path
/// wherever it is reached from.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Node {
    name: Cow<'static, str>,
    path: Cow<'static, str>,
    field_type: FieldType,

    // outermost first
    nested: Vec<String>,
}

impl Node {
    /// The document root: empty name and empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            name: Cow::Borrowed(""),
            path: Cow::Borrowed(""),
            field_type: FieldType::Object,
            nested: Vec::new(),
        }
    }

    /// Node for a declared field one level below `self`.
    #[must_use]
    pub fn child(&self, name: &'static str, field_type: FieldType) -> Self {
        let path = if self.path.is_empty() {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(path::join(&self.path, name))
        };

        let mut nested = self.nested.clone();
        if self.is_nested() {
            nested.push(self.path.to_string());
        }

        Self {
            name: Cow::Borrowed(name),
            path,
            field_type,
            nested,
        }
    }

    /// Node for a multi-field sibling. Both name and path gain the suffix.
    #[must_use]
    pub fn sibling(&self, suffix: &'static str, field_type: FieldType) -> Self {
        Self {
            name: Cow::Owned(path::join(&self.name, suffix)),
            path: Cow::Owned(path::join(&self.path, suffix)),
            field_type,
            nested: self.nested.clone(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.field_type.is_nested()
    }

    /// True when any ancestor is a nested field; queries on this path need
    /// a nested wrapper.
    #[must_use]
    pub fn is_nested_path(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Paths of the nested ancestors, innermost first.
    pub fn nested_paths(&self) -> impl Iterator<Item = &str> {
        self.nested.iter().rev().map(String::as_str)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

///
/// Field
///
/// Leaf accessor. Carries no children.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Field {
    node: Node,
}

impl Metamodel for Field {
    fn at(node: Node) -> Self {
        Self { node }
    }

    fn node(&self) -> &Node {
        &self.node
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}

///
/// DateField
///
/// Leaf accessor for temporal kinds, carrying the declared date formats.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DateField {
    node: Node,
    formats: &'static [&'static str],
}

impl DateField {
    #[must_use]
    pub const fn new(node: Node, formats: &'static [&'static str]) -> Self {
        Self { node, formats }
    }

    /// Declared formats in order; empty means the store default.
    #[must_use]
    pub const fn formats(&self) -> &'static [&'static str] {
        self.formats
    }
}

impl Metamodel for DateField {
    fn at(node: Node) -> Self {
        Self::new(node, &[])
    }

    fn node(&self) -> &Node {
        &self.node
    }
}

impl Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}

///
/// TESTS
///
