use crate::{node::Node, types::FieldType};

///
/// Metamodel
///
/// Implemented by every generated mirror, multi-field bundle and leaf field.
/// Generated field accessors are inherent methods, so a mapped field called
/// `name` or `path` shadows these; call through the trait
/// (`Metamodel::path(&mirror)`) to reach the mirror's own position.
///

pub trait Metamodel: Sized {
    /// Build the accessor positioned at `node`.
    fn at(node: Node) -> Self;

    fn node(&self) -> &Node;

    fn name(&self) -> &str {
        self.node().name()
    }

    fn path(&self) -> &str {
        self.node().path()
    }

    fn field_type(&self) -> FieldType {
        self.node().field_type()
    }

    fn is_nested(&self) -> bool {
        self.node().is_nested()
    }

    fn is_nested_path(&self) -> bool {
        self.node().is_nested_path()
    }

    fn nested_paths(&self) -> impl Iterator<Item = &str> {
        self.node().nested_paths()
    }
}

///
/// Container
///
/// An accessor with named children: every mirror and multi-field helper.
///

pub trait Container: Metamodel {
    /// Direct children in declaration order.
    fn fields(&self) -> Vec<Node>;

    /// Descendant at a dotted `path` relative to this container.
    fn field_by(&self, path: &str) -> Option<Node>;
}

///
/// MultiField
///
/// Helper for a field indexed several ways. The helper sits at the main
/// field's position; its children are the siblings.
///

pub trait MultiField: Container {
    type Main: Metamodel;

    fn main_field(&self) -> Self::Main;
}

///
/// Document
///
/// Mirror of a document root.
///

pub trait Document: Metamodel {
    const INDEX_NAME: &'static str;

    /// Qualified path of the source type this mirror was generated from.
    const SOURCE_PATH: &'static str;

    fn index_name(&self) -> &'static str {
        Self::INDEX_NAME
    }

    #[must_use]
    fn root() -> Self {
        Self::at(Node::root())
    }
}
