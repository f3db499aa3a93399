use docmeta_core::FieldType;
use docmeta_schema::node::{FieldMarker, TypeDescriptor};
use std::fmt::{self, Display};

///
/// MirrorId
///
/// Arena index of a mirror. Ids follow reservation order, so sorting by id
/// reproduces the walk.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MirrorId(pub(crate) usize);

impl MirrorId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for MirrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

///
/// MirrorState
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MirrorState {
    /// In the memo with an identifier, fields not yet visited.
    Reserved,
    Building,
    Complete,
}

///
/// Mirror
///

#[derive(Clone, Debug)]
pub struct Mirror<'a> {
    pub id: MirrorId,
    pub ident: String,
    pub source: &'a TypeDescriptor,
    pub source_path: String,

    /// Set only on document roots.
    pub index_name: Option<String>,

    /// Path at the point this mirror was first reached; empty for roots.
    pub base_path: String,

    /// The document root whose output unit carries this mirror.
    pub owner: MirrorId,

    pub fields: Vec<ResolvedField>,
    pub excluded: Vec<Exclusion>,
    pub state: MirrorState,
}

impl Mirror<'_> {
    #[must_use]
    pub const fn is_document(&self) -> bool {
        self.index_name.is_some()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

///
/// ResolvedField
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedField {
    /// Declared simple name, never disambiguated.
    pub name: String,
    pub path: String,

    /// Emitted accessor method; may differ from `name` (case, keywords).
    pub method: String,
    pub accessor: Accessor,
    pub comments: Option<String>,

    /// Marker of the main accessor; `None` for unmarked identifiers.
    pub marker: Option<FieldMarker>,
}

///
/// Accessor
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Accessor {
    Scalar(FieldType),

    /// Object or nested reference to another mirror.
    Mirror { field_type: FieldType, target: MirrorId },

    MultiField(MultiFieldBundle),
}

impl Accessor {
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Scalar(field_type) | Self::Mirror { field_type, .. } => *field_type,
            Self::MultiField(bundle) => bundle.main,
        }
    }

    #[must_use]
    pub const fn target(&self) -> Option<MirrorId> {
        match self {
            Self::Mirror { target, .. } => Some(*target),
            _ => None,
        }
    }
}

///
/// MultiFieldBundle
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultiFieldBundle {
    /// Emitted helper type carrying the sibling accessors.
    pub ident: String,
    pub main: FieldType,
    pub siblings: Vec<SiblingField>,
}

///
/// SiblingField
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiblingField {
    pub suffix: String,

    /// `field.suffix`
    pub name: String,
    pub path: String,
    pub method: String,
    pub field_type: FieldType,
    pub formats: Vec<String>,
}

///
/// Exclusion
///
/// A declared field left out of its mirror, with the reason.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Exclusion {
    pub field: String,
    pub reason: String,
}

///
/// Graph
///
/// Every mirror produced by one walk, in reservation order.
///

#[derive(Clone, Debug)]
pub struct Graph<'a> {
    pub(crate) mirrors: Vec<Mirror<'a>>,
    pub(crate) roots: Vec<MirrorId>,
}

impl<'a> Graph<'a> {
    #[must_use]
    pub fn mirror(&self, id: MirrorId) -> &Mirror<'a> {
        &self.mirrors[id.0]
    }

    pub fn mirrors(&self) -> impl Iterator<Item = &Mirror<'a>> {
        self.mirrors.iter()
    }

    /// Document roots in declaration order.
    #[must_use]
    pub fn roots(&self) -> &[MirrorId] {
        &self.roots
    }

    /// Mirrors carried by `root`'s unit, root first.
    pub fn owned_by(&self, root: MirrorId) -> impl Iterator<Item = &Mirror<'a>> {
        self.mirrors.iter().filter(move |m| m.owner == root)
    }

    #[must_use]
    pub fn by_source(&self, source_path: &str) -> Option<&Mirror<'a>> {
        self.mirrors.iter().find(|m| m.source_path == source_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mirrors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mirrors.is_empty()
    }
}
