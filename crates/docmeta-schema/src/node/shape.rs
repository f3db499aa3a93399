use serde::{Deserialize, Serialize};

///
/// Shape
///
/// Declared value shape of a field. Container shapes are erased for
/// metamodel purposes; only the leaf and the marker kind decide the accessor.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Scalar,

    /// Reference to another declared type by qualified path.
    Object(String),

    Collection(Box<Self>),

    /// Map keyed by strings; only the value shape is declared.
    Map(Box<Self>),

    /// Generic type parameter, optionally bounded by a concrete shape.
    Generic {
        param: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<Box<Self>>,
    },
}

impl Shape {
    #[must_use]
    pub fn object(path: impl Into<String>) -> Self {
        Self::Object(path.into())
    }

    #[must_use]
    pub fn collection(element: Self) -> Self {
        Self::Collection(Box::new(element))
    }

    #[must_use]
    pub fn map(value: Self) -> Self {
        Self::Map(Box::new(value))
    }

    #[must_use]
    pub fn generic(param: impl Into<String>) -> Self {
        Self::Generic {
            param: param.into(),
            bound: None,
        }
    }

    #[must_use]
    pub fn bounded(param: impl Into<String>, bound: Self) -> Self {
        Self::Generic {
            param: param.into(),
            bound: Some(Box::new(bound)),
        }
    }

    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Collection(_) | Self::Map(_))
    }

    /// Innermost shape after erasing containers and resolving generic bounds.
    /// An unbounded generic parameter is its own leaf.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Collection(inner) | Self::Map(inner) => inner.leaf(),
            Self::Generic {
                bound: Some(bound), ..
            } => bound.leaf(),
            _ => self,
        }
    }

    #[must_use]
    pub fn object_path(&self) -> Option<&str> {
        match self {
            Self::Object(path) => Some(path),
            _ => None,
        }
    }
}

///
/// TESTS
///
