use serde::{Deserialize, Serialize};

///
/// Def
///
/// Identity of a declared type: its enclosing scope (module path, with any
/// enclosing type as the last segment) and its simple name.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Def {
    #[serde(default)]
    pub module_path: String,
    pub ident: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl Def {
    #[must_use]
    pub fn new(module_path: impl Into<String>, ident: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
            ident: ident.into(),
            comments: None,
        }
    }

    /// Qualified path, `module_path::ident`, or the bare ident at crate root.
    #[must_use]
    pub fn path(&self) -> String {
        if self.module_path.is_empty() {
            self.ident.clone()
        } else {
            format!("{}::{}", self.module_path, self.ident)
        }
    }

    /// Enclosing scope names, innermost first.
    pub fn scope(&self) -> impl Iterator<Item = &str> {
        self.module_path
            .rsplit("::")
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }
}

///
/// TESTS
///
