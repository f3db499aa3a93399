use std::fmt::{self, Display};

///
/// FindingKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FindingKind {
    /// A marker contradicts the declared shape, or names an unknown type.
    SchemaInconsistency,

    /// A shape the classifier cannot map to any field kind.
    UnsupportedShape,
}

impl Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SchemaInconsistency => "schema inconsistency",
            Self::UnsupportedShape => "unsupported shape",
        })
    }
}

///
/// Finding
///
/// One non-fatal problem. The offending field is excluded from its mirror
/// and generation carries on.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Finding {
    pub kind: FindingKind,

    /// `module::Type.field`
    pub location: String,
    pub message: String,
}

impl Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.location, self.message)
    }
}

///
/// Diagnostics
///
/// Findings accumulated over a whole run, in walk order.
///

#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    findings: Vec<Finding>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        tracing::warn!(kind = %finding.kind, location = %finding.location, "{}", finding.message);
        self.findings.push(finding);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    #[must_use]
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Finding> {
        self.findings
    }
}

///
/// TESTS
///
