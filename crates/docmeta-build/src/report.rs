use crate::{
    diagnostics::{Finding, FindingKind},
    graph::{Accessor, Exclusion, Graph},
    sink::Unit,
    walk::Walk,
};
use docmeta_core::FieldType;
use std::fmt::Write as _;

///
/// Report
///
/// Outcome of a run that did not fail fatally: what was emitted and every
/// non-fatal finding, in walk order.
///

#[derive(Clone, Debug, Default)]
pub struct Report {
    pub units: Vec<String>,
    pub mirrors: Vec<MirrorSummary>,
    pub findings: Vec<Finding>,
}

///
/// MirrorSummary
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MirrorSummary {
    pub ident: String,
    pub source_path: String,
    pub index_name: Option<String>,
    pub fields: Vec<FieldSummary>,
    pub excluded: Vec<Exclusion>,
}

///
/// FieldSummary
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldSummary {
    pub path: String,
    pub field_type: FieldType,
    pub target: Option<String>,
    pub siblings: Vec<(String, FieldType)>,
}

impl Report {
    pub(crate) fn new(walk: Walk<'_>, units: &[Unit]) -> Self {
        Self {
            units: units.iter().map(Unit::file_name).collect(),
            mirrors: summarize(&walk.graph),
            findings: walk.diagnostics.into_vec(),
        }
    }

    #[must_use]
    pub fn documents(&self) -> usize {
        self.mirrors.iter().filter(|m| m.index_name.is_some()).count()
    }

    #[must_use]
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Markdown rendering: one section per mirror, then the findings.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# docmeta report\n\n");
        let _ = writeln!(
            out,
            "{} mirrors, {} documents, {} units, {} findings\n",
            self.mirrors.len(),
            self.documents(),
            self.units.len(),
            self.findings.len()
        );

        for mirror in &self.mirrors {
            let _ = writeln!(out, "## {}\n", mirror.ident);
            let _ = writeln!(out, "- source: `{}`", mirror.source_path);
            if let Some(index_name) = &mirror.index_name {
                let _ = writeln!(out, "- index: `{index_name}`");
            }
            out.push('\n');

            for field in &mirror.fields {
                let _ = write!(out, "- `{}`: {}", field.path, field.field_type.mapping_name());
                if let Some(target) = &field.target {
                    let _ = write!(out, " -> {target}");
                }
                out.push('\n');
                for (path, field_type) in &field.siblings {
                    let _ = writeln!(out, "  - `{path}`: {}", field_type.mapping_name());
                }
            }
            for excluded in &mirror.excluded {
                let _ = writeln!(out, "- ~~`{}`~~ {}", excluded.field, excluded.reason);
            }
            out.push('\n');
        }

        if !self.findings.is_empty() {
            out.push_str("## Findings\n\n");
            for finding in &self.findings {
                let _ = writeln!(out, "- {finding}");
            }
        }

        out
    }
}

fn summarize(graph: &Graph<'_>) -> Vec<MirrorSummary> {
    graph
        .mirrors()
        .map(|mirror| MirrorSummary {
            ident: mirror.ident.clone(),
            source_path: mirror.source_path.clone(),
            index_name: mirror.index_name.clone(),
            fields: mirror
                .fields
                .iter()
                .map(|field| FieldSummary {
                    path: field.path.clone(),
                    field_type: field.accessor.field_type(),
                    target: field.accessor.target().map(|id| graph.mirror(id).ident.clone()),
                    siblings: match &field.accessor {
                        Accessor::MultiField(bundle) => bundle
                            .siblings
                            .iter()
                            .map(|s| (s.path.clone(), s.field_type))
                            .collect(),
                        _ => Vec::new(),
                    },
                })
                .collect(),
            excluded: mirror.excluded.clone(),
        })
        .collect()
}

///
/// TESTS
///
