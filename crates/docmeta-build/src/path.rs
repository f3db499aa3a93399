//! Path Builder: dotted query paths from declared field names only.

use crate::graph::{Accessor, Graph, MirrorId};
use docmeta_core::path::join;

/// Path of `field` below `parent`; the root path is empty.
#[must_use]
pub fn field_path(parent: &str, field: &str) -> String {
    join(parent, field)
}

/// Path of a multi-field sibling below its main field.
#[must_use]
pub fn sibling_path(main: &str, suffix: &str) -> String {
    join(main, suffix)
}

/// Every query path reachable from `root`, depth first in declaration
/// order. A field pointing back at a mirror already on the current chain
/// contributes its own path but is not expanded again.
#[must_use]
pub fn field_paths(graph: &Graph<'_>, root: MirrorId) -> Vec<String> {
    let mut out = Vec::new();
    let mut chain = vec![root];
    collect(graph, root, "", &mut chain, &mut out);

    out
}

fn collect(graph: &Graph<'_>, id: MirrorId, parent: &str, chain: &mut Vec<MirrorId>, out: &mut Vec<String>) {
    for field in &graph.mirror(id).fields {
        let path = field_path(parent, &field.name);
        out.push(path.clone());

        match &field.accessor {
            Accessor::Scalar(_) => {}
            Accessor::MultiField(bundle) => {
                out.extend(bundle.siblings.iter().map(|s| sibling_path(&path, &s.suffix)));
            }
            Accessor::Mirror { target, .. } => {
                if chain.contains(target) {
                    tracing::debug!(path = %path, "cycle: not expanding");
                    continue;
                }
                chain.push(*target);
                collect(graph, *target, &path, chain, out);
                chain.pop();
            }
        }
    }
}

///
/// TESTS
///
