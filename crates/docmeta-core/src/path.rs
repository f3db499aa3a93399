//! Dotted query-path rules shared by the generator and generated code.

use crate::PATH_SEPARATOR;

/// Append one segment to a parent path. The root path is empty, so a
/// top-level segment is returned unchanged.
#[must_use]
pub fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        let mut path = String::with_capacity(parent.len() + 1 + segment.len());
        path.push_str(parent);
        path.push(PATH_SEPARATOR);
        path.push_str(segment);
        path
    }
}

/// Dot-join a whole chain of segments from the root.
#[must_use]
pub fn join_all<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .fold(String::new(), |acc, segment| join(&acc, segment.as_ref()))
}

/// Split off the first segment: `"a.b.c"` gives `("a", Some("b.c"))`.
#[must_use]
pub fn split_first(path: &str) -> (&str, Option<&str>) {
    match path.split_once(PATH_SEPARATOR) {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

///
/// TESTS
///
