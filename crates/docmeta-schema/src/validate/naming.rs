use crate::{err, error::ErrorTree, node::Schema};
use std::collections::BTreeMap;

/// Qualified type paths are the identity of a descriptor and must be unique.
pub fn validate_type_naming(schema: &Schema, errs: &mut ErrorTree) {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();

    for (position, ty) in schema.types.iter().enumerate() {
        let path = ty.def.path();

        if let Some(prev) = seen.insert(path.clone(), position) {
            err!(
                errs,
                "duplicate type path '{path}' declared at positions {prev} and {position}"
            );
        }
    }
}

/// Identifier rules shared by type names, scope segments and field names:
/// ASCII, non-empty, starts with a letter or underscore.
pub(crate) fn validate_ident(kind: &str, ident: &str, max_len: usize) -> Result<(), String> {
    if ident.is_empty() {
        return Err(format!("{kind} is empty"));
    }
    if ident.len() > max_len {
        return Err(format!("{kind} '{ident}' exceeds max length {max_len}"));
    }
    if !ident
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(format!(
            "{kind} '{ident}' must contain only ASCII letters, digits or '_'"
        ));
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("{kind} '{ident}' must not start with a digit"));
    }

    Ok(())
}

///
/// TESTS
///
