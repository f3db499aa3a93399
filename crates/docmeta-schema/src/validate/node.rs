use crate::{
    MAX_FIELD_NAME_LEN, MAX_INDEX_NAME_LEN, MAX_TYPE_NAME_LEN, err,
    error::ErrorTree,
    node::{FieldDescriptor, Marker, TypeDescriptor},
    validate::naming::validate_ident,
};
use std::collections::BTreeSet;

/// Local checks for one type and its fields.
pub(crate) fn validate_type(ty: &TypeDescriptor) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    if let Err(msg) = validate_ident("type name", &ty.def.ident, MAX_TYPE_NAME_LEN) {
        errs.add(msg);
    }
    if !ty.def.module_path.is_empty() {
        for segment in ty.def.module_path.split("::") {
            if let Err(msg) = validate_ident("scope segment", segment.trim(), MAX_TYPE_NAME_LEN) {
                errs.add(msg);
            }
        }
    }

    if let Some(index_name) = ty.index_name() {
        validate_index_name(index_name, &mut errs);
    }

    let mut seen = BTreeSet::new();
    for field in &ty.fields {
        if !seen.insert(field.ident.as_str()) {
            err!(errs, "duplicate field '{}'", field.ident);
        }
        errs.add_result(field.ident.clone(), validate_field(field));
    }

    errs.result()
}

fn validate_index_name(index_name: &str, errs: &mut ErrorTree) {
    if index_name.is_empty() {
        errs.add("index name is empty");
    } else if index_name.len() > MAX_INDEX_NAME_LEN {
        err!(
            errs,
            "index name '{index_name}' exceeds max length {MAX_INDEX_NAME_LEN}"
        );
    } else if index_name.chars().any(char::is_whitespace) {
        err!(errs, "index name '{index_name}' must not contain whitespace");
    }
}

fn validate_field(field: &FieldDescriptor) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    if let Err(msg) = validate_ident("field name", &field.ident, MAX_FIELD_NAME_LEN) {
        errs.add(msg);
    }

    if let Some(Marker::MultiField(multi)) = &field.marker {
        let mut suffixes = BTreeSet::new();
        for sibling in &multi.siblings {
            if let Err(msg) = validate_ident("multi-field suffix", &sibling.suffix, MAX_FIELD_NAME_LEN) {
                errs.add(msg);
            }
            if !suffixes.insert(sibling.suffix.as_str()) {
                err!(errs, "duplicate multi-field suffix '{}'", sibling.suffix);
            }
        }
    }

    errs.result()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FieldMarker, InnerField};
    use docmeta_core::FieldType;

    #[test]
    fn duplicate_suffixes_are_rejected() {
        let ty = TypeDescriptor::new("blog", "Article").field(FieldDescriptor::multi(
            "title",
            FieldMarker::new(FieldType::Text),
            vec![
                InnerField::new("keyword", FieldType::Keyword),
                InnerField::new("keyword", FieldType::Wildcard),
            ],
        ));

        let errs = validate_type(&ty).expect_err("duplicate suffix must fail");
        assert!(errs.to_string().contains("title: duplicate multi-field suffix 'keyword'"));
    }

    #[test]
    fn dotted_suffix_is_rejected() {
        let ty = TypeDescriptor::new("blog", "Article").field(FieldDescriptor::multi(
            "title",
            FieldMarker::new(FieldType::Text),
            vec![InnerField::new("raw.keyword", FieldType::Keyword)],
        ));

        assert!(validate_type(&ty).is_err());
    }

    #[test]
    fn root_module_path_is_allowed() {
        let ty = TypeDescriptor::new("", "Article").document("articles");

        assert!(validate_type(&ty).is_ok());
    }

    #[test]
    fn whitespace_in_index_name_is_rejected() {
        let ty = TypeDescriptor::new("blog", "Article").document("my articles");

        let errs = validate_type(&ty).expect_err("index name must fail");
        assert!(errs.to_string().contains("must not contain whitespace"));
    }
}
