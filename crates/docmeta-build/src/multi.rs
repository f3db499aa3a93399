use crate::{
    classify::Rejection,
    graph::{MultiFieldBundle, SiblingField},
    ident::AccessorNames,
    path::sibling_path,
};
use docmeta_core::{FieldType, path::join};
use docmeta_schema::node::InnerField;

/// Expand a multi-field declared at `path` into its accessor bundle. The
/// bundle itself is the main accessor; each sibling sits one segment below
/// it and is named `field.suffix`. Siblings are leaves, so a sibling with a
/// reference kind is dropped and returned as a rejection.
#[must_use]
pub fn expand(
    ident: String,
    field: &str,
    path: &str,
    main: FieldType,
    siblings: &[InnerField],
) -> (MultiFieldBundle, Vec<(String, Rejection)>) {
    let mut methods = AccessorNames::new();
    let mut rejected = Vec::new();
    let mut kept = Vec::with_capacity(siblings.len());

    for inner in siblings {
        let field_type = inner.marker.field_type;
        if field_type.is_reference() {
            rejected.push((
                inner.suffix.clone(),
                Rejection::inconsistent(format!(
                    "multi-field sibling '{}' must be a leaf kind, found '{}'",
                    inner.suffix,
                    field_type.mapping_name()
                )),
            ));
            continue;
        }

        kept.push(SiblingField {
            suffix: inner.suffix.clone(),
            name: join(field, &inner.suffix),
            path: sibling_path(path, &inner.suffix),
            method: methods.assign(&inner.suffix),
            field_type,
            formats: inner.marker.format.clone(),
        });
    }

    let bundle = MultiFieldBundle {
        ident,
        main,
        siblings: kept,
    };

    (bundle, rejected)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::FindingKind;

    #[test]
    fn siblings_extend_main_path() {
        let (bundle, rejected) = expand(
            "MetaArticleTitleMultiField".to_string(),
            "title",
            "content.title",
            FieldType::Text,
            &[
                InnerField::new("keyword", FieldType::Keyword),
                InnerField::new("search", FieldType::SearchAsYouType),
            ],
        );

        assert!(rejected.is_empty());
        assert_eq!(bundle.main, FieldType::Text);
        let paths: Vec<_> = bundle.siblings.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, ["content.title.keyword", "content.title.search"]);
        assert_eq!(bundle.siblings[0].name, "title.keyword");
        assert_eq!(bundle.siblings[1].method, "search");
    }

    #[test]
    fn zero_siblings_is_just_the_main_accessor() {
        let (bundle, rejected) = expand("X".to_string(), "body", "body", FieldType::Text, &[]);

        assert!(bundle.siblings.is_empty());
        assert!(rejected.is_empty());
    }

    #[test]
    fn reference_siblings_are_dropped() {
        let (bundle, rejected) = expand(
            "X".to_string(),
            "title",
            "title",
            FieldType::Text,
            &[
                InnerField::new("raw", FieldType::Keyword),
                InnerField::new("obj", FieldType::Object),
                InnerField::new("deep", FieldType::Nested),
            ],
        );

        let kept: Vec<_> = bundle.siblings.iter().map(|s| s.suffix.as_str()).collect();
        assert_eq!(kept, ["raw"]);

        let suffixes: Vec<_> = rejected.iter().map(|(suffix, _)| suffix.as_str()).collect();
        assert_eq!(suffixes, ["obj", "deep"]);
        assert!(rejected.iter().all(|(_, r)| r.kind == FindingKind::SchemaInconsistency));
        assert!(rejected[0].1.message.contains("found 'object'"));
    }

    #[test]
    fn sibling_formats_are_carried() {
        let mut inner = InnerField::new("day", FieldType::Date);
        inner.marker = inner.marker.format("yyyy-MM-dd");

        let (bundle, _) = expand("X".to_string(), "at", "at", FieldType::Date, &[inner]);

        assert_eq!(bundle.siblings[0].formats, ["yyyy-MM-dd"]);
    }
}
