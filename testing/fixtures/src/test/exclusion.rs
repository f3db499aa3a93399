use crate::{MetaArticle, MetaCustomer};

#[test]
fn unmarked_fields_are_not_mapped() {
    assert!(!MetaCustomer::FIELD_PATHS.contains(&"internal_notes"));
}

#[test]
fn rejected_fields_are_left_out() {
    for excluded in ["legacy", "payload"] {
        assert!(!MetaArticle::FIELD_PATHS.iter().any(|p| p.starts_with(excluded)));
    }
    assert_eq!(
        MetaArticle::FIELD_PATHS,
        [
            "title",
            "title.keyword",
            "title.search",
            "body",
            "content",
            "content.heading",
            "content.heading.raw",
            "content.path",
            "type",
            "firstName",
            "published_at",
        ]
    );
}
