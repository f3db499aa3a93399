use crate::{MetaArticle, MetaDraft, Metamodels};
use docmeta::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn entries_follow_declaration_order() {
    let idents: Vec<_> = Metamodels::entries().iter().map(|e| e.ident).collect();

    assert_eq!(
        idents,
        [
            "MetaCustomer",
            "MetaOrder",
            "MetaNameCollision",
            "MetaPerson",
            "MetaArticle",
            "MetaDraft",
        ]
    );
}

#[test]
fn documents_may_share_an_index() {
    let idents: Vec<_> = Metamodels::by_index_name("articles").map(|e| e.ident).collect();

    assert_eq!(idents, ["MetaArticle", "MetaDraft"]);
    assert_eq!(MetaArticle::INDEX_NAME, MetaDraft::INDEX_NAME);
}

#[test]
fn lookup_by_source_path() {
    let entry = Metamodels::by_source_path("dataset::NameCollision").expect("entry exists");

    assert_eq!(entry.ident, "MetaNameCollision");
    assert_eq!(entry.index_name, "collisions");
    assert!(Metamodels::by_source_path("shop::Address").is_none());
}

#[test]
fn entry_matches_document_consts() {
    let entry = Metamodels::by_source_path(MetaDraft::SOURCE_PATH).expect("entry exists");

    assert_eq!(entry.index_name, MetaDraft::ROOT.index_name());
}
