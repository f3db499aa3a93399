use crate::{MetaAddress, MetaCustomer, MetaOrder};
use docmeta::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn scalar_fields_carry_name_and_path() {
    let root = MetaCustomer::ROOT;

    assert_eq!(root.id().name(), "id");
    assert_eq!(root.id().path(), "id");
    assert_eq!(root.id().field_type(), FieldType::Keyword);
    assert_eq!(root.scores().field_type(), FieldType::Integer);
}

#[test]
fn object_fields_chain_paths() {
    let root = MetaCustomer::ROOT;

    assert_eq!(root.address().path(), "address");
    assert_eq!(root.address().city().name(), "city");
    assert_eq!(root.address().city().path(), "address.city");
    assert_eq!(root.address().city().to_string(), "address.city");
    assert_eq!(root.tags().label().path(), "tags.label");
    assert!(root.tags().is_nested());
    assert!(!root.address().is_nested());
}

#[test]
fn index_name_is_the_configured_literal() {
    assert_eq!(MetaCustomer::ROOT.index_name(), "customers");
    assert_eq!(MetaOrder::INDEX_NAME, "orders");
    assert_eq!(MetaOrder::SOURCE_PATH, "shop::Order");
}

#[test]
fn document_root_has_empty_path() {
    let root = MetaCustomer::root();

    assert_eq!(root, MetaCustomer::ROOT);
    assert_eq!(Metamodel::path(&root), "");
    assert!(root.node().is_root());
}

#[test]
fn shared_mirror_reports_path_of_each_context() {
    let order = MetaOrder::ROOT;
    let billing: MetaAddress = order.billing();

    assert_eq!(billing.city().path(), "billing.city");
    assert_eq!(order.shipping().zip().path(), "shipping.zip");
    assert_eq!(order.customer().address().city().path(), "customer.address.city");
}

#[test]
fn bounded_generic_resolves_to_its_bound() {
    let lines = MetaOrder::ROOT.lines();

    assert_eq!(lines.field_type(), FieldType::Nested);
    assert_eq!(lines.sku().path(), "lines.sku");
    assert_eq!(lines.qty().field_type(), FieldType::Integer);
}

#[test]
fn identifier_with_marker_keeps_marker_kind() {
    assert_eq!(MetaOrder::ROOT.number().field_type(), FieldType::Long);
}

#[test]
fn field_paths_cover_the_whole_document() {
    assert_eq!(
        MetaCustomer::FIELD_PATHS,
        [
            "id",
            "address",
            "address.city",
            "address.zip",
            "tags",
            "tags.label",
            "scores",
        ]
    );
    assert!(MetaOrder::FIELD_PATHS.contains(&"customer.tags.label"));
    assert!(MetaOrder::FIELD_PATHS.contains(&"lines.qty"));
}

#[test]
fn nested_ancestors_are_reported() {
    let lines = MetaOrder::ROOT.lines();
    let sku = lines.sku();
    let label = MetaOrder::ROOT.customer().tags().label();

    assert!(!lines.is_nested_path());
    assert!(sku.is_nested_path());
    assert_eq!(sku.nested_paths().collect::<Vec<_>>(), ["lines"]);
    assert_eq!(label.nested_paths().collect::<Vec<_>>(), ["customer.tags"]);
    assert!(!MetaCustomer::ROOT.address().city().is_nested_path());
}
