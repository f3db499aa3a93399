use crate::{
    classify::{Catalog, FieldKind, classify},
    config::GeneratorConfig,
    diagnostics::{Diagnostics, Finding},
    graph::{Accessor, Exclusion, Graph, Mirror, MirrorId, MirrorState, ResolvedField},
    ident::{AccessorNames, Resolver, pascal},
    multi, path,
};
use docmeta_core::FieldType;
use docmeta_schema::node::{Schema, TypeDescriptor};
use std::collections::BTreeMap;

// owner key for identifiers that do not belong to a declared type
const REGISTRY_OWNER: &str = "<registry>";

///
/// Walk
///

#[derive(Debug)]
pub struct Walk<'a> {
    pub graph: Graph<'a>,
    pub diagnostics: Diagnostics,

    /// Identifier reserved for the registry unit.
    pub registry_ident: String,
}

/// Resolve every document root of `schema` into mirrors.
#[tracing::instrument(level = "debug", skip_all, fields(types = schema.len()))]
pub fn walk<'a>(schema: &'a Schema, config: &GeneratorConfig) -> Walk<'a> {
    let mut walker = Walker::new(schema, config);
    let registry_ident = walker.resolver.reserve(&config.registry_ident, REGISTRY_OWNER);

    // reserve all roots first so their identifiers follow declaration order
    let roots: Vec<_> = schema
        .documents()
        .map(|ty| walker.reserve(ty, String::new(), None))
        .collect();
    for &root in &roots {
        walker.fill(root);
    }

    Walk {
        graph: Graph {
            mirrors: walker.mirrors,
            roots,
        },
        diagnostics: walker.diagnostics,
        registry_ident,
    }
}

///
/// Walker
///

struct Walker<'a, 'c> {
    catalog: Catalog<'a>,
    config: &'c GeneratorConfig,
    resolver: Resolver,
    memo: BTreeMap<String, MirrorId>,
    mirrors: Vec<Mirror<'a>>,
    diagnostics: Diagnostics,
}

impl<'a, 'c> Walker<'a, 'c> {
    fn new(schema: &'a Schema, config: &'c GeneratorConfig) -> Self {
        Self {
            catalog: Catalog::new(schema),
            config,
            resolver: Resolver::new(config.class_prefix.clone()),
            memo: BTreeMap::new(),
            mirrors: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    // Memo hit returns the existing mirror, finished or not; that is how
    // self-references terminate.
    fn resolve(&mut self, ty: &'a TypeDescriptor, path: &str, owner: MirrorId) -> MirrorId {
        if let Some(&id) = self.memo.get(&ty.def.path()) {
            if self.mirrors[id.0].state != MirrorState::Complete {
                tracing::debug!(mirror = %self.mirrors[id.0].ident, path, "cycle");
            }
            return id;
        }

        let id = self.reserve(ty, path.to_string(), Some(owner));
        self.fill(id);

        id
    }

    fn reserve(&mut self, ty: &'a TypeDescriptor, base_path: String, owner: Option<MirrorId>) -> MirrorId {
        let id = MirrorId(self.mirrors.len());
        let source_path = ty.def.path();
        let ident = self.resolver.assign(&ty.def);

        tracing::debug!(%id, %ident, source = %source_path, "reserve mirror");

        self.memo.insert(source_path.clone(), id);
        self.mirrors.push(Mirror {
            id,
            ident,
            source: ty,
            source_path,
            index_name: ty.index_name().map(ToString::to_string),
            base_path,
            owner: owner.unwrap_or(id),
            fields: Vec::new(),
            excluded: Vec::new(),
            state: MirrorState::Reserved,
        });

        id
    }

    fn fill(&mut self, id: MirrorId) {
        self.mirrors[id.0].state = MirrorState::Building;

        let source = self.mirrors[id.0].source;
        let base = self.mirrors[id.0].base_path.clone();
        let owner = self.mirrors[id.0].owner;
        let mirror_ident = self.mirrors[id.0].ident.clone();
        let source_path = self.mirrors[id.0].source_path.clone();

        let mut fields = Vec::new();
        let mut excluded = Vec::new();
        let mut methods = AccessorNames::new();

        for field in &source.fields {
            let kind = match classify(&self.catalog, field) {
                Ok(FieldKind::Excluded) => {
                    excluded.push(Exclusion {
                        field: field.ident.clone(),
                        reason: "no mapping marker".to_string(),
                    });
                    continue;
                }
                Ok(kind) => kind,
                Err(rejection) => {
                    excluded.push(Exclusion {
                        field: field.ident.clone(),
                        reason: rejection.to_string(),
                    });
                    self.diagnostics.push(Finding {
                        kind: rejection.kind,
                        location: format!("{source_path}.{}", field.ident),
                        message: rejection.message,
                    });
                    continue;
                }
            };

            let path = path::field_path(&base, &field.ident);
            let accessor = match kind {
                FieldKind::Scalar(field_type) => Accessor::Scalar(field_type),
                FieldKind::ObjectRef(target) => Accessor::Mirror {
                    field_type: FieldType::Object,
                    target: self.resolve(target, &path, owner),
                },
                FieldKind::NestedRef(target) => Accessor::Mirror {
                    field_type: FieldType::Nested,
                    target: self.resolve(target, &path, owner),
                },
                FieldKind::MultiField { main, siblings } => {
                    let base_ident = format!(
                        "{mirror_ident}{}{}",
                        pascal(&field.ident),
                        self.config.multi_field_postfix
                    );
                    let helper_owner = format!("{source_path}.{}", field.ident);
                    let ident = self.resolver.reserve(&base_ident, &helper_owner);

                    let (bundle, rejected) = multi::expand(ident, &field.ident, &path, main, siblings);
                    for (suffix, rejection) in rejected {
                        excluded.push(Exclusion {
                            field: format!("{}.{suffix}", field.ident),
                            reason: rejection.to_string(),
                        });
                        self.diagnostics.push(Finding {
                            kind: rejection.kind,
                            location: format!("{source_path}.{}.{suffix}", field.ident),
                            message: rejection.message,
                        });
                    }

                    Accessor::MultiField(bundle)
                }
                FieldKind::Excluded => continue,
            };

            fields.push(ResolvedField {
                name: field.ident.clone(),
                path,
                method: methods.assign(&field.ident),
                accessor,
                comments: field.comments.clone(),
                marker: field.marker.as_ref().map(|marker| marker.main().clone()),
            });
        }

        let mirror = &mut self.mirrors[id.0];
        mirror.fields = fields;
        mirror.excluded = excluded;
        mirror.state = MirrorState::Complete;
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::FindingKind;
    use docmeta_schema::node::{FieldDescriptor, FieldMarker, InnerField, Shape};

    fn walk_default(schema: &Schema) -> Walk<'_> {
        walk(schema, &GeneratorConfig::default())
    }

    fn ident_of<'a>(walk: &'a Walk<'_>, source: &str) -> &'a str {
        &walk.graph.by_source(source).expect("mirror exists").ident
    }

    #[test]
    fn end_to_end_paths() {
        let schema = Schema::new()
            .with(
                TypeDescriptor::new("shop", "Customer")
                    .document("customers")
                    .field(FieldDescriptor::new("id", Shape::Scalar).identifier())
                    .field(FieldDescriptor::object("address", "shop::Address")),
            )
            .with(TypeDescriptor::new("shop", "Address").field(FieldDescriptor::scalar("city", FieldType::Text)));

        let walk = walk_default(&schema);
        let root = walk.graph.mirror(walk.graph.roots()[0]);

        assert_eq!(root.index_name.as_deref(), Some("customers"));
        assert_eq!(root.field("id").map(|f| f.path.as_str()), Some("id"));
        assert_eq!(root.field("id").map(|f| f.accessor.clone()), Some(Accessor::Scalar(FieldType::Keyword)));

        let address = root.field("address").expect("address");
        let target = walk.graph.mirror(address.accessor.target().expect("reference"));
        assert_eq!(target.base_path, "address");
        assert_eq!(target.fields[0].path, "address.city");
        assert_eq!(target.owner, root.id);
        assert!(walk.diagnostics.is_empty());
    }

    #[test]
    fn shared_types_resolve_to_one_mirror() {
        let schema = Schema::new()
            .with(
                TypeDescriptor::new("shop", "Order")
                    .document("orders")
                    .field(FieldDescriptor::object("billing", "shop::Address"))
                    .field(FieldDescriptor::object("shipping", "shop::Address")),
            )
            .with(TypeDescriptor::new("shop", "Address").field(FieldDescriptor::scalar("city", FieldType::Text)));

        let walk = walk_default(&schema);
        let root = walk.graph.mirror(walk.graph.roots()[0]);

        assert_eq!(walk.graph.len(), 2);
        assert_eq!(
            root.fields[0].accessor.target(),
            root.fields[1].accessor.target()
        );
    }

    #[test]
    fn self_reference_terminates_at_the_reserved_mirror() {
        let schema = Schema::new().with(
            TypeDescriptor::new("social", "Person")
                .document("people")
                .field(FieldDescriptor::scalar("name", FieldType::Text))
                .field(FieldDescriptor::object("friend", "social::Person")),
        );

        let walk = walk_default(&schema);
        let root_id = walk.graph.roots()[0];
        let root = walk.graph.mirror(root_id);

        assert_eq!(walk.graph.len(), 1);
        assert_eq!(root.state, MirrorState::Complete);
        assert_eq!(root.field("friend").and_then(|f| f.accessor.target()), Some(root_id));
        assert_eq!(root.field("friend").map(|f| f.path.as_str()), Some("friend"));
    }

    #[test]
    fn roots_are_reserved_before_nested_types() {
        let schema = Schema::new()
            .with(
                TypeDescriptor::new("a", "First")
                    .document("first")
                    .field(FieldDescriptor::object("tag", "b::Tag")),
            )
            .with(TypeDescriptor::new("b", "Tag").field(FieldDescriptor::scalar("x", FieldType::Keyword)))
            .with(TypeDescriptor::new("c", "Tag").document("tags"));

        let walk = walk_default(&schema);

        // the root declared later still owns the bare name
        assert_eq!(ident_of(&walk, "c::Tag"), "MetaTag");
        assert_eq!(ident_of(&walk, "b::Tag"), "MetaBTag");
    }

    #[test]
    fn document_reached_from_another_root_keeps_its_unit() {
        let schema = Schema::new()
            .with(
                TypeDescriptor::new("a", "Order")
                    .document("orders")
                    .field(FieldDescriptor::object("customer", "a::Customer")),
            )
            .with(TypeDescriptor::new("a", "Customer").document("customers"));

        let walk = walk_default(&schema);
        let customer = walk.graph.by_source("a::Customer").expect("customer");

        assert_eq!(customer.owner, customer.id);
        assert_eq!(customer.index_name.as_deref(), Some("customers"));
        assert_eq!(walk.graph.roots().len(), 2);
    }

    #[test]
    fn inconsistent_fields_are_excluded_and_reported() {
        let schema = Schema::new().with(
            TypeDescriptor::new("blog", "Article")
                .document("articles")
                .field(FieldDescriptor::scalar("title", FieldType::Text))
                .field(FieldDescriptor::scalar("labels", FieldType::Nested))
                .field(FieldDescriptor::object("author", "blog::Missing"))
                .field(
                    FieldDescriptor::new("payload", Shape::generic("T"))
                        .marked(FieldMarker::new(FieldType::Object)),
                )
                .field(FieldDescriptor::new("draft", Shape::Scalar)),
        );

        let walk = walk_default(&schema);
        let root = walk.graph.mirror(walk.graph.roots()[0]);

        assert_eq!(root.fields.len(), 1);
        assert_eq!(
            root.excluded.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
            ["labels", "author", "payload", "draft"]
        );
        assert_eq!(walk.diagnostics.count(FindingKind::SchemaInconsistency), 2);
        assert_eq!(walk.diagnostics.count(FindingKind::UnsupportedShape), 1);
        assert_eq!(
            walk.diagnostics.iter().next().map(|f| f.location.as_str()),
            Some("blog::Article.labels")
        );
    }

    #[test]
    fn multi_field_helper_is_named_and_reserved() {
        let schema = Schema::new().with(
            TypeDescriptor::new("blog", "Article").document("articles").field(FieldDescriptor::multi(
                "title",
                FieldMarker::new(FieldType::Text),
                vec![InnerField::new("keyword", FieldType::Keyword)],
            )),
        );

        let walk = walk_default(&schema);
        let root = walk.graph.mirror(walk.graph.roots()[0]);
        let Accessor::MultiField(bundle) = &root.fields[0].accessor else {
            panic!("title must be a multi-field");
        };

        assert_eq!(bundle.ident, "MetaArticleTitleMultiField");
        assert_eq!(bundle.siblings[0].path, "title.keyword");
        assert_eq!(walk.registry_ident, "Metamodels");
    }

    #[test]
    fn reference_sibling_is_reported_and_dropped() {
        let schema = Schema::new().with(
            TypeDescriptor::new("blog", "Article").document("articles").field(FieldDescriptor::multi(
                "title",
                FieldMarker::new(FieldType::Text).analyzer("english"),
                vec![
                    InnerField::new("keyword", FieldType::Keyword),
                    InnerField::new("author", FieldType::Object),
                ],
            )),
        );

        let walk = walk_default(&schema);
        let root = walk.graph.mirror(walk.graph.roots()[0]);
        let title = &root.fields[0];
        let Accessor::MultiField(bundle) = &title.accessor else {
            panic!("title must stay a multi-field");
        };

        assert_eq!(bundle.siblings.len(), 1);
        assert_eq!(bundle.siblings[0].suffix, "keyword");
        assert_eq!(root.excluded[0].field, "title.author");
        assert_eq!(walk.diagnostics.count(FindingKind::SchemaInconsistency), 1);
        assert_eq!(
            walk.diagnostics.iter().next().map(|f| f.location.as_str()),
            Some("blog::Article.title.author")
        );
        assert_eq!(
            title.marker.as_ref().and_then(|m| m.analyzer.as_deref()),
            Some("english")
        );
    }

    #[test]
    fn empty_document_is_valid() {
        let schema = Schema::new().with(TypeDescriptor::new("x", "Empty").document("empty"));
        let walk = walk_default(&schema);

        assert!(walk.graph.mirror(walk.graph.roots()[0]).fields.is_empty());
        assert!(walk.diagnostics.is_empty());
    }
}
