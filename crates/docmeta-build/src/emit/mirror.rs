use crate::{
    Error,
    emit::{Emitter, docs, field_type, ident},
    graph::{Accessor, Graph, Mirror, MultiFieldBundle, ResolvedField},
    path::field_paths,
};
use docmeta_core::FieldType;
use docmeta_schema::node::FieldMarker;
use proc_macro2::{Ident, TokenStream};
use quote::quote;

///
/// Child
///
/// One entry of a container's `fields` and `field_by`. `inner` is set when
/// the child is itself a container: its type and the accessor call.
///

struct Child<'f> {
    name: &'f str,
    node: TokenStream,
    inner: Option<(TokenStream, TokenStream)>,
}

/// Tokens for one mirror and the multi-field helpers it declares.
pub(super) fn generate(emitter: &Emitter<'_>, graph: &Graph<'_>, mirror: &Mirror<'_>) -> Result<TokenStream, Error> {
    let core = emitter.core();
    let unit = mirror.ident.as_str();
    let mirror_ident = ident(unit, &mirror.ident)?;

    let mut lines = Vec::new();
    if let Some(comments) = &mirror.source.def.comments {
        lines.extend(comments.lines().map(str::to_string));
        lines.push(String::new());
    }
    lines.push(format!("Metamodel mirror of `{}`.", mirror.source_path));
    if !mirror.excluded.is_empty() {
        lines.push(String::new());
        lines.push("Excluded fields:".to_string());
        lines.extend(
            mirror
                .excluded
                .iter()
                .map(|e| format!("- `{}`: {}", e.field, e.reason)),
        );
    }

    let mut tokens = accessor_type(core, &mirror_ident, &docs(lines));

    let mut methods = Vec::with_capacity(mirror.fields.len());
    let mut children = Vec::with_capacity(mirror.fields.len());
    for field in &mirror.fields {
        let (method, child) = field_method(emitter, graph, unit, field)?;
        methods.push(method);
        children.push(child);
    }
    tokens.extend(quote! {
        impl #mirror_ident {
            #(#methods)*
        }
    });
    tokens.extend(container(core, &mirror_ident, &children));

    if let Some(index_name) = &mirror.index_name {
        tokens.extend(document(emitter, graph, mirror, &mirror_ident, index_name));
    }

    for field in &mirror.fields {
        if let Accessor::MultiField(bundle) = &field.accessor {
            tokens.extend(multi_field(emitter, unit, field, bundle)?);
        }
    }

    Ok(tokens)
}

// struct, Metamodel and Display shared by mirrors and multi-field helpers
fn accessor_type(core: &TokenStream, ident: &Ident, docs: &TokenStream) -> TokenStream {
    quote! {
        #docs
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct #ident {
            node: #core::Node,
        }

        impl #core::Metamodel for #ident {
            fn at(node: #core::Node) -> Self {
                Self { node }
            }

            fn node(&self) -> &#core::Node {
                &self.node
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.node, f)
            }
        }
    }
}

// Inherent accessor for one field, plus its container entry.
fn field_method<'f>(
    emitter: &Emitter<'_>,
    graph: &Graph<'_>,
    unit: &str,
    field: &'f ResolvedField,
) -> Result<(TokenStream, Child<'f>), Error> {
    let core = emitter.core();
    let method = ident(unit, &field.method)?;
    let name = field.name.as_str();
    let kind = field_type(core, field.accessor.field_type());
    let node = quote!(self.node.child(#name, #kind));

    let (ret, body, is_container) = match &field.accessor {
        Accessor::Scalar(scalar) => {
            let (ret, body) = leaf(core, *scalar, formats(field.marker.as_ref()), &node);
            (ret, body, false)
        }
        Accessor::Mirror { target, .. } => {
            let target = ident(unit, &graph.mirror(*target).ident)?;
            (quote!(#target), quote!(<#target as #core::Metamodel>::at(#node)), true)
        }
        Accessor::MultiField(bundle) => {
            let helper = ident(unit, &bundle.ident)?;
            (quote!(#helper), quote!(<#helper as #core::Metamodel>::at(#node)), true)
        }
    };

    let mut lines: Vec<String> = field
        .comments
        .iter()
        .flat_map(|c| c.lines())
        .map(str::to_string)
        .collect();
    let notes = marker_notes(field.marker.as_ref());
    if !lines.is_empty() && !notes.is_empty() {
        lines.push(String::new());
    }
    lines.extend(notes);
    let docs = docs(lines);

    let method_tokens = quote! {
        #docs
        #[must_use]
        pub fn #method(&self) -> #ret {
            #body
        }
    };
    let child = Child {
        name,
        node,
        inner: is_container.then(|| (ret, quote!(self.#method()))),
    };

    Ok((method_tokens, child))
}

// Return type and constructor of a leaf accessor positioned at `node`.
fn leaf(core: &TokenStream, kind: FieldType, formats: &[String], node: &TokenStream) -> (TokenStream, TokenStream) {
    if kind.is_temporal() {
        (
            quote!(#core::DateField),
            quote!(#core::DateField::new(#node, &[#(#formats),*])),
        )
    } else {
        (
            quote!(#core::Field),
            quote!(<#core::Field as #core::Metamodel>::at(#node)),
        )
    }
}

fn formats(marker: Option<&FieldMarker>) -> &[String] {
    match marker {
        Some(marker) => &marker.format,
        None => &[],
    }
}

fn marker_notes(marker: Option<&FieldMarker>) -> Vec<String> {
    let Some(marker) = marker else {
        return Vec::new();
    };

    let mut notes = Vec::new();
    if let Some(analyzer) = &marker.analyzer {
        notes.push(format!("Analyzer: `{analyzer}`."));
    }
    if let Some(analyzer) = &marker.search_analyzer {
        notes.push(format!("Search analyzer: `{analyzer}`."));
    }
    if !marker.index {
        notes.push("Not indexed.".to_string());
    }

    notes
}

fn container(core: &TokenStream, ident: &Ident, children: &[Child<'_>]) -> TokenStream {
    let nodes = children.iter().map(|child| &child.node);
    let arms: Vec<_> = children
        .iter()
        .map(|child| {
            let name = child.name;
            let node = &child.node;
            match &child.inner {
                Some((ty, call)) => quote! {
                    (#name, None) => Some(#node),
                    (#name, Some(rest)) => <#ty as #core::Container>::field_by(&#call, rest),
                },
                None => quote! {
                    (#name, None) => Some(#node),
                },
            }
        })
        .collect();

    let lookup = if arms.is_empty() {
        quote! {
            let _ = path;
            None
        }
    } else {
        quote! {
            match #core::path::split_first(path) {
                #(#arms)*
                _ => None,
            }
        }
    };

    quote! {
        impl #core::Container for #ident {
            fn fields(&self) -> Vec<#core::Node> {
                vec![#(#nodes),*]
            }

            fn field_by(&self, path: &str) -> Option<#core::Node> {
                #lookup
            }
        }
    }
}

fn document(
    emitter: &Emitter<'_>,
    graph: &Graph<'_>,
    mirror: &Mirror<'_>,
    mirror_ident: &Ident,
    index_name: &str,
) -> TokenStream {
    let core = emitter.core();
    let source_path = mirror.source_path.as_str();

    let paths_const = if emitter.config.field_paths {
        let paths = field_paths(graph, mirror.id);
        quote! {
            /// Every query path reachable from this document.
            pub const FIELD_PATHS: &'static [&'static str] = &[#(#paths),*];
        }
    } else {
        quote!()
    };

    quote! {
        impl #mirror_ident {
            pub const ROOT: Self = Self {
                node: #core::Node::root(),
            };

            #paths_const
        }

        impl #core::Document for #mirror_ident {
            const INDEX_NAME: &'static str = #index_name;
            const SOURCE_PATH: &'static str = #source_path;
        }
    }
}

fn multi_field(
    emitter: &Emitter<'_>,
    unit: &str,
    field: &ResolvedField,
    bundle: &MultiFieldBundle,
) -> Result<TokenStream, Error> {
    let core = emitter.core();
    let helper = ident(unit, &bundle.ident)?;
    let docs = docs([format!("Multi-field `{}` and its siblings.", field.name)]);

    let mut siblings = Vec::with_capacity(bundle.siblings.len());
    let mut children = Vec::with_capacity(bundle.siblings.len());
    for sibling in &bundle.siblings {
        let method = ident(unit, &sibling.method)?;
        let suffix = sibling.suffix.as_str();
        let kind = field_type(core, sibling.field_type);
        let node = quote!(self.node.sibling(#suffix, #kind));
        let (ret, body) = leaf(core, sibling.field_type, &sibling.formats, &node);

        siblings.push(quote! {
            #[must_use]
            pub fn #method(&self) -> #ret {
                #body
            }
        });
        children.push(Child {
            name: suffix,
            node,
            inner: None,
        });
    }

    let (main_ty, main_body) = leaf(
        core,
        bundle.main,
        formats(field.marker.as_ref()),
        &quote!(self.node.clone()),
    );

    let mut tokens = accessor_type(core, &helper, &docs);
    tokens.extend(quote! {
        impl #helper {
            #(#siblings)*
        }

        impl #core::MultiField for #helper {
            type Main = #main_ty;

            fn main_field(&self) -> Self::Main {
                #main_body
            }
        }
    });
    tokens.extend(container(core, &helper, &children));

    Ok(tokens)
}
