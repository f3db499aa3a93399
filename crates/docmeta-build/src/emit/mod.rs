mod mirror;
mod registry;

use crate::{
    Error, config::GeneratorConfig, ident::is_raw_keyword, paths::CratePaths, sink::Unit,
    walk::Walk,
};
use convert_case::{Case, Casing};
use docmeta_core::FieldType;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use std::collections::BTreeSet;

const HEADER: &str = "// @generated by docmeta-build. Do not edit.\n";

/// File stem of [`crate::INDEX_FILE`]; no unit may take it.
pub(crate) const INDEX_STEM: &str = "docmeta";

///
/// Emitter
///
/// Renders a finished walk into one unit per document root plus the
/// registry unit. Output depends only on the walk, so equal input gives
/// byte-identical text.
///

pub struct Emitter<'c> {
    pub(crate) config: &'c GeneratorConfig,
    pub(crate) paths: &'c CratePaths,
}

impl<'c> Emitter<'c> {
    #[must_use]
    pub const fn new(config: &'c GeneratorConfig, paths: &'c CratePaths) -> Self {
        Self { config, paths }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(roots = walk.graph.roots().len()))]
    pub fn emit(&self, walk: &Walk<'_>) -> Result<Vec<Unit>, Error> {
        let mut names = BTreeSet::from([INDEX_STEM.to_string()]);
        let mut units = Vec::new();

        for &root in walk.graph.roots() {
            let root_ident = &walk.graph.mirror(root).ident;
            let mut tokens = quote!();
            for mirror in walk.graph.owned_by(root) {
                tokens.extend(mirror::generate(self, &walk.graph, mirror)?);
            }

            let unit = unit(&mut names, root_ident, &tokens);
            tracing::debug!(unit = %unit.name, "emit unit");
            units.push(unit);
        }

        let tokens = registry::generate(self, walk)?;
        units.push(unit(&mut names, &walk.registry_ident, &tokens));

        Ok(units)
    }

    pub(crate) fn core(&self) -> &TokenStream {
        &self.paths.core
    }
}

// file stems are snake_case; a clash after case folding gets a suffix
fn unit(names: &mut BTreeSet<String>, ident: &str, tokens: &TokenStream) -> Unit {
    let base = ident.to_case(Case::Snake);
    let mut name = base.clone();
    let mut n = 2;
    while !names.insert(name.clone()) {
        name = format!("{base}_{n}");
        n += 1;
    }

    Unit {
        name,
        content: format!("{HEADER}{tokens}\n"),
    }
}

/// Parse an emitted identifier, going raw for keywords.
pub(crate) fn ident(unit: &str, name: &str) -> Result<Ident, Error> {
    if is_raw_keyword(name) {
        return Ok(Ident::new_raw(name, Span::call_site()));
    }

    syn::parse_str::<Ident>(name)
        .map_err(|err| Error::emit(unit, format!("invalid identifier '{name}': {err}")))
}

pub(crate) fn field_type(core: &TokenStream, field_type: FieldType) -> TokenStream {
    let variant = Ident::new(&field_type.to_string(), Span::call_site());

    quote!(#core::FieldType::#variant)
}

// Doc lines as attributes; `TokenStream::to_string` drops plain comments.
pub(crate) fn docs<I, S>(lines: I) -> TokenStream
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter().map(|line| {
        let line = format!(" {}", line.as_ref());
        quote!(#[doc = #line])
    });

    quote!(#(#lines)*)
}

///
/// TESTS
///
