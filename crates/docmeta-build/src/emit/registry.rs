use crate::{
    Error,
    emit::{Emitter, ident},
    walk::Walk,
};
use proc_macro2::TokenStream;
use quote::quote;

/// The registry type listing every document mirror in root order.
pub(super) fn generate(emitter: &Emitter<'_>, walk: &Walk<'_>) -> Result<TokenStream, Error> {
    let core = emitter.core();
    let registry = ident(&walk.registry_ident, &walk.registry_ident)?;

    let entries = walk.graph.roots().iter().map(|&id| {
        let mirror = walk.graph.mirror(id);
        let ident = mirror.ident.as_str();
        let source_path = mirror.source_path.as_str();
        let index_name = mirror.index_name.as_deref().unwrap_or_default();

        quote!(#core::DocumentEntry::new(#ident, #source_path, #index_name))
    });

    Ok(quote! {
        /// Every generated document mirror.
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #registry;

        impl #registry {
            pub const ENTRIES: &'static [#core::DocumentEntry] = &[#(#entries),*];

            #[must_use]
            pub const fn entries() -> &'static [#core::DocumentEntry] {
                Self::ENTRIES
            }

            pub fn by_index_name(index_name: &str) -> impl Iterator<Item = &#core::DocumentEntry> + '_ {
                #core::registry::by_index_name(Self::ENTRIES, index_name)
            }

            #[must_use]
            pub fn by_source_path(source_path: &str) -> Option<&'static #core::DocumentEntry> {
                #core::registry::by_source_path(Self::ENTRIES, source_path)
            }
        }
    })
}
