///
/// DocumentEntry
///
/// One row of the generated registry of document mirrors.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DocumentEntry {
    pub ident: &'static str,
    pub source_path: &'static str,
    pub index_name: &'static str,
}

impl DocumentEntry {
    #[must_use]
    pub const fn new(ident: &'static str, source_path: &'static str, index_name: &'static str) -> Self {
        Self {
            ident,
            source_path,
            index_name,
        }
    }
}

/// All entries mapped to `index_name`, in registry order. Several documents
/// may share an index.
pub fn by_index_name<'a>(
    entries: &'a [DocumentEntry],
    index_name: &'a str,
) -> impl Iterator<Item = &'a DocumentEntry> + 'a {
    entries.iter().filter(move |e| e.index_name == index_name)
}

/// The entry generated for `source_path`, if any.
#[must_use]
pub fn by_source_path<'a>(entries: &'a [DocumentEntry], source_path: &str) -> Option<&'a DocumentEntry> {
    entries.iter().find(|e| e.source_path == source_path)
}

///
/// TESTS
///
