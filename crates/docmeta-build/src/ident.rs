use convert_case::{Case, Casing};
use docmeta_schema::node::Def;
use std::collections::{BTreeMap, BTreeSet};

// Rust keywords usable as raw identifiers.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super"];

///
/// Resolver
///
/// Assigns every emitted type a run-unique identifier. A type keeps its
/// bare name when free; on collision the name grows by enclosing scope
/// segments, innermost first, then by a numeric suffix in first-seen order.
///

#[derive(Debug, Default)]
pub struct Resolver {
    prefix: String,
    taken: BTreeMap<String, String>,
}

impl Resolver {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            taken: BTreeMap::new(),
        }
    }

    /// Identifier for a declared type. Asking again for the same type
    /// returns the same identifier.
    pub fn assign(&mut self, def: &Def) -> String {
        let owner = def.path();
        let mut name = def.ident.clone();

        for scope in def.scope() {
            if self.is_free(&self.prefixed(&name), &owner) {
                break;
            }
            name = format!("{}{name}", scope.to_case(Case::Pascal));
        }

        let ident = self.prefixed(&name);
        self.claim(ident, owner)
    }

    /// Identifier for a generated helper type; already carries any prefix.
    pub fn reserve(&mut self, base: &str, owner: &str) -> String {
        self.claim(base.to_string(), owner.to_string())
    }

    #[must_use]
    pub fn is_taken(&self, ident: &str) -> bool {
        self.taken.contains_key(ident)
    }

    fn prefixed(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }

    fn is_free(&self, ident: &str, owner: &str) -> bool {
        self.taken.get(ident).is_none_or(|o| o == owner)
    }

    fn claim(&mut self, base: String, owner: String) -> String {
        let mut ident = base.clone();
        let mut n = 2;
        while !self.is_free(&ident, &owner) {
            ident = format!("{base}{n}");
            n += 1;
        }
        self.taken.insert(ident.clone(), owner);

        ident
    }
}

///
/// AccessorNames
///
/// Method names within one emitted type. Snake-cases the declared name and
/// suffixes repeats, so two fields never share a method.
///

#[derive(Debug, Default)]
pub struct AccessorNames {
    used: BTreeSet<String>,
}

impl AccessorNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, field: &str) -> String {
        let base = method_name(field);
        let mut name = base.clone();
        let mut n = 2;
        while !self.used.insert(name.clone()) {
            name = format!("{base}_{n}");
            n += 1;
        }

        name
    }
}

/// snake_case method name for a declared field name.
#[must_use]
pub fn method_name(field: &str) -> String {
    let name = field.to_case(Case::Snake);

    if name.is_empty() {
        "field".to_string()
    } else if RESERVED.contains(&name.as_str()) {
        format!("{name}_")
    } else {
        name
    }
}

/// Whether `name` must be emitted as a raw identifier.
#[must_use]
pub fn is_raw_keyword(name: &str) -> bool {
    RAW_KEYWORDS.contains(&name)
}

/// PascalCase segment used inside generated helper type names.
#[must_use]
pub fn pascal(name: &str) -> String {
    name.to_case(Case::Pascal)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bare_name_wins_when_free() {
        let mut resolver = Resolver::new("Meta");

        assert_eq!(resolver.assign(&Def::new("blog", "Article")), "MetaArticle");
        assert_eq!(resolver.assign(&Def::new("blog", "Article")), "MetaArticle");
    }

    #[test]
    fn collisions_grow_by_innermost_scope() {
        let mut resolver = Resolver::new("Meta");

        assert_eq!(resolver.assign(&Def::new("dataset", "NameCollision")), "MetaNameCollision");
        assert_eq!(
            resolver.assign(&Def::new("dataset::Outer", "NameCollision")),
            "MetaOuterNameCollision"
        );
        assert_eq!(
            resolver.assign(&Def::new("other::Outer", "NameCollision")),
            "MetaOtherOuterNameCollision"
        );
    }

    #[test]
    fn exhausted_scope_falls_back_to_numbers() {
        let mut resolver = Resolver::new("");
        resolver.reserve("Tag", "<fixed>");

        assert_eq!(resolver.assign(&Def::new("", "Tag")), "Tag2");
        assert_eq!(resolver.reserve("Tag", "<helper>"), "Tag3");
        assert!(resolver.is_taken("Tag3"));
    }

    #[test]
    fn method_names_are_snake_and_unique() {
        let mut names = AccessorNames::new();

        assert_eq!(names.assign("firstName"), "first_name");
        assert_eq!(names.assign("first_name"), "first_name_2");
        assert_eq!(names.assign("type"), "type");
        assert_eq!(names.assign("self"), "self_");
        assert!(is_raw_keyword("type"));
        assert!(!is_raw_keyword("self_"));
    }

    fn def() -> impl Strategy<Value = Def> {
        (
            proptest::collection::vec(prop::sample::select(vec!["a", "b", "Outer", "Inner"]), 0..3),
            prop::sample::select(vec!["Tag", "Name", "Collision"]),
        )
            .prop_map(|(scope, ident)| Def::new(scope.join("::"), ident))
    }

    proptest! {
        #[test]
        fn assignment_is_injective(defs in proptest::collection::vec(def(), 1..24)) {
            let mut resolver = Resolver::new("Meta");
            let mut seen: BTreeMap<String, String> = BTreeMap::new();

            for def in &defs {
                let ident = resolver.assign(def);
                let owner = seen.entry(ident).or_insert_with(|| def.path());
                prop_assert_eq!(owner, &def.path());
            }
        }
    }
}
