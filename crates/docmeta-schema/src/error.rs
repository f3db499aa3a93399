use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// ErrorTree
///
/// Validation messages grouped by route (type path, then field ident).
/// Children are kept in a `BTreeMap` so rendering order never depends on
/// insertion order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    pub messages: Vec<String>,
    pub children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<M: ToString>(&mut self, message: M) {
        self.messages.push(message.to_string());
    }

    /// Merge `tree` under `route`, skipping empty trees.
    pub fn add_child<R: Into<String>>(&mut self, route: R, tree: Self) {
        if tree.is_empty() {
            return;
        }

        self.children.entry(route.into()).or_default().merge(tree);
    }

    pub fn add_result<R: Into<String>>(&mut self, route: R, result: Result<(), Self>) {
        if let Err(tree) = result {
            self.add_child(route, tree);
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
        for (route, child) in other.children {
            self.add_child(route, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages, children included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Flatten into `(route, message)` pairs, routes joined with `/`.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, route: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((route.to_string(), message.clone()));
        }
        for (key, child) in &self.children {
            let child_route = if route.is_empty() {
                key.clone()
            } else {
                format!("{route}/{key}")
            };
            child.flatten_into(&child_route, out);
        }
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (route, message) in self.flatten() {
            if route.is_empty() {
                writeln!(f, "{message}")?;
            } else {
                writeln!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

/// Push a formatted message onto an `ErrorTree`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}

///
/// TESTS
///
