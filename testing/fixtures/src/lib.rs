//! Mirrors generated from `schema/fixtures.toml` by `build.rs`, and the
//! tests that consume them.

docmeta::start!();

#[cfg(test)]
mod test;
