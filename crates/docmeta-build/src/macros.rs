/// Build-script helper that generates metamodel mirrors for a schema file.
///
/// The path is relative to the crate manifest. Output goes to `OUT_DIR`,
/// ready for `docmeta::start!()`. Must be used inside a `main` that returns
/// a `Result` whose error accepts `docmeta::build::Error`.
#[macro_export]
macro_rules! build {
    ($schema:expr) => {
        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");

        //
        // MIRRORS
        //

        $crate::build_script($schema)?;
    };
}
