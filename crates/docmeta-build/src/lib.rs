//! Build-time generator of metamodel mirrors.
//!
//! A run loads a schema from a [`DescriptorSource`], walks every document
//! root into a graph of mirrors, renders that graph into source units and
//! hands them to a [`Sink`]. Fatal problems come back as [`Error`]; field
//! level problems are collected as findings in the [`Report`].

pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod graph;
pub mod ident;
pub mod multi;
pub mod path;
pub mod paths;
pub mod report;
pub mod sink;
pub mod walk;

mod error;
mod macros;

pub use config::GeneratorConfig;
pub use error::Error;
pub use report::Report;
pub use sink::{DirSink, MemorySink, Sink, Unit};

use crate::{config::CONFIG_FILE, emit::Emitter, paths::CratePaths, sink::SinkError};
use docmeta_schema::{
    node::Schema,
    source::{DescriptorSource, FileSource},
    validate::validate_schema,
};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Aggregate file written next to the units; `docmeta::start!` includes it.
pub const INDEX_FILE: &str = "docmeta.rs";

///
/// Generation
///

#[derive(Clone, Debug)]
pub struct Generation {
    pub units: Vec<Unit>,
    pub report: Report,
}

///
/// Generator
///

#[derive(Clone, Debug)]
pub struct Generator {
    config: GeneratorConfig,
    paths: CratePaths,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self, Error> {
        config.validate()?;
        let paths = CratePaths::new().with_core(config.core_crate.as_deref())?;

        Ok(Self { config, paths })
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate, walk and emit an in-memory schema. Nothing is written.
    pub fn generate(&self, schema: &Schema) -> Result<Generation, Error> {
        validate_schema(schema).map_err(docmeta_schema::Error::Validation)?;

        let walk = walk::walk(schema, &self.config);
        let units = Emitter::new(&self.config, &self.paths).emit(&walk)?;
        let report = Report::new(walk, &units);

        Ok(Generation { units, report })
    }

    /// Load, generate and commit to `sink`. A fatal error leaves the sink
    /// uncommitted. The report is staged next to its target and only moved
    /// into place once the sink has committed.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run<S: Sink + ?Sized>(&self, source: &dyn DescriptorSource, sink: &mut S) -> Result<Report, Error> {
        let schema = source.load()?;
        let Generation { units, report } = self.generate(&schema)?;

        for unit in units {
            sink.write(unit)?;
        }
        let staged = match &self.config.report_path {
            Some(path) => Some(StagedReport::write(path, &report.to_markdown())?),
            None => None,
        };
        sink.commit()?;
        if let Some(staged) = staged {
            staged.publish()?;
        }

        tracing::info!(
            units = report.units.len(),
            mirrors = report.mirrors.len(),
            findings = report.findings.len(),
            "generation finished"
        );

        Ok(report)
    }
}

///
/// StagedReport
///
/// Report text written beside its target. Dropped unpublished, the staged
/// file is removed.
///

struct StagedReport {
    tmp: PathBuf,
    target: PathBuf,
    published: bool,
}

impl StagedReport {
    fn write(target: &Path, content: &str) -> Result<Self, SinkError> {
        let mut tmp = target.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, content).map_err(|source| SinkError::Io {
            path: tmp.clone(),
            source,
        })?;

        Ok(Self {
            tmp,
            target: target.to_path_buf(),
            published: false,
        })
    }

    fn publish(mut self) -> Result<(), SinkError> {
        fs::rename(&self.tmp, &self.target).map_err(|source| SinkError::Io {
            path: self.target.clone(),
            source,
        })?;
        self.published = true;

        Ok(())
    }
}

impl Drop for StagedReport {
    fn drop(&mut self) {
        if !self.published {
            let _ = fs::remove_file(&self.tmp);
        }
    }
}

/// Generate from an in-memory schema with `config`.
pub fn generate(schema: &Schema, config: GeneratorConfig) -> Result<Generation, Error> {
    Generator::new(config)?.generate(schema)
}

/// Build-script entry behind `build!`: `schema` is relative to the crate
/// manifest, output lands in `OUT_DIR` with [`INDEX_FILE`] on top.
#[doc(hidden)]
pub fn build_script(schema: &str) -> Result<Report, Error> {
    let manifest_dir = PathBuf::from(
        env::var_os("CARGO_MANIFEST_DIR").ok_or(Error::MissingEnv("CARGO_MANIFEST_DIR"))?,
    );
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or(Error::MissingEnv("OUT_DIR"))?);

    let schema_path = manifest_dir.join(schema);
    let config_path = manifest_dir.join(CONFIG_FILE);
    println!("cargo:rerun-if-changed={}", schema_path.display());
    println!("cargo:rerun-if-changed={}", config_path.display());
    println!("cargo:rerun-if-env-changed={}", paths::CORE_CRATE_ENV);

    let mut config = GeneratorConfig::load_or_default(&config_path)?;
    if let Some(report_path) = config.report_path.take() {
        config.report_path = Some(manifest_dir.join(report_path));
    }

    let source = FileSource::new(schema_path).map_err(docmeta_schema::Error::from)?;
    let mut sink = DirSink::new(out_dir).with_index(INDEX_FILE);
    let report = Generator::new(config)?.run(&source, &mut sink)?;

    for finding in &report.findings {
        println!("cargo:warning={finding}");
    }

    Ok(report)
}

///
/// TESTS
///
