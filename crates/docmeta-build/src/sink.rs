use std::{
    collections::BTreeMap,
    fmt::Write as _,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// SinkError
///

#[derive(Debug, ThisError)]
pub enum SinkError {
    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unit '{0}' written twice")]
    Duplicate(String),
}

///
/// Unit
///
/// One emitted source file. `name` is the file stem.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unit {
    pub name: String,
    pub content: String,
}

impl Unit {
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name)
    }
}

///
/// Sink
///
/// Receives emitted units. Nothing written is final until `commit`.
///

pub trait Sink {
    fn write(&mut self, unit: Unit) -> Result<(), SinkError>;

    fn commit(&mut self) -> Result<(), SinkError>;
}

///
/// MemorySink
///

#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    units: BTreeMap<String, String>,
    committed: bool,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.units.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed
    }
}

impl Sink for MemorySink {
    fn write(&mut self, unit: Unit) -> Result<(), SinkError> {
        if self.units.contains_key(&unit.name) {
            return Err(SinkError::Duplicate(unit.name));
        }
        self.units.insert(unit.name, unit.content);

        Ok(())
    }

    fn commit(&mut self) -> Result<(), SinkError> {
        self.committed = true;

        Ok(())
    }
}

///
/// DirSink
///
/// Writes units into a directory. Each unit is staged as `<name>.rs.tmp`
/// and renamed into place on commit; a sink dropped before commit removes
/// whatever it staged. A commit that fails part way restores the files it
/// had already replaced.
///

#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
    index: Option<String>,
    staged: Vec<(PathBuf, PathBuf)>,
    committed: bool,
}

impl DirSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            index: None,
            staged: Vec::new(),
            committed: false,
        }
    }

    /// Also write `file_name`, which `include!`s every unit in write order.
    #[must_use]
    pub fn with_index(mut self, file_name: impl Into<String>) -> Self {
        self.index = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn stage(&mut self, file_name: &str, content: &str) -> Result<(), SinkError> {
        let target = self.dir.join(file_name);
        if self.staged.iter().any(|(_, t)| *t == target) {
            return Err(SinkError::Duplicate(file_name.to_string()));
        }

        let tmp = self.dir.join(format!("{file_name}.tmp"));
        fs::write(&tmp, content).map_err(|source| SinkError::Io {
            path: tmp.clone(),
            source,
        })?;
        self.staged.push((tmp, target));

        Ok(())
    }

    fn index_content(&self) -> String {
        let mut out = String::from("// @generated by docmeta-build\n");
        for (_, target) in &self.staged {
            if let Some(name) = target.file_name().and_then(|n| n.to_str()) {
                let _ = writeln!(out, "include!(\"{name}\");");
            }
        }

        out
    }
}

impl Sink for DirSink {
    fn write(&mut self, unit: Unit) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dir).map_err(|source| SinkError::Io {
            path: self.dir.clone(),
            source,
        })?;

        self.stage(&unit.file_name(), &unit.content)
    }

    fn commit(&mut self) -> Result<(), SinkError> {
        if let Some(index) = self.index.clone() {
            fs::create_dir_all(&self.dir).map_err(|source| SinkError::Io {
                path: self.dir.clone(),
                source,
            })?;
            let content = self.index_content();
            self.stage(&index, &content)?;
        }

        let mut swapped = Vec::with_capacity(self.staged.len());
        for (tmp, target) in &self.staged {
            match swap_in(tmp, target) {
                Ok(backup) => swapped.push((target, backup)),
                Err(source) => {
                    for (target, backup) in swapped.into_iter().rev() {
                        restore(target, backup);
                    }
                    tracing::warn!(file = %target.display(), "commit failed, restored previous units");

                    return Err(SinkError::Io {
                        path: target.clone(),
                        source,
                    });
                }
            }
        }
        for backup in swapped.into_iter().filter_map(|(_, backup)| backup) {
            let _ = fs::remove_file(backup);
        }
        self.committed = true;
        tracing::debug!(dir = %self.dir.display(), files = self.staged.len(), "committed units");

        Ok(())
    }
}

// Move `tmp` over `target`, keeping any previous file as `<target>.bak`.
fn swap_in(tmp: &Path, target: &Path) -> io::Result<Option<PathBuf>> {
    let backup = if target.exists() {
        let mut bak = target.as_os_str().to_owned();
        bak.push(".bak");
        let bak = PathBuf::from(bak);
        fs::rename(target, &bak)?;
        Some(bak)
    } else {
        None
    };

    if let Err(err) = fs::rename(tmp, target) {
        if let Some(bak) = &backup {
            let _ = fs::rename(bak, target);
        }
        return Err(err);
    }

    Ok(backup)
}

fn restore(target: &Path, backup: Option<PathBuf>) {
    let _ = fs::remove_file(target);
    if let Some(bak) = backup {
        let _ = fs::rename(bak, target);
    }
}

impl Drop for DirSink {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        for (tmp, _) in &self.staged {
            let _ = fs::remove_file(tmp);
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, content: &str) -> Unit {
        Unit {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn memory_sink_rejects_duplicates() {
        let mut sink = MemorySink::new();
        sink.write(unit("a", "x")).expect("first write");

        assert!(matches!(sink.write(unit("a", "y")), Err(SinkError::Duplicate(_))));
        assert_eq!(sink.get("a"), Some("x"));
    }

    #[test]
    fn dir_sink_renames_on_commit_and_writes_index() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut sink = DirSink::new(dir.path()).with_index("all.rs");

        sink.write(unit("meta_a", "struct A;")).expect("write a");
        sink.write(unit("meta_b", "struct B;")).expect("write b");
        assert!(dir.path().join("meta_a.rs.tmp").exists());
        assert!(!dir.path().join("meta_a.rs").exists());

        sink.commit().expect("commit");

        assert_eq!(
            fs::read_to_string(dir.path().join("meta_a.rs")).expect("unit"),
            "struct A;"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("all.rs")).expect("index"),
            "// @generated by docmeta-build\ninclude!(\"meta_a.rs\");\ninclude!(\"meta_b.rs\");\n"
        );
        assert!(!dir.path().join("meta_a.rs.tmp").exists());
    }

    #[test]
    fn failed_commit_restores_replaced_units() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("meta_a.rs"), "struct Old;").expect("previous unit");

        let mut sink = DirSink::new(dir.path()).with_index("all.rs");
        sink.write(unit("meta_a", "struct A;")).expect("write a");
        sink.write(unit("meta_b", "struct B;")).expect("write b");
        fs::remove_file(dir.path().join("meta_b.rs.tmp")).expect("lose staged b");

        assert!(matches!(sink.commit(), Err(SinkError::Io { .. })));
        drop(sink);

        assert_eq!(
            fs::read_to_string(dir.path().join("meta_a.rs")).expect("unit"),
            "struct Old;"
        );
        let mut left: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, ["meta_a.rs"]);
    }

    #[test]
    fn dropping_uncommitted_sink_removes_staged_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        {
            let mut sink = DirSink::new(dir.path());
            sink.write(unit("meta_a", "struct A;")).expect("write");
        }

        assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 0);
    }
}
