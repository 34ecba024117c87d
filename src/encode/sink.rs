use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{IconError, IconResult};

/// Destination for encoded icons.
///
/// The rasterizer and encoder never touch storage; a sink decides where bytes for a named icon
/// end up.
pub trait IconSink {
    /// Persist `bytes` under `name` (for example `"wheat.png"`).
    fn write_icon(&mut self, name: &str, bytes: &[u8]) -> IconResult<()>;
}

/// Writes each icon to `<root>/<name>`, creating `root` on first use.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl IconSink for DirSink {
    #[tracing::instrument(skip(self, bytes), fields(root = %self.root.display(), bytes = bytes.len()))]
    fn write_icon(&mut self, name: &str, bytes: &[u8]) -> IconResult<()> {
        let file_name = Path::new(name);
        if name.is_empty() || file_name.file_name().map(Path::new) != Some(file_name) {
            return Err(IconError::validation(format!(
                "icon name must be a plain file name, got '{name}'"
            )));
        }

        std::fs::create_dir_all(&self.root).with_context(|| {
            format!(
                "failed to create output directory '{}'",
                self.root.display()
            )
        })?;
        let path = self.root.join(file_name);
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write icon '{}'", path.display()))?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote icon");
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    icons: BTreeMap<String, Vec<u8>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.icons.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl IconSink for InMemorySink {
    fn write_icon(&mut self, name: &str, bytes: &[u8]) -> IconResult<()> {
        self.icons.insert(name.to_owned(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
