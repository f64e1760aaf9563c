//! In-memory sample store.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::SampleStore;
use crate::Result;

/// Keeps saved buffers in a map, keyed by path.
///
/// # Examples
///
/// ```
/// use echoic::io::{MemoryStore, SampleStore};
/// use std::path::Path;
///
/// let mut store = MemoryStore::new();
/// store.save(Path::new("arrays/step"), &[0.0, 1.0, 1.0])?;
/// assert_eq!(store.load(Path::new("arrays/step"))?, vec![0.0, 1.0, 1.0]);
/// # Ok::<(), echoic::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    buffers: HashMap<PathBuf, Vec<f64>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored buffers.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Returns true if a buffer is stored under `path`.
    pub fn contains(&self, path: &Path) -> bool {
        self.buffers.contains_key(path)
    }
}

impl SampleStore for MemoryStore {
    fn save(&mut self, path: &Path, samples: &[f64]) -> Result<()> {
        self.buffers.insert(path.to_path_buf(), samples.to_vec());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Vec<f64>> {
        self.buffers.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no buffer stored at {}", path.display()),
            )
            .into()
        })
    }
}
