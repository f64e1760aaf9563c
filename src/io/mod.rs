//! Persistence of sample buffers.
//!
//! Nothing in the processing modules touches the filesystem. Callers that
//! want to keep a buffer hand it to a [`SampleStore`] explicitly.

mod memory;
#[cfg(feature = "wav")]
mod wav;

use std::path::Path;

use crate::Result;

pub use memory::MemoryStore;
#[cfg(feature = "wav")]
pub use wav::WavStore;

/// A destination and source for mono sample buffers, addressed by path.
pub trait SampleStore {
    /// Stores `samples` under `path`, replacing anything stored there.
    fn save(&mut self, path: &Path, samples: &[f64]) -> Result<()>;

    /// Reads back the samples stored under `path`.
    fn load(&self, path: &Path) -> Result<Vec<f64>>;
}
