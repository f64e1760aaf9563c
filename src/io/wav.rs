//! WAV file sample store, backed by `hound`.

use std::fs;
use std::path::Path;

use super::SampleStore;
use crate::Result;

/// Saves buffers as mono 32-bit float WAV files.
///
/// Samples are narrowed to `f32` on save. Loading accepts float or integer
/// files of any channel count; only the first channel is read and integer
/// samples are scaled into `[-1, 1)`.
///
/// # Examples
///
/// ```ignore
/// use echoic::io::{SampleStore, WavStore};
/// use std::path::Path;
///
/// let mut store = WavStore::new(44_100);
/// store.save(Path::new("renders/reverb.wav"), &samples)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavStore {
    sample_rate: u32,
}

impl WavStore {
    /// Creates a store writing files at `sample_rate` Hz.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Sample rate written into saved files.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        }
    }
}

impl SampleStore for WavStore {
    fn save(&mut self, path: &Path, samples: &[f64]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = hound::WavWriter::create(path, self.spec())?;
        for &sample in samples {
            writer.write_sample(sample as f32)?;
        }
        writer.finalize()?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Vec<f64>> {
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        let samples: Vec<f64> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .map(|s| s.map(f64::from))
                .collect::<std::result::Result<_, _>>()?,
            hound::SampleFormat::Int => {
                let max_value = (1_i64 << (spec.bits_per_sample - 1)) as f64;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f64 / max_value))
                    .collect::<std::result::Result<_, _>>()?
            }
        };

        if spec.channels > 1 {
            return Ok(samples
                .into_iter()
                .step_by(spec.channels as usize)
                .collect());
        }
        Ok(samples)
    }
}
