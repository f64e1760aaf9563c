//! Sampled signals paired with a time axis in seconds.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples together with the time (in seconds) at which each occurs.
///
/// Produced by the reverb synthesizer, where signals are positioned on a
/// continuous time axis rather than on integer indices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedSeries"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    time: Vec<f64>,
    samples: Vec<f64>,
}

/// Wire form of [`TimeSeries`], checked by [`TimeSeries::new`] on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedSeries {
    time: Vec<f64>,
    samples: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedSeries> for TimeSeries {
    type Error = Error;

    fn try_from(series: UncheckedSeries) -> Result<Self> {
        TimeSeries::new(series.time, series.samples)
    }
}

impl TimeSeries {
    /// Pairs a time axis with samples of the same length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the lengths differ.
    pub fn new(time: Vec<f64>, samples: Vec<f64>) -> Result<Self> {
        if time.len() != samples.len() {
            return Err(Error::LengthMismatch {
                samples: samples.len(),
                range: time.len(),
            });
        }
        Ok(Self { time, samples })
    }

    /// Spreads `samples` evenly over `[0, duration]`, both ends included.
    pub fn spanning(samples: Vec<f64>, duration: f64) -> Self {
        let time = linspace(0.0, duration, samples.len());
        Self { time, samples }
    }

    /// Time of each sample in seconds.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// The sample values.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time of the last sample, zero when empty.
    pub fn duration(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        super::peak(&self.samples)
    }

    /// Splits the series into its time axis and samples.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.samples)
    }
}

/// `count` evenly spaced values from `start` to `stop`, both included.
///
/// A single value yields `[start]`; zero yields an empty vector.
///
/// # Examples
///
/// ```
/// use echoic::signals::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the endpoint against accumulated rounding
            values[count - 1] = stop;
            values
        }
    }
}
