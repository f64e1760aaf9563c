//! Discrete-time signals defined over an explicit index range.

use crate::signals::IndexRange;
use crate::{Error, Result};

/// A finite discrete-time signal.
///
/// Holds one sample per index of its [`IndexRange`]; the sample at position
/// `k` belongs to absolute index `start + k`. Outside its range a signal is
/// implicitly zero, which is what [`Signal::get`] reports.
///
/// Every operation in this crate returns a new `Signal` and leaves its inputs
/// untouched.
///
/// # Examples
///
/// ```
/// use echoic::{IndexRange, Signal};
///
/// let signal = Signal::new(IndexRange::new(-1, 1)?, vec![0.5, 1.0, 0.5])?;
/// assert_eq!(signal.get(0), 1.0);
/// assert_eq!(signal.get(7), 0.0);
/// # Ok::<(), echoic::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    range: IndexRange,
    samples: Vec<f64>,
}

impl Signal {
    /// Pairs `samples` with `range`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] unless there is exactly one sample
    /// per index.
    pub fn new(range: IndexRange, samples: Vec<f64>) -> Result<Self> {
        if samples.len() != range.len() {
            return Err(Error::LengthMismatch {
                samples: samples.len(),
                range: range.len(),
            });
        }
        Ok(Self { range, samples })
    }

    /// An all-zero signal over `[start, end]`.
    pub fn zeros(start: i64, end: i64) -> Result<Self> {
        let range = IndexRange::new(start, end)?;
        Ok(Self::from_parts(range, vec![0.0; range.len()]))
    }

    /// Evaluates `f` at every index of `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use echoic::Signal;
    ///
    /// let ramp = Signal::from_fn(0, 3, |n| n as f64)?;
    /// assert_eq!(ramp.samples(), &[0.0, 1.0, 2.0, 3.0]);
    /// # Ok::<(), echoic::Error>(())
    /// ```
    pub fn from_fn(start: i64, end: i64, f: impl FnMut(i64) -> f64) -> Result<Self> {
        let range = IndexRange::new(start, end)?;
        Ok(Self::from_parts(range, range.iter().map(f).collect()))
    }

    /// Internal constructor for callers that already guarantee the lengths agree.
    pub(crate) fn from_parts(range: IndexRange, samples: Vec<f64>) -> Self {
        debug_assert_eq!(samples.len(), range.len(), "signal/range length mismatch");
        Self { range, samples }
    }

    /// The index range the samples cover.
    pub fn range(&self) -> IndexRange {
        self.range
    }

    /// First index of the signal.
    pub fn start(&self) -> i64 {
        self.range.start()
    }

    /// Last index of the signal, inclusive.
    pub fn end(&self) -> i64 {
        self.range.end()
    }

    /// Number of samples, equal to the length of the range.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a signal holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples in index order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// The absolute indices covered by the signal, in order.
    pub fn indices(&self) -> Vec<i64> {
        self.range.iter().collect()
    }

    /// Sample at an absolute index, or zero outside the range.
    pub fn get(&self, index: i64) -> f64 {
        self.range
            .offset_of(index)
            .map_or(0.0, |offset| self.samples[offset])
    }

    /// Iterates over `(index, sample)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.range.iter().zip(self.samples.iter().copied())
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        peak(&self.samples)
    }

    /// Consumes the signal, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Consumes the signal, returning its range and samples.
    pub fn into_parts(self) -> (IndexRange, Vec<f64>) {
        (self.range, self.samples)
    }
}

/// Largest absolute value in `samples`, zero for an empty slice.
///
/// NaN samples are skipped; callers that divide by the peak reject them
/// first.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, &s| acc.max(s.abs()))
}
