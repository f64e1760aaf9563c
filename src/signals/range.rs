//! Inclusive integer index ranges.

use std::ops::RangeInclusive;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An inclusive, contiguous range of sample indices `[start, end]`.
///
/// Ranges may start at a negative index and always contain at least one
/// index, since `start <= end` is checked on construction.
///
/// # Examples
///
/// ```
/// use echoic::IndexRange;
///
/// let range = IndexRange::new(-3, 3)?;
/// assert_eq!(range.len(), 7);
/// assert!(range.contains(-3));
/// assert!(!range.contains(4));
/// # Ok::<(), echoic::Error>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i64, i64)", into = "(i64, i64)"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: i64,
    end: i64,
}

impl IndexRange {
    /// Creates the range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First index of the range.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last index of the range, inclusive.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of indices in the range.
    pub fn len(&self) -> usize {
        self.end.abs_diff(self.start) as usize + 1
    }

    /// Always false; a range holds at least one index.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if `index` lies within `[start, end]`.
    pub fn contains(&self, index: i64) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Smallest range covering both `self` and `other`.
    ///
    /// Gaps between non-overlapping ranges are included.
    pub fn union(&self, other: &IndexRange) -> IndexRange {
        IndexRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Moves the range by `offset` indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOverflow`] if either bound leaves the `i64` range.
    pub fn shifted(&self, offset: i64) -> Result<IndexRange> {
        Self::checked(self.start.checked_add(offset), self.end.checked_add(offset))
    }

    /// The range `[-end, -start]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOverflow`] if a bound is `i64::MIN`.
    pub fn mirrored(&self) -> Result<IndexRange> {
        Self::checked(self.end.checked_neg(), self.start.checked_neg())
    }

    /// Range of the linear convolution of signals over `self` and `other`:
    /// `[start_a + start_b, end_a + end_b]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOverflow`] if either sum leaves the `i64` range.
    pub fn convolved(&self, other: &IndexRange) -> Result<IndexRange> {
        Self::checked(
            self.start.checked_add(other.start),
            self.end.checked_add(other.end),
        )
    }

    fn checked(start: Option<i64>, end: Option<i64>) -> Result<IndexRange> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(IndexRange { start, end }),
            _ => Err(Error::IndexOverflow),
        }
    }

    /// Position of an absolute index inside the range, if it is covered.
    pub fn offset_of(&self, index: i64) -> Option<usize> {
        self.contains(index).then(|| index.abs_diff(self.start) as usize)
    }

    /// Iterates over the indices in ascending order.
    pub fn iter(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl IntoIterator for IndexRange {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<(i64, i64)> for IndexRange {
    type Error = Error;

    fn try_from((start, end): (i64, i64)) -> Result<Self> {
        IndexRange::new(start, end)
    }
}

impl From<IndexRange> for (i64, i64) {
    fn from(range: IndexRange) -> Self {
        (range.start, range.end)
    }
}
