//! Error types shared by every module of the crate.

/// Errors produced by signal construction, generation and processing.
///
/// All operations either succeed completely or fail with one of these
/// variants; no partial results are ever returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The range start lies after its end.
    #[error("invalid index range [{start}, {end}]: start must not exceed end")]
    InvalidRange { start: i64, end: i64 },

    /// A pulse is wider than the range that should contain it.
    #[error("pulse width {width} exceeds containing range of {span} samples")]
    WidthExceedsRange { width: u64, span: u64 },

    /// Shifting, mirroring or convolving moved a range bound past the limits
    /// of `i64`.
    #[error("index range bound overflows a 64-bit index")]
    IndexOverflow,

    /// Normalization of a signal that has no non-zero sample.
    #[error("cannot normalize a signal with no non-zero samples")]
    DegenerateSignal,

    /// A numeric parameter outside its admissible domain.
    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A sample vector paired with an index range of a different length.
    #[error("{samples} samples cannot cover an index range of {range} indices")]
    LengthMismatch { samples: usize, range: usize },

    /// Failure reading or writing a sample file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed or unsupported WAV data.
    #[cfg(feature = "wav")]
    #[error(transparent)]
    Wav(#[from] hound::Error),
}

impl Error {
    /// Returns true for errors of the invalid-range kind: a reversed range, a
    /// pulse that does not fit inside its range, or a range bound that
    /// overflows.
    pub fn is_invalid_range(&self) -> bool {
        matches!(
            self,
            Error::InvalidRange { .. } | Error::WidthExceedsRange { .. } | Error::IndexOverflow
        )
    }

    pub(crate) fn parameter(name: &'static str, value: f64) -> Self {
        Error::InvalidParameter { name, value }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
