//! Single-signal transforms.
//!
//! Each transform returns a new signal; the receiver is never modified. They
//! chain naturally:
//!
//! ```
//! use echoic::generators::heaviside;
//!
//! let step = heaviside(0, 4, 1.0, 0)?;
//! let shaped = step.invert_amplitude().shift_amplitude(1.0).shift_time(-2)?;
//! assert_eq!((shaped.start(), shaped.end()), (-2, 2));
//! assert!(shaped.samples().iter().all(|&s| s == 0.0));
//! # Ok::<(), echoic::Error>(())
//! ```

use std::ops;

use crate::signals::peak;
use crate::{Error, Result, Signal};

impl Signal {
    /// Time reversal `y[n] = x[-n]`.
    ///
    /// The samples are reversed and the range `[start, end]` becomes
    /// `[-end, -start]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOverflow`] if the range touches `i64::MIN`.
    pub fn invert_time(&self) -> Result<Signal> {
        let range = self.range().mirrored()?;
        let samples = self.samples().iter().rev().copied().collect();
        Ok(Signal::from_parts(range, samples))
    }

    /// Amplitude inversion `y[n] = -x[n]`.
    pub fn invert_amplitude(&self) -> Signal {
        self.map(|s| -s)
    }

    /// Delay by `shift` indices: `y[n] = x[n - shift]`.
    ///
    /// Only the range moves; the samples are copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOverflow`] if the shifted range leaves `i64`.
    pub fn shift_time(&self, shift: i64) -> Result<Signal> {
        let range = self.range().shifted(shift)?;
        Ok(Signal::from_parts(range, self.samples().to_vec()))
    }

    /// Adds a constant to every sample within the range.
    pub fn shift_amplitude(&self, offset: f64) -> Signal {
        self.map(|s| s + offset)
    }

    /// Multiplies every sample by `gain`.
    pub fn scale(&self, gain: f64) -> Signal {
        self.map(|s| s * gain)
    }

    /// Applies `func` to every sample, keeping the range.
    pub fn map(&self, func: impl FnMut(f64) -> f64) -> Signal {
        let samples = self.samples().iter().copied().map(func).collect();
        Signal::from_parts(self.range(), samples)
    }

    /// Scales the signal so that its largest absolute sample is exactly 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateSignal`] if every sample is zero.
    pub fn normalize(&self) -> Result<Signal> {
        let samples = normalize_samples(self.samples())?;
        Ok(Signal::from_parts(self.range(), samples))
    }
}

/// Divides `samples` by their largest absolute value.
///
/// # Errors
///
/// Returns [`Error::DegenerateSignal`] for an empty or all-zero slice, and
/// [`Error::InvalidParameter`] if any sample is NaN or infinite.
///
/// # Examples
///
/// ```
/// use echoic::transforms::normalize_samples;
///
/// assert_eq!(normalize_samples(&[0.5, -2.0, 1.0])?, vec![0.25, -1.0, 0.5]);
/// assert!(normalize_samples(&[0.0, 0.0]).is_err());
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn normalize_samples(samples: &[f64]) -> Result<Vec<f64>> {
    if let Some(&bad) = samples.iter().find(|s| !s.is_finite()) {
        return Err(Error::parameter("sample", bad));
    }
    let peak = peak(samples);
    if peak == 0.0 {
        return Err(Error::DegenerateSignal);
    }
    Ok(samples.iter().map(|s| s / peak).collect())
}

impl ops::Neg for &Signal {
    type Output = Signal;

    fn neg(self) -> Signal {
        self.invert_amplitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{heaviside, unit_impulse};

    #[test]
    fn test_invert_time_mirrors_indices() {
        let x = Signal::from_fn(-1, 3, |n| n as f64 * 2.0).unwrap();
        let y = x.invert_time().unwrap();
        assert_eq!((y.start(), y.end()), (-3, 1));
        for n in -3..=1 {
            assert_eq!(y.get(n), x.get(-n));
        }
        assert_eq!(y.invert_time().unwrap(), x);
    }

    #[test]
    fn test_invert_time_of_delayed_impulse() {
        let delta = unit_impulse(0, 5, 1.0, 4).unwrap();
        let mirrored = delta.invert_time().unwrap();
        assert_eq!(mirrored.get(-4), 1.0);
        assert_eq!(mirrored.samples().iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_invert_amplitude() {
        let step = heaviside(-2, 2, 3.0, 0).unwrap();
        let inverted = step.invert_amplitude();
        assert_eq!(inverted.samples(), &[0.0, 0.0, -3.0, -3.0, -3.0]);
        assert_eq!(-&step, inverted);
    }

    #[test]
    fn test_shift_time_keeps_input() {
        let x = Signal::from_fn(0, 2, |n| n as f64).unwrap();
        let before = x.clone();
        let y = x.shift_time(-5).unwrap();
        assert_eq!((y.start(), y.end()), (-5, -3));
        assert_eq!(y.samples(), x.samples());
        assert_eq!(x, before);
    }

    #[test]
    fn test_shift_amplitude_and_scale() {
        let x = Signal::from_fn(0, 2, |n| n as f64).unwrap();
        assert_eq!(x.shift_amplitude(0.5).samples(), &[0.5, 1.5, 2.5]);
        assert_eq!(x.scale(-2.0).samples(), &[0.0, -2.0, -4.0]);
        assert_eq!(x.samples(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_normalize() {
        let x = Signal::from_fn(-2, 2, |n| n as f64 * 4.0).unwrap();
        let y = x.normalize().unwrap();
        assert_eq!(y.peak(), 1.0);
        assert_eq!(y.samples(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_normalize_degenerate() {
        let silent = Signal::zeros(-3, 3).unwrap();
        assert!(matches!(silent.normalize(), Err(Error::DegenerateSignal)));
        assert!(matches!(normalize_samples(&[]), Err(Error::DegenerateSignal)));
    }

    #[test]
    fn test_time_transforms_reject_overflow() {
        let x = Signal::from_fn(0, 1, |n| n as f64).unwrap();
        assert!(matches!(x.shift_time(i64::MAX), Err(Error::IndexOverflow)));
        assert_eq!(x.shift_time(i64::MAX - 1).unwrap().end(), i64::MAX);

        let edge = Signal::from_fn(i64::MIN, i64::MIN + 1, |_| 1.0).unwrap();
        assert!(matches!(edge.invert_time(), Err(Error::IndexOverflow)));
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        assert!(matches!(
            normalize_samples(&[f64::NAN, 1.0]),
            Err(Error::InvalidParameter { name: "sample", .. })
        ));
        assert!(normalize_samples(&[0.5, f64::NEG_INFINITY]).is_err());
    }
}
