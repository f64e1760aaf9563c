//! Exponential sequence generator.

use crate::{Error, Result, Signal};

/// An exponential sequence `amplitude * base^(-rate * n)` over `[start, end]`.
///
/// With `base > 1` and `rate > 0` the sequence decays for growing `n`;
/// a negative `rate` makes it grow instead.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] unless `base` is positive and finite.
///
/// # Examples
///
/// ```
/// use echoic::generators::exponential_signal;
///
/// let decay = exponential_signal(0, 3, 1.0, 2.0, 1.0)?;
/// assert_eq!(decay.samples(), &[1.0, 0.5, 0.25, 0.125]);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn exponential_signal(
    start: i64,
    end: i64,
    amplitude: f64,
    base: f64,
    rate: f64,
) -> Result<Signal> {
    if !(base.is_finite() && base > 0.0) {
        return Err(Error::parameter("base", base));
    }
    Signal::from_fn(start, end, |n| amplitude * base.powf(-rate * n as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_value_at_zero_is_amplitude() {
        let signal = exponential_signal(-4, 4, 3.0, std::f64::consts::E, 0.7).unwrap();
        assert_eq!(signal.get(0), 3.0);
    }

    #[test]
    fn test_negative_indices_grow() {
        let signal = exponential_signal(-2, 0, 1.0, 10.0, 1.0).unwrap();
        assert!((signal.get(-2) - 100.0).abs() < EPSILON);
        assert!((signal.get(-1) - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_ratio_between_neighbours() {
        let signal = exponential_signal(0, 20, 1.0, 2.0, 0.5).unwrap();
        let ratio = 2.0_f64.powf(-0.5);
        for pair in signal.samples().windows(2) {
            assert!((pair[1] / pair[0] - ratio).abs() < EPSILON);
        }
    }

    #[test]
    fn test_rejects_non_positive_base() {
        assert!(matches!(
            exponential_signal(0, 3, 1.0, 0.0, 1.0),
            Err(Error::InvalidParameter { name: "base", .. })
        ));
        assert!(exponential_signal(0, 3, 1.0, -2.0, 1.0).is_err());
    }
}
