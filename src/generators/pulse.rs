//! Rectangular and triangular pulse generators.
//!
//! Both pulses are centred on `shift` and described by their full `width` in
//! samples. The half-width is `width / 2` rounded down, so a pulse of even
//! width covers `width + 1` indices, the same as the next odd width.

use crate::{Error, Result, Signal};

/// Rejects pulses wider than the distance between `start` and `end`.
fn check_width(start: i64, end: i64, width: u64) -> Result<()> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    let span = end.abs_diff(start);
    if width > span {
        return Err(Error::WidthExceedsRange { width, span });
    }
    Ok(())
}

/// A rectangular pulse of `amplitude` on `shift ± width / 2`, edges included.
///
/// # Errors
///
/// Fails with an invalid-range error if `start > end` or if `width` exceeds
/// `end - start`.
///
/// # Examples
///
/// ```
/// use echoic::generators::rectangular_pulse;
///
/// let pulse = rectangular_pulse(-3, 3, 2, 1.0, 0)?;
/// assert_eq!(pulse.samples(), &[0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn rectangular_pulse(
    start: i64,
    end: i64,
    width: u64,
    amplitude: f64,
    shift: i64,
) -> Result<Signal> {
    check_width(start, end, width)?;
    let half = width / 2;
    Signal::from_fn(start, end, |n| {
        if n.abs_diff(shift) <= half {
            amplitude
        } else {
            0.0
        }
    })
}

/// A symmetric triangular pulse peaking at `amplitude` on index `shift`.
///
/// The value falls linearly by `amplitude / (half + 1)` per sample on either
/// side of the apex, where `half = width / 2`, so exactly `2 * half + 1`
/// samples are non-zero and every other index in `[start, end]` is zero.
/// Parts of the ramp falling outside the range are cut off.
///
/// # Errors
///
/// Fails with an invalid-range error if `start > end` or if `width` exceeds
/// `end - start`.
///
/// # Examples
///
/// ```
/// use echoic::generators::triangular_pulse;
///
/// let tri = triangular_pulse(-3, 3, 4.0, 3, 0)?;
/// assert_eq!(tri.samples(), &[0.0, 0.0, 2.0, 4.0, 2.0, 0.0, 0.0]);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn triangular_pulse(
    start: i64,
    end: i64,
    amplitude: f64,
    width: u64,
    shift: i64,
) -> Result<Signal> {
    check_width(start, end, width)?;
    let half = width / 2;
    let slope = amplitude / (half + 1) as f64;
    Signal::from_fn(start, end, |n| {
        let distance = n.abs_diff(shift);
        if distance <= half {
            amplitude - slope * distance as f64
        } else {
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_odd_width() {
        // 5 / 2 == 2, so indices -2..=2 are high
        let pulse = rectangular_pulse(-5, 5, 5, 2.0, 0).unwrap();
        for (n, s) in pulse.iter() {
            let expected = if n.abs() <= 2 { 2.0 } else { 0.0 };
            assert_eq!(s, expected, "index {n}");
        }
    }

    #[test]
    fn test_rectangular_off_centre() {
        let pulse = rectangular_pulse(0, 10, 2, 1.0, 9).unwrap();
        let high: Vec<i64> = pulse.iter().filter(|&(_, s)| s > 0.0).map(|(n, _)| n).collect();
        assert_eq!(high, vec![8, 9, 10]);
    }

    #[test]
    fn test_rectangular_too_wide() {
        let err = rectangular_pulse(0, 4, 5, 1.0, 2).unwrap_err();
        assert!(matches!(err, Error::WidthExceedsRange { width: 5, span: 4 }));
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_triangular_is_symmetric() {
        let tri = triangular_pulse(-10, 10, 1.0, 7, 0).unwrap();
        for k in 0..=10 {
            assert_eq!(tri.get(k), tri.get(-k));
        }
        assert_eq!(tri.get(0), 1.0);
        assert_eq!(tri.peak(), 1.0);
    }

    #[test]
    fn test_triangular_zero_fill_count() {
        let tri = triangular_pulse(-10, 10, 1.0, 7, 3).unwrap();
        let non_zero = tri.samples().iter().filter(|&&s| s != 0.0).count();
        assert_eq!(non_zero, 7);
        assert_eq!(tri.len() - non_zero, 14);
        assert_eq!(tri.get(3), 1.0);
        assert_eq!(tri.get(7), 0.0);
    }

    #[test]
    fn test_triangular_even_width_matches_next_odd() {
        let even = triangular_pulse(-6, 6, 1.0, 6, 0).unwrap();
        let odd = triangular_pulse(-6, 6, 1.0, 7, 0).unwrap();
        assert_eq!(even, odd);
    }

    #[test]
    fn test_triangular_too_wide() {
        assert!(triangular_pulse(0, 3, 1.0, 4, 1).unwrap_err().is_invalid_range());
        assert!(triangular_pulse(0, 4, 1.0, 4, 2).is_ok());
    }

    #[test]
    fn test_triangular_clipped_at_range_edge() {
        let tri = triangular_pulse(0, 6, 3.0, 5, 0).unwrap();
        assert_eq!(&tri.samples()[..4], &[3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_far_away_centre_is_silent() {
        let rect = rectangular_pulse(0, 10, 2, 1.0, i64::MIN).unwrap();
        assert!(rect.samples().iter().all(|&s| s == 0.0));
        let tri = triangular_pulse(-10, 10, 1.0, 20, i64::MAX).unwrap();
        assert!(tri.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_width_check_on_extreme_range() {
        let err = rectangular_pulse(i64::MIN, i64::MIN + 3, 4, 1.0, 0).unwrap_err();
        assert!(matches!(err, Error::WidthExceedsRange { width: 4, span: 3 }));
    }
}
