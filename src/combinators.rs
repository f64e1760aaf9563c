//! Combining pairs of signals under index alignment.
//!
//! Two signals generally live on different index ranges, which may be
//! negative, disjoint or nested. Elementwise operations (addition,
//! subtraction, multiplication) first align both signals onto the smallest
//! range covering them, treating every missing sample as zero, and then
//! combine them index by index.
//!
//! Convolution is different: it never aligns. It convolves the two sample
//! sequences as they are, and places the result on
//! `[start_a + start_b, end_a + end_b]`. Convolving with a unit impulse at
//! index `k` therefore delays a signal by `k` indices, and convolving with a
//! unit impulse at index 0 returns it unchanged.
//!
//! All operations allocate their result and leave their inputs untouched.

use std::ops;

use tracing::trace;

use crate::convolution::convolve_samples;
use crate::{IndexRange, Result, Signal};

/// Aligns two signals onto their common index range.
///
/// Returns the common range `[min(start_a, start_b), max(end_a, end_b)]` and
/// both signals zero-extended over it. For every index `n` of the common
/// range, the padded signal holds the original sample at `n` when `n` lies in
/// the signal's own range and zero otherwise.
///
/// # Examples
///
/// ```
/// use echoic::Signal;
/// use echoic::combinators::match_dimensions;
///
/// let a = Signal::from_fn(-2, -1, |_| 1.0)?;
/// let b = Signal::from_fn(1, 2, |_| 2.0)?;
/// let (range, a, b) = match_dimensions(&a, &b);
/// assert_eq!((range.start(), range.end()), (-2, 2));
/// assert_eq!(a.samples(), &[1.0, 1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(b.samples(), &[0.0, 0.0, 0.0, 2.0, 2.0]);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn match_dimensions(a: &Signal, b: &Signal) -> (IndexRange, Signal, Signal) {
    let common = a.range().union(&b.range());
    trace!(
        a_start = a.start(),
        a_end = a.end(),
        b_start = b.start(),
        b_end = b.end(),
        start = common.start(),
        end = common.end(),
        "aligning signals"
    );
    (common, zero_extend(a, common), zero_extend(b, common))
}

/// Places a signal's samples at their absolute indices within `range`.
fn zero_extend(signal: &Signal, range: IndexRange) -> Signal {
    let samples = range.iter().map(|n| signal.get(n)).collect();
    Signal::from_parts(range, samples)
}

/// Aligns both signals and merges them sample by sample with `op`.
fn combine(a: &Signal, b: &Signal, op: impl Fn(f64, f64) -> f64) -> Signal {
    let (range, a, b) = match_dimensions(a, b);
    let samples = a
        .samples()
        .iter()
        .zip(b.samples())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Signal::from_parts(range, samples)
}

/// Elementwise sum over the common index range.
///
/// # Examples
///
/// ```
/// use echoic::combinators::add;
/// use echoic::generators::{heaviside, unit_impulse};
///
/// let delta = unit_impulse(-3, 3, 2.0, 0)?;
/// let step = heaviside(0, 5, 1.0, 2)?;
/// let sum = add(&delta, &step);
/// assert_eq!((sum.start(), sum.end()), (-3, 5));
/// assert_eq!(sum.get(0), 2.0);
/// assert_eq!(sum.get(4), 1.0);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn add(a: &Signal, b: &Signal) -> Signal {
    combine(a, b, |x, y| x + y)
}

/// Elementwise difference `a - b` over the common index range.
pub fn subtract(a: &Signal, b: &Signal) -> Signal {
    combine(a, b, |x, y| x - y)
}

/// Elementwise product over the common index range.
///
/// Indices covered by only one of the signals multiply against zero.
pub fn multiply(a: &Signal, b: &Signal) -> Signal {
    combine(a, b, |x, y| x * y)
}

/// Full linear convolution of two signals.
///
/// The result has `len(a) + len(b) - 1` samples on the range
/// `[start_a + start_b, end_a + end_b]`.
///
/// # Errors
///
/// Returns [`crate::Error::IndexOverflow`] if a bound of that range does not
/// fit in an `i64`.
///
/// # Examples
///
/// ```
/// use echoic::Signal;
/// use echoic::combinators::convolve;
/// use echoic::generators::unit_impulse;
///
/// let x = Signal::from_fn(-1, 1, |n| n as f64)?;
/// let delay = unit_impulse(0, 2, 1.0, 2)?;
/// let y = convolve(&x, &delay)?;
/// assert_eq!((y.start(), y.end()), (-1, 3));
/// assert_eq!(y.get(1), -1.0);
/// assert_eq!(y.get(3), 1.0);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn convolve(a: &Signal, b: &Signal) -> Result<Signal> {
    let range = a.range().convolved(&b.range())?;
    Ok(Signal::from_parts(range, convolve_samples(a.samples(), b.samples())))
}

impl ops::Add for &Signal {
    type Output = Signal;

    fn add(self, other: Self) -> Signal {
        add(self, other)
    }
}

impl ops::Sub for &Signal {
    type Output = Signal;

    fn sub(self, other: Self) -> Signal {
        subtract(self, other)
    }
}

impl ops::Mul for &Signal {
    type Output = Signal;

    fn mul(self, other: Self) -> Signal {
        multiply(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{heaviside, rectangular_pulse, unit_impulse};

    fn ramp(start: i64, end: i64) -> Signal {
        Signal::from_fn(start, end, |n| n as f64 + 0.5).unwrap()
    }

    fn assert_index_exact(original: &Signal, padded: &Signal, common: IndexRange) {
        assert_eq!(padded.range(), common);
        for n in common.iter() {
            let expected = if original.range().contains(n) {
                original.get(n)
            } else {
                0.0
            };
            assert_eq!(padded.get(n), expected, "index {n}");
        }
    }

    #[test]
    fn test_match_dimensions_index_exact() {
        let cases = [
            ((-5, 2), (0, 7)),
            ((3, 4), (-9, -6)),
            ((-3, 3), (-1, 1)),
            ((-12, -10), (10, 12)),
            ((0, 0), (0, 0)),
            ((-4, -4), (6, 6)),
        ];
        for ((sa, ea), (sb, eb)) in cases {
            let a = ramp(sa, ea);
            let b = ramp(sb, eb).invert_amplitude();
            let (common, pa, pb) = match_dimensions(&a, &b);
            assert_eq!(common.start(), sa.min(sb));
            assert_eq!(common.end(), ea.max(eb));
            assert_eq!(pa.len(), common.len());
            assert_eq!(pb.len(), common.len());
            assert_index_exact(&a, &pa, common);
            assert_index_exact(&b, &pb, common);
        }
    }

    #[test]
    fn test_match_dimensions_leaves_inputs_untouched() {
        let a = ramp(-2, 2);
        let b = ramp(5, 6);
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = match_dimensions(&a, &b);
        let _ = add(&a, &b);
        let _ = multiply(&a, &b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_impulse_plus_step() {
        let delta = unit_impulse(-3, 3, 2.0, 0).unwrap();
        let step = heaviside(0, 5, 1.0, 2).unwrap();
        let sum = add(&delta, &step);
        assert_eq!((sum.start(), sum.end()), (-3, 5));
        for (n, s) in sum.iter() {
            let expected = match n {
                0 => 2.0,
                2..=5 => 1.0,
                _ => 0.0,
            };
            assert_eq!(s, expected, "index {n}");
        }
    }

    #[test]
    fn test_add_and_multiply_commute() {
        let a = ramp(-7, 1);
        let b = rectangular_pulse(-2, 9, 4, 3.0, 4).unwrap();
        assert_eq!(add(&a, &b), add(&b, &a));
        assert_eq!(multiply(&a, &b), multiply(&b, &a));
    }

    #[test]
    fn test_multiply_masks_disjoint_signals() {
        let a = ramp(-4, -1);
        let b = ramp(1, 4);
        let product = multiply(&a, &b);
        assert_eq!((product.start(), product.end()), (-4, 4));
        assert!(product.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_subtract_self_is_silent() {
        let a = ramp(-3, 8);
        let diff = subtract(&a, &a);
        assert_eq!(diff.range(), a.range());
        assert!(diff.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_operators_match_functions() {
        let a = ramp(-2, 3);
        let b = ramp(0, 6);
        assert_eq!(&a + &b, add(&a, &b));
        assert_eq!(&a - &b, subtract(&a, &b));
        assert_eq!(&a * &b, multiply(&a, &b));
    }

    #[test]
    fn test_convolve_length_and_range() {
        let a = ramp(-3, 4);
        let b = ramp(2, 11);
        let y = convolve(&a, &b).unwrap();
        assert_eq!(y.len(), a.len() + b.len() - 1);
        assert_eq!((y.start(), y.end()), (-1, 15));
    }

    #[test]
    fn test_convolve_with_identity_kernel() {
        let a = ramp(-6, 9);
        let identity = unit_impulse(0, 0, 1.0, 0).unwrap();
        assert_eq!(convolve(&a, &identity).unwrap(), a);
    }

    #[test]
    fn test_convolve_with_shifted_impulse_delays() {
        let a = ramp(0, 4);
        let delay = unit_impulse(-3, 3, 1.0, 3).unwrap();
        let y = convolve(&a, &delay).unwrap();
        for n in 0..=4 {
            assert_eq!(y.get(n + 3), a.get(n));
        }
    }

    #[test]
    fn test_convolve_range_overflow() {
        let far = Signal::from_fn(i64::MAX - 1, i64::MAX, |_| 1.0).unwrap();
        let late = unit_impulse(0, 2, 1.0, 0).unwrap();
        assert!(convolve(&far, &late).unwrap_err().is_invalid_range());
        assert!(convolve(&far, &far.invert_amplitude()).is_err());
    }
}
