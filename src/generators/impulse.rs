//! Unit impulse and Heaviside step generators.

use crate::{Result, Signal};

/// A scaled unit impulse: `amplitude` at index `shift`, zero elsewhere.
///
/// A `shift` outside `[start, end]` is not an error; the result is simply
/// all zero over the requested range.
///
/// # Arguments
///
/// * `start`, `end` - Inclusive index range of the result
/// * `amplitude` - Value of the single non-zero sample
/// * `shift` - Absolute index of the impulse
///
/// # Examples
///
/// ```
/// use echoic::generators::unit_impulse;
///
/// let delta = unit_impulse(-3, 3, 2.0, 0)?;
/// assert_eq!(delta.samples(), &[0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0]);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn unit_impulse(start: i64, end: i64, amplitude: f64, shift: i64) -> Result<Signal> {
    Signal::from_fn(start, end, |n| if n == shift { amplitude } else { 0.0 })
}

/// A scaled Heaviside step: `amplitude` for every index `>= shift`.
///
/// # Examples
///
/// ```
/// use echoic::generators::heaviside;
///
/// let step = heaviside(0, 5, 1.0, 2)?;
/// assert_eq!(step.samples(), &[0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn heaviside(start: i64, end: i64, amplitude: f64, shift: i64) -> Result<Signal> {
    Signal::from_fn(start, end, |n| if n >= shift { amplitude } else { 0.0 })
}
