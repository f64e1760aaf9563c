//! Random sequence generators.
//!
//! Every generator draws from a caller-supplied random source, so a seeded
//! RNG reproduces the same sequence.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{Error, Result, Signal};

/// Gaussian noise: one independent `Normal(mean, std_dev)` draw per index.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `mean` is not finite, or if
/// `std_dev` is negative or not finite.
///
/// # Examples
///
/// ```
/// use echoic::generators::normal_signal;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let noise = normal_signal(-100, 100, 0.0, 1.0, &mut rng)?;
/// assert_eq!(noise.len(), 201);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn normal_signal<R: Rng + ?Sized>(
    start: i64,
    end: i64,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Signal> {
    if !mean.is_finite() {
        return Err(Error::parameter("mean", mean));
    }
    if !std_dev.is_finite() {
        return Err(Error::parameter("std_dev", std_dev));
    }
    let normal = Normal::new(mean, std_dev).map_err(|_| Error::parameter("std_dev", std_dev))?;
    Signal::from_fn(start, end, |_| normal.sample(&mut *rng))
}

/// Uniform white noise in `[-amplitude, amplitude]`.
///
/// # Examples
///
/// ```
/// use echoic::generators::white_signal;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let noise = white_signal(0, 63, 0.5, &mut rng)?;
/// assert!(noise.samples().iter().all(|s| s.abs() <= 0.5));
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn white_signal<R: Rng + ?Sized>(
    start: i64,
    end: i64,
    amplitude: f64,
    rng: &mut R,
) -> Result<Signal> {
    let amplitude = amplitude.abs();
    if !amplitude.is_finite() {
        return Err(Error::parameter("amplitude", amplitude));
    }
    Signal::from_fn(start, end, |_| {
        if amplitude == 0.0 {
            0.0
        } else {
            rng.gen_range(-amplitude..=amplitude)
        }
    })
}
