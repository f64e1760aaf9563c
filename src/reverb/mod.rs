//! Convolution reverb driven by a statistically modelled room.
//!
//! Instead of a measured impulse response, the room is modelled as Gaussian
//! noise under an exponential decay envelope:
//!
//! ```text
//! h(t) = exp(-t / tau) * w(t) + sigma * v(t)        w, v ~ Normal(0, 1)
//! tau  = -T60 / ln(10^-3)
//! ```
//!
//! so that the envelope has fallen by 60 dB after `T60` seconds. The noise
//! floor `sigma * v(t)` keeps the tail from decaying to perfect silence. The
//! response is normalized to a peak of 1 and convolved with the dry signal.
//!
//! All randomness comes from the caller's RNG; seeding it makes every result
//! reproducible bit for bit.

mod config;

pub use config::ReverbConfig;

use rand::Rng;
use rand_distr::StandardNormal;
use tracing::debug;

use crate::Result;
use crate::convolution::convolve_samples;
use crate::signals::{TimeSeries, linspace};
use crate::transforms::normalize_samples;

/// Result of [`apply_reverb`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReverbOutput {
    /// The reverberant signal, peak-normalized, on a time axis spanning
    /// `len / sample_rate` seconds
    pub output: TimeSeries,
    /// The impulse response the input was convolved with
    pub impulse_response: TimeSeries,
}

/// Synthesizes a normalized room impulse response.
///
/// The response covers `config.duration` seconds with
/// `config.impulse_len()` samples, on a time axis running from 0 to
/// `duration` inclusive.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidParameter`] for an invalid configuration and
/// [`crate::Error::DegenerateSignal`] if the synthesized response is silent.
///
/// # Examples
///
/// ```
/// use echoic::{ReverbConfig, synthetic_impulse_response};
/// use rand::SeedableRng;
///
/// let config = ReverbConfig::impulse_defaults().with_sample_rate(8_000.0);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let ir = synthetic_impulse_response(&config, &mut rng)?;
/// assert_eq!(ir.len(), 40_000);
/// assert_eq!(ir.peak(), 1.0);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn synthetic_impulse_response<R: Rng + ?Sized>(
    config: &ReverbConfig,
    rng: &mut R,
) -> Result<TimeSeries> {
    config.validate()?;
    let len = config.impulse_len();
    let tau = config.tau();
    debug!(
        sample_rate = config.sample_rate,
        decay_time = config.decay_time,
        tau,
        len,
        "synthesizing impulse response"
    );

    let time = linspace(0.0, config.duration, len);
    let noise = standard_normal(len, rng);
    let floor = standard_normal(len, rng);

    let response: Vec<f64> = time
        .iter()
        .zip(noise.iter().zip(&floor))
        .map(|(t, (w, v))| (-t / tau).exp() * w + config.noise_floor * v)
        .collect();
    let response = normalize_samples(&response)?;

    TimeSeries::new(time, response)
}

/// Applies a synthetic room to `input`.
///
/// The input is peak-normalized, convolved with a fresh impulse response
/// from [`synthetic_impulse_response`], and the result is peak-normalized
/// again. The output holds `input.len() + impulse_len - 1` samples.
///
/// # Errors
///
/// Returns [`crate::Error::DegenerateSignal`] if `input` is empty or silent,
/// [`crate::Error::InvalidParameter`] if it holds a NaN or infinite sample,
/// plus any error from [`synthetic_impulse_response`].
///
/// # Examples
///
/// ```
/// use echoic::{ReverbConfig, apply_reverb};
/// use rand::SeedableRng;
///
/// let config = ReverbConfig::default().with_sample_rate(1_000.0).with_decay_time(0.5);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(9);
/// let wet = apply_reverb(&[0.0, 0.5, -0.25], &config, &mut rng)?;
/// assert_eq!(wet.output.len(), 3 + 5_000 - 1);
/// assert!((wet.output.peak() - 1.0).abs() < 1e-12);
/// # Ok::<(), echoic::Error>(())
/// ```
pub fn apply_reverb<R: Rng + ?Sized>(
    input: &[f64],
    config: &ReverbConfig,
    rng: &mut R,
) -> Result<ReverbOutput> {
    let dry = normalize_samples(input)?;
    let impulse_response = synthetic_impulse_response(config, rng)?;

    let wet = convolve_samples(&dry, impulse_response.samples());
    let wet = normalize_samples(&wet)?;
    let seconds = wet.len() as f64 / config.sample_rate;
    debug!(input_len = input.len(), output_len = wet.len(), seconds, "reverb applied");

    Ok(ReverbOutput {
        output: TimeSeries::spanning(wet, seconds),
        impulse_response,
    })
}

/// `count` unit-variance Gaussian draws.
fn standard_normal<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count).map(|_| rng.sample(StandardNormal)).collect()
}

/// A convolution reverb that owns its configuration and random source.
///
/// Each call draws a new impulse response from the RNG, so successive calls
/// on the same instance produce different rooms with identical statistics.
///
/// # Examples
///
/// ```
/// use echoic::{ConvolutionReverb, ReverbConfig};
/// use rand::SeedableRng;
///
/// let config = ReverbConfig::default().with_sample_rate(2_000.0);
/// let rng = rand::rngs::StdRng::seed_from_u64(42);
/// let mut reverb = ConvolutionReverb::with_rng(config, rng);
/// let wet = reverb.process(&[1.0])?;
/// assert_eq!(wet.output.len(), 10_000);
/// # Ok::<(), echoic::Error>(())
/// ```
pub struct ConvolutionReverb<R: Rng = rand::rngs::ThreadRng> {
    config: ReverbConfig,
    rng: R,
}

impl ConvolutionReverb<rand::rngs::ThreadRng> {
    /// Creates a reverb drawing from the thread-local RNG.
    pub fn new(config: ReverbConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> ConvolutionReverb<R> {
    /// Creates a reverb drawing from `rng`.
    pub fn with_rng(config: ReverbConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// The configuration every impulse response is drawn from.
    pub fn config(&self) -> &ReverbConfig {
        &self.config
    }

    /// Draws a new impulse response.
    pub fn impulse_response(&mut self) -> Result<TimeSeries> {
        synthetic_impulse_response(&self.config, &mut self.rng)
    }

    /// Reverberates `input` through a newly drawn room.
    pub fn process(&mut self, input: &[f64]) -> Result<ReverbOutput> {
        apply_reverb(input, &self.config, &mut self.rng)
    }
}
