//! Parameters of the synthetic room model.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Level, relative to the initial amplitude, that the decay envelope reaches
/// after `decay_time` seconds (-60 dB).
const DECAY_LEVEL: f64 = 1e-3;

/// Configuration of a synthetic impulse response.
///
/// # Examples
///
/// ```
/// use echoic::ReverbConfig;
///
/// let config = ReverbConfig::default()
///     .with_sample_rate(22_050.0)
///     .with_decay_time(0.8)
///     .with_noise_floor(0.01);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.impulse_len(), 110_250);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverbConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Time in seconds for the envelope to fall by 60 dB (T60)
    pub decay_time: f64,
    /// Standard deviation of the noise floor added under the decaying tail
    pub noise_floor: f64,
    /// Length of the impulse response in seconds
    pub duration: f64,
}

impl Default for ReverbConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100.0,
            decay_time: 2.0,
            noise_floor: 0.0,
            duration: 5.0,
        }
    }
}

impl ReverbConfig {
    /// Settings for inspecting an impulse response on its own: a one-second
    /// decay over a faint noise floor.
    pub fn impulse_defaults() -> Self {
        Self {
            decay_time: 1.0,
            noise_floor: 0.1,
            ..Self::default()
        }
    }

    /// Sets the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the T60 decay time in seconds.
    pub fn with_decay_time(mut self, decay_time: f64) -> Self {
        self.decay_time = decay_time;
        self
    }

    /// Sets the standard deviation of the noise floor.
    pub fn with_noise_floor(mut self, noise_floor: f64) -> Self {
        self.noise_floor = noise_floor;
        self
    }

    /// Sets the impulse-response length in seconds.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Checks every parameter against its admissible domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending field:
    /// sample rate, decay time and duration must be positive and finite, the
    /// noise floor must be non-negative and finite, and `duration` must span
    /// at least one sample at `sample_rate`.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("sample_rate", self.sample_rate),
            ("decay_time", self.decay_time),
            ("duration", self.duration),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::parameter(name, value));
            }
        }
        if !(self.noise_floor.is_finite() && self.noise_floor >= 0.0) {
            return Err(Error::parameter("noise_floor", self.noise_floor));
        }
        if self.impulse_len() == 0 {
            return Err(Error::parameter("duration", self.duration));
        }
        Ok(())
    }

    /// Time constant of the envelope `exp(-t / tau)`.
    pub fn tau(&self) -> f64 {
        -self.decay_time / DECAY_LEVEL.ln()
    }

    /// Number of samples in the impulse response.
    pub fn impulse_len(&self) -> usize {
        (self.duration * self.sample_rate).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_defaults() {
        let config = ReverbConfig::default();
        assert_eq!(config.sample_rate, 44_100.0);
        assert_eq!(config.decay_time, 2.0);
        assert_eq!(config.noise_floor, 0.0);
        assert_eq!(config.impulse_len(), 220_500);

        let impulse = ReverbConfig::impulse_defaults();
        assert_eq!(impulse.decay_time, 1.0);
        assert_eq!(impulse.noise_floor, 0.1);
    }

    #[test]
    fn test_envelope_reaches_minus_60_db_at_decay_time() {
        let config = ReverbConfig::default().with_decay_time(1.5);
        let level = (-config.decay_time / config.tau()).exp();
        assert!((level - 1e-3).abs() < EPSILON);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            ReverbConfig::default().with_sample_rate(0.0),
            ReverbConfig::default().with_decay_time(-1.0),
            ReverbConfig::default().with_duration(f64::NAN),
            ReverbConfig::default().with_noise_floor(-0.1),
            ReverbConfig::default().with_noise_floor(f64::INFINITY),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(Error::InvalidParameter { .. })),
                "{config:?}"
            );
        }
        assert!(ReverbConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_sub_sample_duration() {
        let config = ReverbConfig::default().with_duration(1e-6);
        assert_eq!(config.impulse_len(), 0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { name: "duration", .. })
        ));
        assert!(ReverbConfig::default().with_duration(1.0 / 44_100.0).validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_and_defaults() {
        let config = ReverbConfig::impulse_defaults().with_sample_rate(8_000.0);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<ReverbConfig>(&json).unwrap(), config);

        let partial: ReverbConfig = serde_json::from_str(r#"{"decay_time":0.5}"#).unwrap();
        assert_eq!(partial, ReverbConfig::default().with_decay_time(0.5));
    }
}
