//! Echoic - discrete-time signals, index-aligned arithmetic and synthetic reverb
//!
//! This library generates canonical test signals over explicit integer index
//! ranges, combines pairs of signals after aligning their ranges, and
//! reverberates arbitrary input through a statistically modelled room.
//!
//! ```
//! use echoic::generators::{heaviside, unit_impulse};
//!
//! let delta = unit_impulse(-3, 3, 2.0, 0)?;
//! let step = heaviside(0, 5, 1.0, 2)?;
//! let sum = &delta + &step;
//! assert_eq!((sum.start(), sum.end()), (-3, 5));
//! # Ok::<(), echoic::Error>(())
//! ```

pub mod combinators;
pub mod convolution;
mod error;
pub mod generators;
pub mod io;
#[cfg(feature = "reverb")]
pub mod reverb;
pub mod signals;
pub mod transforms;

// Re-export commonly used types at the crate root
pub use combinators::{add, convolve, match_dimensions, multiply, subtract};
pub use error::{Error, Result};
pub use generators::{
    exponential_signal, heaviside, normal_signal, rectangular_pulse, triangular_pulse,
    unit_impulse, white_signal,
};
#[cfg(feature = "reverb")]
pub use reverb::{
    ConvolutionReverb, ReverbConfig, ReverbOutput, apply_reverb, synthetic_impulse_response,
};
pub use signals::{IndexRange, Signal, TimeSeries};
