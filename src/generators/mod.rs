//! Canonical discrete-time test signals.
//!
//! Every generator takes the inclusive index range `[start, end]` of the
//! signal it produces, followed by its shape parameters:
//! - `unit_impulse` and `heaviside` for the delta and the step
//! - `rectangular_pulse` and `triangular_pulse` for finite pulses
//! - `exponential_signal` for geometric sequences
//! - `normal_signal` and `white_signal` for noise drawn from a caller-supplied RNG

mod exponential;
mod impulse;
mod noise;
mod pulse;

pub use exponential::exponential_signal;
pub use impulse::{heaviside, unit_impulse};
pub use noise::{normal_signal, white_signal};
pub use pulse::{rectangular_pulse, triangular_pulse};
