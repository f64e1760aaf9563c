//! Linear convolution of sample sequences.
//!
//! The full (not circular) convolution of sequences of lengths `n` and `m`
//! has `n + m - 1` samples. Short kernels are convolved directly; longer
//! inputs go through a zero-padded FFT, which matches direct convolution
//! within floating-point tolerance.

use rustfft::{FftPlanner, num_complex::Complex};
use tracing::debug;

/// Shorter-input length up to which [`convolve_samples`] convolves directly.
pub const DIRECT_CONVOLUTION_LIMIT: usize = 64;

/// Full linear convolution, choosing the direct or FFT method by input size.
///
/// Returns an empty vector if either input is empty.
///
/// # Examples
///
/// ```
/// use echoic::convolution::convolve_samples;
///
/// let out = convolve_samples(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
/// assert_eq!(out, vec![0.0, 1.0, 2.5, 4.0, 1.5]);
/// ```
pub fn convolve_samples(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len().min(b.len()) <= DIRECT_CONVOLUTION_LIMIT {
        debug!(len_a = a.len(), len_b = b.len(), "direct convolution");
        convolve_direct(a, b)
    } else {
        convolve_fft(a, b)
    }
}

/// Full linear convolution by the direct sum `y[k] = Σ a[i] * b[k - i]`.
pub fn convolve_direct(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (o, &y) in out[i..].iter_mut().zip(b) {
            *o += x * y;
        }
    }
    out
}

/// Full linear convolution through a zero-padded complex FFT.
pub fn convolve_fft(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let out_len = a.len() + b.len() - 1;
    // Padding to at least out_len keeps the circular product from wrapping
    let fft_len = out_len.next_power_of_two();
    debug!(len_a = a.len(), len_b = b.len(), fft_len, "fft convolution");

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(fft_len);
    let inverse = planner.plan_fft_inverse(fft_len);

    let mut spectrum_a = zero_padded(a, fft_len);
    let mut spectrum_b = zero_padded(b, fft_len);
    forward.process(&mut spectrum_a);
    forward.process(&mut spectrum_b);

    for (x, y) in spectrum_a.iter_mut().zip(&spectrum_b) {
        *x *= *y;
    }
    inverse.process(&mut spectrum_a);

    // rustfft leaves the inverse unnormalized
    let scale = 1.0 / fft_len as f64;
    spectrum_a[..out_len].iter().map(|c| c.re * scale).collect()
}

fn zero_padded(samples: &[f64], len: usize) -> Vec<Complex<f64>> {
    let mut buffer = vec![Complex::new(0.0, 0.0); len];
    for (slot, &s) in buffer.iter_mut().zip(samples) {
        slot.re = s;
    }
    buffer
}
