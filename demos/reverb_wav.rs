//! Reverberates a short decaying tone burst and writes the dry signal, the
//! synthetic impulse response and the wet signal as WAV files.
//!
//! Run with: RUST_LOG=debug cargo run --example reverb_wav --features wav

use std::path::Path;

use echoic::io::{SampleStore, WavStore};
use echoic::{ConvolutionReverb, ReverbConfig};
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

const SAMPLE_RATE: u32 = 44_100;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let burst_len = SAMPLE_RATE as usize / 4;
    let dry: Vec<f64> = (0..burst_len)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            (2.0 * std::f64::consts::PI * 440.0 * t).sin() * (-t * 12.0).exp()
        })
        .collect();

    let config = ReverbConfig::default()
        .with_sample_rate(SAMPLE_RATE as f64)
        .with_decay_time(2.0)
        .with_noise_floor(0.001);
    let rng = rand::rngs::StdRng::seed_from_u64(2023);
    let mut reverb = ConvolutionReverb::with_rng(config, rng);
    let wet = reverb.process(&dry)?;

    let mut store = WavStore::new(SAMPLE_RATE);
    store.save(Path::new("renders/dry.wav"), &dry)?;
    store.save(Path::new("renders/impulse_response.wav"), wet.impulse_response.samples())?;
    store.save(Path::new("renders/wet.wav"), wet.output.samples())?;

    println!(
        "wrote {:.2}s of reverberant audio to renders/",
        wet.output.duration()
    );
    Ok(())
}
