//! Generates a few canonical signals, combines them and prints the results.
//!
//! Run with: cargo run --example combine

use echoic::generators::{exponential_signal, heaviside, triangular_pulse, unit_impulse};
use echoic::{Signal, add, convolve, multiply};

fn print_signal(name: &str, signal: &Signal) {
    println!("{name} over [{}, {}]", signal.start(), signal.end());
    for (n, s) in signal.iter() {
        println!("  {n:>4}  {s:>8.4}");
    }
}

fn main() -> anyhow::Result<()> {
    let delta = unit_impulse(-3, 3, 2.0, 0)?;
    let step = heaviside(0, 5, 1.0, 2)?;
    print_signal("impulse + step", &add(&delta, &step));

    let decay = exponential_signal(-2, 6, 1.0, 2.0, 1.0)?;
    print_signal("step * decay", &multiply(&step, &decay));

    let tri = triangular_pulse(-4, 4, 1.0, 5, 0)?;
    print_signal("triangle * step (convolution)", &convolve(&tri, &step)?);

    let mirrored = tri.invert_time()?.shift_time(10)?;
    print_signal("triangle mirrored and delayed", &mirrored);

    Ok(())
}
