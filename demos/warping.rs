//! Magnitude and time warping example.
//!
//! Run with: cargo run --example warping

use rand::rngs::StdRng;
use rand::SeedableRng;
use sensor_augment::augment::{magnitude_warp, time_warp};
use sensor_augment::core::Signal;
use sensor_augment::curve::{random_curves, CurveConfig};

fn main() -> sensor_augment::Result<()> {
    println!("=== Warping Transforms Example ===\n");

    println!("Both warps distort the signal with a smooth random curve:");
    println!("a cubic spline through evenly spaced knots whose values are");
    println!("drawn from Normal(1.0, sigma).\n");

    let num_timesteps = 300;
    let signal = Signal::from_channels(
        (0..3)
            .map(|c| {
                (0..num_timesteps)
                    .map(|t| (t as f64 * 0.1 + c as f64 * 0.5).sin())
                    .collect()
            })
            .collect(),
    )?;

    let mut rng = StdRng::seed_from_u64(7);

    // 1. The random curve itself
    println!("--- Random curve (sigma = 0.2, 4 knots) ---");
    let config = CurveConfig::new(0.2).with_knots(4);
    let curves = random_curves(num_timesteps, 3, &config, &mut rng)?;
    let curve = &curves[0];
    println!(
        "channel 0 curve: min {:.3}, max {:.3}, mean {:.3}",
        curve.iter().copied().fold(f64::INFINITY, f64::min),
        curve.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        curve.iter().sum::<f64>() / curve.len() as f64
    );

    // 2. Magnitude warp: multiply sample-wise by the curve
    println!("\n--- Magnitude warp ---");
    let warped = magnitude_warp(&signal, &config, &mut rng)?;
    let max_ratio = signal
        .channel(0)
        .iter()
        .zip(warped.channel(0))
        .filter(|(x, _)| x.abs() > 1e-6)
        .map(|(x, w)| (w / x).abs())
        .fold(f64::NEG_INFINITY, f64::max);
    println!("largest amplitude ratio on channel 0: {:.3}", max_ratio);

    // 3. Time warp: stretch and compress the time axis
    println!("\n--- Time warp ---");
    let warped = time_warp(&signal, &config, &mut rng)?;
    let shift: f64 = signal
        .channel(0)
        .iter()
        .zip(warped.channel(0))
        .map(|(a, b)| (a - b).abs())
        .sum::<f64>()
        / num_timesteps as f64;
    println!("mean per-sample displacement on channel 0: {:.4}", shift);
    println!("output shape unchanged: {:?}", warped.shape());

    // 4. Larger sigma means stronger distortion
    println!("\n--- Effect of sigma ---");
    for sigma in [0.05, 0.2, 0.5] {
        let config = CurveConfig::new(sigma);
        let warped = time_warp(&signal, &config, &mut rng)?;
        let shift: f64 = signal
            .channel(0)
            .iter()
            .zip(warped.channel(0))
            .map(|(a, b)| (a - b).abs())
            .sum::<f64>()
            / num_timesteps as f64;
        println!("sigma {:.2} -> mean displacement {:.4}", sigma, shift);
    }

    Ok(())
}
