//! Quickstart for sensor-augment.
//!
//! Run with: cargo run --example quickstart

use rand::rngs::StdRng;
use rand::SeedableRng;
use sensor_augment::prelude::*;

fn main() -> Result<()> {
    println!("=== sensor-augment Quickstart ===\n");

    // A synthetic tri-axial accelerometer trace: 1 Hz-ish oscillation
    // with a different phase per axis.
    let num_timesteps = 600;
    let channels: Vec<Vec<f64>> = (0..3)
        .map(|c| {
            (0..num_timesteps)
                .map(|t| (t as f64 * 0.05 + c as f64).sin())
                .collect()
        })
        .collect();
    let signal = Signal::from_channels(channels)?;
    println!(
        "Input signal: {} timesteps x {} channels",
        signal.num_timesteps(),
        signal.num_channels()
    );

    // Seeded generator: every run of this demo prints the same numbers.
    let mut rng = StdRng::seed_from_u64(42);

    println!("\n--- Jitter (additive Gaussian noise) ---");
    let noisy = jitter(&signal, 0.05, &mut rng)?;
    print_head("jittered", &noisy);

    println!("\n--- Scaling (one random factor per channel) ---");
    let scaled = scaling(&signal, 0.1, &mut rng)?;
    print_head("scaled", &scaled);

    println!("\n--- Rotation (random 3D orientation change) ---");
    let rotated = rotation(&signal, &mut rng)?;
    print_head("rotated", &rotated);

    println!("\n--- Permutation (segment reordering) ---");
    let config = PermutationConfig::new(4).with_min_segment_len(20);
    let permuted = permutation(&signal, &config, &mut rng)?;
    print_head("permuted", &permuted);

    println!("\n--- Random sampling (sparse anchors + interpolation) ---");
    let resampled = random_sampling(&signal, 80, &mut rng)?;
    print_head("resampled", &resampled);

    println!("\nAll outputs keep the input shape {:?}.", signal.shape());
    Ok(())
}

fn print_head(label: &str, signal: &Signal) {
    let head: Vec<String> = signal.channel(0)[..5]
        .iter()
        .map(|x| format!("{:.4}", x))
        .collect();
    println!("{} channel 0, first 5 samples: [{}]", label, head.join(", "));
}
