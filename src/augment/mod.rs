//! Augmentation transforms for multi-channel signals.
//!
//! Magnitude-domain: [`jitter`], [`scaling`], [`magnitude_warp`].
//! Time-domain: [`time_warp`], [`random_sampling`], [`permutation`].
//! Spatial: [`rotation`] for tri-axial signals.
//!
//! Every transform takes the signal by reference and a caller-owned RNG,
//! returning a new signal of the same shape. Seeding the RNG makes any
//! pipeline reproducible.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use sensor_augment::augment::{jitter, time_warp};
//! use sensor_augment::core::Signal;
//! use sensor_augment::curve::CurveConfig;
//!
//! let signal = Signal::zeros(100, 3).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let warped = time_warp(&signal, &CurveConfig::new(0.2), &mut rng).unwrap();
//! let noisy = jitter(&warped, 0.05, &mut rng).unwrap();
//! assert_eq!(noisy.shape(), (100, 3));
//! ```

pub mod magnitude;
pub mod rotation;
pub mod time;

pub use magnitude::{jitter, magnitude_warp, scaling};
pub use rotation::{axis_angle_to_matrix, rotation, RotationMatrix};
pub use time::{permutation, random_sampling, time_warp, PermutationConfig};
