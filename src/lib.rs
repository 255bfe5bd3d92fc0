//! # sensor-augment
//!
//! Data-augmentation transforms for multi-channel time-series signals,
//! such as tri-axial accelerometer or gyroscope streams.
//!
//! Provides jitter, per-channel scaling, magnitude warping, time warping,
//! segment permutation, sparse random resampling, and random 3D rotation,
//! built on cubic-spline curve synthesis and piecewise-linear resampling.
//!
//! All transforms are pure functions over an in-memory [`core::Signal`]:
//! they never mutate their input, take an explicit random generator, and
//! are reproducible under a fixed seed.

pub mod augment;
pub mod core;
pub mod curve;
pub mod error;
pub mod utils;

pub use error::{AugmentError, Result};

pub mod prelude {
    pub use crate::augment::{
        jitter, magnitude_warp, permutation, random_sampling, rotation, scaling, time_warp,
        PermutationConfig,
    };
    pub use crate::core::Signal;
    pub use crate::curve::CurveConfig;
    pub use crate::error::{AugmentError, Result};
}
