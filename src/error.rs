//! Error types for the sensor-augment library.

use thiserror::Error;

/// Result type alias for augmentation operations.
pub type Result<T> = std::result::Result<T, AugmentError>;

/// Errors that can occur during augmentation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AugmentError {
    /// Input signal has no timesteps or no channels.
    #[error("empty signal")]
    EmptySignal,

    /// Channels of a signal have inconsistent lengths.
    #[error("channel length mismatch: channel {channel} has {got} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        got: usize,
    },

    /// Operation requires a specific channel count.
    #[error("channel count mismatch: expected {expected}, got {got}")]
    ChannelMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Not enough timesteps for the operation.
    #[error("insufficient timesteps: need at least {needed}, got {got}")]
    InsufficientTimesteps { needed: usize, got: usize },

    /// Rejection sampling exhausted its retry budget.
    #[error("segment sampling did not converge after {attempts} attempts")]
    NonConvergence { attempts: usize },

    /// Numerical failure during computation.
    #[error("computation error: {0}")]
    Computation(String),
}
