//! Signal data structure for multi-channel time series.

use crate::error::{AugmentError, Result};

/// A multi-channel time-series signal of shape (T, C).
///
/// Values are stored column-major: `channels[c][t]` is the sample of
/// channel `c` at timestep `t`. All channels have the same length.
///
/// Augmentation operations never mutate their input; each returns a new
/// `Signal` of identical shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Values stored in column-major format: channels[channel][timestep]
    channels: Vec<Vec<f64>>,
}

impl Signal {
    /// Create a signal from per-channel sample vectors.
    ///
    /// # Errors
    /// Returns `EmptySignal` if there are no channels or no samples, and
    /// `ChannelLengthMismatch` if channel lengths differ.
    pub fn from_channels(channels: Vec<Vec<f64>>) -> Result<Self> {
        if channels.is_empty() || channels[0].is_empty() {
            return Err(AugmentError::EmptySignal);
        }

        let expected = channels[0].len();
        for (c, channel) in channels.iter().enumerate() {
            if channel.len() != expected {
                return Err(AugmentError::ChannelLengthMismatch {
                    channel: c,
                    expected,
                    got: channel.len(),
                });
            }
        }

        Ok(Self { channels })
    }

    /// Create a signal from row-major data: `rows[t][c]`.
    ///
    /// This matches the (T, C) layout most sensor logs use.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(AugmentError::EmptySignal);
        }

        let num_channels = rows[0].len();
        for (t, row) in rows.iter().enumerate() {
            if row.len() != num_channels {
                return Err(AugmentError::ChannelLengthMismatch {
                    channel: t,
                    expected: num_channels,
                    got: row.len(),
                });
            }
        }

        let mut channels = vec![Vec::with_capacity(rows.len()); num_channels];
        for row in rows {
            for (c, &value) in row.iter().enumerate() {
                channels[c].push(value);
            }
        }

        Ok(Self { channels })
    }

    /// Create a zero-filled signal with the given shape.
    pub fn zeros(num_timesteps: usize, num_channels: usize) -> Result<Self> {
        if num_timesteps == 0 || num_channels == 0 {
            return Err(AugmentError::EmptySignal);
        }
        Ok(Self {
            channels: vec![vec![0.0; num_timesteps]; num_channels],
        })
    }

    /// Number of timesteps (T).
    pub fn num_timesteps(&self) -> usize {
        self.channels[0].len()
    }

    /// Number of channels (C).
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Shape as (T, C).
    pub fn shape(&self) -> (usize, usize) {
        (self.num_timesteps(), self.num_channels())
    }

    /// Samples of a single channel.
    pub fn channel(&self, c: usize) -> &[f64] {
        &self.channels[c]
    }

    /// All channels in column-major order.
    pub fn channels(&self) -> &[Vec<f64>] {
        &self.channels
    }

    /// One observation across all channels at timestep `t`.
    pub fn row(&self, t: usize) -> Vec<f64> {
        self.channels.iter().map(|channel| channel[t]).collect()
    }

    /// Convert to row-major data: `rows[t][c]`.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.num_timesteps()).map(|t| self.row(t)).collect()
    }
}
