//! Core data structures.

pub mod signal;

pub use signal::Signal;
