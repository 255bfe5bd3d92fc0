//! Shared numeric helpers.

pub mod interp;

pub use interp::{cumsum, index_grid, interp};
