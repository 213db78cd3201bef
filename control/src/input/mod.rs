//! Processing of the raw inputs over time.

pub mod debounced;
pub mod sampler;
