//! Distance matrices.
//!
//! Provides a dense, row-major distance matrix with checked construction.

mod matrix;

pub use matrix::DistanceMatrix;
