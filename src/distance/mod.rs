//! Distance matrices.
//!
//! Provides the dense squared distance matrix shared by all trials of a run.

mod matrix;

pub use matrix::SquaredDistanceMatrix;
