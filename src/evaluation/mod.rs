//! Route cost evaluation.

mod evaluator;

pub use evaluator::route_distance;
