//! Local search operators.
//!
//! - [`two_opt_swap`] — 2-opt segment reversal

mod two_opt;

pub use two_opt::two_opt_swap;
