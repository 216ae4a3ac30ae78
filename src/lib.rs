//! # tsp-ls
//!
//! Approximate open-path traveling salesman solutions by randomized 2-opt
//! local search with stagnation-driven restarts.
//!
//! ## Modules
//!
//! - [`distance`] — Dense distance matrix with checked construction
//! - [`models`] — Route type (permutation of city indices)
//! - [`constructive`] — Random initial routes (Fisher–Yates)
//! - [`evaluation`] — Open-path route length
//! - [`local_search`] — 2-opt segment reversal
//! - [`search`] — Sweep/restart search, multi-start, and the [`tsp_ls`] entry point
//! - [`error`] — Matrix construction errors

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod search;

pub use search::tsp_ls;
