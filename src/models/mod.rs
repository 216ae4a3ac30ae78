//! Domain model types.
//!
//! A [`Route`] is a visiting order over the cities of a distance matrix.

mod route;

pub use route::Route;
