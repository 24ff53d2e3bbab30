//! Tableau-based primal simplex solver for small linear programs.
//!
//! Implements the classic two-dimensional-tableau primal simplex method for
//! problems with up to four decision variables, maximize or minimize
//! objectives, and "<=" constraints. The JSON boundary in [`request`] mirrors
//! the wire shapes expected by a surrounding transport layer.

pub mod configuration;
pub mod error;
pub mod pivot;
pub mod problem;
pub mod request;
pub mod solver;
pub mod standardize;
pub mod tableau;
