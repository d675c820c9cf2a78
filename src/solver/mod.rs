//! Dancing Links exact-cover solver
//!
//! The matrix is a toroidal doubly-linked sparse matrix stored in a
//! single node arena with index links, and the search is Knuth's
//! Algorithm X with the minimum-size column heuristic. A prefix of
//! columns may be marked optional (partial cover): optional columns are
//! never branched on and may stay uncovered in a solution.

/// Node arena and link mutation (cover/uncover)
pub mod matrix;
/// Algorithm X search over the matrix
pub mod search;

pub use matrix::DlxMatrix;
pub use search::{DlxSolver, RowKey, Solution};
