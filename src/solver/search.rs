//! Algorithm X search over the sparse matrix
//!
//! Knuth's recursive backtracking search for exact covers, with the
//! minimum-size column heuristic restricted to mandatory columns. In
//! partial-cover mode the leading `optional` columns may stay uncovered;
//! a partial assignment is a solution as soon as no mandatory column
//! remains linked.

use crate::solver::matrix::DlxMatrix;
use std::collections::BTreeSet;

/// A row fingerprint: the full set of column indices the row covers
pub type RowKey = BTreeSet<usize>;

/// One exact cover: the fingerprints of the selected rows, in selection
/// order
pub type Solution = Vec<RowKey>;

/// Exact-cover solver over a column universe split into an optional
/// prefix and a mandatory suffix
#[derive(Debug, Clone)]
pub struct DlxSolver {
    matrix: DlxMatrix,
    optional: usize,
}

impl DlxSolver {
    /// Create a partial-cover solver
    ///
    /// Columns `[0, optional)` may be covered at most once; columns
    /// `[optional, optional + mandatory)` must be covered exactly once.
    pub fn new(optional: usize, mandatory: usize) -> Self {
        Self {
            matrix: DlxMatrix::new(optional + mandatory),
            optional,
        }
    }

    /// Create a full-cover solver: every column is mandatory
    pub fn full_cover(columns: usize) -> Self {
        Self::new(0, columns)
    }

    /// Number of leading optional columns
    pub const fn optional_columns(&self) -> usize {
        self.optional
    }

    /// Total number of columns
    pub const fn columns(&self) -> usize {
        self.matrix.columns()
    }

    /// Number of rows added so far
    pub const fn rows(&self) -> usize {
        self.matrix.rows()
    }

    /// Append a row covering the given column indices
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range (programmer contract).
    pub fn add_row(&mut self, values: &[usize]) {
        self.matrix.add_row(values);
    }

    /// Read access to the underlying matrix
    pub const fn matrix(&self) -> &DlxMatrix {
        &self.matrix
    }

    /// Enumerate all covers of the mandatory columns
    ///
    /// The matrix is restored to its pre-search state before returning,
    /// so `solve` can be called again.
    pub fn solve(&mut self) -> Vec<Solution> {
        let mut solutions = Vec::new();
        let mut stack = Vec::new();
        self.search(&mut stack, &mut solutions);
        solutions
    }

    fn search(&mut self, stack: &mut Vec<usize>, solutions: &mut Vec<Solution>) {
        let Some(col) = self.choose_column() else {
            // Only optional columns remain: the current selection covers
            // every mandatory column.
            solutions.push(
                stack
                    .iter()
                    .map(|&node| self.matrix.row_columns(node))
                    .collect(),
            );
            return;
        };

        if self.matrix.column_size(col) == 0 {
            return;
        }

        #[cfg(debug_assertions)]
        let digest_before = self.matrix.link_digest();

        self.matrix.cover(col);

        // Snapshot after covering: inner cover/uncover pairs are balanced
        // by the time the next row is visited, so the snapshot matches a
        // live link traversal.
        for node in self.matrix.column_nodes(col) {
            stack.push(node);

            let mut sibling = self.matrix.right_of(node);
            while sibling != node {
                self.matrix.cover(self.matrix.col_of(sibling));
                sibling = self.matrix.right_of(sibling);
            }

            self.search(stack, solutions);

            let mut sibling = self.matrix.left_of(node);
            while sibling != node {
                self.matrix.uncover(self.matrix.col_of(sibling));
                sibling = self.matrix.left_of(sibling);
            }

            stack.pop();
        }

        self.matrix.uncover(col);

        #[cfg(debug_assertions)]
        debug_assert_eq!(
            digest_before,
            self.matrix.link_digest(),
            "cover/uncover round trip must restore the matrix exactly"
        );
    }

    // Minimum-size mandatory column still linked, first encountered
    // wins ties; None when every linked column is optional.
    fn choose_column(&self) -> Option<usize> {
        let mut chosen = None;
        let mut min_size = usize::MAX;

        for col in self.matrix.linked_columns() {
            if col < self.optional {
                continue;
            }
            let size = self.matrix.column_size(col);
            if size < min_size {
                min_size = size;
                chosen = Some(col);
            }
        }

        chosen
    }
}
