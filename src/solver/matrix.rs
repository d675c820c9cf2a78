//! Toroidal doubly-linked sparse matrix backing the solver
//!
//! All nodes live in one arena; links are arena indices, never pointers.
//! Index 0 is the sentinel master header, indices `1..=columns` are the
//! column headers and data nodes follow. Within a column, nodes are kept
//! sorted by row id ascending; within a row, insertion order is
//! preserved and the links are cyclic in both directions.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

// Row id carried by the sentinel and the column headers.
const HEADER_ROW: usize = usize::MAX;

#[derive(Debug, Clone)]
struct Node {
    up: usize,
    down: usize,
    left: usize,
    right: usize,
    row: usize,
    col: usize,
}

impl Node {
    fn detached(row: usize, col: usize) -> Self {
        Self {
            up: 0,
            down: 0,
            left: 0,
            right: 0,
            row,
            col,
        }
    }
}

/// Sparse 0/1 matrix with O(1) reversible row/column removal
#[derive(Debug, Clone)]
pub struct DlxMatrix {
    nodes: Vec<Node>,
    sizes: Vec<usize>,
    columns: usize,
    next_row: usize,
}

impl DlxMatrix {
    /// Create a matrix with the given number of columns and no rows
    pub fn new(columns: usize) -> Self {
        let mut nodes = Vec::with_capacity(columns + 1);
        nodes.push(Node::detached(HEADER_ROW, usize::MAX));

        // Column headers link into a cyclic horizontal ring through the
        // sentinel; their vertical links loop back to themselves.
        for col in 0..columns {
            let index = col + 1;
            nodes.push(Node {
                up: index,
                down: index,
                left: index - 1,
                right: 0,
                row: HEADER_ROW,
                col,
            });
            nodes[index - 1].right = index;
        }
        nodes[0].left = columns;

        Self {
            nodes,
            sizes: vec![0; columns],
            columns,
            next_row: 0,
        }
    }

    /// Total number of columns, linked or covered
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows added so far
    pub const fn rows(&self) -> usize {
        self.next_row
    }

    /// Number of data nodes currently linked into a column
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn column_size(&self, col: usize) -> usize {
        self.sizes[col]
    }

    /// Append a row covering the given columns
    ///
    /// Empty input is a no-op. Nodes are linked into their columns at
    /// the position keeping row ids ascending, and into a cyclic
    /// horizontal list in the order the values are given.
    ///
    /// # Panics
    ///
    /// Panics if any column index is out of range; malformed rows are a
    /// programmer contract violation.
    pub fn add_row(&mut self, values: &[usize]) {
        if values.is_empty() {
            return;
        }

        let row = self.next_row;
        let first = self.nodes.len();

        for (offset, &col) in values.iter().enumerate() {
            assert!(
                col < self.columns,
                "column index {col} out of range for {} columns",
                self.columns
            );

            let index = self.nodes.len();
            let mut node = Node::detached(row, col);
            node.left = if offset == 0 { index } else { index - 1 };
            node.right = first;
            self.nodes.push(node);
            if offset > 0 {
                self.nodes[index - 1].right = index;
            }

            self.link_into_column(index);
        }

        // Close the horizontal cycle back from the first node.
        let last = self.nodes.len() - 1;
        self.nodes[first].left = last;

        self.next_row = row + 1;
    }

    // Walks the column downward to the first node with a higher row id
    // and splices the new node in front of it.
    fn link_into_column(&mut self, index: usize) {
        let col = self.nodes[index].col;
        let row = self.nodes[index].row;
        let header = col + 1;

        let mut successor = self.nodes[header].down;
        while successor != header && self.nodes[successor].row < row {
            successor = self.nodes[successor].down;
        }

        let predecessor = self.nodes[successor].up;
        self.nodes[index].up = predecessor;
        self.nodes[index].down = successor;
        self.nodes[predecessor].down = index;
        self.nodes[successor].up = index;

        self.sizes[col] += 1;
    }

    /// Remove a column and every row that covers it from the matrix
    ///
    /// The removed rows keep their internal links intact so `uncover`
    /// can splice them back.
    pub fn cover(&mut self, col: usize) {
        let header = col + 1;

        let left = self.nodes[header].left;
        let right = self.nodes[header].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut row_node = self.nodes[header].down;
        while row_node != header {
            let mut node = self.nodes[row_node].right;
            while node != row_node {
                let up = self.nodes[node].up;
                let down = self.nodes[node].down;
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[self.nodes[node].col] -= 1;
                node = self.nodes[node].right;
            }
            row_node = self.nodes[row_node].down;
        }
    }

    /// Exact inverse of `cover`: bottom-to-top rows, right-to-left nodes
    ///
    /// After `cover(c)` followed by `uncover(c)` the matrix is
    /// bit-identical to its pre-cover state.
    pub fn uncover(&mut self, col: usize) {
        let header = col + 1;

        let mut row_node = self.nodes[header].up;
        while row_node != header {
            let mut node = self.nodes[row_node].left;
            while node != row_node {
                let up = self.nodes[node].up;
                let down = self.nodes[node].down;
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                self.sizes[self.nodes[node].col] += 1;
                node = self.nodes[node].left;
            }
            row_node = self.nodes[row_node].up;
        }

        let left = self.nodes[header].left;
        let right = self.nodes[header].right;
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }

    /// Column indices of the headers still linked into the header ring,
    /// left to right from the sentinel
    pub fn linked_columns(&self) -> Vec<usize> {
        let mut linked = Vec::new();
        let mut index = self.nodes[0].right;
        while index != 0 {
            linked.push(self.nodes[index].col);
            index = self.nodes[index].right;
        }
        linked
    }

    /// Data node indices of a column, top to bottom
    pub(crate) fn column_nodes(&self, col: usize) -> Vec<usize> {
        let header = col + 1;
        let mut nodes = Vec::with_capacity(self.sizes[col]);
        let mut index = self.nodes[header].down;
        while index != header {
            nodes.push(index);
            index = self.nodes[index].down;
        }
        nodes
    }

    pub(crate) fn col_of(&self, node: usize) -> usize {
        self.nodes[node].col
    }

    pub(crate) fn right_of(&self, node: usize) -> usize {
        self.nodes[node].right
    }

    pub(crate) fn left_of(&self, node: usize) -> usize {
        self.nodes[node].left
    }

    /// The full set of column indices of the row containing `node`
    pub(crate) fn row_columns(&self, node: usize) -> BTreeSet<usize> {
        let mut cols = BTreeSet::new();
        cols.insert(self.nodes[node].col);
        let mut current = self.nodes[node].right;
        while current != node {
            cols.insert(self.nodes[current].col);
            current = self.nodes[current].right;
        }
        cols
    }

    /// Digest of the complete link structure and column sizes
    ///
    /// Two matrices in identical states produce identical digests; used
    /// to assert the cover/uncover round-trip invariant.
    pub fn link_digest(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for node in &self.nodes {
            (node.up, node.down, node.left, node.right, node.row, node.col).hash(&mut hasher);
        }
        self.sizes.hash(&mut hasher);
        hasher.finish()
    }
}
