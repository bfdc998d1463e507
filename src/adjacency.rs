//! Complement-graph relations used by the domination reduction.
//!
//! A relation over `n` nodes marks a pair `(i, j)` as related iff the input graph has *no* edge
//! between `i` and `j`. A fresh relation assumes that no edge exists at all, and every parsed edge
//! clears its pair again. The diagonal is never related.
//!
//! Two storages implement `AdjacencyRelation`:
//! * `DenseRelation`, a flat `n * n` matrix of `bool`s.
//! * `BitRelation`, one bitset per row, which compares whole rows word by word.

/// Symmetric relation between the nodes `0..n`.
pub trait AdjacencyRelation {

    /// Returns the relation over `n` nodes in which every pair of distinct nodes is related.
    fn complete(n: usize) -> Self where Self: Sized;

    /// Returns the number of nodes of `self`.
    fn num_nodes(&self) -> usize;

    /// Checks if `i` and `j` are related, i.e. no edge between them was given.
    fn is_related(&self, i: usize, j: usize) -> bool;

    /// Removes the pair `(i, j)` and its mirror `(j, i)` from the relation.
    fn clear(&mut self, i: usize, j: usize);

    /// Checks if every node related to `i` is also related to `j`.
    fn row_within(&self, i: usize, j: usize) -> bool {
        (0..self.num_nodes()).all(|k| !self.is_related(i, k) || self.is_related(j, k))
    }
}

/// Dense complement matrix, `cells[n*r+c] == true` means that `r` and `c` are not adjacent.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct DenseRelation {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyRelation for DenseRelation {

    fn complete(n: usize) -> Self {
        let mut cells = vec![true; n * n];
        for i in 0..n {
            cells[i * n + i] = false;
        }
        DenseRelation { n, cells }
    }

    fn num_nodes(&self) -> usize {
        self.n
    }

    fn is_related(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }

    fn clear(&mut self, i: usize, j: usize) {
        self.cells[i * self.n + j] = false;
        self.cells[j * self.n + i] = false;
    }
}

const WORD: usize = u64::BITS as usize;

/// Complement matrix stored as one bitset per row.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct BitRelation {
    n: usize,
    /// Number of `u64` words per row.
    stride: usize,
    words: Vec<u64>,
}

impl BitRelation {

    fn row(&self, i: usize) -> &[u64] {
        &self.words[i * self.stride..(i + 1) * self.stride]
    }

    fn unset(&mut self, i: usize, j: usize) {
        self.words[i * self.stride + j / WORD] &= !(1u64 << (j % WORD));
    }
}

impl AdjacencyRelation for BitRelation {

    fn complete(n: usize) -> Self {
        let stride = (n + WORD - 1) / WORD;
        let mut words = vec![u64::MAX; n * stride];
        // Mask out the padding bits of the last word in every row.
        if n % WORD != 0 {
            let mask = (1u64 << (n % WORD)) - 1;
            for r in 0..n {
                words[r * stride + stride - 1] &= mask;
            }
        }
        let mut relation = BitRelation { n, stride, words };
        for i in 0..n {
            relation.unset(i, i);
        }
        relation
    }

    fn num_nodes(&self) -> usize {
        self.n
    }

    fn is_related(&self, i: usize, j: usize) -> bool {
        self.words[i * self.stride + j / WORD] & (1u64 << (j % WORD)) != 0
    }

    fn clear(&mut self, i: usize, j: usize) {
        self.unset(i, j);
        self.unset(j, i);
    }

    fn row_within(&self, i: usize, j: usize) -> bool {
        self.row(i)
            .iter()
            .zip(self.row(j))
            .all(|(a, b)| a & !b == 0)
    }
}
