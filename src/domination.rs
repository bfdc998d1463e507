//! The domination reduction.
//!
//! A node `i` dominates a node `j` if every node related to `i` in the complement relation is
//! also related to `j`. Since the diagonal is never related, this requires `i` and `j` to be
//! adjacent in the input graph.
//!
//! The scan runs over all ordered pairs `(i, j)` with `i` in the outer loop. A node that has
//! already been recorded as a dominator is never tried as a dominator again, so each row stops
//! at its first hit and the result depends on the iteration order, not only on the relation.
//! Two twins therefore dominate each other in turn and both leave the independent set.

use fxhash::FxHashSet;
use log::debug;
use crate::adjacency::AdjacencyRelation;
use crate::cust_error::ProcessingError;

/// Accumulated result of the domination scan.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Domination {
    node_count: usize,
    dominators: Vec<usize>,
    dominated: Vec<(usize, usize)>,
    lookup: FxHashSet<usize>,
}

impl Domination {

    pub fn new(node_count: usize) -> Self {
        Domination {
            node_count,
            ..Default::default()
        }
    }

    /// Runs the full scan over `relation` and returns the accumulated dominations.
    pub fn analyze<A: AdjacencyRelation>(relation: &A) -> Self {
        let n = relation.num_nodes();
        let mut domination = Domination::new(n);
        for i in 0..n {
            for j in 0..n {
                if i == j || domination.is_dominator(i) {
                    continue
                }
                if relation.row_within(i, j) {
                    domination.record(j, i);
                }
            }
        }
        debug!("Domination scan over {} nodes found {} dominators", n, domination.dominators.len());
        domination
    }

    /// Records that `dominator` dominates `dominated`.
    fn record(&mut self, dominated: usize, dominator: usize) {
        debug!("{} dominates {}", dominator, dominated);
        self.dominators.push(dominator);
        self.dominated.push((dominated, dominator));
        self.lookup.insert(dominator);
    }

    /// Checks if `node` has been recorded as a dominator.
    pub fn is_dominator(&self, node: usize) -> bool {
        self.lookup.contains(&node)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Nodes that dominate some other node, in discovery order.
    pub fn dominators(&self) -> &[usize] {
        &self.dominators
    }

    /// `(dominated, dominator)` pairs, in discovery order.
    pub fn dominated(&self) -> &[(usize, usize)] {
        &self.dominated
    }

    pub fn independent_count(&self) -> usize {
        self.node_count - self.lookup.len()
    }

    /// Returns an `Iterator` over all nodes that are not dominators, in ascending order.
    pub fn independent(&self) -> impl Iterator<Item=usize> + '_ {
        (0..self.node_count).filter(|node| !self.is_dominator(*node))
    }

    /// Returns an `Iterator` over the related pairs `(i, j)`, `i < j`, of independent nodes in
    /// lexicographic order.
    pub fn independent_edges<'a, A: AdjacencyRelation>(&'a self, relation: &'a A)
        -> impl Iterator<Item=(usize, usize)> + 'a {
        self.independent().flat_map(move |i| {
            self.independent()
                .filter(move |j| i < *j && relation.is_related(i, *j))
                .map(move |j| (i, j))
        })
    }

    /// Checks that the dominators and the dominated pairs still run in parallel.
    pub fn check_consistency(&self) -> Result<(), ProcessingError> {
        if self.dominators.len() != self.dominated.len() {
            return Err(ProcessingError::ReductionInconsistency {
                dominators: self.dominators.len(),
                dominated: self.dominated.len(),
            })
        }
        Ok(())
    }

    /// Assembles a `Domination` from given collections, which need not run in parallel.
    #[cfg(test)]
    pub(crate) fn from_parts(node_count: usize, dominators: Vec<usize>, dominated: Vec<(usize, usize)>) -> Self {
        let lookup = dominators.iter().copied().collect();
        Domination { node_count, dominators, dominated, lookup }
    }
}
