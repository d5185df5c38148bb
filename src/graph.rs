//! The letter-disjointness compatibility graph.
//!
//! For every candidate index i we precompute the sorted list of indices
//! j > i whose masks share no bit with i's. Restricting neighbors to
//! strictly greater indices fixes a canonical ascending order on every
//! group the search will ever report, so no permutation of the same word
//! set can be derived twice. Building the graph costs O(M²) single-AND
//! tests; it is done once and reused across searches regardless of the
//! requested group size.

use crate::words::Candidates;
use rayon::prelude::*;

/// Per-index forward neighbor lists, sorted ascending with no duplicates.
#[derive(Debug, Clone)]
pub struct CompatibilityGraph {
    neighbors: Vec<Vec<usize>>,
}

impl CompatibilityGraph {
    /// Build the graph from the candidate list.
    ///
    /// Rows are independent, so they are computed in parallel; each row
    /// scans indices above its own and keeps the mask-disjoint ones,
    /// which arrive already in ascending order.
    pub fn build(candidates: &Candidates) -> Self {
        let masks = candidates.masks();
        let neighbors = (0..masks.len())
            .into_par_iter()
            .map(|i| {
                let mask = masks[i];
                (i + 1..masks.len())
                    .filter(|&j| mask.is_disjoint(masks[j]))
                    .collect()
            })
            .collect();
        Self { neighbors }
    }

    /// Number of candidate words in the graph
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Indices compatible with `index`, all strictly greater than it
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Total number of compatible pairs
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(|n| n.len()).sum()
    }
}
