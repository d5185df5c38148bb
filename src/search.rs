//! The clique search engine.
//!
//! A group of N mutually letter-disjoint words is an N-clique in the
//! compatibility graph. The search extends a partial group depth-first,
//! and the key pruning step is that the set of indices still eligible to
//! extend the group (`available`) is intersected with the chosen word's
//! neighbor list at every step. The frontier only ever shrinks, so a dead
//! branch is abandoned the moment no compatible candidate remains, usually
//! long before depth N. Without this narrowing the search would degenerate
//! into testing all C(M, N) combinations.
//!
//! Indices in a partial group are strictly increasing: neighbor lists only
//! contain forward indices and every recursion raises the lower bound past
//! the word just chosen, so each word set is enumerated exactly once, in
//! ascending index order.

use crate::graph::CompatibilityGraph;
use rayon::prelude::*;

/// Counters accumulated over one search run.
///
/// Explicit state rather than process-wide globals, so runs are
/// independent, testable, and safe to execute in parallel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Top-level candidate words whose subtree has been explored
    pub roots_processed: usize,
    /// Recursive search calls entered, including the root calls
    pub nodes_visited: u64,
    /// Complete groups reported
    pub groups_found: u64,
}

impl SearchStats {
    fn merge(&mut self, other: SearchStats) {
        self.roots_processed += other.roots_processed;
        self.nodes_visited += other.nodes_visited;
        self.groups_found += other.groups_found;
    }
}

/// Everything one search run produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Each group is a strictly increasing sequence of exactly N candidate
    /// indices, in discovery order.
    pub groups: Vec<Vec<usize>>,
    pub stats: SearchStats,
}

/// Progress hooks for an external reporter.
///
/// `on_root` fires once per top-level candidate before its subtree is
/// searched, carrying the progress fraction (`processed` of `total` roots)
/// and the running `nodes_visited` count so a renderer can derive a
/// checks-per-second rate; `on_group` fires once per completed group. The
/// engine itself never touches the wall clock or the console; anything
/// time- or terminal-shaped lives behind this trait.
pub trait SearchObserver {
    fn on_root(&mut self, _processed: usize, _total: usize, _nodes_visited: u64) {}
    fn on_group(&mut self, _group: &[usize]) {}
}

/// Observer that ignores everything, for observer-free runs
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Enumerates every group of `group_size` pairwise-compatible words.
pub struct CliqueSearch<'a> {
    graph: &'a CompatibilityGraph,
    group_size: usize,
}

impl<'a> CliqueSearch<'a> {
    /// `group_size` is N, the number of words per reported group. Must be
    /// at least 1.
    pub fn new(graph: &'a CompatibilityGraph, group_size: usize) -> Self {
        assert!(group_size >= 1, "group size must be at least 1");
        Self { graph, group_size }
    }

    /// Run the search sequentially.
    ///
    /// Deterministic: groups are discovered in ascending lexicographic
    /// order of their index sequences, because root iteration and frontier
    /// intersection both preserve ascending order.
    pub fn run(&self, observer: &mut dyn SearchObserver) -> SearchOutcome {
        let total = self.graph.len();
        let mut stats = SearchStats::default();
        let mut groups = Vec::new();
        let mut partial = Vec::with_capacity(self.group_size);

        for root in 0..total {
            stats.roots_processed += 1;
            observer.on_root(stats.roots_processed, total, stats.nodes_visited);

            partial.push(root);
            self.extend(
                1,
                self.graph.neighbors(root),
                &mut partial,
                root + 1,
                &mut groups,
                &mut stats,
                observer,
            );
            partial.pop();
        }

        SearchOutcome { groups, stats }
    }

    /// Run the search with one rayon task per top-level candidate.
    ///
    /// Root subtrees are fully independent and share only the read-only
    /// graph, so no locking is involved: each worker accumulates its own
    /// group list and counters, merged once at the end. Groups stay in
    /// discovery order within each root; no observer hooks fire.
    pub fn run_parallel(&self) -> SearchOutcome {
        let per_root: Vec<(Vec<Vec<usize>>, SearchStats)> = (0..self.graph.len())
            .into_par_iter()
            .map(|root| {
                let mut stats = SearchStats {
                    roots_processed: 1,
                    ..SearchStats::default()
                };
                let mut groups = Vec::new();
                let mut partial = Vec::with_capacity(self.group_size);

                partial.push(root);
                self.extend(
                    1,
                    self.graph.neighbors(root),
                    &mut partial,
                    root + 1,
                    &mut groups,
                    &mut stats,
                    &mut NullObserver,
                );
                (groups, stats)
            })
            .collect();

        let mut outcome = SearchOutcome {
            groups: Vec::new(),
            stats: SearchStats::default(),
        };
        for (groups, stats) in per_root {
            outcome.groups.extend(groups);
            outcome.stats.merge(stats);
        }
        outcome
    }

    /// Extend a partial group of `depth` words by every eligible candidate.
    ///
    /// `available` is sorted ascending and already intersected with every
    /// chosen word's neighbor list. Entries below `lower_bound` are stale
    /// carryovers from shallower intersections and are skipped, never
    /// re-chosen.
    #[allow(clippy::too_many_arguments)]
    fn extend(
        &self,
        depth: usize,
        available: &[usize],
        partial: &mut Vec<usize>,
        lower_bound: usize,
        groups: &mut Vec<Vec<usize>>,
        stats: &mut SearchStats,
        observer: &mut dyn SearchObserver,
    ) {
        stats.nodes_visited += 1;

        if depth == self.group_size {
            stats.groups_found += 1;
            observer.on_group(partial);
            groups.push(partial.clone());
            return;
        }

        for &candidate in available {
            if candidate < lower_bound {
                continue;
            }

            let narrowed = intersect_sorted(available, self.graph.neighbors(candidate));

            partial.push(candidate);
            self.extend(
                depth + 1,
                &narrowed,
                partial,
                candidate + 1,
                groups,
                stats,
                observer,
            );
            partial.pop();
        }
    }
}

/// Intersection of two sorted ascending index slices, linear in both.
pub fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
