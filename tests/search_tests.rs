use itertools::Itertools;
use word_cliques::search::intersect_sorted;
use word_cliques::{
    Candidates, CliqueSearch, CompatibilityGraph, LetterMask, NullObserver, SearchObserver,
};

fn build(words: &[&str], word_length: usize) -> (Candidates, CompatibilityGraph) {
    let candidates =
        Candidates::new(words.iter().map(|w| w.to_string()).collect(), word_length).unwrap();
    let graph = CompatibilityGraph::build(&candidates);
    (candidates, graph)
}

/// Every N-subset of indices that is pairwise mask-disjoint, in ascending
/// lexicographic order. The oracle the engine must agree with.
fn brute_force_groups(candidates: &Candidates, group_size: usize) -> Vec<Vec<usize>> {
    (0..candidates.len())
        .combinations(group_size)
        .filter(|combo| {
            combo
                .iter()
                .tuple_combinations()
                .all(|(&i, &j)| candidates.mask(i).is_disjoint(candidates.mask(j)))
        })
        .collect()
}

#[test]
fn test_toy_dictionary_single_group() {
    let (candidates, graph) = build(&["abc", "def", "cde"], 3);
    let outcome = CliqueSearch::new(&graph, 2).run(&mut NullObserver);

    assert_eq!(outcome.groups, vec![vec![0, 1]]);
    let words: Vec<&str> = outcome.groups[0]
        .iter()
        .map(|&i| candidates.word(i))
        .collect();
    assert_eq!(words, vec!["abc", "def"]);
}

#[test]
fn test_toy_dictionary_no_groups() {
    let (_, graph) = build(&["abc", "abd"], 3);
    let outcome = CliqueSearch::new(&graph, 2).run(&mut NullObserver);

    assert!(outcome.groups.is_empty());
    assert_eq!(outcome.stats.groups_found, 0);
}

#[test]
fn test_all_pairs_compatible() {
    let (_, graph) = build(&["ab", "cd", "ef", "gh"], 2);
    let outcome = CliqueSearch::new(&graph, 2).run(&mut NullObserver);

    assert_eq!(
        outcome.groups,
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ]
    );
}

#[test]
fn test_group_invariants() {
    let words = ["abc", "def", "ghi", "jkl", "adg", "beh", "cfi", "mno"];
    let (candidates, graph) = build(&words, 3);
    let group_size = 3;
    let outcome = CliqueSearch::new(&graph, group_size).run(&mut NullObserver);

    assert!(!outcome.groups.is_empty());
    for group in &outcome.groups {
        assert_eq!(group.len(), group_size);
        for window in group.windows(2) {
            assert!(window[0] < window[1], "indices not strictly increasing");
        }
        let union = group
            .iter()
            .fold(LetterMask::EMPTY, |acc, &i| acc.union(candidates.mask(i)));
        assert_eq!(union.letter_count(), group_size * candidates.word_length());
    }
}

#[test]
fn test_no_group_reported_twice() {
    let words = ["ab", "cd", "ef", "gh", "ij", "kl"];
    let (_, graph) = build(&words, 2);
    let outcome = CliqueSearch::new(&graph, 3).run(&mut NullObserver);

    let unique: Vec<_> = outcome.groups.iter().unique().collect();
    assert_eq!(unique.len(), outcome.groups.len());
}

#[test]
fn test_exhaustive_against_brute_force() {
    let words = [
        "abc", "def", "ghi", "jkl", "adg", "beh", "cfi", "abd", "efg", "hij", "klm", "xyz",
    ];
    let (candidates, graph) = build(&words, 3);

    for group_size in 2..=4 {
        let outcome = CliqueSearch::new(&graph, group_size).run(&mut NullObserver);
        let expected = brute_force_groups(&candidates, group_size);
        assert_eq!(outcome.groups, expected, "group size {group_size}");
    }
}

#[test]
fn test_discovery_order_is_lexicographic() {
    let words = ["ab", "cd", "ef", "gh", "ij", "ac", "bd"];
    let (_, graph) = build(&words, 2);
    let outcome = CliqueSearch::new(&graph, 3).run(&mut NullObserver);

    for window in outcome.groups.windows(2) {
        assert!(window[0] < window[1], "discovery order not ascending");
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let words = [
        "abc", "def", "ghi", "jkl", "adg", "beh", "cfi", "abd", "efg", "hij", "klm", "xyz",
    ];
    let (_, graph) = build(&words, 3);
    let search = CliqueSearch::new(&graph, 3);

    let sequential = search.run(&mut NullObserver);
    let parallel = search.run_parallel();

    let mut seq_groups = sequential.groups.clone();
    let mut par_groups = parallel.groups.clone();
    seq_groups.sort();
    par_groups.sort();
    assert_eq!(seq_groups, par_groups);
    assert_eq!(sequential.stats, parallel.stats);
}

#[derive(Default)]
struct CountingObserver {
    roots: usize,
    last_total: usize,
    node_counts: Vec<u64>,
    groups: Vec<Vec<usize>>,
}

impl SearchObserver for CountingObserver {
    fn on_root(&mut self, processed: usize, total: usize, nodes_visited: u64) {
        self.roots = processed;
        self.last_total = total;
        self.node_counts.push(nodes_visited);
    }

    fn on_group(&mut self, group: &[usize]) {
        self.groups.push(group.to_vec());
    }
}

#[test]
fn test_observer_hooks() {
    let words = ["ab", "cd", "ef", "bc"];
    let (_, graph) = build(&words, 2);
    let mut observer = CountingObserver::default();
    let outcome = CliqueSearch::new(&graph, 2).run(&mut observer);

    assert_eq!(observer.roots, words.len());
    assert_eq!(observer.last_total, words.len());
    assert_eq!(observer.groups, outcome.groups);
}

#[test]
fn test_observer_sees_running_node_count() {
    let words = ["ab", "cd", "ef", "gh"];
    let (_, graph) = build(&words, 2);
    let mut observer = CountingObserver::default();
    let outcome = CliqueSearch::new(&graph, 2).run(&mut observer);

    // One count per root, starting from zero before any node is entered,
    // never decreasing, never exceeding the final total.
    assert_eq!(observer.node_counts.len(), words.len());
    assert_eq!(observer.node_counts[0], 0);
    for window in observer.node_counts.windows(2) {
        assert!(window[0] <= window[1]);
    }
    assert!(*observer.node_counts.last().unwrap() <= outcome.stats.nodes_visited);
}

#[test]
fn test_stats_counters() {
    let words = ["ab", "cd", "ef", "gh"];
    let (_, graph) = build(&words, 2);
    let outcome = CliqueSearch::new(&graph, 2).run(&mut NullObserver);

    assert_eq!(outcome.stats.roots_processed, words.len());
    assert_eq!(outcome.stats.groups_found, outcome.groups.len() as u64);
    // One node per root plus one per reported group, at minimum.
    assert!(outcome.stats.nodes_visited >= (words.len() + outcome.groups.len()) as u64);
}

#[test]
fn test_empty_dictionary() {
    let candidates = Candidates::new(vec![], 5).unwrap();
    let graph = CompatibilityGraph::build(&candidates);
    let outcome = CliqueSearch::new(&graph, 5).run(&mut NullObserver);

    assert!(outcome.groups.is_empty());
    assert_eq!(outcome.stats.nodes_visited, 0);
}

#[test]
fn test_group_size_larger_than_any_clique() {
    let (_, graph) = build(&["abc", "def", "cde"], 3);
    let outcome = CliqueSearch::new(&graph, 3).run(&mut NullObserver);
    assert!(outcome.groups.is_empty());
}

#[test]
fn test_group_size_one() {
    let (_, graph) = build(&["abc", "def"], 3);
    let outcome = CliqueSearch::new(&graph, 1).run(&mut NullObserver);
    assert_eq!(outcome.groups, vec![vec![0], vec![1]]);
}

#[test]
fn test_nodes_visited_counts_each_partial_group_once() {
    // Because the frontier is intersected down to exactly the common
    // neighbors of every chosen word, each search node corresponds to one
    // pairwise-compatible strictly-increasing index sequence of size 1..=N.
    // A frontier that ever grew, or re-offered a stale or incompatible
    // candidate, would inflate this count.
    let words = [
        "abc", "def", "ghi", "jkl", "adg", "beh", "cfi", "abd", "efg", "hij", "klm", "xyz",
    ];
    let (candidates, graph) = build(&words, 3);
    let group_size = 3;
    let outcome = CliqueSearch::new(&graph, group_size).run(&mut NullObserver);

    let expected_nodes: u64 = (1..=group_size)
        .map(|k| brute_force_groups(&candidates, k).len() as u64)
        .sum();
    assert_eq!(outcome.stats.nodes_visited, expected_nodes);
}

#[test]
fn test_intersection_narrows_frontier() {
    // The next frontier is always a subset of the current one.
    let available = vec![1, 3, 5, 7, 9];
    let neighbors = vec![2, 3, 4, 7, 10];
    let narrowed = intersect_sorted(&available, &neighbors);

    assert_eq!(narrowed, vec![3, 7]);
    assert!(narrowed.iter().all(|i| available.contains(i)));
    for window in narrowed.windows(2) {
        assert!(window[0] < window[1]);
    }
}

#[test]
fn test_intersection_edge_cases() {
    assert_eq!(intersect_sorted(&[], &[1, 2]), Vec::<usize>::new());
    assert_eq!(intersect_sorted(&[1, 2], &[]), Vec::<usize>::new());
    assert_eq!(intersect_sorted(&[1, 2, 3], &[1, 2, 3]), vec![1, 2, 3]);
    assert_eq!(intersect_sorted(&[1, 3], &[2, 4]), Vec::<usize>::new());
}
