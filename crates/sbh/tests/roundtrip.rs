//! End-to-end properties: spectrum → solve gives back the sequence.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use sbh::{
    build_graph, degree_table, eulerian_walk, random_sequence, solve_with_defaults, spectrum,
    SolveError,
};

fn dna(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['A', 'C', 'G', 'T']), min..=max)
        .prop_map(|cs| cs.into_iter().collect())
}

proptest! {
    #[test]
    fn spectrum_round_trips((seq, l) in (2usize..8).prop_flat_map(|l| (dna(l, 80), Just(l)))) {
        let lmers = spectrum(&seq, l);
        let sol = solve_with_defaults(&lmers).unwrap();
        prop_assert_eq!(&sol.sequence, &seq);
        prop_assert_eq!(sol.covered_edges, lmers.len());
        prop_assert_eq!(sol.sequence.len(), (l - 1) + lmers.len());
    }

    #[test]
    fn walk_edge_count_matches_balanced_input((seq, l) in (2usize..6).prop_flat_map(|l| (dna(l, 40), Just(l)))) {
        let lmers = spectrum(&seq, l);
        let g = build_graph(&lmers).unwrap();
        let d = degree_table(&g);
        prop_assert!(d.profile().is_eulerian_path());
        let path = eulerian_walk(&g, &d).unwrap();
        prop_assert_eq!(path.edge_count(), lmers.len());
        prop_assert_eq!(path.len(), lmers.len() + 1);
    }
}

#[test]
fn long_seeded_sequence_round_trips() {
    let mut rng = StdRng::seed_from_u64(2025);
    let seq = random_sequence(&mut rng, 5_000);
    let lmers = spectrum(&seq, 12);
    let sol = solve_with_defaults(&lmers).unwrap();
    assert_eq!(sol.sequence, seq);
}

#[test]
fn concrete_scenarios() {
    assert_eq!(
        solve_with_defaults(&["ATG", "TGC", "GCC"]).unwrap().sequence,
        "ATGCC"
    );
    assert_eq!(solve_with_defaults(&["AAA", "AAA"]).unwrap().sequence, "AAAA");
    let empty: Vec<String> = Vec::new();
    assert_eq!(solve_with_defaults(&empty), Err(SolveError::EmptyInput));
}

#[test]
fn disjoint_lmers_fail_edge_count() {
    let lmers = ["ATG", "CCA"];
    let g = build_graph(&lmers).unwrap();
    let path = eulerian_walk(&g, &degree_table(&g)).unwrap();
    assert_ne!(path.edge_count(), lmers.len());
    assert_eq!(
        solve_with_defaults(&lmers),
        Err(SolveError::IncompleteCoverage {
            covered: 1,
            expected: 2
        })
    );
}
