use matrix_flows::maximum_flow::ford_fulkerson::FordFulkerson;
use matrix_flows::maximum_flow::status::Status;
use matrix_flows::network::{Network, NetworkState};
use rstest::rstest;

fn network(rows: Vec<Vec<i64>>) -> Network<i64> {
    Network::from_matrix(rows).unwrap()
}

fn tied_diamond() -> Vec<Vec<i64>> {
    vec![
        vec![0, 3, 2, 0],
        vec![0, 0, 0, 2],
        vec![0, 0, 0, 3],
        vec![0, 0, 0, 0],
    ]
}

// capacity of the cheapest source-side cut, by subset enumeration
fn brute_force_min_cut(rows: &[Vec<i64>], source: usize, sink: usize) -> i64 {
    let n = rows.len();
    let mut best = i64::MAX;
    for mask in 0u32..(1 << n) {
        if mask & (1 << source) == 0 || mask & (1 << sink) != 0 {
            continue;
        }
        let mut cut = 0;
        for u in 0..n {
            for v in 0..n {
                if mask & (1 << u) != 0 && mask & (1 << v) == 0 {
                    cut += rows[u][v];
                }
            }
        }
        best = best.min(cut);
    }
    best
}

#[test]
fn nothing_computed_before_first_run() {
    let solver = FordFulkerson::<i64>::default();
    assert_eq!(solver.status(), Status::NotSolved);
    assert!(solver.total_flow().is_none());
    assert!(solver.last_path().is_none());
    assert!(solver.last_bottleneck().is_none());
    assert!(solver.augmentations().is_empty());
}

#[test]
fn tied_diamond_pushes_two_units_along_each_route() {
    let mut network = network(tied_diamond());
    let mut solver = FordFulkerson::default();

    assert_eq!(solver.solve(0, 3, &mut network), Status::Optimal);
    assert_eq!(solver.total_flow(), Some(4));

    let augmentations = solver.augmentations();
    assert_eq!(augmentations.len(), 2);
    assert_eq!(augmentations[0].path.nodes, vec![0, 1, 3]);
    assert_eq!(augmentations[0].bottleneck, 2);
    assert_eq!(augmentations[1].path.nodes, vec![0, 2, 3]);
    assert_eq!(augmentations[1].bottleneck, 2);

    assert_eq!(solver.last_path().unwrap().nodes, vec![0, 2, 3]);
    assert_eq!(solver.last_bottleneck(), Some(2));
    assert_eq!(network.state(), NetworkState::Residual);
}

#[test]
fn cancellation_reroutes_flow_over_a_reverse_edge() {
    // the cheapest route uses the thin middle edge 1 -> 2; the second
    // augmentation must undo it through the residual edge 2 -> 1
    let mut network = network(vec![
        vec![0, 1, 3, 0],
        vec![0, 0, 1, 3],
        vec![0, 0, 0, 1],
        vec![0, 0, 0, 0],
    ]);
    let mut solver = FordFulkerson::default();

    assert_eq!(solver.solve(0, 3, &mut network), Status::Optimal);
    assert_eq!(solver.total_flow(), Some(2));

    let augmentations = solver.augmentations();
    assert_eq!(augmentations.len(), 2);
    assert_eq!(augmentations[0].path.nodes, vec![0, 1, 2, 3]);
    assert_eq!(augmentations[0].bottleneck, 1);
    assert_eq!(augmentations[1].path.nodes, vec![0, 2, 1, 3]);
    assert_eq!(augmentations[1].bottleneck, 1);
}

#[test]
fn unreachable_sink_is_zero_flow_not_an_error() {
    let mut network = network(vec![vec![0, 0], vec![1, 0]]);
    let mut solver = FordFulkerson::default();

    assert_eq!(solver.solve(0, 1, &mut network), Status::Optimal);
    assert_eq!(solver.total_flow(), Some(0));
    assert!(solver.augmentations().is_empty());
    assert!(solver.last_path().is_none());
}

#[rstest]
#[case(0, 4)]
#[case(4, 0)]
#[case(2, 2)]
fn bad_endpoints_are_rejected(#[case] source: usize, #[case] sink: usize) {
    let mut network = network(tied_diamond());
    let mut solver = FordFulkerson::default();

    assert_eq!(solver.solve(source, sink, &mut network), Status::BadInput);
    assert!(solver.total_flow().is_none());
}

#[test]
fn a_spent_network_is_not_solved_again() {
    let mut network = network(tied_diamond());
    let mut solver = FordFulkerson::default();

    assert_eq!(solver.solve(0, 3, &mut network), Status::Optimal);
    assert_eq!(solver.solve(0, 3, &mut network), Status::SpentNetwork);
    assert!(solver.total_flow().is_none());
}

#[rstest]
#[case(tied_diamond(), 0, 3)]
#[case(vec![
    vec![0, 1, 3, 0],
    vec![0, 0, 1, 3],
    vec![0, 0, 0, 1],
    vec![0, 0, 0, 0],
], 0, 3)]
#[case(vec![
    vec![0, 3, 0],
    vec![2, 0, 2],
    vec![0, 0, 0],
], 0, 2)]
#[case(vec![
    vec![0, 10, 5, 0, 0],
    vec![0, 0, 4, 8, 0],
    vec![0, 0, 0, 0, 10],
    vec![0, 6, 0, 0, 10],
    vec![0, 0, 0, 0, 0],
], 0, 4)]
fn total_flow_matches_brute_force_min_cut(#[case] rows: Vec<Vec<i64>>, #[case] source: usize, #[case] sink: usize) {
    let expected = brute_force_min_cut(&rows, source, sink);
    let source_capacity: i64 = rows[source].iter().sum();

    let mut network = network(rows);
    let mut solver = FordFulkerson::default();

    assert_eq!(solver.solve(source, sink, &mut network), Status::Optimal);
    assert_eq!(solver.total_flow(), Some(expected));
    // every augmentation pushes at least one unit
    assert!(solver.augmentations().len() as i64 <= source_capacity);
}

#[test]
fn residual_updates_conserve_paired_capacity() {
    let rows = tied_diamond();
    let mut network = network(rows.clone());
    let mut solver = FordFulkerson::default();
    solver.solve(0, 3, &mut network);

    for u in 0..network.num_nodes() {
        for v in 0..network.num_nodes() {
            assert_eq!(
                network.edge_cost(u, v) + network.edge_cost(v, u),
                rows[u][v] + rows[v][u],
                "capacity between {u} and {v} not conserved"
            );
        }
    }
}

#[test]
fn single_reduce_edge_conserves_paired_capacity() {
    let mut network = network(tied_diamond());
    let before = network.edge_cost(0, 1) + network.edge_cost(1, 0);
    network.reduce_edge(0, 1, 2);
    assert_eq!(network.edge_cost(0, 1), 1);
    assert_eq!(network.edge_cost(1, 0), 2);
    assert_eq!(network.edge_cost(0, 1) + network.edge_cost(1, 0), before);
}
