use knapsack_dag::{
    build_graph, reconstruct_path, select_items, shortest_paths, Dijkstra, ShortestPathSolver,
};
use proptest::prelude::*;

/// Best value over all feasible subsets.
fn brute_force(values: &[f64], volumes: &[f64], capacity: f64) -> f64 {
    let n = values.len();
    let mut best = 0.0f64;
    for mask in 0u32..(1 << n) {
        let mut value = 0.0;
        let mut volume = 0.0;
        for i in 0..n {
            if mask & (1 << i) != 0 {
                value += values[i];
                volume += volumes[i];
            }
        }
        if volume <= capacity && value > best {
            best = value;
        }
    }
    best
}

fn instance() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, f64)> {
    (1usize..10).prop_flat_map(|n| {
        (
            prop::collection::vec(1u32..50, n),
            prop::collection::vec(1u32..20, n),
            1u32..60,
        )
            .prop_map(|(values, volumes, capacity)| {
                let values: Vec<f64> = values.into_iter().map(f64::from).collect();
                let volumes: Vec<f64> = volumes.into_iter().map(f64::from).collect();
                (values, volumes, f64::from(capacity))
            })
    })
}

proptest! {
    #[test]
    fn selection_is_feasible_and_optimal((values, volumes, capacity) in instance()) {
        let graph = build_graph(&values, &volumes, capacity);
        let sp = shortest_paths(&graph);
        let path = reconstruct_path(&graph, &sp.prev);
        let items = select_items(&path);

        let value: f64 = items.iter().map(|&i| values[i]).sum();
        let volume: f64 = items.iter().map(|&i| volumes[i]).sum();
        prop_assert!(volume <= capacity);
        prop_assert_eq!(value, brute_force(&values, &volumes, capacity));
    }

    #[test]
    fn path_shape_and_weight_identity((values, volumes, capacity) in instance()) {
        let n = values.len();
        let graph = build_graph(&values, &volumes, capacity);
        let sp = shortest_paths(&graph);
        let path = reconstruct_path(&graph, &sp.prev);
        prop_assert_eq!(path.len(), n + 2);
        prop_assert_eq!(path[0], graph.source());
        prop_assert_eq!(*path.last().unwrap(), graph.sink());
        for (k, v) in path.iter().enumerate() {
            prop_assert_eq!(v.decision, k as isize - 1);
        }

        let items = select_items(&path);
        let value: f64 = items.iter().map(|&i| values[i]).sum();
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        prop_assert_eq!(sp.distance(&graph.sink()), n as f64 * max - value);
    }

    #[test]
    fn dijkstra_matches_layered_distances((values, volumes, capacity) in instance()) {
        let graph = build_graph(&values, &volumes, capacity);
        let layered = shortest_paths(&graph);
        let heap = Dijkstra.solve(&graph);
        for v in graph.vertices() {
            prop_assert_eq!(layered.distance(v), heap.distance(v));
        }
        let path = reconstruct_path(&graph, &heap.prev);
        let items = select_items(&path);
        let value: f64 = items.iter().map(|&i| values[i]).sum();
        prop_assert_eq!(value, brute_force(&values, &volumes, capacity));
    }
}
