//! Example: 0/1 knapsack as a shortest path.
//!
//! Run with:
//! `cargo run --example knapsack`

use knapsack_dag::{KnapsackEngine, KnapsackInstance};

fn main() {
    let cases = [
        // Classic textbook instance: take the 100 and the 120.
        (vec![60.0, 100.0, 120.0], vec![1.0, 2.0, 3.0], 5.0),
        (
            vec![20.0, 17.0, 18.0, 15.0, 7.0],
            vec![4.0, 3.0, 2.0, 2.0, 1.0],
            6.0,
        ),
    ];

    let engine = KnapsackEngine::new();
    for (values, volumes, capacity) in cases {
        let instance = match KnapsackInstance::new(values, volumes, capacity) {
            Ok(inst) => inst,
            Err(err) => {
                eprintln!("invalid instance: {err}");
                continue;
            }
        };
        let solution = engine.run(&instance);

        println!("Capacity {capacity}:");
        println!("  Path:");
        for v in &solution.path {
            println!("    {v}");
        }
        println!("  Items: {:?}", solution.items);
        println!(
            "  Value: {}, volume: {}, path weight: {}",
            solution.value, solution.volume, solution.cost
        );
    }
}
