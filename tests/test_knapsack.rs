//! End-to-end 0/1 knapsack with domain-specific operators.
//!
//! A chromosome holds five item indices, `-1` marking an empty slot. The
//! fitness sums the values of the packed items and charges a steep penalty
//! for exceeding the weight capacity, so the optimum is every item except
//! the heaviest one.

use evosolve::{
    crossover_fn, fitness_fn, mutation_fn, solve, AlgorithmSettings, FitnessTermination, Params,
    ThreadLocalRng,
};

#[derive(Clone, Copy)]
struct Item {
    value: i32,
    weight: i32,
}

const ITEMS: [Item; 5] = [
    Item {
        value: 4,
        weight: 12,
    },
    Item { value: 2, weight: 1 },
    Item {
        value: 10,
        weight: 4,
    },
    Item { value: 1, weight: 1 },
    Item { value: 2, weight: 2 },
];

const MAX_WEIGHT: i32 = 15;
const SLOTS: usize = 5;

fn knapsack_fitness(knapsack: &Vec<i32>) -> f64 {
    let mut value_sum = 0;
    let mut weight_sum = 0;
    for &index in knapsack {
        if index >= 0 && (index as usize) < ITEMS.len() {
            value_sum += ITEMS[index as usize].value;
            weight_sum += ITEMS[index as usize].weight;
        }
    }
    if weight_sum > MAX_WEIGHT {
        value_sum -= 25 * (weight_sum - MAX_WEIGHT).abs();
    }
    value_sum as f64
}

/// Keeps up to three leading items of the first parent, then fills the empty
/// slots with items from the second parent that the child does not already
/// carry.
fn knapsack_cross(first: &Vec<i32>, second: &Vec<i32>) -> Vec<i32> {
    let mut child = vec![-1; SLOTS];

    let keep = first
        .iter()
        .position(|&index| index == -1)
        .unwrap_or(SLOTS)
        .min(3);
    child[..keep].copy_from_slice(&first[..keep]);

    let mut slot = child.iter().position(|&index| index == -1);
    for &candidate in second {
        let Some(open) = slot else { break };
        if !child.contains(&candidate) {
            child[open] = candidate;
            slot = child.iter().position(|&index| index == -1);
        }
    }
    child
}

fn knapsack_mutate(knapsack: Vec<i32>) -> Vec<i32> {
    let mut output = knapsack;
    if output.contains(&-1) {
        // room left: swap a random slot to a random unused item
        let index = ThreadLocalRng::uniform_int(0, output.len() - 1);
        let mut item = ThreadLocalRng::uniform_int(0, ITEMS.len() as i32 - 1);
        while output.contains(&item) {
            item = ThreadLocalRng::uniform_int(0, ITEMS.len() as i32 - 1);
        }
        output[index] = item;
    } else {
        // full and unique: only the order can change
        for i in (1..output.len()).rev() {
            let j = ThreadLocalRng::uniform_int(0, i);
            output.swap(i, j);
        }
    }
    output
}

fn random_knapsack() -> Vec<i32> {
    let mut knapsack = vec![-1; SLOTS];
    let length = ThreadLocalRng::uniform_int(1, 4);
    for slot in 0..length {
        let mut item = ThreadLocalRng::uniform_int(0, ITEMS.len() as i32 - 1);
        while knapsack.contains(&item) {
            item = ThreadLocalRng::uniform_int(0, ITEMS.len() as i32 - 1);
        }
        knapsack[slot] = item;
    }
    knapsack
}

#[test]
fn test_crossover_merges_without_duplicates() {
    let p1 = vec![1, -1, -1, -1, -1];
    let p2 = vec![0, 2, 3, -1, -1];
    let p3 = vec![0, 1, -1, -1, -1];
    let p4 = vec![0, 1, 2, 3, -1];

    assert_eq!(knapsack_cross(&p1, &p2), vec![1, 0, 2, 3, -1]);
    assert_eq!(knapsack_cross(&p2, &p1), vec![0, 2, 3, 1, -1]);
    assert_eq!(knapsack_cross(&p2, &p4), vec![0, 2, 3, 1, -1]);
    assert_eq!(knapsack_cross(&p3, &p4), vec![0, 1, 2, 3, -1]);
}

#[test]
fn test_knapsack_converges_to_optimum() {
    let solution = vec![-1, 1, 2, 3, 4];
    let all_items = vec![0, 1, 2, 3, 4];

    // the search can only converge if the optimum outscores a full pack
    assert!(knapsack_fitness(&solution) > knapsack_fitness(&all_items));

    let initial: Vec<Vec<i32>> = (0..2).map(|_| random_knapsack()).collect();

    let params = Params::builder()
        .with_fitness_operator(fitness_fn(knapsack_fitness))
        .with_crossover_operator(crossover_fn(knapsack_cross))
        .with_mutation_operator(mutation_fn(knapsack_mutate))
        .with_termination_operator(FitnessTermination::new(knapsack_fitness(&solution)))
        .build();

    let best = solve(
        &initial,
        AlgorithmSettings::new(0.1, 0.5, 0.25),
        params,
        |_stats| {},
    )
    .unwrap();

    let mut packed = best.chromosome;
    packed.sort_unstable();
    assert_eq!(packed, solution);
    assert_eq!(best.fitness, 15.0);
}
