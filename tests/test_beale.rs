//! End-to-end continuous optimization of the Beale function.
//!
//! The Beale function has its global minimum at `(3.0, 0.5)`; fitness is the
//! negated function value so that higher remains better. Offspring whose
//! splice came out with the wrong dimension are scored prohibitively low and
//! die off immediately.

use evosolve::{
    fitness_fn, mutation_fn, solve, AlgorithmSettings, CompositeMutation, FitnessHysteresis,
    Params, ThreadLocalRng, UniformPerturbation,
};

const BOUND: f64 = 4.5;
const INCREMENT: f64 = 1e-4;

fn beale_fitness(point: &Vec<f64>) -> f64 {
    if point.len() != 2 {
        return -1e12;
    }
    let (x, y) = (point[0], point[1]);
    let first = 1.5 - x + x * y;
    let second = 2.25 - x + x * y.powi(2);
    let third = 2.625 - x + x * y.powi(3);
    -(first.powi(2) + second.powi(2) + third.powi(2))
}

#[test]
fn test_beale_fitness_peaks_at_optimum() {
    assert!(beale_fitness(&vec![3.0, 0.5]).abs() < 0.01);
    assert!(beale_fitness(&vec![0.0, 0.0]) < beale_fitness(&vec![3.0, 0.5]));
}

#[test]
fn test_beale_search_finds_the_optimum() {
    let initial: Vec<Vec<f64>> = (0..10_000)
        .map(|_| {
            vec![
                ThreadLocalRng::uniform_real(-BOUND, BOUND),
                ThreadLocalRng::uniform_real(-BOUND, BOUND),
            ]
        })
        .collect();

    let mutation = CompositeMutation::new()
        .then(UniformPerturbation::new(-INCREMENT, INCREMENT))
        .then(mutation_fn(|point: Vec<f64>| {
            point
                .into_iter()
                .map(|value| value.clamp(-BOUND, BOUND))
                .collect()
        }));

    let params = Params::builder()
        .with_fitness_operator(fitness_fn(beale_fitness))
        .with_mutation_operator(mutation)
        .with_termination_operator(FitnessHysteresis::new(1e-8, 30))
        .build();

    let best = solve(
        &initial,
        AlgorithmSettings::new(0.25, 0.5, 0.2),
        params,
        |_stats| {},
    )
    .unwrap();

    assert_eq!(best.chromosome.len(), 2);
    assert!((best.chromosome[0] - 3.0).abs() < 1e-3);
    assert!((best.chromosome[1] - 0.5).abs() < 1e-3);
}
