use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use evosolve::{
    AlgorithmSettings, ElementWiseComparison, GenerationsTermination, GeneticAlgorithm, Params,
    ThreadLocalRng, ValueReplacement,
};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz ";

fn random_word(alphabet: &[char], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[ThreadLocalRng::uniform_int(0, alphabet.len() - 1)])
        .collect()
}

fn bench_phrase_generations(c: &mut Criterion) {
    let alphabet: Vec<char> = ALPHABET.chars().collect();
    let target = "bench target".to_string();

    let initial: Vec<String> = (0..200)
        .map(|_| random_word(&alphabet, target.len()))
        .collect();

    let mut group = c.benchmark_group("solve_phrase_25_generations");
    for threads in [1usize, 0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(if threads == 0 { "all_cores" } else { "single" }),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let params = Params::builder()
                        .with_fitness_operator(ElementWiseComparison::new(target.clone(), 1.0))
                        .with_mutation_operator(
                            ValueReplacement::new(alphabet.clone(), 1).unwrap(),
                        )
                        .with_termination_operator(GenerationsTermination::new(25))
                        .build();

                    let solver = GeneticAlgorithm::new(AlgorithmSettings::new(0.2, 0.6, 0.3))
                        .unwrap()
                        .with_threads(threads);

                    let best = solver.solve(black_box(&initial), params, |_| {}).unwrap();
                    black_box(best)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_phrase_generations);
criterion_main!(benches);
