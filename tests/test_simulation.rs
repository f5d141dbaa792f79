use darwin::evolution::{simulate, FitnessFn, SimulationOptions};
use darwin::genome::Genome;
use darwin::individual::Adaptation;
use darwin::io::{read_population, write_population};
use darwin::rng::RandomNumberGenerator;

const INPUT: &str = "\
1 2 3
4 5
6 7 8 9
0 1
9 9 9
2 2 2 2
";

/// Mean gene value scaled into [0, 1] for genes up to ten.
fn sum_over_ten_per_gene() -> FitnessFn<impl Fn(&Genome) -> f64> {
    FitnessFn::new(|genome: &Genome| {
        let sum: u32 = genome.genes().iter().map(|&g| u32::from(g)).sum();
        f64::from(sum) / (10.0 * genome.len() as f64)
    })
}

#[test]
fn test_full_run_from_text_to_text() {
    let mut population = read_population(INPUT.as_bytes()).unwrap();
    let initial_len = population.len();
    let options = SimulationOptions::new(0.3, 0.05, 5, 10);
    let mut rng = RandomNumberGenerator::from_seed(1234);

    simulate(
        &options,
        &sum_over_ten_per_gene(),
        &mut population,
        &mut rng,
    )
    .unwrap();

    // The population accumulates: original survivors plus each generation's
    // survivors, never more than pair_count new individuals per round.
    assert!(population.len() >= initial_len - 1);
    assert!(population.len() <= initial_len + 5 * 10);

    // Nobody dead survives a selection pass, and every breeding index is
    // valid and actually marked Breed.
    for individual in population.individuals() {
        assert_ne!(individual.adaptation(), Adaptation::Dead);
    }
    for &index in population.breeding() {
        assert_eq!(
            population.individuals()[index].adaptation(),
            Adaptation::Breed
        );
    }

    // Crossover children always carry at least two genes.
    for individual in population.individuals().iter().skip(initial_len) {
        assert!(individual.genome().len() >= 2);
    }

    let mut buffer = Vec::new();
    write_population(&mut buffer, &population).unwrap();
    let reloaded = read_population(buffer.as_slice()).unwrap();
    assert_eq!(reloaded.len(), population.len());
    for (left, right) in population
        .individuals()
        .iter()
        .zip(reloaded.individuals())
    {
        assert_eq!(left.genome(), right.genome());
    }
}

#[test]
fn test_same_seed_reproduces_identical_output() {
    let options = SimulationOptions::new(0.3, 0.05, 4, 12);

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let mut population = read_population(INPUT.as_bytes()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(777);
        simulate(
            &options,
            &sum_over_ten_per_gene(),
            &mut population,
            &mut rng,
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_population(&mut buffer, &population).unwrap();
        outputs.push(buffer);
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_extinction_ends_the_run_without_error() {
    // Nothing reaches the breeding threshold, so the run stops after the
    // initial selection pass.
    let mut population = read_population(INPUT.as_bytes()).unwrap();
    let options = SimulationOptions::new(0.99, 0.0, 5, 50);
    let mut rng = RandomNumberGenerator::from_seed(5);

    simulate(
        &options,
        &sum_over_ten_per_gene(),
        &mut population,
        &mut rng,
    )
    .unwrap();

    assert_eq!(population.len(), 6);
    assert!(population.breeding().len() < 2);
}

#[test]
fn test_harsh_thresholds_still_prune_the_population() {
    // Only the all-nines genome breeds; the weakest individuals die off.
    let mut population = read_population(INPUT.as_bytes()).unwrap();
    let options = SimulationOptions::new(0.85, 0.3, 5, 50);
    let mut rng = RandomNumberGenerator::from_seed(6);

    simulate(
        &options,
        &sum_over_ten_per_gene(),
        &mut population,
        &mut rng,
    )
    .unwrap();

    // Scores: 0.2, 0.45, 0.75, 0.05, 0.9, 0.2 with thresholds 0.85/0.3;
    // three die, one breeds, the run ends early with the three survivors.
    assert_eq!(population.len(), 3);
    assert_eq!(population.breeding().len(), 1);
}
