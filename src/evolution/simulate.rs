//! The generational simulation loop.

use tracing::{debug, info};

use crate::error::{EvolutionError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

use super::{FitnessFunction, SimulationOptions};

/// Runs the full generational process over `population`.
///
/// One initial selection pass prunes the loaded population and determines the
/// starting breeding set. Every generation then breeds `pair_count` children
/// from the cumulative breeding set into a reusable scratch population, runs
/// selection over just that new generation and appends its survivors. The
/// population therefore accumulates the original survivors plus every
/// generation's survivors, and the breeding set grows to the union of all
/// breeders ever recorded; individuals are never reselected once appended.
///
/// A breeding set with fewer than two members ends the simulation early.
/// This is normal termination, not an error: no further generations are
/// possible.
///
/// # Errors
///
/// - [`EvolutionError::Configuration`] for a zero pair count or non-finite
///   thresholds.
/// - [`EvolutionError::FitnessCalculation`] if the fitness function returns
///   a non-finite score.
/// - [`EvolutionError::GenomeTooShort`] if a breeder's genome has fewer than
///   two genes and is drawn for crossover.
pub fn simulate<F>(
    options: &SimulationOptions,
    fitness: &F,
    population: &mut Population,
    rng: &mut RandomNumberGenerator,
) -> Result<()>
where
    F: FitnessFunction,
{
    if options.get_pair_count() == 0 {
        return Err(EvolutionError::Configuration(
            "pair count cannot be zero".to_string(),
        ));
    }
    if !options.get_breed_threshold().is_finite() || !options.get_extinction_threshold().is_finite()
    {
        return Err(EvolutionError::Configuration(
            "thresholds must be finite".to_string(),
        ));
    }

    let breed_threshold = options.get_breed_threshold();
    let extinction_threshold = options.get_extinction_threshold();

    population.run_selection(fitness, breed_threshold, extinction_threshold)?;
    population.recompute_breeding(0);

    if population.breeding().len() < 2 {
        info!(
            breeders = population.breeding().len(),
            "breeding set too small, ending simulation"
        );
        return Ok(());
    }

    let mut scratch = Population::new();
    for generation in 0..options.get_generation_count() {
        population.run_breeding(options.get_pair_count(), &mut scratch, rng)?;
        scratch.run_selection(fitness, breed_threshold, extinction_threshold)?;
        population.absorb(&mut scratch);

        debug!(
            generation,
            size = population.len(),
            breeders = population.breeding().len(),
            "generation complete"
        );
    }

    info!(
        size = population.len(),
        breeders = population.breeding().len(),
        "simulation finished"
    );
    Ok(())
}
