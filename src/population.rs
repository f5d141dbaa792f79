//! # Population
//!
//! The population container: an ordered sequence of [`Individual`]s plus a
//! cache of breeding indices. The cache is deliberately not kept in sync on
//! every mutation; it is recomputed explicitly through
//! [`Population::recompute_breeding`] after selection or after appending a
//! range, and must be treated as possibly stale at any other point.

use tracing::{debug, trace};

use crate::error::{EvolutionError, Result};
use crate::evolution::FitnessFunction;
use crate::individual::{Adaptation, Individual};
use crate::rng::RandomNumberGenerator;

/// An ordered collection of individuals plus the indices of those currently
/// eligible to breed.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
    breeding: Vec<usize>,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a population from pre-built individuals and computes its
    /// breeding set from scratch.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        let mut population = Self {
            individuals,
            breeding: Vec::new(),
        };
        population.recompute_breeding(0);
        population
    }

    /// Read view of the individual sequence.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Read view of the breeding set, as of its last recomputation.
    pub fn breeding(&self) -> &[usize] {
        &self.breeding
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Appends `other`'s individuals to `self`, carrying over `other`'s
    /// breeding indices offset by the pre-append length of `self`.
    ///
    /// No adaptation is recomputed and nothing is revalidated; both breeding
    /// sets are trusted as-is.
    pub fn append(&mut self, other: Population) {
        let offset = self.individuals.len();
        self.individuals.extend(other.individuals);
        self.breeding
            .extend(other.breeding.into_iter().map(|index| index + offset));
    }

    /// Appends raw individuals, then recomputes the breeding set for exactly
    /// the appended range.
    pub fn extend_individuals(&mut self, individuals: Vec<Individual>) {
        let start = self.individuals.len();
        self.individuals.extend(individuals);
        self.recompute_breeding(start);
    }

    /// Non-mutating variant of [`Population::append`].
    pub fn joined(&self, other: &Population) -> Population {
        let mut merged = self.clone();
        merged.append(other.clone());
        merged
    }

    /// Non-mutating variant of [`Population::extend_individuals`].
    pub fn extended(&self, individuals: Vec<Individual>) -> Population {
        let mut merged = self.clone();
        merged.extend_individuals(individuals);
        merged
    }

    /// Scans the individuals from `from` to the end and records the index of
    /// every one currently classified [`Adaptation::Breed`].
    ///
    /// Prior entries are kept, not cleared; the caller must make sure the
    /// same range is never scanned twice.
    pub fn recompute_breeding(&mut self, from: usize) {
        for (index, individual) in self.individuals.iter().enumerate().skip(from) {
            if individual.adaptation() == Adaptation::Breed {
                self.breeding.push(index);
            }
        }
    }

    /// Scores every individual, classifies it against the two thresholds and
    /// compacts out the dead.
    ///
    /// A score strictly above `breed_threshold` classifies as `Breed`, a
    /// score of at least `extinction_threshold` as `NoBreed`, anything lower
    /// as `Dead`. Dead individuals are then removed preserving the relative
    /// order of the survivors. Removal shifts indices, so the breeding set is
    /// cleared here and must be recomputed by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::FitnessCalculation`] if the fitness function
    /// produces a non-finite score.
    pub fn run_selection<F>(
        &mut self,
        fitness: &F,
        breed_threshold: f64,
        extinction_threshold: f64,
    ) -> Result<()>
    where
        F: FitnessFunction + ?Sized,
    {
        for individual in &mut self.individuals {
            let score = fitness.score(individual.genome());
            if !score.is_finite() {
                return Err(EvolutionError::FitnessCalculation(format!(
                    "non-finite score {} for genome \"{}\"",
                    score,
                    individual.genome()
                )));
            }

            let adaptation = if score > breed_threshold {
                Adaptation::Breed
            } else if score >= extinction_threshold {
                Adaptation::NoBreed
            } else {
                Adaptation::Dead
            };
            individual.set_adaptation(adaptation);
        }

        let before = self.individuals.len();
        self.individuals
            .retain(|individual| individual.adaptation() != Adaptation::Dead);
        // Compaction shifted the indices; any cached entries are meaningless now.
        self.breeding.clear();

        debug!(
            survivors = self.individuals.len(),
            removed = before - self.individuals.len(),
            "selection pass complete"
        );
        Ok(())
    }

    /// Breeds `pairs` children from the current breeding set into `output`.
    ///
    /// For every pair, two positions are drawn uniformly with replacement
    /// from the breeding set; equal draws are redrawn without counting
    /// towards the pair total. The child concatenates a random front fragment
    /// of the first parent's genome with a random back fragment of the
    /// second's, so each child mixes genetic material from two distinct
    /// parents.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::InsufficientBreeders`] if the breeding set
    /// has fewer than two members, and [`EvolutionError::GenomeTooShort`] if
    /// a drawn parent's genome has fewer than two genes.
    pub fn run_breeding(
        &self,
        pairs: u32,
        output: &mut Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if self.breeding.len() < 2 {
            return Err(EvolutionError::InsufficientBreeders {
                available: self.breeding.len(),
            });
        }

        for _ in 0..pairs {
            let (first, second) = loop {
                let first = self.breeding[rng.gen_range(0..self.breeding.len())];
                let second = self.breeding[rng.gen_range(0..self.breeding.len())];
                if first != second {
                    break (first, second);
                }
                trace!(index = first, "redrawing identical parents");
            };

            let front = self.individuals[first].fragment_front(rng)?;
            let back = self.individuals[second].fragment_back(rng)?;
            output.individuals.push(Individual::from_crossover(front, back));
        }
        Ok(())
    }

    /// Moves every individual out of `other` into `self` and recomputes the
    /// breeding set for exactly the absorbed range. `other` is left empty but
    /// keeps its allocation, ready to collect the next generation.
    pub fn absorb(&mut self, other: &mut Population) {
        let start = self.individuals.len();
        self.individuals.append(&mut other.individuals);
        other.breeding.clear();
        self.recompute_breeding(start);
    }
}
