//! # Individual
//!
//! One member of a population: a [`Genome`] paired with its [`Adaptation`]
//! classification. Individuals know how to split their genome into the random
//! fragments that crossover breeding recombines.

use crate::error::{EvolutionError, Result};
use crate::genome::{Gene, Genome};
use crate::rng::RandomNumberGenerator;

/// Classification assigned to an individual by a selection pass.
///
/// Every individual carries exactly one `Adaptation` value at any time. The
/// default is [`Adaptation::NoBreed`], so a freshly constructed individual is
/// never eligible to breed before selection has run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adaptation {
    /// Fit enough to reproduce and survive.
    Breed,
    /// Survives but does not reproduce.
    #[default]
    NoBreed,
    /// Removed from the population during selection.
    Dead,
}

/// One member of a population, owning a genome and an adaptation tag.
#[derive(Debug, Clone)]
pub struct Individual {
    genome: Genome,
    adaptation: Adaptation,
}

impl Individual {
    /// Parses an individual from a line of whitespace-separated integers.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::MalformedGenome`] if any token fails integer
    /// parsing.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::from_genome(text.parse()?))
    }

    pub fn from_genome(genome: Genome) -> Self {
        Self {
            genome,
            adaptation: Adaptation::default(),
        }
    }

    /// Builds a child by concatenating a front fragment of one parent's
    /// genome with a back fragment of another's. The child genome length is
    /// exactly `front.len() + back.len()`.
    pub fn from_crossover(front: &[Gene], back: &[Gene]) -> Self {
        let mut genes = Vec::with_capacity(front.len() + back.len());
        genes.extend_from_slice(front);
        genes.extend_from_slice(back);
        Self::from_genome(Genome::new(genes))
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn adaptation(&self) -> Adaptation {
        self.adaptation
    }

    pub fn set_adaptation(&mut self, adaptation: Adaptation) {
        self.adaptation = adaptation;
    }

    /// Returns a random non-empty proper prefix of the genome.
    ///
    /// The cut point is drawn uniformly from `[1, len - 1]`, so the fragment
    /// is never empty and never the whole genome.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::GenomeTooShort`] if the genome has fewer
    /// than two genes.
    pub fn fragment_front(&self, rng: &mut RandomNumberGenerator) -> Result<&[Gene]> {
        let length = self.genome.len();
        if length < 2 {
            return Err(EvolutionError::GenomeTooShort { length });
        }
        let cut = rng.gen_range(1..=length - 1);
        Ok(&self.genome.genes()[..cut])
    }

    /// Returns a random non-empty proper suffix of the genome.
    ///
    /// The cut point is drawn uniformly from `[0, len - 2]`, independently of
    /// any front fragment drawn from the same individual.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::GenomeTooShort`] if the genome has fewer
    /// than two genes.
    pub fn fragment_back(&self, rng: &mut RandomNumberGenerator) -> Result<&[Gene]> {
        let length = self.genome.len();
        if length < 2 {
            return Err(EvolutionError::GenomeTooShort { length });
        }
        let cut = rng.gen_range(0..=length - 2);
        Ok(&self.genome.genes()[cut..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_individual_is_not_a_breeder() {
        let individual = Individual::from_text("1 2 3").unwrap();
        assert_ne!(individual.adaptation(), Adaptation::Breed);
    }

    #[test]
    fn test_from_text_propagates_parse_failure() {
        assert!(Individual::from_text("1 two 3").is_err());
    }

    #[test]
    fn test_crossover_length_is_sum_of_fragments() {
        let child = Individual::from_crossover(&[1, 2, 3], &[7, 8]);
        assert_eq!(child.genome().len(), 5);
        assert_eq!(child.genome().genes(), &[1, 2, 3, 7, 8]);
    }

    #[test]
    fn test_fragment_front_is_proper_prefix() {
        let individual = Individual::from_genome(Genome::new(vec![1, 2, 3, 4, 5]));
        let mut rng = RandomNumberGenerator::from_seed(1);

        for _ in 0..500 {
            let front = individual.fragment_front(&mut rng).unwrap();
            assert!(!front.is_empty());
            assert!(front.len() < individual.genome().len());
            assert_eq!(front, &individual.genome().genes()[..front.len()]);
        }
    }

    #[test]
    fn test_fragment_back_is_proper_suffix() {
        let individual = Individual::from_genome(Genome::new(vec![1, 2, 3, 4, 5]));
        let mut rng = RandomNumberGenerator::from_seed(2);
        let genes = individual.genome().genes();

        for _ in 0..500 {
            let back = individual.fragment_back(&mut rng).unwrap();
            assert!(!back.is_empty());
            assert!(back.len() < genes.len());
            assert_eq!(back, &genes[genes.len() - back.len()..]);
        }
    }

    #[test]
    fn test_fragments_cover_full_cut_range() {
        // Length 3 admits front fragments of length 1 or 2 and back fragments
        // of length 1 or 2; all four must eventually show up.
        let individual = Individual::from_genome(Genome::new(vec![1, 2, 3]));
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut front_lengths = [false; 2];
        let mut back_lengths = [false; 2];

        for _ in 0..200 {
            front_lengths[individual.fragment_front(&mut rng).unwrap().len() - 1] = true;
            back_lengths[individual.fragment_back(&mut rng).unwrap().len() - 1] = true;
        }

        assert!(front_lengths.iter().all(|&hit| hit));
        assert!(back_lengths.iter().all(|&hit| hit));
    }

    #[test]
    fn test_fragments_reject_short_genomes() {
        let mut rng = RandomNumberGenerator::from_seed(4);

        for genes in [vec![], vec![9]] {
            let individual = Individual::from_genome(Genome::new(genes));
            assert!(matches!(
                individual.fragment_front(&mut rng),
                Err(EvolutionError::GenomeTooShort { .. })
            ));
            assert!(matches!(
                individual.fragment_back(&mut rng),
                Err(EvolutionError::GenomeTooShort { .. })
            ));
        }
    }
}
