//! # Genome
//!
//! The unit of heredity: an ordered sequence of [`Gene`]s. Genomes parse from
//! and render to the line-oriented text format used by population files (see
//! [`crate::io`]): whitespace-separated non-negative integers.

use std::fmt;
use std::str::FromStr;

use crate::error::EvolutionError;

/// A single heritable value. Genes carry no meaning of their own beyond being
/// summable and comparable by a fitness function.
pub type Gene = u16;

/// An ordered, finite sequence of [`Gene`]s belonging to one individual.
///
/// A genome is immutable once constructed except through full replacement.
/// Genomes shorter than two genes cannot be split into crossover fragments.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome(Vec<Gene>);

impl Genome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Self(genes)
    }

    /// Read view of the gene sequence.
    pub fn genes(&self) -> &[Gene] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Gene>> for Genome {
    fn from(genes: Vec<Gene>) -> Self {
        Self(genes)
    }
}

impl FromStr for Genome {
    type Err = EvolutionError;

    /// Parses a genome from whitespace-separated non-negative integers.
    ///
    /// A token that fails integer parsing makes the whole genome fail with
    /// [`EvolutionError::MalformedGenome`].
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut genes = Vec::new();
        for token in text.split_whitespace() {
            let gene = token.parse::<Gene>().map_err(|e| {
                EvolutionError::MalformedGenome(format!("invalid gene {:?}: {}", token, e))
            })?;
            genes.push(gene);
        }
        Ok(Self(genes))
    }
}

impl fmt::Display for Genome {
    /// Renders the genes separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut genes = self.0.iter();
        if let Some(first) = genes.next() {
            write!(f, "{}", first)?;
            for gene in genes {
                write!(f, " {}", gene)?;
            }
        }
        Ok(())
    }
}
