//! # Population Text I/O
//!
//! The line-oriented population format: one individual per line, its genome
//! written as whitespace-separated non-negative integers. Empty lines are
//! skipped on input. A line that fails integer parsing aborts the load with
//! [`EvolutionError::MalformedGenome`] carrying the 1-based line number;
//! malformed input is never silently dropped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{EvolutionError, Result, ResultExt};
use crate::individual::Individual;
use crate::population::Population;

/// Reads a population from any buffered source of genome lines.
///
/// # Errors
///
/// Returns [`EvolutionError::MalformedGenome`] for the first malformed line,
/// or [`EvolutionError::Io`] if reading fails.
pub fn read_population<R: BufRead>(reader: R) -> Result<Population> {
    let mut individuals = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let individual = Individual::from_text(&line).map_err(|e| match e {
            EvolutionError::MalformedGenome(message) => {
                EvolutionError::MalformedGenome(format!("line {}: {}", number + 1, message))
            }
            other => other,
        })?;
        individuals.push(individual);
    }

    debug!(count = individuals.len(), "population loaded");
    Ok(Population::from_individuals(individuals))
}

/// Reads a population from a file.
pub fn load_population<P: AsRef<Path>>(path: P) -> Result<Population> {
    let file = File::open(&path)
        .context(format!("failed to open {}", path.as_ref().display()))?;
    read_population(BufReader::new(file))
}

/// Writes every individual's genome, in sequence order, one per line.
pub fn write_population<W: Write>(mut writer: W, population: &Population) -> Result<()> {
    for individual in population.individuals() {
        writeln!(writer, "{}", individual.genome())?;
    }
    Ok(())
}

/// Writes a population to a file, creating or truncating it.
pub fn save_population<P: AsRef<Path>>(path: P, population: &Population) -> Result<()> {
    let file = File::create(&path)
        .context(format!("failed to create {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);
    write_population(&mut writer, population)?;
    writer.flush()?;
    Ok(())
}
