//! # SimulationOptions
//!
//! Configuration for a simulation run: the two classification thresholds,
//! the number of pairs bred per generation and the number of generations.
//!
//! ```rust
//! use darwin::evolution::SimulationOptions;
//!
//! let options = SimulationOptions::builder()
//!     .breed_threshold(0.4)
//!     .extinction_threshold(0.1)
//!     .pair_count(25)
//!     .generation_count(50)
//!     .build();
//! assert_eq!(options.get_pair_count(), 25);
//! ```

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOptions {
    /// Scores strictly above this value classify as `Breed`.
    breed_threshold: f64,
    /// Scores below this value classify as `Dead`.
    extinction_threshold: f64,
    /// Pairs of parents drawn per generation.
    pair_count: u32,
    /// Number of breeding rounds to simulate.
    generation_count: u32,
}

impl SimulationOptions {
    pub fn new(
        breed_threshold: f64,
        extinction_threshold: f64,
        pair_count: u32,
        generation_count: u32,
    ) -> Self {
        Self {
            breed_threshold,
            extinction_threshold,
            pair_count,
            generation_count,
        }
    }

    pub fn get_breed_threshold(&self) -> f64 {
        self.breed_threshold
    }

    pub fn get_extinction_threshold(&self) -> f64 {
        self.extinction_threshold
    }

    pub fn get_pair_count(&self) -> u32 {
        self.pair_count
    }

    pub fn get_generation_count(&self) -> u32 {
        self.generation_count
    }

    pub fn set_breed_threshold(&mut self, breed_threshold: f64) {
        self.breed_threshold = breed_threshold;
    }

    pub fn set_extinction_threshold(&mut self, extinction_threshold: f64) {
        self.extinction_threshold = extinction_threshold;
    }

    pub fn set_pair_count(&mut self, pair_count: u32) {
        self.pair_count = pair_count;
    }

    pub fn set_generation_count(&mut self, generation_count: u32) {
        self.generation_count = generation_count;
    }

    /// Returns a builder for creating a `SimulationOptions` instance.
    pub fn builder() -> SimulationOptionsBuilder {
        SimulationOptionsBuilder::default()
    }
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            breed_threshold: 0.5,
            extinction_threshold: 0.25,
            pair_count: 10,
            generation_count: 100,
        }
    }
}

/// Builder for [`SimulationOptions`] with a fluent interface.
#[derive(Debug, Clone, Default)]
pub struct SimulationOptionsBuilder {
    breed_threshold: Option<f64>,
    extinction_threshold: Option<f64>,
    pair_count: Option<u32>,
    generation_count: Option<u32>,
}

impl SimulationOptionsBuilder {
    pub fn breed_threshold(mut self, value: f64) -> Self {
        self.breed_threshold = Some(value);
        self
    }

    pub fn extinction_threshold(mut self, value: f64) -> Self {
        self.extinction_threshold = Some(value);
        self
    }

    pub fn pair_count(mut self, value: u32) -> Self {
        self.pair_count = Some(value);
        self
    }

    pub fn generation_count(mut self, value: u32) -> Self {
        self.generation_count = Some(value);
        self
    }

    /// Builds the [`SimulationOptions`], falling back to the defaults for
    /// anything left unset.
    pub fn build(self) -> SimulationOptions {
        let defaults = SimulationOptions::default();
        SimulationOptions {
            breed_threshold: self.breed_threshold.unwrap_or(defaults.breed_threshold),
            extinction_threshold: self
                .extinction_threshold
                .unwrap_or(defaults.extinction_threshold),
            pair_count: self.pair_count.unwrap_or(defaults.pair_count),
            generation_count: self.generation_count.unwrap_or(defaults.generation_count),
        }
    }
}
