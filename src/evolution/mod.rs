pub mod fitness;
pub mod options;
pub mod simulate;

pub use fitness::{FitnessFn, FitnessFunction};
pub use options::{SimulationOptions, SimulationOptionsBuilder};
pub use simulate::simulate;
