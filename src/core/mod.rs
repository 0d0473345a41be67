//! Core data types: simulated paths, option side, errors, and results.

pub mod engine;
pub mod path;

pub use engine::{Greeks, OptionType, PricingError, PricingResult};
pub use path::Path;
