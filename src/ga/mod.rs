//! Genetic Algorithm engine.
//!
//! A generic generational GA built on trait-based abstractions. Problems
//! plug in by implementing [`GaProblem`], which specifies how to create,
//! evaluate, crossover, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates)
//! - [`Replacement`]: How the next population is sized
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Permutation initialization, crossover, and mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, Replacement};
pub use runner::{GaResult, GaRunner};
pub use selection::select_survivors;
pub use types::{Fitness, GaProblem, Individual};
