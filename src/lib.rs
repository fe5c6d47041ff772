//! Genetic-algorithm solver for the Traveling Salesman Problem.
//!
//! The crate is split into a generic evolutionary engine and the TSP
//! problem that plugs into it:
//!
//! - **Genetic Algorithm ([`ga`])**: Generational loop with truncation
//!   selection, pairwise recombination, and permutation operators. Problems
//!   plug in through the [`ga::GaProblem`] and [`ga::Individual`] traits.
//! - **Traveling Salesman ([`tsp`])**: Cities, tour chromosomes, the
//!   closed-tour fitness evaluator, and a [`tsp::solve`] entry point.
//!
//! # Example
//!
//! ```
//! use tsp_ga::ga::GaConfig;
//! use tsp_ga::tsp::{self, City};
//!
//! let cities = vec![
//!     City::new(0, 0.0, 0.0),
//!     City::new(1, 0.0, 1.0),
//!     City::new(2, 1.0, 1.0),
//!     City::new(3, 1.0, 0.0),
//! ];
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(30)
//!     .with_seed(7);
//!
//! let result = tsp::solve(cities, &config).unwrap();
//! assert_eq!(result.best.gene().len(), 4);
//! assert!(result.best_fitness >= 4.0);
//! ```
//!
//! All randomness flows through an explicit [`rand::Rng`], so runs with the
//! same seed are reproducible.

pub mod error;
pub mod ga;
pub mod random;
pub mod tsp;

pub use error::{GaError, Result};
