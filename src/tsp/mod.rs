//! Traveling Salesman Problem on the Euclidean plane.
//!
//! A tour is a [`Chromosome`]: a permutation of city indices whose fitness
//! is the length of the closed loop through those cities. [`TspProblem`]
//! plugs the tour representation into the generic [`crate::ga`] engine.
//!
//! # Example
//!
//! ```
//! use tsp_ga::ga::GaConfig;
//! use tsp_ga::random::create_rng;
//! use tsp_ga::tsp::{self, generate_cities};
//!
//! let cities = generate_cities(15, &mut create_rng(1));
//! let config = GaConfig::default()
//!     .with_population_size(40)
//!     .with_generations(100)
//!     .with_seed(42);
//!
//! let result = tsp::solve(cities, &config)?;
//! println!("route {:?} length {:.2}", result.best.gene(), result.best_fitness);
//! # Ok::<(), tsp_ga::GaError>(())
//! ```

mod chromosome;
mod city;
mod problem;

pub use chromosome::Chromosome;
pub use city::{distance, generate_cities, City, DEFAULT_EXTENT};
pub use problem::TspProblem;

use crate::error::Result;
use crate::ga::{GaConfig, GaResult, GaRunner};
use rand::Rng;

/// Evolves a tour over `cities`, seeding from [`GaConfig::seed`].
///
/// # Errors
/// Rejects fewer than two cities, non-finite coordinates, and invalid
/// configurations before the first generation.
pub fn solve(cities: Vec<City>, config: &GaConfig) -> Result<GaResult<Chromosome>> {
    let problem = TspProblem::new(cities)?;
    GaRunner::run(&problem, config)
}

/// Evolves a tour over `cities`, drawing all randomness from `rng`.
pub fn solve_with_rng<R: Rng>(
    cities: Vec<City>,
    config: &GaConfig,
    rng: &mut R,
) -> Result<GaResult<Chromosome>> {
    let problem = TspProblem::new(cities)?;
    GaRunner::run_with_rng(&problem, config, rng)
}
