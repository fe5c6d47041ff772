//! Truncation selection for the GA.
//!
//! Each generation keeps the better half of the population as parents.
//! The survivors are later consumed in consecutive pairs, so the selected
//! set is always forced to an even size.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"

use super::types::Individual;
use log::trace;

/// Keeps the better half of `population`, ready for pairwise crossover.
///
/// 1. Stable sort ascending by fitness (lower = better), so ties keep
///    their original order
/// 2. Keep the first `ceil(len / 2)` individuals
/// 3. If that count is odd, append a clone of the best individual
///
/// An empty population is returned unchanged.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::{select_survivors, Individual};
///
/// #[derive(Clone)]
/// struct Ind(f64);
///
/// impl Individual for Ind {
///     type Fitness = f64;
///     fn fitness(&self) -> f64 { self.0 }
///     fn set_fitness(&mut self, f: f64) { self.0 = f; }
/// }
///
/// let population: Vec<Ind> = [5.0, 1.0, 4.0, 2.0, 3.0].map(Ind).to_vec();
/// let selected = select_survivors(population);
/// let fitness: Vec<f64> = selected.iter().map(|i| i.0).collect();
/// assert_eq!(fitness, vec![1.0, 2.0, 3.0, 1.0]);
/// ```
///
/// # Complexity
/// O(n log n)
pub fn select_survivors<I: Individual>(mut population: Vec<I>) -> Vec<I> {
    if population.is_empty() {
        return population;
    }

    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let keep = population.len().div_ceil(2);
    population.truncate(keep);

    if population.len() % 2 != 0 {
        trace!("odd survivor count {keep}, duplicating best individual");
        let best = population[0].clone();
        population.push(best);
    }

    population
}
