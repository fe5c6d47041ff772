//! The TSP as a [`GaProblem`]: closed-tour fitness and permutation
//! operators.

use super::chromosome::Chromosome;
use super::city::City;
use crate::error::{GaError, Result};
use crate::ga::operators::{is_permutation, per_gene_swap_mutation, prefix_order_crossover};
use crate::ga::{GaProblem, Individual};
use log::debug;
use rand::Rng;

/// A fixed set of cities to tour.
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: Vec<City>,
}

impl TspProblem {
    /// Builds a problem over `cities`.
    ///
    /// # Errors
    /// [`GaError::DegenerateInput`] for fewer than two cities or a city with
    /// a non-finite coordinate.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.len() < 2 {
            return Err(GaError::DegenerateInput(format!(
                "at least 2 cities are required, got {}",
                cities.len()
            )));
        }
        if let Some(city) = cities
            .iter()
            .find(|c| !c.x().is_finite() || !c.y().is_finite())
        {
            return Err(GaError::DegenerateInput(format!(
                "city {} has non-finite coordinates ({}, {})",
                city.id(),
                city.x(),
                city.y()
            )));
        }
        debug!("TSP problem with {} cities", cities.len());
        Ok(Self { cities })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Length of the closed tour visiting `gene` in order and returning to
    /// the first city.
    ///
    /// Empty and single-city tours have length 0.
    ///
    /// # Errors
    /// [`GaError::IndexOutOfRange`] if a gene value addresses no city.
    pub fn tour_length(&self, gene: &[usize]) -> Result<f64> {
        let (Some(&first), Some(&last)) = (gene.first(), gene.last()) else {
            return Ok(0.0);
        };

        let mut total = 0.0;
        for leg in gene.windows(2) {
            total += self.city(leg[0])?.distance_to(self.city(leg[1])?);
        }
        total += self.city(last)?.distance_to(self.city(first)?);

        Ok(total)
    }

    /// Computes the tour length of `chromosome` and stores it as its fitness.
    pub fn evaluate_chromosome(&self, chromosome: &mut Chromosome) -> Result<f64> {
        let length = self.tour_length(chromosome.gene())?;
        chromosome.set_fitness(length);
        Ok(length)
    }

    fn city(&self, index: usize) -> Result<&City> {
        self.cities.get(index).ok_or(GaError::IndexOutOfRange {
            index,
            num_cities: self.cities.len(),
        })
    }
}

impl GaProblem for TspProblem {
    type Individual = Chromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::random(self.cities.len(), rng)
    }

    fn evaluate(&self, individual: &Chromosome) -> Result<f64> {
        self.tour_length(individual.gene())
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let (gene1, gene2) = prefix_order_crossover(parent1.gene(), parent2.gene(), rng);
        debug_assert!(is_permutation(&gene1, gene1.len()), "invalid offspring {gene1:?}");
        debug_assert!(is_permutation(&gene2, gene2.len()), "invalid offspring {gene2:?}");
        (Chromosome::unevaluated(gene1), Chromosome::unevaluated(gene2))
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rate: f64, rng: &mut R) {
        per_gene_swap_mutation(individual.gene_mut(), rate, rng);
    }
}
