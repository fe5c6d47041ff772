//! Tour chromosomes.

use crate::error::Result;
use crate::ga::operators::{check_permutation, random_permutation};
use crate::ga::{Fitness, Individual};
use rand::Rng;

/// A candidate tour: the order in which cities are visited, plus its
/// cached length.
///
/// The gene is always a permutation of `0..n`. Fitness starts at the
/// "worst" sentinel (`f64::INFINITY`) and is reset to it whenever the gene
/// is borrowed mutably, so a stale tour length is never reported.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    gene: Vec<usize>,
    fitness: f64,
}

impl Chromosome {
    /// Wraps `gene` after checking it is a permutation of `0..gene.len()`.
    pub fn from_gene(gene: Vec<usize>) -> Result<Self> {
        check_permutation(&gene, gene.len())?;
        Ok(Self::unevaluated(gene))
    }

    /// Uniformly random tour over `num_cities` cities.
    pub fn random<R: Rng>(num_cities: usize, rng: &mut R) -> Self {
        Self::unevaluated(random_permutation(num_cities, rng))
    }

    /// Callers guarantee `gene` is a permutation.
    pub(crate) fn unevaluated(gene: Vec<usize>) -> Self {
        Self {
            gene,
            fitness: f64::worst(),
        }
    }

    /// City indices in visiting order.
    pub fn gene(&self) -> &[usize] {
        &self.gene
    }

    /// Mutable access to the visiting order. Invalidates the cached fitness.
    ///
    /// Only reorder in place; the permutation invariant is the caller's
    /// responsibility.
    pub fn gene_mut(&mut self) -> &mut [usize] {
        self.fitness = f64::worst();
        &mut self.gene
    }

    pub fn into_gene(self) -> Vec<usize> {
        self.gene
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.gene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gene.is_empty()
    }

    /// Whether the cached fitness reflects the current gene.
    pub fn is_evaluated(&self) -> bool {
        self.fitness < f64::worst()
    }
}

impl Individual for Chromosome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
