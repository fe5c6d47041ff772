//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::{GaError, Result};

/// How the next population is sized after recombination.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::{GaConfig, Replacement};
///
/// let config = GaConfig::default().with_replacement(Replacement::Constant);
/// assert_eq!(config.replacement, Replacement::Constant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// The next population is exactly the offspring of the selected pairs.
    ///
    /// Selection halves the population and each pair yields two children,
    /// so the size shrinks every generation until it settles at 2
    /// (e.g. 20 → 10 → 6 → 4 → 2 → 2).
    #[default]
    Shrinking,

    /// Selected pairs are recombined in rotation until the next population
    /// reaches [`GaConfig::population_size`] again.
    Constant,
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::{GaConfig, Replacement};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(500)
///     .with_mutation_rate(0.02)
///     .with_replacement(Replacement::Constant)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the initial population.
    ///
    /// Must be at least 2 so the selected set can always be paired.
    pub population_size: usize,

    /// Number of evaluate → select → recombine cycles.
    ///
    /// Always run to completion. Zero means initialize and evaluate only.
    pub generations: usize,

    /// Per-gene probability of a swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Sizing policy for the next population.
    pub replacement: Replacement,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.01,
            replacement: Replacement::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-gene mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the replacement policy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Fields set directly (bypassing the clamping builders) are checked
    /// here as well.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GaError::DegenerateInput(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 1000);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert_eq!(config.replacement, Replacement::Shrinking);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(50)
            .with_mutation_rate(0.05)
            .with_replacement(Replacement::Constant)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 50);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.replacement, Replacement::Constant);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_generations_is_valid() {
        let config = GaConfig::default().with_generations(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in [0, 1] {
            let config = GaConfig::default().with_population_size(n);
            assert!(matches!(
                config.validate(),
                Err(GaError::DegenerateInput(_))
            ));
        }
    }

    #[test]
    fn test_clamp_mutation_rate() {
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!((config.mutation_rate - 1.0).abs() < 1e-12);

        let config = GaConfig::default().with_mutation_rate(-0.5);
        assert!(config.mutation_rate.abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_raw_mutation_rate() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(matches!(config.validate(), Err(GaError::InvalidConfig(_))));

        let config = GaConfig {
            mutation_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(matches!(config.validate(), Err(GaError::InvalidConfig(_))));
    }
}
