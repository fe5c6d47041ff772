//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → (evaluation → selection → recombination) × generations
//! → final evaluation.

use super::config::{GaConfig, Replacement};
use super::selection::select_survivors;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::{GaError, Result};
use crate::random::rng_from_seed;
use log::{debug, info};
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// The best individual of any evaluated population, including the
    /// initial and final ones.
    pub best_seen: I,

    /// Total number of generations executed.
    pub generations: usize,

    /// Size of the population after the last generation.
    pub final_population_size: usize,

    /// Best fitness of every evaluated population.
    ///
    /// Entry `g` is the population at the start of generation `g`; the last
    /// entry is the final evaluation, so there are `generations + 1` entries.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator built from [`GaConfig::seed`].
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// [`GaConfig::seed`] is ignored.
    ///
    /// # Errors
    /// Returns the configuration error from [`GaConfig::validate`], or the
    /// first error raised by [`GaProblem::evaluate`].
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        info!(
            "starting GA: population={}, generations={}, mutation_rate={}, replacement={:?}",
            config.population_size, config.generations, config.mutation_rate, config.replacement
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        let mut best_seen: Option<P::Individual> = None;

        // 2. Generational loop
        for gen in 0..config.generations {
            evaluate_population(problem, &mut population)?;

            let gen_best = find_best(&population)?;
            record_best(gen_best, &mut best_seen, &mut fitness_history);
            problem.on_generation(gen, gen_best.fitness());

            debug!(
                "generation {gen}: population={}, best={:.4}",
                population.len(),
                gen_best.fitness().to_f64()
            );

            let parents = select_survivors(population);
            let target = match config.replacement {
                Replacement::Shrinking => parents.len(),
                Replacement::Constant => config.population_size,
            };
            population = recombine(problem, &parents, target, config.mutation_rate, rng);
        }

        // 3. Final evaluation
        evaluate_population(problem, &mut population)?;
        let best = find_best(&population)?.clone();
        record_best(&best, &mut best_seen, &mut fitness_history);

        info!(
            "GA finished after {} generations: best={:.4}, population={}",
            config.generations,
            best.fitness().to_f64(),
            population.len()
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best_seen: best_seen.unwrap_or_else(|| best.clone()),
            best,
            generations: config.generations,
            final_population_size: population.len(),
            fitness_history,
        })
    }
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual]) -> Result<()> {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind)?;
        ind.set_fitness(f);
    }
    Ok(())
}

/// Find the individual with the best (lowest) fitness; first one wins ties.
fn find_best<I: Individual>(population: &[I]) -> Result<&I> {
    population
        .iter()
        .reduce(|best, ind| {
            if ind.fitness() < best.fitness() {
                ind
            } else {
                best
            }
        })
        .ok_or_else(|| GaError::DegenerateInput("population is empty".into()))
}

/// Append `candidate` to the history and keep it if it beats `best_seen`.
fn record_best<I: Individual>(candidate: &I, best_seen: &mut Option<I>, history: &mut Vec<f64>) {
    history.push(candidate.fitness().to_f64());
    let improved = best_seen
        .as_ref()
        .map_or(true, |best| candidate.fitness() < best.fitness());
    if improved {
        *best_seen = Some(candidate.clone());
    }
}

/// Produce `target` offspring from consecutive parent pairs.
///
/// Pairs `(0, 1), (2, 3), …` are recombined in order and reused from the
/// start if more offspring are needed. Each child is mutated before it
/// joins the next population.
fn recombine<P: GaProblem, R: Rng>(
    problem: &P,
    parents: &[P::Individual],
    target: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut next_gen = Vec::with_capacity(target);

    for pair in parents.chunks_exact(2).cycle() {
        if next_gen.len() >= target {
            break;
        }
        let (mut child1, mut child2) = problem.crossover(&pair[0], &pair[1], rng);

        problem.mutate(&mut child1, mutation_rate, rng);
        next_gen.push(child1);

        if next_gen.len() < target {
            problem.mutate(&mut child2, mutation_rate, rng);
            next_gen.push(child2);
        }
    }

    next_gen
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::cell::RefCell;

    // ---- Toy problem: sort a vector (fitness = number of inversions) ----

    #[derive(Clone, Debug)]
    struct Arrangement {
        perm: Vec<usize>,
        fitness: f64,
    }

    impl Individual for Arrangement {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = f;
        }
    }

    struct SortProblem {
        n: usize,
        seen_generations: RefCell<Vec<usize>>,
    }

    impl SortProblem {
        fn new(n: usize) -> Self {
            Self {
                n,
                seen_generations: RefCell::new(Vec::new()),
            }
        }
    }

    impl GaProblem for SortProblem {
        type Individual = Arrangement;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Arrangement {
            Arrangement {
                perm: crate::ga::operators::random_permutation(self.n, rng),
                fitness: f64::worst(),
            }
        }

        fn evaluate(&self, ind: &Arrangement) -> Result<f64> {
            let mut inversions = 0usize;
            for i in 0..ind.perm.len() {
                for j in i + 1..ind.perm.len() {
                    if ind.perm[i] > ind.perm[j] {
                        inversions += 1;
                    }
                }
            }
            Ok(inversions as f64)
        }

        fn crossover<R: Rng>(
            &self,
            p1: &Arrangement,
            p2: &Arrangement,
            rng: &mut R,
        ) -> (Arrangement, Arrangement) {
            let (a, b) = crate::ga::operators::prefix_order_crossover(&p1.perm, &p2.perm, rng);
            (
                Arrangement {
                    perm: a,
                    fitness: f64::worst(),
                },
                Arrangement {
                    perm: b,
                    fitness: f64::worst(),
                },
            )
        }

        fn mutate<R: Rng>(&self, ind: &mut Arrangement, rate: f64, rng: &mut R) {
            crate::ga::operators::per_gene_swap_mutation(&mut ind.perm, rate, rng);
        }

        fn on_generation(&self, generation: usize, _best: f64) {
            self.seen_generations.borrow_mut().push(generation);
        }
    }

    /// Always fails evaluation.
    struct BrokenProblem;

    impl GaProblem for BrokenProblem {
        type Individual = Arrangement;

        fn create_individual<R: Rng>(&self, _rng: &mut R) -> Arrangement {
            Arrangement {
                perm: vec![0, 7],
                fitness: f64::worst(),
            }
        }

        fn evaluate(&self, _ind: &Arrangement) -> Result<f64> {
            Err(GaError::IndexOutOfRange {
                index: 7,
                num_cities: 2,
            })
        }

        fn crossover<R: Rng>(
            &self,
            p1: &Arrangement,
            p2: &Arrangement,
            _rng: &mut R,
        ) -> (Arrangement, Arrangement) {
            (p1.clone(), p2.clone())
        }

        fn mutate<R: Rng>(&self, _ind: &mut Arrangement, _rate: f64, _rng: &mut R) {}
    }

    fn config(pop: usize, gens: usize) -> GaConfig {
        GaConfig::default()
            .with_population_size(pop)
            .with_generations(gens)
            .with_mutation_rate(0.05)
            .with_seed(42)
    }

    #[test]
    fn test_shrinking_population_sizes() {
        let problem = SortProblem::new(8);
        // 20 -> 10 -> 6 -> 4 -> 2 -> 2
        for (gens, expected) in [(0, 20), (1, 10), (2, 6), (3, 4), (4, 2), (5, 2), (30, 2)] {
            let result = GaRunner::run(&problem, &config(20, gens)).unwrap();
            assert_eq!(result.final_population_size, expected, "after {gens} generations");
        }
    }

    #[test]
    fn test_constant_population_size() {
        let problem = SortProblem::new(8);
        for pop in [2, 5, 7, 20] {
            let cfg = config(pop, 10).with_replacement(Replacement::Constant);
            let result = GaRunner::run(&problem, &cfg).unwrap();
            assert_eq!(result.final_population_size, pop);
        }
    }

    #[test]
    fn test_constant_population_converges() {
        let problem = SortProblem::new(10);
        let cfg = config(60, 150).with_replacement(Replacement::Constant);
        let result = GaRunner::run(&problem, &cfg).unwrap();

        let initial = result.fitness_history[0];
        assert!(
            result.best_seen.fitness() < initial || initial == 0.0,
            "expected improvement over {initial}, got {}",
            result.best_seen.fitness()
        );
    }

    #[test]
    fn test_zero_generations() {
        let problem = SortProblem::new(6);
        let result = GaRunner::run(&problem, &config(10, 0)).unwrap();

        assert_eq!(result.generations, 0);
        assert_eq!(result.final_population_size, 10);
        assert_eq!(result.fitness_history.len(), 1);
        assert!(result.best_fitness.is_finite());
        assert!(problem.seen_generations.borrow().is_empty());
    }

    #[test]
    fn test_fitness_history_and_callbacks() {
        let problem = SortProblem::new(6);
        let result = GaRunner::run(&problem, &config(16, 12)).unwrap();

        assert_eq!(result.fitness_history.len(), 13);
        assert_eq!(*problem.seen_generations.borrow(), (0..12).collect::<Vec<_>>());
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_best_seen_is_minimum_of_history() {
        let problem = SortProblem::new(10);
        let result = GaRunner::run(&problem, &config(30, 25)).unwrap();

        let min = result
            .fitness_history
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_seen.fitness(), min);
        assert!(result.best_seen.fitness() <= result.best_fitness);
    }

    #[test]
    fn test_run_with_rng_is_deterministic() {
        let problem = SortProblem::new(10);
        let cfg = config(20, 20);

        let a = GaRunner::run_with_rng(&problem, &cfg, &mut create_rng(5)).unwrap();
        let b = GaRunner::run_with_rng(&problem, &cfg, &mut create_rng(5)).unwrap();
        assert_eq!(a.best.perm, b.best.perm);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = SortProblem::new(5);
        let err = GaRunner::run(&problem, &config(1, 10)).unwrap_err();
        assert!(matches!(err, GaError::DegenerateInput(_)));
    }

    #[test]
    fn test_evaluation_error_propagates() {
        let err = GaRunner::run(&BrokenProblem, &config(4, 3)).unwrap_err();
        assert_eq!(
            err,
            GaError::IndexOutOfRange {
                index: 7,
                num_cities: 2
            }
        );
    }

    // ---- Helpers ----

    #[test]
    fn test_find_best_first_on_ties() {
        let pop = vec![
            Arrangement {
                perm: vec![1],
                fitness: 3.0,
            },
            Arrangement {
                perm: vec![2],
                fitness: 1.0,
            },
            Arrangement {
                perm: vec![3],
                fitness: 1.0,
            },
        ];
        assert_eq!(find_best(&pop).unwrap().perm, vec![2]);
        assert!(find_best::<Arrangement>(&[]).is_err());
    }

    #[test]
    fn test_recombine_target_sizes() {
        let problem = SortProblem::new(5);
        let mut rng = create_rng(1);
        let parents: Vec<Arrangement> = (0..4)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        assert_eq!(recombine(&problem, &parents, 4, 0.1, &mut rng).len(), 4);
        assert_eq!(recombine(&problem, &parents, 9, 0.1, &mut rng).len(), 9);
        assert_eq!(recombine(&problem, &parents, 1, 0.1, &mut rng).len(), 1);
        assert!(recombine(&problem, &[], 4, 0.1, &mut rng).is_empty());
    }
}
