//! tsp-ga CLI - evolve a tour over randomly placed cities.

use tsp_ga::ga::GaConfig;
use tsp_ga::random::rng_from_seed;
use tsp_ga::tsp::{self, generate_cities};

const DEFAULT_NUM_CITIES: usize = 100;
const DEFAULT_POPULATION: usize = 100;
const DEFAULT_GENERATIONS: usize = 1000;
const DEFAULT_MUTATION_RATE: f64 = 0.01;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return;
    }

    let num_cities = parse_arg(&args, 1, DEFAULT_NUM_CITIES);
    let population = parse_arg(&args, 2, DEFAULT_POPULATION);
    let generations = parse_arg(&args, 3, DEFAULT_GENERATIONS);
    let mutation_rate = parse_arg(&args, 4, DEFAULT_MUTATION_RATE);
    let seed: Option<u64> = args.get(5).map(|s| {
        s.parse().unwrap_or_else(|e| {
            eprintln!("Invalid seed '{}': {}", s, e);
            std::process::exit(2);
        })
    });

    let mut rng = rng_from_seed(seed);
    let cities = generate_cities(num_cities, &mut rng);

    let config = GaConfig::default()
        .with_population_size(population)
        .with_generations(generations)
        .with_mutation_rate(mutation_rate);

    let result = tsp::solve_with_rng(cities, &config, &mut rng).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("Best route found:");
    let route: Vec<String> = result.best.gene().iter().map(|c| c.to_string()).collect();
    println!("{}", route.join(" "));
    println!("Total distance: {:.4}", result.best_fitness);
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match args.get(index) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            eprintln!("Invalid argument '{}': {}", raw, e);
            std::process::exit(2);
        }),
        None => default,
    }
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} [cities] [population] [generations] [mutation_rate] [seed]",
        program
    );
    eprintln!();
    eprintln!("Evolve a round trip over randomly placed cities.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  cities         Number of cities (default: {DEFAULT_NUM_CITIES})");
    eprintln!("  population     Initial population size (default: {DEFAULT_POPULATION})");
    eprintln!("  generations    Number of generations (default: {DEFAULT_GENERATIONS})");
    eprintln!("  mutation_rate  Per-gene swap probability (default: {DEFAULT_MUTATION_RATE})");
    eprintln!("  seed           Random seed (default: random)");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace each generation.");
}
