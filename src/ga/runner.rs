//! Population search execution loop.
//!
//! [`GaRunner`] orchestrates the full evolutionary process:
//! seeding → scoring → early accept / elitism → selection → crossover →
//! mutation → repair → repeat.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, trace};

use super::config::GaConfig;
use super::seeding;
use crate::astar::astar;
use crate::grid::{Cell, Grid};
use crate::rng::create_rng;
use crate::route::{route_cost, Route};

/// Result of a population search run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best goal-terminated route found, or empty when no candidate
    /// reached the goal within the budget.
    pub best: Route,

    /// Cost of the returned route (`f64::INFINITY` when empty).
    pub best_cost: f64,

    /// Number of generations scored.
    pub generations: usize,

    /// Whether the run ended by accepting a candidate before the
    /// generation limit.
    pub early_accept: bool,

    /// Best fitness at each scored generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the population search.
pub struct GaRunner;

impl GaRunner {
    /// Runs the search from `start` to `goal`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(start: Cell, goal: Cell, grid: &Grid, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");
        debug_assert!(
            grid.in_bounds(start) && grid.in_bounds(goal),
            "start and goal must lie within grid bounds"
        );

        let mut rng = create_rng(config.seed);

        let mut population: Vec<Route> = (0..config.population_size)
            .map(|_| {
                seeding::random_walk(
                    start,
                    goal,
                    grid,
                    config.max_route_len,
                    config.greedy_bias,
                    &mut rng,
                )
            })
            .collect();

        let mut fitness_history = Vec::with_capacity(config.max_generations);

        for generation in 0..config.max_generations {
            let mut scored: Vec<(f64, Route)> = population
                .into_iter()
                .map(|r| (fitness(&r, goal, grid, config.goal_distance_weight), r))
                .collect();
            scored.sort_by(|a, b| a.0.total_cmp(&b.0));

            let best_fitness = scored[0].0;
            fitness_history.push(best_fitness);
            trace!(generation, best_fitness, "generation scored");

            if scored[0].1.last() == Some(&goal) && best_fitness < config.accept_threshold {
                let best = scored.swap_remove(0).1;
                let best_cost = route_cost(&best, grid);
                debug!(generation, best_cost, "accepted candidate early");
                return GaResult {
                    best,
                    best_cost,
                    generations: generation + 1,
                    early_accept: true,
                    fitness_history,
                };
            }

            let elite_count = (config.population_size as f64 * config.elite_ratio) as usize;
            let mut next_gen: Vec<Route> = scored[..elite_count]
                .iter()
                .map(|(_, r)| r.clone())
                .collect();

            while next_gen.len() < config.population_size {
                let parent1 = tournament_pair(&scored, &mut rng);
                let parent2 = tournament_pair(&scored, &mut rng);

                let mut child = crossover(parent1, parent2, grid);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    child = mutate(&child, goal, grid, &mut rng);
                }

                next_gen.push(repair(&child, grid));
            }

            population = next_gen;
        }

        // score the final population once more
        let (best_fitness, best) = population
            .into_iter()
            .map(|r| (fitness(&r, goal, grid, config.goal_distance_weight), r))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .expect("population is non-empty");
        fitness_history.push(best_fitness);

        let best = if best.last() == Some(&goal) {
            best
        } else {
            Route::new()
        };
        let best_cost = route_cost(&best, grid);
        debug!(
            generations = config.max_generations,
            best_cost, "generation limit reached"
        );

        GaResult {
            best,
            best_cost,
            generations: config.max_generations,
            early_accept: false,
            fitness_history,
        }
    }
}

/// Candidate fitness: route cost plus a heavy penalty on the remaining
/// Manhattan distance to the goal. Lower is better.
fn fitness(route: &[Cell], goal: Cell, grid: &Grid, goal_weight: f64) -> f64 {
    match route.last() {
        Some(&last) => route_cost(route, grid) + last.manhattan(goal) as f64 * goal_weight,
        None => f64::INFINITY,
    }
}

/// Samples two candidates uniformly with replacement and returns the one
/// with the better fitness.
fn tournament_pair<'a, R: Rng>(scored: &'a [(f64, Route)], rng: &mut R) -> &'a Route {
    let a = &scored[rng.random_range(0..scored.len())];
    let b = &scored[rng.random_range(0..scored.len())];
    if a.0 <= b.0 {
        &a.1
    } else {
        &b.1
    }
}

/// Splices parent 1's prefix up to its first cell shared with parent 2
/// onto parent 2's suffix after that cell. With no shared cell, the
/// cheaper parent is inherited wholesale.
fn crossover(parent1: &[Cell], parent2: &[Cell], grid: &Grid) -> Route {
    let in_parent2: HashSet<Cell> = parent2.iter().copied().collect();

    let Some(split) = parent1.iter().position(|c| in_parent2.contains(c)) else {
        return if route_cost(parent1, grid) <= route_cost(parent2, grid) {
            parent1.to_vec()
        } else {
            parent2.to_vec()
        };
    };

    let mut child: Route = parent1[..=split].to_vec();
    let pivot = parent1[split];
    let resume = parent2
        .iter()
        .position(|&c| c == pivot)
        .expect("pivot was found in parent 2");
    child.extend_from_slice(&parent2[resume + 1..]);
    child
}

/// Replaces the segment strictly between two random cut indices with a
/// freshly computed optimal-search bridge, keeping whatever followed the
/// second cut. A failed bridge leaves a gap for [`repair`] to close.
fn mutate<R: Rng>(route: &[Cell], goal: Cell, grid: &Grid, rng: &mut R) -> Route {
    if route.len() < 3 {
        return route.to_vec();
    }

    let last = route.len() - 1;
    let cut1 = rng.random_range(1..last);
    let cut2 = rng.random_range(cut1..=last);
    let bridge_goal = if cut2 == last { goal } else { route[cut2] };

    let mut mutated: Route = route[..=cut1].to_vec();
    let bridge = astar(route[cut1], bridge_goal, grid);
    if bridge.len() > 1 {
        mutated.extend_from_slice(&bridge[1..]);
    }
    if cut2 < last {
        mutated.extend_from_slice(&route[cut2 + 1..]);
    }
    mutated
}

/// Walks a candidate cell by cell, keeping each cell that is one open
/// orthogonal step from the last kept cell and bridging every break with
/// the optimal search. An unbridgeable break truncates the candidate.
fn repair(child: &[Cell], grid: &Grid) -> Route {
    let Some(&first) = child.first() else {
        return Route::new();
    };

    let mut out = vec![first];
    for &next in &child[1..] {
        let last = out[out.len() - 1];
        if last.manhattan(next) == 1 && grid.is_open(next) {
            out.push(next);
        } else {
            let bridge = astar(last, next, grid);
            if bridge.len() > 1 {
                out.extend_from_slice(&bridge[1..]);
            } else {
                break;
            }
        }
    }
    out
}
