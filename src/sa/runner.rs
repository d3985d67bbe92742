//! Annealed search execution loop.

use rand::Rng;
use tracing::debug;

use super::config::SaConfig;
use crate::astar::astar;
use crate::ga::seeding;
use crate::grid::{Cell, Grid, ORTHOGONAL};
use crate::rng::create_rng;
use crate::route::{route_cost, Route};

/// Result of an annealed search run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best goal-terminated route found, or empty when the best
    /// candidate never reached the goal.
    pub best: Route,

    /// Cost of the returned route (`f64::INFINITY` when empty).
    pub best_cost: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,
}

/// Executes the annealed search.
pub struct SaRunner;

impl SaRunner {
    /// Runs the search from `start` to `goal`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(start: Cell, goal: Cell, grid: &Grid, config: &SaConfig) -> SaResult {
        config.validate().expect("invalid SaConfig");
        debug_assert!(
            grid.in_bounds(start) && grid.in_bounds(goal),
            "start and goal must lie within grid bounds"
        );

        let mut rng = create_rng(config.seed);

        // Initialize from the optimal search, falling back to a random
        // walk when no route exists.
        let mut current = astar(start, goal, grid);
        if current.is_empty() {
            current = seeding::random_walk(
                start,
                goal,
                grid,
                seeding::MAX_WALK_LEN,
                seeding::GREEDY_BIAS,
                &mut rng,
            );
        }
        // Invariant for the main loop: current and best are non-empty.
        if current.is_empty() {
            return SaResult {
                best: Route::new(),
                best_cost: f64::INFINITY,
                iterations: 0,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
            };
        }

        let mut current_cost = route_cost(&current, grid);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for _ in 0..config.max_iterations {
            if temperature < config.min_temperature {
                break;
            }

            let candidate = perturb(&current, start, goal, grid, config.perturb_attempts, &mut rng);
            let candidate_cost = route_cost(&candidate, grid);
            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion; a non-finite probability
            // (overflow/underflow in the exponent) rejects.
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                let probability = (-delta / temperature).exp();
                let probability = if probability.is_finite() {
                    probability
                } else {
                    0.0
                };
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            iterations += 1;
            temperature *= config.cooling_rate;
        }

        let best = if best.last() == Some(&goal) {
            best
        } else {
            Route::new()
        };
        let best_cost = route_cost(&best, grid);
        debug!(
            iterations,
            best_cost,
            final_temperature = temperature,
            accepted_moves,
            "annealing finished"
        );

        SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        }
    }
}

/// Builds a neighboring route by detouring through a random open cell
/// next to a random interior point, reconnecting both sides with
/// optimal-search bridges and keeping the original tail.
///
/// Returns the route unchanged when no open alternative is found within
/// the probe budget or when either bridge fails. Degenerate inputs:
/// fewer than 2 cells is reseeded with a random walk; exactly 2 cells has
/// no interior index and is returned unchanged.
fn perturb<R: Rng>(
    route: &[Cell],
    start: Cell,
    goal: Cell,
    grid: &Grid,
    attempts: usize,
    rng: &mut R,
) -> Route {
    if route.len() < 2 {
        return seeding::random_walk(
            start,
            goal,
            grid,
            seeding::MAX_WALK_LEN,
            seeding::GREEDY_BIAS,
            rng,
        );
    }
    if route.len() == 2 {
        return route.to_vec();
    }

    let idx = rng.random_range(1..route.len() - 1);
    let pivot = route[idx];

    let mut alternative = None;
    for _ in 0..attempts {
        let step = ORTHOGONAL[rng.random_range(0..ORTHOGONAL.len())];
        let probe = pivot.offset(step);
        if grid.is_open(probe) {
            alternative = Some(probe);
            break;
        }
    }
    let Some(alternative) = alternative else {
        return route.to_vec();
    };

    let mut out: Route = route[..idx].to_vec();

    let outbound = astar(out[out.len() - 1], alternative, grid);
    if outbound.len() <= 1 {
        return route.to_vec();
    }
    out.extend_from_slice(&outbound[1..]);

    let rejoin = astar(alternative, route[idx + 1], grid);
    if rejoin.len() <= 1 {
        return route.to_vec();
    }
    out.extend_from_slice(&rejoin[1..]);
    out.extend_from_slice(&route[idx + 2..]);
    out
}
