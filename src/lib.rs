//! Grid route-planning engine for maze-navigation games.
//!
//! Provides three interchangeable route-planning strategies over a static
//! obstacle grid:
//!
//! - **Optimal search (A\*)**: deterministic best-first search with a
//!   Manhattan heuristic. The reliable baseline, and the bridge builder
//!   the metaheuristics use to repair broken candidates.
//! - **Population search (GA)**: evolves a population of candidate routes
//!   via elitism, tournament selection, crossover, and mutation.
//! - **Annealed search (SA)**: perturbs a single candidate route under a
//!   geometric cooling acceptance criterion.
//!
//! All strategies share one contract, `(start, goal, grid) -> route`,
//! selected through the [`strategy::Strategy`] registry. The cost model
//! ([`route::route_cost`]) rewards short routes and penalizes hugging
//! obstacles; an empty route is the canonical "no route found" signal
//! rather than an error.
//!
//! # Architecture
//!
//! The engine is synchronous and holds no state across invocations:
//! each call reads the grid, computes, and returns a fresh route. The
//! surrounding game (rendering, input, the tick loop) owns the grid and
//! decides when to re-invoke. The stochastic strategies take an optional
//! seed through their configs, which makes them reproducible for tests.

pub mod astar;
pub mod ga;
pub mod grid;
pub mod route;
pub mod sa;
pub mod strategy;

mod rng;
