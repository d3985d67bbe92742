//! Strategy registry.
//!
//! A closed set of interchangeable route-planning strategies sharing one
//! call contract, so the caller can swap algorithms without touching any
//! other code. Strategies are looked up by the names the game presents
//! ("A*", "GA", "SA"); unrecognized names fall back to the default.

use std::fmt;

use crate::astar::astar;
use crate::ga::{GaConfig, GaRunner};
use crate::grid::{Cell, Grid};
use crate::route::Route;
use crate::sa::{SaConfig, SaRunner};

/// The strategy used when a lookup name is not recognized.
pub const DEFAULT_STRATEGY: Strategy = Strategy::Astar;

/// A route-planning strategy.
///
/// All variants implement the same contract: given a start cell, a goal
/// cell, and a read-only grid, produce a route whose first cell is the
/// start and whose last cell is the goal, or an empty route on failure.
/// No strategy mutates the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Deterministic optimal baseline search.
    Astar,
    /// Population search (genetic algorithm). Best-effort.
    Genetic,
    /// Annealed search (simulated annealing). Best-effort.
    Annealing,
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Strategy; 3] = [Strategy::Astar, Strategy::Genetic, Strategy::Annealing];

    /// The registry name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Astar => "A*",
            Strategy::Genetic => "GA",
            Strategy::Annealing => "SA",
        }
    }

    /// Looks a strategy up by name (case-insensitive, with a few common
    /// aliases). Unrecognized names resolve to [`DEFAULT_STRATEGY`].
    pub fn lookup(name: &str) -> Strategy {
        match name.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" => Strategy::Astar,
            "ga" | "genetic" => Strategy::Genetic,
            "sa" | "annealing" => Strategy::Annealing,
            _ => DEFAULT_STRATEGY,
        }
    }

    /// Computes a route from `start` to `goal` with default parameters.
    ///
    /// The stochastic strategies draw a fresh random seed; use
    /// [`solve_seeded`](Self::solve_seeded) for reproducible runs.
    pub fn solve(self, start: Cell, goal: Cell, grid: &Grid) -> Route {
        match self {
            Strategy::Astar => astar(start, goal, grid),
            Strategy::Genetic => GaRunner::run(start, goal, grid, &GaConfig::default()).best,
            Strategy::Annealing => SaRunner::run(start, goal, grid, &SaConfig::default()).best,
        }
    }

    /// Like [`solve`](Self::solve), but with a fixed random seed so the
    /// stochastic strategies become reproducible. The seed has no effect
    /// on the deterministic baseline.
    pub fn solve_seeded(self, start: Cell, goal: Cell, grid: &Grid, seed: u64) -> Route {
        match self {
            Strategy::Astar => astar(start, goal, grid),
            Strategy::Genetic => {
                GaRunner::run(start, goal, grid, &GaConfig::default().with_seed(seed)).best
            }
            Strategy::Annealing => {
                SaRunner::run(start, goal, grid, &SaConfig::default().with_seed(seed)).best
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Layout, Tile};
    use crate::route::is_walkable;

    fn corridor_grid() -> Grid {
        Layout::parse(concat!(
            "   1   \n",
            "   1   \n",
            "       \n",
            "   1   \n",
            "   1   ",
        ))
        .expect("test layout parses")
        .grid
    }

    #[test]
    fn test_lookup_known_names() {
        assert_eq!(Strategy::lookup("A*"), Strategy::Astar);
        assert_eq!(Strategy::lookup("GA"), Strategy::Genetic);
        assert_eq!(Strategy::lookup("SA"), Strategy::Annealing);
        assert_eq!(Strategy::lookup("astar"), Strategy::Astar);
        assert_eq!(Strategy::lookup("genetic"), Strategy::Genetic);
        assert_eq!(Strategy::lookup(" annealing "), Strategy::Annealing);
    }

    #[test]
    fn test_lookup_unknown_name_uses_default() {
        assert_eq!(Strategy::lookup("dijkstra"), DEFAULT_STRATEGY);
        assert_eq!(Strategy::lookup(""), DEFAULT_STRATEGY);
    }

    #[test]
    fn test_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::lookup(strategy.name()), strategy);
            assert_eq!(strategy.to_string(), strategy.name());
        }
    }

    #[test]
    fn test_all_strategies_thread_the_corridor() {
        let grid = corridor_grid();
        let start = Cell::new(2, 0);
        let goal = Cell::new(2, 6);

        for strategy in Strategy::ALL {
            let route = strategy.solve_seeded(start, goal, &grid, 42);
            assert!(!route.is_empty(), "{strategy} found no route");
            assert_eq!(route.first(), Some(&start), "{strategy}");
            assert_eq!(route.last(), Some(&goal), "{strategy}");
            assert!(route.contains(&Cell::new(2, 3)), "{strategy}");
            assert!(is_walkable(&route, &grid), "{strategy}");
        }
    }

    #[test]
    fn test_all_strategies_report_sealed_goal_as_empty() {
        let mut grid = Grid::new(5, 5);
        for cell in [
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(1, 3),
            Cell::new(2, 1),
            Cell::new(2, 3),
            Cell::new(3, 1),
            Cell::new(3, 2),
            Cell::new(3, 3),
        ] {
            grid.set_tile(cell, Tile::Wall);
        }

        for strategy in Strategy::ALL {
            let route = strategy.solve_seeded(Cell::new(0, 0), Cell::new(2, 2), &grid, 42);
            assert!(route.is_empty(), "{strategy} invented a route");
        }
    }

    #[test]
    fn test_seeded_solve_is_reproducible() {
        let grid = corridor_grid();
        let start = Cell::new(2, 0);
        let goal = Cell::new(2, 6);

        for strategy in Strategy::ALL {
            let a = strategy.solve_seeded(start, goal, &grid, 7);
            let b = strategy.solve_seeded(start, goal, &grid, 7);
            assert_eq!(a, b, "{strategy} not reproducible under a fixed seed");
        }
    }
}
