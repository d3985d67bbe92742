//! Goal-biased random walks for population seeding.
//!
//! The walk greedily steps toward the goal most of the time but keeps
//! enough randomness to diversify the initial population. The annealed
//! search reuses it as a fallback initializer when the optimal search
//! finds no route.

use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::route::Route;

/// Default length cap for seeded walks.
pub const MAX_WALK_LEN: usize = 150;

/// Default probability of taking the goal-greedy step.
pub const GREEDY_BIAS: f64 = 0.7;

/// Generates a random route from `start` toward `goal`.
///
/// At each step, with probability `greedy_bias` the walk moves to the
/// open neighbor with the smallest Manhattan distance to the goal,
/// otherwise to a uniformly random open neighbor. It stops at the goal,
/// at a dead end, or at the `max_len` cap. The result always begins at
/// `start` but is not guaranteed to reach the goal.
pub fn random_walk<R: Rng>(
    start: Cell,
    goal: Cell,
    grid: &Grid,
    max_len: usize,
    greedy_bias: f64,
    rng: &mut R,
) -> Route {
    let mut route = vec![start];

    while route.len() < max_len {
        let here = route[route.len() - 1];
        let neighbors = grid.neighbors(here);
        if neighbors.is_empty() {
            break;
        }

        let greedy = neighbors
            .iter()
            .copied()
            .min_by_key(|n| n.manhattan(goal))
            .expect("neighbors is non-empty");

        let next = if rng.random_range(0.0..1.0) < greedy_bias {
            greedy
        } else {
            neighbors[rng.random_range(0..neighbors.len())]
        };

        route.push(next);
        if next == goal {
            break;
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Tile;
    use crate::rng::create_rng;
    use crate::route::is_walkable;

    #[test]
    fn test_walk_starts_at_start() {
        let grid = Grid::new(6, 6);
        let mut rng = create_rng(Some(1));
        let route = random_walk(
            Cell::new(0, 0),
            Cell::new(5, 5),
            &grid,
            MAX_WALK_LEN,
            GREEDY_BIAS,
            &mut rng,
        );
        assert_eq!(route.first(), Some(&Cell::new(0, 0)));
        assert!(is_walkable(&route, &grid));
    }

    #[test]
    fn test_walk_respects_length_cap() {
        let grid = Grid::new(10, 10);
        let mut rng = create_rng(Some(2));
        for cap in [2, 5, 20] {
            let route = random_walk(
                Cell::new(0, 0),
                Cell::new(9, 9),
                &grid,
                cap,
                GREEDY_BIAS,
                &mut rng,
            );
            assert!(route.len() <= cap);
        }
    }

    #[test]
    fn test_walk_stops_at_goal() {
        let grid = Grid::new(5, 5);
        let mut rng = create_rng(Some(3));
        // fully greedy: straight march to the goal
        let route = random_walk(
            Cell::new(0, 0),
            Cell::new(4, 4),
            &grid,
            MAX_WALK_LEN,
            1.0,
            &mut rng,
        );
        assert_eq!(route.last(), Some(&Cell::new(4, 4)));
        assert_eq!(route.len(), 9);
    }

    #[test]
    fn test_walk_stops_at_dead_end() {
        // start sealed in on all sides
        let mut grid = Grid::new(3, 3);
        for cell in [
            Cell::new(0, 1),
            Cell::new(2, 1),
            Cell::new(1, 0),
            Cell::new(1, 2),
        ] {
            grid.set_tile(cell, Tile::Wall);
        }
        let mut rng = create_rng(Some(4));
        let route = random_walk(
            Cell::new(1, 1),
            Cell::new(0, 0),
            &grid,
            MAX_WALK_LEN,
            GREEDY_BIAS,
            &mut rng,
        );
        assert_eq!(route, vec![Cell::new(1, 1)]);
    }

    #[test]
    fn test_walk_deterministic_under_seed() {
        let grid = Grid::new(8, 8);
        let a = random_walk(
            Cell::new(0, 0),
            Cell::new(7, 7),
            &grid,
            MAX_WALK_LEN,
            GREEDY_BIAS,
            &mut create_rng(Some(42)),
        );
        let b = random_walk(
            Cell::new(0, 0),
            Cell::new(7, 7),
            &grid,
            MAX_WALK_LEN,
            GREEDY_BIAS,
            &mut create_rng(Some(42)),
        );
        assert_eq!(a, b);
    }
}
