//! Optimal baseline search.
//!
//! Best-first search over grid cells with the Manhattan distance to the
//! goal as an admissible heuristic. The cost of stepping between adjacent
//! cells is the two-cell segment cost from [`route_cost`], so moves into
//! or out of hazard-adjacent cells are more expensive than plain steps.
//!
//! Besides serving as the deterministic baseline strategy, this search is
//! the "bridge builder" both metaheuristics call to reconnect broken
//! candidate routes.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::grid::{Cell, Grid};
use crate::route::{route_cost, Route};

/// Heap entry: priority is accumulated cost plus heuristic, ties broken
/// by the natural cell order so results are fully deterministic.
#[derive(Debug)]
struct Visit {
    priority: f64,
    cost: f64,
    cell: Cell,
}

impl PartialEq for Visit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Visit {}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap, we pop the lowest priority,
        // and among equal priorities the smallest cell
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-cost route from `start` to `goal`, or an empty route
/// when the goal is unreachable.
///
/// `start == goal` returns the single-cell route immediately. Start and
/// goal are expected to be in bounds; the caller validates.
pub fn astar(start: Cell, goal: Cell, grid: &Grid) -> Route {
    if start == goal {
        return vec![start];
    }

    let h = |cell: Cell| cell.manhattan(goal) as f64;

    let mut open = BinaryHeap::new();
    let mut best_cost: HashMap<Cell, f64> = HashMap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();

    best_cost.insert(start, 0.0);
    open.push(Visit {
        priority: h(start),
        cost: 0.0,
        cell: start,
    });

    while let Some(visit) = open.pop() {
        if visit.cell == goal {
            return reconstruct(goal, &came_from);
        }

        // a cheaper entry for this cell was already expanded
        if visit.cost > best_cost.get(&visit.cell).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        for neighbor in grid.neighbors(visit.cell) {
            let step = route_cost(&[visit.cell, neighbor], grid);
            let tentative = visit.cost + step;
            if tentative < best_cost.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                best_cost.insert(neighbor, tentative);
                came_from.insert(neighbor, visit.cell);
                open.push(Visit {
                    priority: tentative + h(neighbor),
                    cost: tentative,
                    cell: neighbor,
                });
            }
        }
    }

    Vec::new()
}

fn reconstruct(goal: Cell, came_from: &HashMap<Cell, Cell>) -> Route {
    let mut route = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        route.push(prev);
        current = prev;
    }
    route.reverse();
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Layout, Tile};
    use crate::route::is_walkable;

    fn grid_from(text: &str) -> Grid {
        Layout::parse(text).expect("test layout parses").grid
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = Grid::new(3, 3);
        let cell = Cell::new(1, 1);
        assert_eq!(astar(cell, cell, &grid), vec![cell]);
    }

    #[test]
    fn test_open_grid_shortest_route() {
        // 5x5, no obstacles, no border walls: the route has Manhattan
        // distance + 1 cells and no hazard penalties at all.
        let grid = Grid::new(5, 5);
        let start = Cell::new(0, 0);
        let goal = Cell::new(4, 4);

        let route = astar(start, goal, &grid);
        assert_eq!(route.len(), 9);
        assert_eq!(route.first(), Some(&start));
        assert_eq!(route.last(), Some(&goal));
        assert!(is_walkable(&route, &grid));
        assert_eq!(route_cost(&route, &grid), 9.0);
    }

    #[test]
    fn test_deterministic() {
        let grid = grid_from(concat!(
            "       \n",
            "  11   \n",
            "   1   \n",
            " 1 1 1 \n",
            "       ",
        ));
        let start = Cell::new(0, 0);
        let goal = Cell::new(4, 6);

        let first = astar(start, goal, &grid);
        for _ in 0..5 {
            assert_eq!(astar(start, goal, &grid), first);
        }
    }

    #[test]
    fn test_unreachable_goal_returns_empty() {
        let mut grid = Grid::new(5, 5);
        // enclose the goal on all four sides
        for cell in [
            Cell::new(1, 2),
            Cell::new(3, 2),
            Cell::new(2, 1),
            Cell::new(2, 3),
        ] {
            grid.set_tile(cell, Tile::Wall);
        }
        let route = astar(Cell::new(0, 0), Cell::new(2, 2), &grid);
        assert!(route.is_empty());
    }

    #[test]
    fn test_corridor_is_the_unique_route() {
        // two open rooms joined by a single-cell corridor at (2, 3)
        let grid = grid_from(concat!(
            "   1   \n",
            "   1   \n",
            "       \n",
            "   1   \n",
            "   1   ",
        ));
        let start = Cell::new(0, 0);
        let goal = Cell::new(0, 6);

        let route = astar(start, goal, &grid);
        assert!(!route.is_empty());
        assert!(route.contains(&Cell::new(2, 3)));
        assert!(is_walkable(&route, &grid));
        assert_eq!(route.first(), Some(&start));
        assert_eq!(route.last(), Some(&goal));
        // down to the corridor row, across, and back up
        assert_eq!(route.len(), 11);
    }

    #[test]
    fn test_prefers_detour_over_wall_hugging() {
        // A lone wall in an otherwise open grid. The straight row-3 route
        // passes next to it; a detour two rows away costs a few extra
        // steps but avoids every penalty.
        let mut grid = Grid::new(7, 7);
        grid.set_tile(Cell::new(2, 3), Tile::Wall);

        let start = Cell::new(3, 0);
        let goal = Cell::new(3, 6);
        let route = astar(start, goal, &grid);

        assert!(is_walkable(&route, &grid));
        for &cell in &route {
            assert!(
                !grid.is_hazard_adjacent(cell),
                "route hugs the wall at {cell}"
            );
        }
        let straight: Vec<Cell> = (0..7).map(|c| Cell::new(3, c)).collect();
        assert!(route_cost(&route, &grid) < route_cost(&straight, &grid));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any route the search returns is structurally valid and
            /// endpoint-correct; absence of a route is the only other
            /// permitted outcome.
            #[test]
            fn astar_routes_are_valid(walls in proptest::collection::vec((0..8i32, 0..8i32), 0..20)) {
                let mut grid = Grid::new(8, 8);
                for (r, c) in walls {
                    grid.set_tile(Cell::new(r, c), Tile::Wall);
                }
                let start = Cell::new(0, 0);
                let goal = Cell::new(7, 7);
                grid.set_tile(start, Tile::Floor);
                grid.set_tile(goal, Tile::Floor);

                let route = astar(start, goal, &grid);
                if !route.is_empty() {
                    prop_assert_eq!(route.first(), Some(&start));
                    prop_assert_eq!(route.last(), Some(&goal));
                    prop_assert!(is_walkable(&route, &grid));
                }
            }
        }
    }
}
