// Grid path search behind a narrow trait, so the decision policy can be
// exercised with a deterministic stub in tests.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::grid::Grid;
use crate::types::{Coord, Direction};

/// Finds a shortest 4-connected path over a free/blocked grid.
///
/// The returned path includes both endpoints; `None` means the goal is
/// unreachable. Ties between equal-length paths may resolve arbitrarily;
/// callers must not depend on which one comes back.
pub trait PathSearch {
    fn find_path(&self, grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>>;
}

/// A* over the grid with a Manhattan heuristic.
///
/// The start cell is exempt from the blocked check: the searcher always
/// stands on its own body cell.
pub struct AStar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    pos: Coord,
    g_cost: i32,
    h_cost: i32,
}

impl Node {
    fn f_cost(&self) -> i32 {
        self.g_cost + self.h_cost
    }
}

// Reversed comparison so the BinaryHeap pops the lowest f-cost first.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost()
            .cmp(&self.f_cost())
            .then_with(|| other.h_cost.cmp(&self.h_cost))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

impl PathSearch for AStar {
    fn find_path(&self, grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
        if !grid.in_bounds(start) || !grid.is_free(goal) {
            return None;
        }

        let mut open = BinaryHeap::new();
        let mut came_from: HashMap<(i32, i32), Coord> = HashMap::new();
        let mut best_g: HashMap<(i32, i32), i32> = HashMap::new();

        best_g.insert((start.x, start.y), 0);
        open.push(Node {
            pos: start,
            g_cost: 0,
            h_cost: manhattan_distance(start, goal),
        });

        while let Some(current) = open.pop() {
            if current.pos == goal {
                let mut path = vec![current.pos];
                let mut pos = current.pos;
                while let Some(&parent) = came_from.get(&(pos.x, pos.y)) {
                    path.push(parent);
                    pos = parent;
                }
                path.reverse();
                return Some(path);
            }

            // A stale heap entry: a cheaper route to this cell was found
            // after it was pushed.
            if best_g
                .get(&(current.pos.x, current.pos.y))
                .map_or(false, |&g| current.g_cost > g)
            {
                continue;
            }

            for direction in Direction::all().iter() {
                let neighbour = direction.apply(&current.pos);
                if !grid.is_free(neighbour) {
                    continue;
                }
                let key = (neighbour.x, neighbour.y);
                let g_cost = current.g_cost + 1;
                if best_g.get(&key).map_or(true, |&g| g_cost < g) {
                    best_g.insert(key, g_cost);
                    came_from.insert(key, current.pos);
                    open.push(Node {
                        pos: neighbour,
                        g_cost,
                        h_cost: manhattan_distance(neighbour, goal),
                    });
                }
            }
        }

        None
    }
}
