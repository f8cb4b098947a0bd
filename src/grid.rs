// One-step-ahead occupancy grids and shortest-path target selection.
//
// Grids predict occupancy one turn out: a tail cell is free unless its
// snake is at full health (it will not shrink next turn), and every
// opponent head projects a halo onto its four neighbours to keep us out
// of cells the opponent could move into.

use crate::search::PathSearch;
use crate::types::{Battlesnake, Board, Coord, Direction};

pub const FULL_HEALTH: i32 = 100;

/// Free/blocked matrix over the board. Cells outside the board count as
/// blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl Grid {
    fn open(width: i32, height: i32) -> Self {
        Grid {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
        }
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn block(&mut self, pos: Coord) {
        if self.in_bounds(pos) {
            self.blocked[(pos.y * self.width + pos.x) as usize] = true;
        }
    }

    pub fn is_free(&self, pos: Coord) -> bool {
        self.in_bounds(pos) && !self.blocked[(pos.y * self.width + pos.x) as usize]
    }
}

/// Marks a snake's body under the shared one-step-ahead rule: every
/// segment blocks except the tail, which only blocks at full health.
fn block_body(grid: &mut Grid, snake: &Battlesnake) {
    let last = snake.body.len().saturating_sub(1);
    for (index, &segment) in snake.body.iter().enumerate() {
        let is_tail = index == last;
        if !is_tail || snake.health == FULL_HEALTH {
            grid.block(segment);
        }
    }
}

/// Blocks the four in-bounds neighbours of an opponent head.
fn block_head_halo(grid: &mut Grid, snake: &Battlesnake) {
    for direction in Direction::all().iter() {
        grid.block(direction.apply(&snake.head));
    }
}

/// Obstacle grid for food seeking: every snake under the base rule, with
/// a danger halo around every opponent head.
pub fn food_grid(board: &Board, you: &Battlesnake) -> Grid {
    let mut grid = Grid::open(board.width, board.height);
    for snake in &board.snakes {
        block_body(&mut grid, snake);
        if snake.id != you.id {
            block_head_halo(&mut grid, snake);
        }
    }
    grid
}

/// Obstacle grid for hunting: a snake strictly shorter than ours leaves
/// its head cell free (that cell is the kill target) and casts no halo;
/// everyone else follows the food-grid rule.
pub fn kill_grid(board: &Board, you: &Battlesnake) -> Grid {
    let mut grid = Grid::open(board.width, board.height);
    for snake in &board.snakes {
        if snake.body.len() < you.body.len() {
            for &segment in snake.body.iter().skip(1) {
                grid.block(segment);
            }
        } else {
            block_body(&mut grid, snake);
            if snake.id != you.id {
                block_head_halo(&mut grid, snake);
            }
        }
    }
    grid
}

/// Per-decision grid cache. Each grid is built at most once per turn and
/// dropped with the decision, so concurrent games never share state.
pub struct Grids<'a> {
    board: &'a Board,
    you: &'a Battlesnake,
    food: Option<Grid>,
    kill: Option<Grid>,
}

impl<'a> Grids<'a> {
    pub fn new(board: &'a Board, you: &'a Battlesnake) -> Self {
        Grids {
            board,
            you,
            food: None,
            kill: None,
        }
    }

    pub fn food(&mut self) -> &Grid {
        if self.food.is_none() {
            self.food = Some(food_grid(self.board, self.you));
        }
        self.food.as_ref().unwrap()
    }

    pub fn kill(&mut self) -> &Grid {
        if self.kill.is_none() {
            self.kill = Some(kill_grid(self.board, self.you));
        }
        self.kill.as_ref().unwrap()
    }
}

/// Shortest path from `start` to any cell of `targets` over `grid`.
///
/// Targets are scanned in order: unreachable ones are discarded, a
/// strictly shorter path replaces the running best, and ties go to the
/// first minimum. A target equal to `start` short-circuits to the empty
/// path since there is nothing to move toward.
pub fn shortest_path(
    search: &dyn PathSearch,
    grid: &Grid,
    start: Coord,
    targets: &[Coord],
) -> Option<Vec<Coord>> {
    let mut best: Option<Vec<Coord>> = None;
    for &target in targets {
        if target == start {
            return Some(Vec::new());
        }
        if let Some(path) = search.find_path(grid, start, target) {
            if path.is_empty() {
                continue;
            }
            let shorter = match &best {
                Some(current) => path.len() < current.len(),
                None => true,
            };
            if shorter {
                best = Some(path);
            }
        }
    }
    best
}

/// The cell to step into: the path element right after the head.
pub fn next_position(path: &[Coord]) -> Option<Coord> {
    path.get(1).copied()
}
