// Single-step legality and short-term safety ranking.
//
// Everything here looks at CURRENT bodies only: tails count as occupied
// even though they may vacate next turn. The more permissive
// one-step-ahead view lives in grid.rs.

use crate::types::{Battlesnake, Board, Coord, Direction};

/// Borrow-only view of the board used to classify single-step moves.
pub struct Safety<'a> {
    board: &'a Board,
    you: &'a Battlesnake,
}

impl<'a> Safety<'a> {
    pub fn new(board: &'a Board, you: &'a Battlesnake) -> Self {
        Safety { board, you }
    }

    fn head(&self) -> Coord {
        self.you.head
    }

    /// In-bounds and not on any snake's current body segment.
    pub fn is_legal(&self, pos: Coord) -> bool {
        let in_bounds =
            pos.x >= 0 && pos.x < self.board.width && pos.y >= 0 && pos.y < self.board.height;
        if !in_bounds {
            return false;
        }
        !self
            .board
            .snakes
            .iter()
            .any(|snake| snake.body.contains(&pos))
    }

    /// The subset of directions whose step from `from` lands on a legal cell.
    pub fn safe_moves(&self, from: Coord) -> Vec<Direction> {
        Direction::all()
            .iter()
            .filter(|&&direction| self.is_legal(direction.apply(&from)))
            .copied()
            .collect()
    }

    /// 1-ply lookahead: how many legal continuations remain from the cell
    /// this direction reaches. This is the only lookahead depth used.
    pub fn rank(&self, direction: Direction) -> usize {
        self.safe_moves(direction.apply(&self.head())).len()
    }

    /// All safe moves from the head tying for the maximum rank. Empty only
    /// when no legal move exists at all.
    pub fn best_moves(&self) -> Vec<Direction> {
        let moves = self.safe_moves(self.head());
        let max_rank = moves
            .iter()
            .map(|&direction| self.rank(direction))
            .max()
            .unwrap_or(0);
        moves
            .into_iter()
            .filter(|&direction| self.rank(direction) == max_rank)
            .collect()
    }

    /// True when another snake's head sits on `pos` and that snake would
    /// win or tie a head-to-head collision with us.
    pub fn is_killer_head(&self, pos: Coord) -> bool {
        self.board.snakes.iter().any(|snake| {
            snake.id != self.you.id
                && snake.head == pos
                && snake.body.len() >= self.you.body.len()
        })
    }

    /// True when none of the four neighbours of `pos` holds a killer head.
    pub fn no_adjacent_killer_head(&self, pos: Coord) -> bool {
        !Direction::all()
            .iter()
            .any(|direction| self.is_killer_head(direction.apply(&pos)))
    }

    /// Converts a cell one step from the head into the direction reaching
    /// it. Horizontal wins over vertical when both axes differ; None when
    /// `pos` is the head itself.
    pub fn direction_to(&self, pos: Coord) -> Option<Direction> {
        let head = self.head();
        if pos.x > head.x {
            Some(Direction::Right)
        } else if pos.x < head.x {
            Some(Direction::Left)
        } else if pos.y > head.y {
            Some(Direction::Down)
        } else if pos.y < head.y {
            Some(Direction::Up)
        } else {
            None
        }
    }
}
