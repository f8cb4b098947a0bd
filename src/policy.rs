// The fixed-priority decision chain: attack, forage, defend, then the
// pure-safety fallback.
//
// Each goal is a (precondition, targets, grid, validation) tuple tried
// in order; the first one that survives validation decides the turn.
// Only the fallback tie-break consults the RNG.

use log::{debug, info};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::Config;
use crate::grid::{next_position, shortest_path, Grid, Grids};
use crate::safety::Safety;
use crate::search::PathSearch;
use crate::types::{Battlesnake, Board, Coord, Direction};

/// The goals tried in strict priority order before the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    Attack,
    Forage,
    Defend,
}

const GOALS: [Goal; 3] = [Goal::Attack, Goal::Forage, Goal::Defend];

fn is_weaker(snake: &Battlesnake, you: &Battlesnake) -> bool {
    snake.body.len() < you.body.len()
}

impl Goal {
    fn name(self) -> &'static str {
        match self {
            Goal::Attack => "attack",
            Goal::Forage => "forage",
            Goal::Defend => "defend",
        }
    }

    /// Preconditions gate the goal before any pathfinding happens.
    fn applies(self, board: &Board, you: &Battlesnake, config: &Config) -> bool {
        let policy = &config.policy;
        match self {
            // Hunt only when healthy, still nimble, and the board is not
            // crowded; a starving or oversized snake paths too poorly to
            // chase heads.
            Goal::Attack => {
                board.snakes.iter().any(|snake| is_weaker(snake, you))
                    && you.health > policy.attack_min_health
                    && (you.body.len() as i32) < policy.attack_max_length
                    && board.snakes.len() <= policy.attack_max_snakes
            }
            // Eat when hungry, or keep growing while an equal-or-longer
            // snake is around.
            Goal::Forage => {
                let outmatched = board.snakes.iter().any(|snake| {
                    snake.id != you.id && snake.body.len() >= you.body.len()
                });
                !board.food.is_empty()
                    && (you.health < policy.hunger_threshold
                        || (outmatched
                            && (you.body.len() as i32) < policy.growth_target_length))
            }
            // Chasing our own tail is safe loitering; always worth a try.
            Goal::Defend => true,
        }
    }

    fn targets(self, board: &Board, you: &Battlesnake) -> Vec<Coord> {
        match self {
            Goal::Attack => board
                .snakes
                .iter()
                .filter(|snake| is_weaker(snake, you))
                .map(|snake| snake.head)
                .collect(),
            Goal::Forage => board.food.clone(),
            Goal::Defend => vec![you.tail()],
        }
    }

    fn grid<'a>(self, grids: &'a mut Grids<'_>) -> &'a Grid {
        match self {
            Goal::Attack => grids.kill(),
            Goal::Forage | Goal::Defend => grids.food(),
        }
    }

    /// Attack and forage insist on a continuation from the proposed cell;
    /// defend only refuses to step next to a killer head.
    fn validate(self, safety: &Safety, next: Coord) -> bool {
        match self {
            Goal::Attack | Goal::Forage => {
                !safety.safe_moves(next).is_empty() && safety.no_adjacent_killer_head(next)
            }
            Goal::Defend => safety.no_adjacent_killer_head(next),
        }
    }
}

/// Decides the move for one turn.
///
/// Pure with respect to the snapshot: the same board and RNG seed always
/// yield the same direction, and all per-decision state lives on this
/// call's stack.
pub fn decide<R: Rng>(
    board: &Board,
    you: &Battlesnake,
    config: &Config,
    search: &dyn PathSearch,
    rng: &mut R,
) -> Direction {
    let safety = Safety::new(board, you);
    let mut grids = Grids::new(board, you);

    for &goal in GOALS.iter() {
        if !goal.applies(board, you, config) {
            continue;
        }
        let targets = goal.targets(board, you);
        if targets.is_empty() {
            continue;
        }

        let grid = goal.grid(&mut grids);
        let path = match shortest_path(search, grid, you.head, &targets) {
            Some(path) => path,
            None => {
                debug!("{}: no reachable target", goal.name());
                continue;
            }
        };
        let next = match next_position(&path) {
            Some(next) => next,
            // Already sitting on the target; nothing to move toward.
            None => continue,
        };
        if !goal.validate(&safety, next) {
            debug!("{}: ({}, {}) fails validation", goal.name(), next.x, next.y);
            continue;
        }
        if let Some(direction) = safety.direction_to(next) {
            info!(
                "{}: moving {} toward ({}, {})",
                goal.name(),
                direction.as_str(),
                next.x,
                next.y
            );
            return direction;
        }
    }

    fallback(&safety, board, you, rng)
}

/// Last resort: the least-boxed-in legal moves, tie-broken uniformly at
/// random. With no legal move left the game is already lost either way;
/// we still prefer an in-bounds direction so the submitted move is never
/// a gratuitous wall hit.
fn fallback<R: Rng>(
    safety: &Safety,
    board: &Board,
    you: &Battlesnake,
    rng: &mut R,
) -> Direction {
    let best = safety.best_moves();
    if let Some(&direction) = best.choose(rng) {
        info!(
            "fallback: moving {} ({} candidate(s))",
            direction.as_str(),
            best.len()
        );
        return direction;
    }

    let in_bounds = Direction::all().iter().copied().find(|direction| {
        let pos = direction.apply(&you.head);
        pos.x >= 0 && pos.x < board.width && pos.y >= 0 && pos.y < board.height
    });
    let direction = in_bounds.unwrap_or(Direction::Up);
    info!("fallback: no legal moves left, defaulting {}", direction.as_str());
    direction
}
