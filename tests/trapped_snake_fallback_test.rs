// Integration tests for trapped snake fallback behavior
//
// When every goal fails, the fallback picks among the least-boxed-in
// legal moves; with no legal move at all it must still return an
// in-bounds direction when one exists, never a gratuitous wall hit.
//
// Note on coordinates: y grows downward, so the top wall is y = 0.

use std::collections::HashMap;

use hunter_snake_rust::bot::Bot;
use hunter_snake_rust::config::Config;
use hunter_snake_rust::types::{Battlesnake, Board, Coord, Game};

fn game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: HashMap::new(),
        timeout: 500,
    }
}

/// Test: snake at the top wall (y=0), sealed in by bodies on every side
/// with a full-health tail that never vacates. No legal move exists;
/// the default must not be "up" (out of bounds).
#[tokio::test]
async fn test_trapped_at_top_wall_chooses_in_bounds_move() {
    let config = Config::default_hardcoded();
    let bot = Bot::new(config);

    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![
            Battlesnake {
                id: "our-snake".to_string(),
                name: "Hunter".to_string(),
                health: 100,
                body: vec![
                    Coord { x: 5, y: 0 }, // head at top wall
                    Coord { x: 5, y: 1 }, // neck blocks down
                    Coord { x: 4, y: 1 }, // body
                    Coord { x: 4, y: 0 }, // body blocks left
                ],
                head: Coord { x: 5, y: 0 },
                length: 4,
                latency: "0".to_string(),
                shout: None,
            },
            Battlesnake {
                id: "opponent".to_string(),
                name: "Enemy".to_string(),
                health: 100,
                body: vec![
                    Coord { x: 6, y: 0 }, // blocks right
                    Coord { x: 6, y: 1 },
                    Coord { x: 6, y: 2 },
                    Coord { x: 6, y: 3 },
                ],
                head: Coord { x: 6, y: 0 },
                length: 4,
                latency: "0".to_string(),
                shout: None,
            },
        ],
        hazards: vec![],
    };

    let you = board.snakes[0].clone();

    let response = bot.get_move(&game(), &0, &board, &you).await;
    let chosen_move = response["move"].as_str().unwrap();

    assert_ne!(
        chosen_move, "up",
        "Bot should not choose 'up' when at top wall (y=0)"
    );
    assert_eq!(chosen_move, "down", "down is the first in-bounds default");
}

/// Test: snake at the bottom wall (y=10); the move must not be "down".
#[tokio::test]
async fn test_trapped_at_bottom_wall_avoids_down() {
    let config = Config::default_hardcoded();
    let bot = Bot::new(config);

    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![Battlesnake {
            id: "our-snake".to_string(),
            name: "Hunter".to_string(),
            health: 50,
            body: vec![
                Coord { x: 5, y: 10 }, // head at bottom wall
                Coord { x: 5, y: 9 },  // neck blocks up
                Coord { x: 4, y: 9 },  // body
                Coord { x: 4, y: 10 }, // body blocks left
                Coord { x: 3, y: 10 }, // more body
                Coord { x: 2, y: 10 }, // more body
                Coord { x: 1, y: 10 }, // more body
                Coord { x: 0, y: 10 }, // more body
            ],
            head: Coord { x: 5, y: 10 },
            length: 8,
            latency: "0".to_string(),
            shout: None,
        }],
        hazards: vec![],
    };

    let you = board.snakes[0].clone();

    let response = bot.get_move(&game(), &0, &board, &you).await;
    let chosen_move = response["move"].as_str().unwrap();

    assert_ne!(
        chosen_move, "down",
        "Bot should not choose 'down' when at bottom wall (y=10)"
    );
}

/// Test: snake at the left wall (x=0); the move must not be "left".
#[tokio::test]
async fn test_trapped_at_left_wall_avoids_left() {
    let config = Config::default_hardcoded();
    let bot = Bot::new(config);

    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![Battlesnake {
            id: "our-snake".to_string(),
            name: "Hunter".to_string(),
            health: 50,
            body: vec![
                Coord { x: 0, y: 5 }, // head at left wall
                Coord { x: 1, y: 5 }, // neck blocks right
                Coord { x: 1, y: 4 }, // body
                Coord { x: 0, y: 4 }, // body blocks up
                Coord { x: 0, y: 3 }, // more body
                Coord { x: 0, y: 2 }, // more body
                Coord { x: 0, y: 1 }, // more body
            ],
            head: Coord { x: 0, y: 5 },
            length: 7,
            latency: "0".to_string(),
            shout: None,
        }],
        hazards: vec![],
    };

    let you = board.snakes[0].clone();

    let response = bot.get_move(&game(), &0, &board, &you).await;
    let chosen_move = response["move"].as_str().unwrap();

    assert_ne!(
        chosen_move, "left",
        "Bot should not choose 'left' when at left wall (x=0)"
    );
}

/// Test: snake at the right wall (x=10); the move must not be "right".
#[tokio::test]
async fn test_trapped_at_right_wall_avoids_right() {
    let config = Config::default_hardcoded();
    let bot = Bot::new(config);

    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![Battlesnake {
            id: "our-snake".to_string(),
            name: "Hunter".to_string(),
            health: 50,
            body: vec![
                Coord { x: 10, y: 5 }, // head at right wall
                Coord { x: 9, y: 5 },  // neck blocks left
                Coord { x: 9, y: 6 },  // body
                Coord { x: 10, y: 6 }, // body blocks down
                Coord { x: 10, y: 7 }, // more body
                Coord { x: 10, y: 8 }, // more body
            ],
            head: Coord { x: 10, y: 5 },
            length: 6,
            latency: "0".to_string(),
            shout: None,
        }],
        hazards: vec![],
    };

    let you = board.snakes[0].clone();

    let response = bot.get_move(&game(), &0, &board, &you).await;
    let chosen_move = response["move"].as_str().unwrap();

    assert_ne!(
        chosen_move, "right",
        "Bot should not choose 'right' when at right wall (x=10)"
    );
}

/// Test: dead end whose only exit sits beside an equal-length opponent's
/// head. Every pathing goal refuses the cell, so the fallback takes the
/// single remaining legal direction.
#[tokio::test]
async fn test_dead_end_exit_beside_killer_head_falls_back() {
    let config = Config::default_hardcoded();
    let bot = Bot::new(config);

    let board = Board {
        height: 11,
        width: 11,
        food: vec![Coord { x: 4, y: 4 }],
        snakes: vec![
            Battlesnake {
                id: "our-snake".to_string(),
                name: "Hunter".to_string(),
                health: 30,
                body: vec![
                    Coord { x: 0, y: 0 }, // head in the corner
                    Coord { x: 1, y: 0 },
                    Coord { x: 2, y: 0 },
                ],
                head: Coord { x: 0, y: 0 },
                length: 3,
                latency: "0".to_string(),
                shout: None,
            },
            Battlesnake {
                id: "rival".to_string(),
                name: "Rival".to_string(),
                health: 50,
                body: vec![
                    Coord { x: 0, y: 2 }, // head beside our only exit
                    Coord { x: 0, y: 3 },
                    Coord { x: 0, y: 4 },
                ],
                head: Coord { x: 0, y: 2 },
                length: 3,
                latency: "0".to_string(),
                shout: None,
            },
        ],
        hazards: vec![],
    };

    let you = board.snakes[0].clone();

    let response = bot.get_move(&game(), &0, &board, &you).await;
    let chosen_move = response["move"].as_str().unwrap();

    // Down is the single legal move; attack has no weaker target and the
    // rival's halo walls the exit off from forage and defend paths.
    assert_eq!(chosen_move, "down");
}
