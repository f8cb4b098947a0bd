// Core bot: binds configuration, the decision engine, and the injected
// path search to the Battlesnake API surface.

use log::info;
use serde_json::{json, Value};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::policy;
use crate::search::AStar;
use crate::types::{Battlesnake, Board, Game};

/// Battlesnake bot with an OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        let debug_logger = DebugLogger::from_config(&config.debug);
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "apiversion": "1",
            "author": "hunter-snake",
            "color": "#10b3cc",
            "head": "bendr",
            "tail": "round-bum",
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, _game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME START");
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, _game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME OVER");
    }

    /// Computes and returns the next move for the turn
    /// Corresponds to POST /move endpoint
    ///
    /// The whole decision is a single synchronous pass over the snapshot:
    /// occupancy grids and the safety view are rebuilt per call, so
    /// concurrent games never share state. Only the fallback tie-break
    /// draws on the RNG.
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub async fn get_move(
        &self,
        _game: &Game,
        turn: &i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Value {
        let mut rng = rand::rng();
        let direction = policy::decide(board, you, &self.config, &AStar, &mut rng);

        info!("Turn {}: moving {}", turn, direction.as_str());
        self.debug_logger.log_move(*turn, board.clone(), direction);

        json!({ "move": direction.as_str() })
    }
}
