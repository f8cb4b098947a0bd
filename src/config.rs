// Configuration module for reading Snake.toml
// All tunable thresholds of the decision policy live here instead of
// magic numbers in the engine.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub policy: PolicyConfig,
    pub debug: DebugConfig,
}

/// Thresholds gating the attack and forage goals
#[derive(Debug, Deserialize, Clone)]
pub struct PolicyConfig {
    /// Never hunt below this health; starving snakes forage instead.
    pub attack_min_health: i32,
    /// Bodies at or above this length path too poorly to chase heads.
    pub attack_max_length: i32,
    /// Hunting on a crowded board invites third-party collisions.
    pub attack_max_snakes: usize,
    /// Forage whenever health drops under this value.
    pub hunger_threshold: i32,
    /// While an equal-or-longer snake is around, keep eating until we
    /// reach this length.
    pub growth_target_length: i32,
}

/// Diagnostic turn-log configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            policy: PolicyConfig {
                attack_min_health: 30,
                attack_max_length: 15,
                attack_max_snakes: 6,
                hunger_threshold: 60,
                growth_target_length: 12,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "hunter_snake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Snake.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
