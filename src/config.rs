//! Startup configuration: the roster and the cards a session begins with.
//!
//! Nothing is ever written back. The board lives in memory and resets on
//! every run; the config only decides what it resets to.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::board::{default_cards, default_members, Board, Roster};
use crate::models::{Card, TeamMember};

const APP_NAME: &str = "kanban-board";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Team members, in the order they are offered when adding a card.
    #[serde(default = "default_members")]
    pub members: Vec<TeamMember>,
    /// Cards present when the session starts, in store order.
    #[serde(default = "default_cards")]
    pub cards: Vec<Card>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            members: default_members(),
            cards: default_cards(),
        }
    }
}

impl BoardConfig {
    /// Load from the user's config directory.
    /// Returns the default config if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let path = match get_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("No config directory, using defaults: {}", e);
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. Unlike [`BoardConfig::load`], errors are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;
        tracing::debug!(path = %path.display(), "Loaded board config");
        Ok(config)
    }

    /// Drop the seed cards, keeping the roster.
    pub fn without_cards(mut self) -> Self {
        self.cards.clear();
        self
    }

    /// Validate the roster and seed cards and build the board.
    pub fn into_board(self) -> Result<Board> {
        let roster = Roster::new(self.members).context("Invalid team roster in config")?;
        let board =
            Board::with_cards(roster, self.cards).context("Invalid seed card in config")?;
        Ok(board)
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
