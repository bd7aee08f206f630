//! Configuration for a play session.

use std::path::Path;

use serde::Deserialize;

use crate::error::GameResult;

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Text written before each line of input.
    pub prompt: String,
    /// List exit directions when describing a location.
    pub show_exits: bool,
    /// Suggest a known verb when the player mistypes one.
    pub suggest_verbs: bool,
    /// Print the world title when the session starts.
    pub banner: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_exits: true,
            suggest_verbs: true,
            banner: true,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Set the input prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Toggle the exit list.
    pub fn with_exits(mut self, show: bool) -> Self {
        self.show_exits = show;
        self
    }

    /// Toggle did-you-mean hints.
    pub fn with_suggestions(mut self, suggest: bool) -> Self {
        self.suggest_verbs = suggest;
        self
    }

    /// Toggle the start banner.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}
