use qwirkle::Rack;
use serde::Serialize;

/// Who decides on the moves of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves are read as commands from the input.
    Human,
    /// Moves are chosen by the exhaustive move search.
    Computer,
}

/// A player and their state during one game.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub rack: Rack,
    pub score: u32,
}

impl Player {
    pub fn new(name: &str, kind: PlayerKind) -> Self {
        Self {
            name: String::from(name),
            kind,
            rack: Rack::new(),
            score: 0,
        }
    }

    pub fn human(name: &str) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn computer(name: &str) -> Self {
        Self::new(name, PlayerKind::Computer)
    }
}
