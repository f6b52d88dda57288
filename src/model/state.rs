use serde::{Deserialize, Serialize};

use super::medal::Medal;
use crate::error::AppError;

pub const NUM_PLAYERS: usize = 4;
pub const NUM_HOLES: usize = 18;

/// Scorecard state in the persisted blob shape:
/// `{ "playerNames": [..4], "holeScores": [[..4]; 18] }`.
///
/// Cells hold raw labels. Anything read back from storage is kept verbatim, so a
/// cell may carry a label outside the medal table; it then scores 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreState {
    pub player_names: [String; NUM_PLAYERS],
    pub hole_scores: [[String; NUM_PLAYERS]; NUM_HOLES],
}

// Loose mirror of the blob. Short, long or null-filled data is squared up in
// `ScoreState::from_stored`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredScores {
    #[serde(default)]
    player_names: Vec<Option<String>>,
    #[serde(default)]
    hole_scores: Vec<Option<Vec<Option<String>>>>,
}

#[must_use]
pub fn default_player_name(player: usize) -> String {
    // A, B, C, D
    let letter = char::from(b'A' + (player % 26) as u8);
    format!("プレイヤー{letter}")
}

/// Header/result label for a player: the typed name, or `プレイヤーN` when blank.
#[must_use]
pub fn display_player_name(name: &str, player: usize) -> String {
    if name.is_empty() {
        format!("プレイヤー{}", player + 1)
    } else {
        name.to_string()
    }
}

#[must_use]
pub fn default_player_names() -> [String; NUM_PLAYERS] {
    std::array::from_fn(default_player_name)
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            player_names: default_player_names(),
            hole_scores: Default::default(),
        }
    }
}

impl ScoreState {
    /// Parses a stored blob. Missing names fall back to the defaults and missing
    /// cells to unselected; extra holes, players or names are dropped.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Parse` if the blob is not a JSON object of the expected shape.
    pub fn from_json(blob: &str) -> Result<Self, AppError> {
        let stored: StoredScores = serde_json::from_str(blob)?;
        Ok(Self::from_stored(stored))
    }

    fn from_stored(stored: StoredScores) -> Self {
        let mut state = Self::default();

        for (slot, name) in state.player_names.iter_mut().zip(stored.player_names) {
            if let Some(name) = name {
                *slot = name;
            }
        }

        for (row, stored_row) in state.hole_scores.iter_mut().zip(stored.hole_scores) {
            for (cell, label) in row.iter_mut().zip(stored_row.unwrap_or_default()) {
                *cell = label.unwrap_or_default();
            }
        }

        state
    }

    /// # Errors
    ///
    /// Returns `AppError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn cell(&self, hole: usize, player: usize) -> Option<&str> {
        self.hole_scores
            .get(hole)
            .and_then(|row| row.get(player))
            .map(String::as_str)
    }

    /// Writes `medal` into one cell. Indices outside the 18×4 grid are rejected
    /// and leave the grid untouched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::OutOfRange` for a bad hole or player index.
    pub fn set_medal(&mut self, hole: usize, player: usize, medal: Medal) -> Result<(), AppError> {
        if hole >= NUM_HOLES {
            return Err(AppError::OutOfRange {
                what: "hole",
                index: hole,
                limit: NUM_HOLES,
            });
        }
        if player >= NUM_PLAYERS {
            return Err(AppError::OutOfRange {
                what: "player",
                index: player,
                limit: NUM_PLAYERS,
            });
        }
        self.hole_scores[hole][player] = medal.label().to_string();
        Ok(())
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.hole_scores.iter().flatten().all(String::is_empty)
    }
}
