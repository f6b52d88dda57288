#![allow(dead_code)]

use golf_medal::ScoreBoard;
use golf_medal::controller::store::DEFAULT_STORAGE_KEY;
use golf_medal::model::{NUM_HOLES, NUM_PLAYERS, ScoreState};
use golf_medal::storage::MemoryBlobStore;

pub const KEY: &str = DEFAULT_STORAGE_KEY;

/// A board over an empty memory store, plus a handle on the same store.
pub fn fresh_board() -> Result<(MemoryBlobStore, ScoreBoard), Box<dyn std::error::Error>> {
    let store = MemoryBlobStore::new();
    let board = ScoreBoard::new(Box::new(store.clone()), KEY)?;
    Ok((store, board))
}

/// Every medal shows up at least once, spread across players.
pub fn sample_state() -> ScoreState {
    let labels = ["", "チップイン", "金", "銀", "銅", "鉄"];
    let mut state = ScoreState::default();
    state.player_names = [
        "Aoki".to_string(),
        "Ishikawa".to_string(),
        String::new(),
        "松山".to_string(),
    ];
    for hole in 0..NUM_HOLES {
        for player in 0..NUM_PLAYERS {
            state.hole_scores[hole][player] =
                labels[(hole + player * 2) % labels.len()].to_string();
        }
    }
    state
}

pub fn blob_value(blob: &str) -> serde_json::Value {
    serde_json::from_str(blob).expect("stored blob should be json")
}
