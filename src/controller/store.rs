use serde_json::json;

use crate::error::AppError;
use crate::model::{Medal, NUM_PLAYERS, ScoreState, default_player_names};
use crate::storage::BlobStore;

pub const DEFAULT_STORAGE_KEY: &str = "golfOlympicScores";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Parsed from the blob store.
    Stored,
    /// Nothing stored under the key.
    Defaults,
    /// A blob existed but could not be read or parsed.
    Recovered,
}

/// State plus the values for the name-input surface, as produced by `load`/`reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub state: ScoreState,
    pub name_inputs: [String; NUM_PLAYERS],
    pub origin: LoadOrigin,
}

impl Loaded {
    fn defaults(origin: LoadOrigin) -> Self {
        Self {
            state: ScoreState::default(),
            name_inputs: default_player_names(),
            origin,
        }
    }
}

/// Reads the blob under `key`. Absent, unreadable and malformed blobs all fall
/// back to the first-run defaults; the last two are logged.
#[must_use]
pub fn load(store: &dyn BlobStore, key: &str) -> Loaded {
    let blob = match store.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Loaded::defaults(LoadOrigin::Defaults),
        Err(e) => {
            eprintln!(
                "{}",
                json!({"store":"load_fallback","key":key,"reason":e.to_string()})
            );
            return Loaded::defaults(LoadOrigin::Recovered);
        }
    };

    match ScoreState::from_json(&blob) {
        Ok(state) => Loaded {
            name_inputs: state.player_names.clone(),
            state,
            origin: LoadOrigin::Stored,
        },
        Err(e) => {
            eprintln!(
                "{}",
                json!({"store":"load_fallback","key":key,"reason":e.to_string()})
            );
            Loaded::defaults(LoadOrigin::Recovered)
        }
    }
}

/// Copies the name inputs into the state and writes the whole thing under
/// `key`, replacing whatever was there. Returns the state that was written.
///
/// # Errors
///
/// Returns an error if serialization or the storage write fails.
pub fn save(
    store: &dyn BlobStore,
    key: &str,
    state: &ScoreState,
    name_inputs: &[String; NUM_PLAYERS],
) -> Result<ScoreState, AppError> {
    let mut snapshot = state.clone();
    snapshot.player_names.clone_from(name_inputs);
    store.set(key, &snapshot.to_json()?)?;
    Ok(snapshot)
}

/// Writes `label` into one grid cell. Does not persist.
///
/// # Errors
///
/// Returns `AppError::OutOfRange` for indices outside 18×4 and
/// `AppError::InvalidMedal` for a label outside the medal table. The grid is
/// untouched in both cases.
pub fn set_medal(
    state: &mut ScoreState,
    hole: usize,
    player: usize,
    label: &str,
) -> Result<(), AppError> {
    let medal = Medal::from_label(label).ok_or_else(|| AppError::InvalidMedal(label.to_string()))?;
    state.set_medal(hole, player, medal)
}

/// Removes the blob and hands back first-run defaults. The cleared state is
/// not written back.
///
/// # Errors
///
/// Returns an error if the storage removal fails.
pub fn reset(store: &dyn BlobStore, key: &str) -> Result<Loaded, AppError> {
    store.remove(key)?;
    Ok(Loaded::defaults(LoadOrigin::Defaults))
}
