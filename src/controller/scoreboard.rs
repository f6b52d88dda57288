use crate::controller::reset::reset_scores;
use crate::controller::results::PlayerResult;
use crate::error::AppError;
use crate::model::{NUM_PLAYERS, ScoreState};
use crate::mvu::runtime::run_score;
use crate::mvu::score::{Deps, Msg, ScoreModel};
use crate::storage::BlobStore;
use crate::view::grid::ScoreGrid;

/// Sole owner of the scorecard state and its storage port. Every operation runs
/// to completion (mutate, persist, redraw) before the next one starts.
pub struct ScoreBoard {
    model: ScoreModel,
    store: Box<dyn BlobStore>,
    storage_key: String,
}

impl ScoreBoard {
    /// Builds the board and runs the startup sequence against `store`.
    ///
    /// # Errors
    ///
    /// Load failures fall back to defaults, so this only fails if the startup
    /// render does.
    pub fn new(store: Box<dyn BlobStore>, storage_key: impl Into<String>) -> Result<Self, AppError> {
        let mut board = Self {
            model: ScoreModel::default(),
            store,
            storage_key: storage_key.into(),
        };
        board.page_load()?;
        Ok(board)
    }

    fn dispatch(&mut self, msg: Msg) -> Result<(), AppError> {
        let deps = Deps {
            store: &*self.store,
            storage_key: &self.storage_key,
        };
        run_score(&mut self.model, msg, deps)
    }

    /// Reloads from the store, rebuilds the grid and recomputes results, as a
    /// fresh page load does.
    ///
    /// # Errors
    ///
    /// Load failures fall back to defaults, so this only fails if rendering does.
    pub fn page_load(&mut self) -> Result<(), AppError> {
        self.dispatch(Msg::PageLoad)
    }

    /// # Errors
    ///
    /// Returns an error for a player index outside 0..4 or if the write fails.
    pub fn edit_name(&mut self, player: usize, name: impl Into<String>) -> Result<(), AppError> {
        self.dispatch(Msg::NameEdited {
            player,
            name: name.into(),
        })
    }

    /// # Errors
    ///
    /// Returns an error for indices outside 18×4, an unknown label, or a failed
    /// write. The grid is unchanged on a rejected selection.
    pub fn select_medal(
        &mut self,
        hole: usize,
        player: usize,
        label: impl Into<String>,
    ) -> Result<(), AppError> {
        self.dispatch(Msg::MedalSelected {
            hole,
            player,
            label: label.into(),
        })
    }

    /// Returns whether the reset went ahead.
    ///
    /// # Errors
    ///
    /// Returns an error if clearing the stored blob fails.
    pub fn reset<F>(&mut self, confirm: F) -> Result<bool, AppError>
    where
        F: FnOnce() -> bool,
    {
        let deps = Deps {
            store: &*self.store,
            storage_key: &self.storage_key,
        };
        reset_scores(&mut self.model, deps, confirm)
    }

    #[must_use]
    pub fn state(&self) -> &ScoreState {
        &self.model.state
    }

    #[must_use]
    pub fn name_inputs(&self) -> &[String; NUM_PLAYERS] {
        &self.model.name_inputs
    }

    #[must_use]
    pub fn grid(&self) -> Option<&ScoreGrid> {
        self.model.grid.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> Option<&[PlayerResult]> {
        self.model.results.as_deref()
    }
}
