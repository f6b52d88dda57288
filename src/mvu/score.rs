use crate::controller::results::{PlayerResult, compute_results};
use crate::controller::store::{self, Loaded};
use crate::error::AppError;
use crate::model::{NUM_PLAYERS, ScoreState, default_player_names};
use crate::storage::BlobStore;
use crate::view::grid::{ScoreGrid, build_score_grid};

#[derive(Debug, Clone)]
pub struct ScoreModel {
    pub state: ScoreState,
    pub name_inputs: [String; NUM_PLAYERS],
    pub grid: Option<ScoreGrid>,
    pub results: Option<Vec<PlayerResult>>,
    pub error: Option<AppError>,
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self {
            state: ScoreState::default(),
            name_inputs: default_player_names(),
            grid: None,
            results: None,
            error: None,
        }
    }
}

/// What has to be redrawn once a write lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Results,
    GridAndResults,
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    StateLoaded(Loaded),
    NameEdited { player: usize, name: String },
    MedalSelected { hole: usize, player: usize, label: String },
    ResetConfirmed,
    StorageCleared(Loaded),
    Persisted { state: ScoreState, refresh: Refresh },
    GridBuilt(ScoreGrid),
    ResultsComputed(Vec<PlayerResult>),
    Failed(AppError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadState,
    Persist(Refresh),
    ClearStorage,
    RenderGrid,
    RenderResults,
}

// Effects are popped from the back, so the grid goes last to be built first.
fn redraw(refresh: Refresh) -> Vec<Effect> {
    match refresh {
        Refresh::Results => vec![Effect::RenderResults],
        Refresh::GridAndResults => vec![Effect::RenderResults, Effect::RenderGrid],
    }
}

fn apply_loaded(model: &mut ScoreModel, loaded: Loaded) {
    model.state = loaded.state;
    model.name_inputs = loaded.name_inputs;
}

pub fn update(model: &mut ScoreModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => vec![Effect::LoadState],
        Msg::StateLoaded(loaded) | Msg::StorageCleared(loaded) => {
            apply_loaded(model, loaded);
            redraw(Refresh::GridAndResults)
        }
        Msg::NameEdited { player, name } => match model.name_inputs.get_mut(player) {
            Some(slot) => {
                *slot = name;
                vec![Effect::Persist(Refresh::GridAndResults)]
            }
            None => {
                model.error = Some(AppError::OutOfRange {
                    what: "player",
                    index: player,
                    limit: NUM_PLAYERS,
                });
                vec![]
            }
        },
        Msg::MedalSelected {
            hole,
            player,
            label,
        } => match store::set_medal(&mut model.state, hole, player, &label) {
            Ok(()) => vec![Effect::Persist(Refresh::Results)],
            Err(e) => {
                model.error = Some(e);
                vec![]
            }
        },
        Msg::ResetConfirmed => vec![Effect::ClearStorage],
        Msg::Persisted { state, refresh } => {
            model.state = state;
            redraw(refresh)
        }
        Msg::GridBuilt(grid) => {
            model.grid = Some(grid);
            vec![]
        }
        Msg::ResultsComputed(results) => {
            model.results = Some(results);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub store: &'a dyn BlobStore,
    pub storage_key: &'a str,
}

pub fn run_effect(effect: Effect, model: &ScoreModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadState => Msg::StateLoaded(store::load(deps.store, deps.storage_key)),
        Effect::Persist(refresh) => {
            match store::save(deps.store, deps.storage_key, &model.state, &model.name_inputs) {
                Ok(state) => Msg::Persisted { state, refresh },
                Err(e) => Msg::Failed(e),
            }
        }
        Effect::ClearStorage => match store::reset(deps.store, deps.storage_key) {
            Ok(loaded) => Msg::StorageCleared(loaded),
            Err(e) => Msg::Failed(e),
        },
        Effect::RenderGrid => Msg::GridBuilt(build_score_grid(&model.state, &model.name_inputs)),
        Effect::RenderResults => {
            Msg::ResultsComputed(compute_results(&model.state, &model.name_inputs))
        }
    }
}
