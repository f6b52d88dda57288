pub mod medal;
pub mod state;

pub use medal::{MEDAL_OPTIONS, Medal, medal_points};
pub use state::{
    NUM_HOLES, NUM_PLAYERS, ScoreState, default_player_name, default_player_names,
    display_player_name,
};
