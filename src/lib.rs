pub mod args;
pub mod error;
pub mod model;
pub mod storage;
pub mod controller {
    pub mod http_handlers;
    pub mod reset;
    pub mod results;
    pub mod scoreboard;
    pub mod store;
}
pub mod mvu {
    pub mod runtime;
    pub mod score;
}
pub mod view {
    pub mod grid;
    pub mod index;
    pub mod results;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use controller::scoreboard::ScoreBoard;
pub use error::AppError;
