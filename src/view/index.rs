use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::controller::reset::RESET_PROMPT;
use crate::controller::results::PlayerResult;
use crate::model::NUM_PLAYERS;
use crate::view::grid::{ScoreGrid, render_score_grid};
use crate::view::results::render_results;

pub const DEFAULT_INDEX_TITLE: &str = "ゴルフ オリンピック";

#[must_use]
pub fn render_name_inputs(name_inputs: &[String; NUM_PLAYERS], oob: bool) -> Markup {
    html! {
        div id="player-names" hx-swap-oob=[oob.then_some("true")] {
            @for (player, name) in name_inputs.iter().enumerate() {
                @let input_id = format!("player{}-name", player + 1);
                label for=(input_id) { "プレイヤー" (player + 1) }
                input type="text" id=(input_id) name="name" value=(name)
                    hx-post=(format!("players/{player}/name")) hx-trigger="input" hx-swap="none";
            }
        }
    }
}

#[must_use]
pub fn render_index_template(
    title: &str,
    name_inputs: &[String; NUM_PLAYERS],
    grid: &ScoreGrid,
    results: &[PlayerResult],
) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (title) }
            (render_name_inputs(name_inputs, false))
            (render_score_grid(grid, false))
            (render_results(results, false))
            button id="reset-button" hx-post="reset" hx-vals=r#"{"confirm":"yes"}"#
                hx-confirm=(RESET_PROMPT) hx-swap="none" {
                "リセット"
            }
        }
    }
}
