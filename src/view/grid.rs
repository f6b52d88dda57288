use maud::{Markup, html};

use crate::model::{MEDAL_OPTIONS, NUM_HOLES, NUM_PLAYERS, ScoreState, display_player_name};

/// UI description of the score-entry grid: 18 rows × 4 selectors plus the
/// player header labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    pub headers: [String; NUM_PLAYERS],
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub hole: usize,
    pub label: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub hole: usize,
    pub player: usize,
    pub selected: String,
    pub options: Vec<GridOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOption {
    pub value: &'static str,
    pub text: &'static str,
    pub selected: bool,
}

impl GridCell {
    /// Where the selector posts its change.
    #[must_use]
    pub fn post_path(&self) -> String {
        format!("holes/{}/players/{}/medal", self.hole, self.player)
    }
}

#[must_use]
pub fn hole_label(hole: usize) -> String {
    format!("ホール {}", hole + 1)
}

/// Builds the grid from state and the live name inputs. Same inputs, same grid.
#[must_use]
pub fn build_score_grid(state: &ScoreState, name_inputs: &[String; NUM_PLAYERS]) -> ScoreGrid {
    let headers = std::array::from_fn(|player| display_player_name(&name_inputs[player], player));

    let rows = (0..NUM_HOLES)
        .map(|hole| GridRow {
            hole,
            label: hole_label(hole),
            cells: (0..NUM_PLAYERS)
                .map(|player| {
                    let selected = state.cell(hole, player).unwrap_or_default().to_string();
                    let options = MEDAL_OPTIONS
                        .iter()
                        .map(|medal| GridOption {
                            value: medal.label(),
                            text: medal.option_text(),
                            selected: medal.label() == selected,
                        })
                        .collect();
                    GridCell {
                        hole,
                        player,
                        selected,
                        options,
                    }
                })
                .collect(),
        })
        .collect();

    ScoreGrid { headers, rows }
}

#[must_use]
pub fn render_score_grid(grid: &ScoreGrid, oob: bool) -> Markup {
    html! {
        div id="score-grid" hx-swap-oob=[oob.then_some("true")] {
            table id="score-table" class="styled-table" {
                thead {
                    tr {
                        th { "ホール" }
                        @for header in &grid.headers {
                            th class="player-name-header" { (header) }
                        }
                    }
                }
                tbody {
                    @for row in &grid.rows {
                        tr {
                            td { (row.label) }
                            @for cell in &row.cells {
                                td {
                                    select class="medal-select" name="medal"
                                        data-hole=(cell.hole) data-player=(cell.player)
                                        hx-post=(cell.post_path()) hx-trigger="change" hx-swap="none" {
                                        @for opt in &cell.options {
                                            option value=(opt.value) selected[opt.selected] { (opt.text) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
