use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Mutex, MutexGuard};

use crate::controller::scoreboard::ScoreBoard;
use crate::error::AppError;
use crate::view::grid::render_score_grid;
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template, render_name_inputs};
use crate::view::results::render_results;

pub type SharedScoreBoard = Mutex<ScoreBoard>;

#[derive(Debug, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MedalForm {
    #[serde(default)]
    pub medal: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetForm {
    pub confirm: Option<String>,
}

/// Which page sections go back as out-of-band swaps.
#[derive(Debug, Clone, Copy)]
struct Sections {
    names: bool,
    grid: bool,
}

fn error_response(route: &str, e: &AppError) -> HttpResponse {
    eprintln!("{}", json!({"http":"error","route":route,"error":e.to_string()}));
    let status = match e {
        AppError::OutOfRange { .. } | AppError::InvalidMedal(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status).json(json!({"error": e.to_string()}))
}

fn lock_board<'a>(
    board: &'a Data<SharedScoreBoard>,
    route: &str,
) -> Result<MutexGuard<'a, ScoreBoard>, HttpResponse> {
    board
        .lock()
        .map_err(|e| error_response(route, &AppError::Other(format!("scoreboard poisoned: {e}"))))
}

fn render_sections(board: &ScoreBoard, sections: Sections) -> Result<Markup, AppError> {
    let results = board
        .results()
        .ok_or_else(|| AppError::Other("results requested before render".into()))?;
    let grid = if sections.grid {
        Some(
            board
                .grid()
                .ok_or_else(|| AppError::Other("grid requested before render".into()))?,
        )
    } else {
        None
    };

    Ok(html! {
        @if sections.names {
            (render_name_inputs(board.name_inputs(), true))
        }
        @if let Some(grid) = grid {
            (render_score_grid(grid, true))
        }
        (render_results(results, true))
    })
}

fn html_response(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn index(board: Data<SharedScoreBoard>) -> HttpResponse {
    let mut board = match lock_board(&board, "index") {
        Ok(board) => board,
        Err(resp) => return resp,
    };
    if let Err(e) = board.page_load() {
        return error_response("index", &e);
    }
    match (board.grid(), board.results()) {
        (Some(grid), Some(results)) => html_response(render_index_template(
            DEFAULT_INDEX_TITLE,
            board.name_inputs(),
            grid,
            results,
        )),
        _ => error_response("index", &AppError::Other("page rendered without sections".into())),
    }
}

pub async fn edit_name(
    board: Data<SharedScoreBoard>,
    path: web::Path<usize>,
    form: web::Form<NameForm>,
) -> HttpResponse {
    let player = path.into_inner();
    let mut board = match lock_board(&board, "edit_name") {
        Ok(board) => board,
        Err(resp) => return resp,
    };
    let sections = Sections {
        names: false,
        grid: true,
    };
    match board
        .edit_name(player, form.into_inner().name)
        .and_then(|()| render_sections(&board, sections))
    {
        Ok(markup) => html_response(markup),
        Err(e) => error_response("edit_name", &e),
    }
}

pub async fn select_medal(
    board: Data<SharedScoreBoard>,
    path: web::Path<(usize, usize)>,
    form: web::Form<MedalForm>,
) -> HttpResponse {
    let (hole, player) = path.into_inner();
    let mut board = match lock_board(&board, "select_medal") {
        Ok(board) => board,
        Err(resp) => return resp,
    };
    let sections = Sections {
        names: false,
        grid: false,
    };
    match board
        .select_medal(hole, player, form.into_inner().medal)
        .and_then(|()| render_sections(&board, sections))
    {
        Ok(markup) => html_response(markup),
        Err(e) => error_response("select_medal", &e),
    }
}

/// The page only sends `confirm=yes` once the browser's confirm dialog was accepted.
pub async fn reset(board: Data<SharedScoreBoard>, form: web::Form<ResetForm>) -> HttpResponse {
    let confirmed = form.confirm.as_deref() == Some("yes");
    let mut board = match lock_board(&board, "reset") {
        Ok(board) => board,
        Err(resp) => return resp,
    };
    let sections = Sections {
        names: true,
        grid: true,
    };
    match board
        .reset(|| confirmed)
        .and_then(|_| render_sections(&board, sections))
    {
        Ok(markup) => html_response(markup),
        Err(e) => error_response("reset", &e),
    }
}

pub async fn state(board: Data<SharedScoreBoard>) -> HttpResponse {
    match lock_board(&board, "state") {
        Ok(board) => HttpResponse::Ok().json(board.state()),
        Err(resp) => resp,
    }
}
