use golf_medal::ScoreBoard;
use golf_medal::args;
use golf_medal::controller::http_handlers::{
    SharedScoreBoard, edit_name, index, reset, select_medal, state,
};
use golf_medal::storage::SqliteBlobStore;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::json;
use std::sync::Mutex;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let store = SqliteBlobStore::open(&args.db_name)?;
    let board = ScoreBoard::new(Box::new(store), args.storage_key.clone())?;
    let board: Data<SharedScoreBoard> = Data::new(Mutex::new(board));

    eprintln!(
        "{}",
        json!({"startup":"listening","bind":args.bind,"port":args.port,"db":args.db_name,"key":args.storage_key})
    );

    let static_dir = args.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(board.clone())
            .route("/", web::get().to(index))
            .route("/players/{player}/name", web::post().to(edit_name))
            .route(
                "/holes/{hole}/players/{player}/medal",
                web::post().to(select_medal),
            )
            .route("/reset", web::post().to(reset))
            .route("/state", web::get().to(state))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
