mod common;

use std::cell::Cell;

use common::{KEY, fresh_board};
use golf_medal::AppError;
use golf_medal::model::{NUM_HOLES, ScoreState, default_player_names};
use golf_medal::storage::BlobStore;

#[test]
fn test6_startup_renders_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let (store, board) = fresh_board()?;

    assert_eq!(board.state(), &ScoreState::default());
    assert_eq!(board.name_inputs(), &default_player_names());
    assert_eq!(board.grid().map(|g| g.rows.len()), Some(NUM_HOLES));
    assert_eq!(board.results().map(<[_]>::len), Some(4));
    assert_eq!(store.get(KEY)?, None);
    Ok(())
}

#[test]
fn test6_medal_then_reload_matches() -> Result<(), Box<dyn std::error::Error>> {
    let (_store, mut board) = fresh_board()?;
    board.select_medal(0, 3, "金")?;
    board.select_medal(1, 3, "銀")?;

    let before_state = board.state().clone();
    board.page_load()?;
    assert_eq!(board.state(), &before_state);

    let first_grid = board.grid().cloned();
    board.page_load()?;
    assert_eq!(board.grid().cloned(), first_grid);
    assert_eq!(
        first_grid.map(|g| g.rows[1].cells[3].selected.clone()),
        Some("銀".to_string())
    );

    let player_d = &board.results().unwrap_or_default()[3];
    assert_eq!(player_d.total, 7);
    assert_eq!(player_d.diff, 0);
    Ok(())
}

#[test]
fn test6_medal_change_does_not_rebuild_grid() -> Result<(), Box<dyn std::error::Error>> {
    let (_store, mut board) = fresh_board()?;
    board.select_medal(2, 1, "銅")?;

    // the selector itself already shows the new value; only results move
    assert_eq!(board.grid().map(|g| g.rows[2].cells[1].selected.as_str()), Some(""));
    assert_eq!(board.results().map(|r| r[1].total), Some(2));

    board.edit_name(1, "Yui")?;
    assert_eq!(board.grid().map(|g| g.rows[2].cells[1].selected.as_str()), Some("銅"));
    assert_eq!(board.grid().map(|g| g.headers[1].as_str()), Some("Yui"));
    Ok(())
}

#[test]
fn test6_rejected_selection_keeps_everything() -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut board) = fresh_board()?;
    board.select_medal(0, 0, "鉄")?;
    let blob_before = store.get(KEY)?;
    let state_before = board.state().clone();

    assert!(matches!(
        board.select_medal(18, 0, "金"),
        Err(AppError::OutOfRange { .. })
    ));
    assert!(matches!(
        board.select_medal(0, 4, "金"),
        Err(AppError::OutOfRange { .. })
    ));
    assert!(matches!(
        board.select_medal(0, 0, "gold"),
        Err(AppError::InvalidMedal(_))
    ));

    assert_eq!(board.state(), &state_before);
    assert_eq!(store.get(KEY)?, blob_before);

    // the board keeps working afterwards
    board.select_medal(0, 0, "銀")?;
    assert_eq!(board.state().cell(0, 0), Some("銀"));
    Ok(())
}

#[test]
fn test6_declined_reset_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut board) = fresh_board()?;
    board.edit_name(2, "Ken")?;
    board.select_medal(9, 2, "チップイン")?;
    let blob_before = store.get(KEY)?;

    let asked = Cell::new(0);
    let done = board.reset(|| {
        asked.set(asked.get() + 1);
        false
    })?;

    assert!(!done);
    assert_eq!(asked.get(), 1);
    assert_eq!(board.state().cell(9, 2), Some("チップイン"));
    assert_eq!(board.name_inputs()[2], "Ken");
    assert_eq!(store.get(KEY)?, blob_before);
    Ok(())
}

#[test]
fn test6_confirmed_reset_clears_everything() -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut board) = fresh_board()?;
    for hole in 0..NUM_HOLES {
        board.select_medal(hole, hole % 4, "金")?;
    }
    board.edit_name(0, "Hideki")?;
    assert!(store.get(KEY)?.is_some());

    assert!(board.reset(|| true)?);

    assert!(board.state().is_cleared());
    assert_eq!(board.state().player_names, default_player_names());
    assert_eq!(board.name_inputs(), &default_player_names());
    assert_eq!(store.get(KEY)?, None);

    let grid = board.grid().cloned().unwrap_or_else(|| panic!("grid after reset"));
    assert!(grid.rows.iter().flat_map(|r| &r.cells).all(|c| c.selected.is_empty()));
    assert_eq!(grid.headers[0], "プレイヤーA");
    assert!(
        board
            .results()
            .unwrap_or_default()
            .iter()
            .all(|r| r.total == 0 && r.diff == 0)
    );

    // a reload after reset still sees nothing stored
    board.page_load()?;
    assert!(board.state().is_cleared());
    Ok(())
}

#[test]
fn test6_name_edit_persists_all_names() -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut board) = fresh_board()?;
    board.edit_name(3, "松山")?;

    let blob = common::blob_value(&store.get(KEY)?.unwrap_or_default());
    assert_eq!(
        blob["playerNames"],
        serde_json::json!(["プレイヤーA", "プレイヤーB", "プレイヤーC", "松山"])
    );
    assert_eq!(board.state().player_names[3], "松山");
    Ok(())
}
