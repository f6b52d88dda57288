mod common;

use golf_medal::controller::results::{DiffClass, compute_results, compute_totals};
use golf_medal::model::{NUM_HOLES, ScoreState, default_player_names};

fn state_with(cells: &[(usize, usize, &str)]) -> ScoreState {
    let mut state = ScoreState::default();
    for &(hole, player, label) in cells {
        state.hole_scores[hole][player] = label.to_string();
    }
    state
}

#[test]
fn test2_empty_card_is_all_zero() {
    let state = ScoreState::default();
    let results = compute_results(&state, &default_player_names());

    assert_eq!(results.len(), 4);
    for result in &results {
        assert_eq!(result.total, 0);
        assert_eq!(result.diff, 0);
        assert_eq!(result.diff_text, "0");
        assert_eq!(result.diff_class, DiffClass::Zero);
    }
}

#[test]
fn test2_gold_plus_silver_is_seven() {
    let state = state_with(&[(0, 1, "金"), (1, 1, "銀")]);
    assert_eq!(compute_totals(&state), [0, 7, 0, 0]);
}

#[test]
fn test2_every_medal_value() {
    let state = state_with(&[
        (0, 0, "チップイン"),
        (1, 0, "金"),
        (2, 0, "銀"),
        (3, 0, "銅"),
        (4, 0, "鉄"),
        (5, 0, ""),
    ]);
    assert_eq!(compute_totals(&state)[0], 5 + 4 + 3 + 2 + 1);
}

#[test]
fn test2_full_card_of_chip_ins() {
    let mut state = ScoreState::default();
    for hole in 0..NUM_HOLES {
        state.hole_scores[hole][2] = "チップイン".to_string();
    }
    assert_eq!(compute_totals(&state), [0, 0, 90, 0]);
}

#[test]
fn test2_leader_has_zero_and_others_negative() {
    let state = state_with(&[
        (0, 0, "金"),
        (1, 0, "金"),
        (0, 1, "銀"),
        (0, 2, "チップイン"),
        (1, 2, "鉄"),
        (0, 3, "銅"),
    ]);
    let results = compute_results(&state, &default_player_names());

    let totals: Vec<i32> = results.iter().map(|r| r.total).collect();
    assert_eq!(totals, [8, 3, 6, 2]);

    let diffs: Vec<i32> = results.iter().map(|r| r.diff).collect();
    assert_eq!(diffs, [0, -5, -2, -6]);

    let texts: Vec<&str> = results.iter().map(|r| r.diff_text.as_str()).collect();
    assert_eq!(texts, ["0", "-5", "-2", "-6"]);

    assert_eq!(results[0].diff_class, DiffClass::Zero);
    for result in &results[1..] {
        assert_eq!(result.diff_class, DiffClass::Negative);
        assert!(result.diff < 0);
    }
}

#[test]
fn test2_tied_leaders_both_show_zero() {
    let state = state_with(&[(0, 1, "金"), (0, 3, "銅"), (1, 3, "銅")]);
    let results = compute_results(&state, &default_player_names());

    assert_eq!(results[1].diff, 0);
    assert_eq!(results[3].diff, 0);
    assert_eq!(results[0].diff, -4);
    assert_eq!(results[2].diff, -4);
    assert!(results.iter().all(|r| r.diff_class != DiffClass::Positive));
}

#[test]
fn test2_unknown_label_scores_zero() {
    let state = state_with(&[(0, 0, "プラチナ"), (1, 0, "金"), (2, 0, "選択してください")]);
    assert_eq!(compute_totals(&state)[0], 4);
}

#[test]
fn test2_results_use_name_inputs_with_fallback() {
    let state = ScoreState::default();
    let names = [
        "Ken".to_string(),
        String::new(),
        "Yui".to_string(),
        String::new(),
    ];
    let results = compute_results(&state, &names);

    let shown: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(shown, ["Ken", "プレイヤー2", "Yui", "プレイヤー4"]);
}

#[test]
fn test2_sample_card_matches_hand_sum() {
    let state = common::sample_state();
    let mut expected = [0_i32; 4];
    let points = [0, 5, 4, 3, 2, 1];
    for hole in 0..NUM_HOLES {
        for (player, total) in expected.iter_mut().enumerate() {
            *total += points[(hole + player * 2) % points.len()];
        }
    }
    assert_eq!(compute_totals(&state), expected);
}
