use crate::model::{NUM_PLAYERS, ScoreState, display_player_name, medal_points};

/// Styling bucket for a differential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffClass {
    Positive,
    Negative,
    Zero,
}

impl DiffClass {
    #[must_use]
    pub fn of(diff: i32) -> Self {
        match diff {
            d if d > 0 => DiffClass::Positive,
            d if d < 0 => DiffClass::Negative,
            _ => DiffClass::Zero,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            DiffClass::Positive => "positive-diff",
            DiffClass::Negative => "negative-diff",
            DiffClass::Zero => "zero-diff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    pub name: String,
    pub total: i32,
    pub diff: i32,
    pub diff_text: String,
    pub diff_class: DiffClass,
}

/// `+N` for positive, the plain number otherwise (`-3`, `0`).
#[must_use]
pub fn format_diff(diff: i32) -> String {
    if diff > 0 {
        format!("+{diff}")
    } else {
        diff.to_string()
    }
}

#[must_use]
pub fn compute_totals(state: &ScoreState) -> [i32; NUM_PLAYERS] {
    let mut totals = [0_i32; NUM_PLAYERS];
    for row in &state.hole_scores {
        for (total, label) in totals.iter_mut().zip(row) {
            *total += i32::from(medal_points(label));
        }
    }
    totals
}

/// One row per player, in slot order. The leader(s) get a diff of 0, everyone
/// else `total - max`.
#[must_use]
pub fn compute_results(state: &ScoreState, name_inputs: &[String; NUM_PLAYERS]) -> Vec<PlayerResult> {
    let totals = compute_totals(state);
    let max_total = totals.iter().copied().max().unwrap_or(0);

    totals
        .iter()
        .zip(name_inputs)
        .enumerate()
        .map(|(player, (&total, name))| {
            let diff = total - max_total;
            PlayerResult {
                name: display_player_name(name, player),
                total,
                diff,
                diff_text: format_diff(diff),
                diff_class: DiffClass::of(diff),
            }
        })
        .collect()
}
