use crate::error::AppError;
use crate::mvu::score::{Deps, Msg, ScoreModel, run_effect, update};
use serde_json::json;

/// Runs the MVU loop for the scorecard: seeds with `init_msg` and drains effects.
///
/// # Errors
///
/// Returns the first `AppError` raised by `update` or by an effect. On failure
/// the state, name inputs and rendered sections go back to what they were
/// before `init_msg`, so a rejected or unsaved change never lingers.
pub fn run_score(model: &mut ScoreModel, init_msg: Msg, deps: Deps<'_>) -> Result<(), AppError> {
    model.error = None;
    let snapshot = model.clone();
    let mut effects = update(model, init_msg);
    if let Some(e) = model.error.clone() {
        return Err(rollback(model, snapshot, e));
    }
    while let Some(effect) = effects.pop() {
        if cfg!(debug_assertions) {
            eprintln!(
                "{}",
                json!({"mvu":"effect_start","effect": format!("{effect:?}")})
            );
        }
        let msg = run_effect(effect, model, deps);
        if cfg!(debug_assertions) {
            eprintln!("{}", json!({"mvu":"effect_done","msg": format!("{msg:?}")}));
        }
        match msg {
            Msg::Failed(e) => {
                return Err(rollback(model, snapshot, e));
            }
            other => {
                let next = update(model, other);
                if cfg!(debug_assertions) {
                    eprintln!(
                        "{}",
                        json!({"mvu":"update","queued_effects": next.iter().map(|x| format!("{x:?}")).collect::<Vec<_>>()})
                    );
                }
                effects.extend(next);
            }
        }
    }
    Ok(())
}

fn rollback(model: &mut ScoreModel, snapshot: ScoreModel, e: AppError) -> AppError {
    eprintln!("{}", json!({"mvu":"rollback","error":e.to_string()}));
    *model = snapshot;
    update(model, Msg::Failed(e.clone()));
    e
}
