use crate::error::AppError;
use crate::mvu::runtime::run_score;
use crate::mvu::score::{Deps, Msg, ScoreModel};

pub const RESET_PROMPT: &str =
    "全てのスコアとプレイヤー名をリセットしますか？この操作は元に戻せません。";

/// Asks `confirm` before wiping everything. A decline leaves the model and the
/// store as they were and returns `Ok(false)`.
///
/// # Errors
///
/// Returns an error if clearing the stored blob fails.
pub fn reset_scores<F>(model: &mut ScoreModel, deps: Deps<'_>, confirm: F) -> Result<bool, AppError>
where
    F: FnOnce() -> bool,
{
    if !confirm() {
        return Ok(false);
    }
    run_score(model, Msg::ResetConfirmed, deps)?;
    Ok(true)
}
