use crate::mvu::error::AppError;
use crate::mvu::pitchers::{Deps, Msg, PitcherModel, run_effect, update};

/// Runs the MVU loop for the pitcher model: seeds with `init_msg` and drains effects.
///
/// # Errors
///
/// Returns the first `AppError` an effect fails with; it is also recorded on the model.
pub async fn run_pitchers(
    model: &mut PitcherModel,
    init_msg: Msg,
    deps: Deps<'_>,
) -> Result<(), AppError> {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps).await;
        match msg {
            Msg::Failed(e) => {
                // Record failure and stop the loop.
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }
    Ok(())
}
