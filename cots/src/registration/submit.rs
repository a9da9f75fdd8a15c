use super::{FormState, Status};
use crate::api::PlayerApi;

/// Run one submission of `state` against `api`: validate, POST once when
/// valid, then record the outcome. Returns the resulting status.
pub async fn submit(state: &mut FormState, api: &dyn PlayerApi) -> Status {
    let payload = match state.begin_submission() {
        Some(payload) => payload,
        None => return state.status(),
    };
    let outcome = api.create_player(&payload).await;
    state.complete_submission(outcome);
    state.status()
}
