#[cfg(any(feature = "http_client", target_arch = "wasm32"))]
mod players;

use async_trait::async_trait;
#[cfg(any(feature = "http_client", target_arch = "wasm32"))]
pub use players::HttpPlayerApi;

use crate::error::RegistrationError;
use crate::registration::{PlayerProfile, SubmissionPayload};

/// Remote side of the registration form.
///
/// Futures are not required to be `Send` so implementations can sit on
/// top of the browser's `fetch`.
#[async_trait(?Send)]
pub trait PlayerApi {
    /// Create a player. `Ok(None)` is a success whose response carried no
    /// readable player document.
    async fn create_player(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Option<PlayerProfile>, RegistrationError>;
}
