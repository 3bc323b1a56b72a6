use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use serde::Deserialize;
use tracing::warn;

use super::gateway::{CallbackPublisher, CarrierLookupGateway};
use super::service::{CarrierCommandService, CommandError};

/// Form payload posted by the chat platform for a slash command.
#[derive(Debug, Deserialize)]
pub struct SlashCommandPayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub response_url: String,
}

const MISSING_INPUT_MESSAGE: &str = "Please provide a valid MC number.";
const LOOKUP_FAILED_MESSAGE: &str = "Failed to retrieve carrier data. Please try again.";

/// Router builder exposing the slash-command webhook endpoint.
pub fn command_router<G, C>(service: Arc<CarrierCommandService<G, C>>) -> Router
where
    G: CarrierLookupGateway + 'static,
    C: CallbackPublisher + 'static,
{
    Router::new()
        .route("/slack/commands", post(command_handler::<G, C>))
        .with_state(service)
}

/// The platform expects HTTP 200 on every outcome; failures are reported as
/// fixed user-facing text with no internal detail.
pub(crate) async fn command_handler<G, C>(
    State(service): State<Arc<CarrierCommandService<G, C>>>,
    Form(payload): Form<SlashCommandPayload>,
) -> Response
where
    G: CarrierLookupGateway + 'static,
    C: CallbackPublisher + 'static,
{
    match service.handle(&payload.text, &payload.response_url).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(CommandError::MissingDocketNumber) => {
            (StatusCode::OK, MISSING_INPUT_MESSAGE).into_response()
        }
        Err(error) => {
            warn!(%error, "slash command failed");
            (StatusCode::OK, LOOKUP_FAILED_MESSAGE).into_response()
        }
    }
}
