use std::sync::Arc;

use super::gateway::{CallbackError, CallbackPublisher, CarrierLookupGateway, LookupError};
use super::summary::{build_summary, CommandReply};

/// Service composing the lookup gateway and callback publisher around the
/// pure summary transform. One invocation per inbound command; no state is
/// retained between commands.
pub struct CarrierCommandService<G, C> {
    gateway: Arc<G>,
    callback: Arc<C>,
}

impl<G, C> CarrierCommandService<G, C>
where
    G: CarrierLookupGateway + 'static,
    C: CallbackPublisher + 'static,
{
    pub fn new(gateway: Arc<G>, callback: Arc<C>) -> Self {
        Self { gateway, callback }
    }

    /// Handle one slash command: trim the docket text, fetch the assessment,
    /// assemble the reply, and post it to the callback URL.
    pub async fn handle(&self, text: &str, response_url: &str) -> Result<(), CommandError> {
        let docket_number = text.trim();
        if docket_number.is_empty() {
            return Err(CommandError::MissingDocketNumber);
        }

        let assessment = self.gateway.preview(docket_number).await?;
        let reply = CommandReply::in_channel(build_summary(&assessment));
        self.callback.publish(response_url, &reply).await?;
        Ok(())
    }
}

/// Error raised by the command service.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("no docket number provided")]
    MissingDocketNumber,
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Callback(#[from] CallbackError),
}
