//! Carrier risk assessment pipeline: classification bands, infraction
//! formatting, summary assembly, and the slash-command glue around them.

pub mod banding;
pub mod domain;
pub mod gateway;
pub mod infractions;
pub mod router;
pub mod service;
pub mod summary;

#[cfg(test)]
mod tests;

pub use banding::{format_points, RiskBand, UNKNOWN_INDICATOR, UNKNOWN_LABEL};
pub use domain::{
    CarrierAssessment, CategoryAssessment, Infraction, MalformedAssessment,
    RiskAssessmentDetails, RiskCategory,
};
pub use gateway::{
    CallbackError, CallbackPublisher, CarrierLookupGateway, HttpCallbackPublisher, LookupError,
    MyCarrierPacketsClient, DEFAULT_BASE_URL,
};
pub use infractions::{format_infractions, NO_INFRACTIONS};
pub use router::{command_router, SlashCommandPayload};
pub use service::{CarrierCommandService, CommandError};
pub use summary::{
    build_summary, CommandReply, MessageBlock, TextKind, TextObject, ASSESSMENT_TITLE,
};
