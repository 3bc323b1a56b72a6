//! Carrier risk slash-command service.
//!
//! The `assessment` module holds the behavioral core: classifying point
//! totals into risk bands, formatting infractions, and assembling the
//! Block Kit summary posted back to the chat platform. `config`,
//! `telemetry`, and `error` carry the surrounding service concerns.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
