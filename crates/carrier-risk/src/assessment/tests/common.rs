use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::assessment::domain::{
    CarrierAssessment, CategoryAssessment, Infraction, RiskAssessmentDetails,
};
use crate::assessment::gateway::{
    CallbackError, CallbackPublisher, CarrierLookupGateway, LookupError,
};
use crate::assessment::service::CarrierCommandService;
use crate::assessment::summary::CommandReply;

pub(super) fn category(points: i64) -> CategoryAssessment {
    CategoryAssessment {
        total_points: Some(points),
        overall_rating: Some("Low".to_string()),
        infractions: Vec::new(),
    }
}

pub(super) fn infraction(rule: &str, output: &str, points: Option<i64>) -> Infraction {
    Infraction {
        rule_text: Some(rule.to_string()),
        rule_output: Some(output.to_string()),
        points,
    }
}

/// The reference scenario: 500 overall points split evenly across all five
/// categories.
pub(super) fn acme_assessment() -> CarrierAssessment {
    CarrierAssessment {
        company_name: Some("Acme Trucking".to_string()),
        dot_number: Some("12345".to_string()),
        docket_number: Some("MC123456".to_string()),
        risk_assessment_details: RiskAssessmentDetails {
            total_points: Some(500),
            authority: Some(category(100)),
            insurance: Some(category(100)),
            operation: Some(category(100)),
            safety: Some(category(100)),
            other: Some(category(100)),
        },
    }
}

pub(super) struct StubGateway {
    pub assessment: CarrierAssessment,
}

#[async_trait]
impl CarrierLookupGateway for StubGateway {
    async fn preview(&self, _docket_number: &str) -> Result<CarrierAssessment, LookupError> {
        Ok(self.assessment.clone())
    }
}

pub(super) struct EmptyResultGateway;

#[async_trait]
impl CarrierLookupGateway for EmptyResultGateway {
    async fn preview(&self, _docket_number: &str) -> Result<CarrierAssessment, LookupError> {
        Err(LookupError::EmptyResult)
    }
}

#[derive(Default)]
pub(super) struct MemoryCallback {
    pub replies: Mutex<Vec<(String, CommandReply)>>,
}

impl MemoryCallback {
    pub(super) fn replies(&self) -> Vec<(String, CommandReply)> {
        self.replies.lock().expect("callback mutex poisoned").clone()
    }
}

#[async_trait]
impl CallbackPublisher for MemoryCallback {
    async fn publish(&self, response_url: &str, reply: &CommandReply) -> Result<(), CallbackError> {
        self.replies
            .lock()
            .expect("callback mutex poisoned")
            .push((response_url.to_string(), reply.clone()));
        Ok(())
    }
}

pub(super) struct RejectingCallback;

#[async_trait]
impl CallbackPublisher for RejectingCallback {
    async fn publish(
        &self,
        _response_url: &str,
        _reply: &CommandReply,
    ) -> Result<(), CallbackError> {
        Err(CallbackError::Status(reqwest::StatusCode::BAD_GATEWAY))
    }
}

pub(super) fn stub_service(
    assessment: CarrierAssessment,
) -> (
    Arc<CarrierCommandService<StubGateway, MemoryCallback>>,
    Arc<MemoryCallback>,
) {
    let gateway = Arc::new(StubGateway { assessment });
    let callback = Arc::new(MemoryCallback::default());
    let service = Arc::new(CarrierCommandService::new(gateway, callback.clone()));
    (service, callback)
}
