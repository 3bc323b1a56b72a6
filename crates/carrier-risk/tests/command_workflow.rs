use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use carrier_risk::assessment::{
    command_router, CallbackError, CallbackPublisher, CarrierAssessment, CarrierCommandService,
    CarrierLookupGateway, CommandReply, LookupError,
};

struct FixtureGateway {
    payload: serde_json::Value,
    requested: Mutex<Vec<String>>,
}

#[async_trait]
impl CarrierLookupGateway for FixtureGateway {
    async fn preview(&self, docket_number: &str) -> Result<CarrierAssessment, LookupError> {
        self.requested
            .lock()
            .expect("gateway mutex poisoned")
            .push(docket_number.to_string());
        Ok(CarrierAssessment::from_value(self.payload.clone())?)
    }
}

#[derive(Default)]
struct CapturingCallback {
    replies: Mutex<Vec<(String, CommandReply)>>,
}

#[async_trait]
impl CallbackPublisher for CapturingCallback {
    async fn publish(&self, response_url: &str, reply: &CommandReply) -> Result<(), CallbackError> {
        self.replies
            .lock()
            .expect("callback mutex poisoned")
            .push((response_url.to_string(), reply.clone()));
        Ok(())
    }
}

fn upstream_payload() -> serde_json::Value {
    json!({
        "CompanyName": "Test Company",
        "DotNumber": "12345",
        "DocketNumber": "MC123456",
        "RiskAssessmentDetails": {
            "TotalPoints": 11_250,
            "Authority": {
                "TotalPoints": 10_050,
                "OverallRating": "Low",
                "Infractions": [
                    {
                        "RuleText": "Authority.Revoked",
                        "RuleOutput": "Operating authority revoked",
                        "Points": 10_000
                    }
                ]
            },
            "Insurance": { "TotalPoints": 1200 },
            "Safety": { "TotalPoints": 0 }
        }
    })
}

#[tokio::test]
async fn slash_command_flows_from_webhook_to_callback() {
    let gateway = Arc::new(FixtureGateway {
        payload: upstream_payload(),
        requested: Mutex::new(Vec::new()),
    });
    let callback = Arc::new(CapturingCallback::default());
    let service = Arc::new(CarrierCommandService::new(gateway.clone(), callback.clone()));

    let request = Request::builder()
        .method("POST")
        .uri("/slack/commands")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(
            "text=%20MC123456%20&response_url=https%3A%2F%2Fhooks.example.com%2Fcb",
        ))
        .expect("request builds");

    let response = command_router(service)
        .oneshot(request)
        .await
        .expect("router answers");
    assert_eq!(response.status(), StatusCode::OK);

    // The gateway saw the trimmed docket number.
    assert_eq!(
        gateway.requested.lock().expect("gateway mutex poisoned").as_slice(),
        ["MC123456"]
    );

    let replies = callback.replies.lock().expect("callback mutex poisoned");
    assert_eq!(replies.len(), 1);
    let (url, reply) = &replies[0];
    assert_eq!(url, "https://hooks.example.com/cb");

    let value = serde_json::to_value(reply).expect("reply serializes");
    assert_eq!(value["response_type"], "in_channel");

    let rendered = value["blocks"].to_string();
    // Overall total of 11,250 points lands in the Fail band.
    assert!(rendered.contains("*Overall assessment:* :red_circle: Fail"));
    assert!(rendered.contains("Total Points: 11,250"));
    // Authority carries its infraction; Insurance needs review; Safety is
    // clean; Operations and MyCarrierProtect were absent upstream.
    assert!(rendered.contains("*Authority:* :red_circle: Fail"));
    assert!(rendered
        .contains("- Authority.Revoked: Operating authority revoked (10000 points)"));
    assert!(rendered.contains("*Insurance:* :large_orange_circle: Review Required"));
    assert!(rendered.contains("*Safety:* :large_green_circle: Acceptable"));
    assert!(rendered.contains("No infractions found."));
    assert!(!rendered.contains("*Operations:*"));
    assert!(!rendered.contains("MyCarrierProtect"));
}
