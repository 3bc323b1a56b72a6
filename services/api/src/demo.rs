use std::path::PathBuf;

use carrier_risk::assessment::{build_summary, CarrierAssessment, CommandReply};
use carrier_risk::error::AppError;
use clap::Args;
use serde_json::json;

#[derive(Args, Debug, Default)]
pub(crate) struct PreviewArgs {
    /// Path to a JSON assessment payload; a bundled sample is used when omitted
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

/// Offline rendering of the summary transform, useful for inspecting the
/// block layout without a chat workspace or upstream credentials.
pub(crate) fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let payload = match args.file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw).map_err(|err| AppError::DemoInput(err.to_string()))?
        }
        None => sample_payload(),
    };

    let assessment = CarrierAssessment::from_value(payload)
        .map_err(|err| AppError::DemoInput(err.to_string()))?;
    let reply = CommandReply::in_channel(build_summary(&assessment));
    let rendered = serde_json::to_string_pretty(&reply)
        .map_err(|err| AppError::DemoInput(err.to_string()))?;
    println!("{rendered}");
    Ok(())
}

fn sample_payload() -> serde_json::Value {
    json!({
        "CompanyName": "Acme Trucking",
        "DotNumber": "12345",
        "DocketNumber": "MC123456",
        "RiskAssessmentDetails": {
            "TotalPoints": 1350,
            "Authority": { "TotalPoints": 50, "OverallRating": "Low" },
            "Insurance": {
                "TotalPoints": 1200,
                "Infractions": [
                    {
                        "RuleText": "Insurance.Lapsed",
                        "RuleOutput": "Liability coverage lapsed in the last 90 days",
                        "Points": 1200
                    }
                ]
            },
            "Operation": { "TotalPoints": 0 },
            "Safety": { "TotalPoints": 100 },
            "Other": { "TotalPoints": 0 }
        }
    })
}
