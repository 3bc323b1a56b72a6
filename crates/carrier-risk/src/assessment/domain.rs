use serde::{Deserialize, Deserializer, Serialize};

/// Risk categories reported by the upstream assessment, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Authority,
    Insurance,
    Operation,
    Safety,
    Other,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::Authority,
        RiskCategory::Insurance,
        RiskCategory::Operation,
        RiskCategory::Safety,
        RiskCategory::Other,
    ];

    /// Section title rendered in the summary message.
    pub const fn title(self) -> &'static str {
        match self {
            RiskCategory::Authority => "Authority",
            RiskCategory::Insurance => "Insurance",
            RiskCategory::Operation => "Operations",
            RiskCategory::Safety => "Safety",
            RiskCategory::Other => {
                "MyCarrierProtect (Fraud, Double Brokering, and Performance)"
            }
        }
    }
}

/// Carrier record returned by the PreviewCarrier endpoint. Every field is
/// optional upstream; absent fields substitute defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CarrierAssessment {
    pub company_name: Option<String>,
    pub dot_number: Option<String>,
    pub docket_number: Option<String>,
    pub risk_assessment_details: RiskAssessmentDetails,
}

impl CarrierAssessment {
    /// Parse an upstream JSON value, tolerating missing fields but rejecting
    /// payloads that are not an object at the top level.
    pub fn from_value(value: serde_json::Value) -> Result<Self, MalformedAssessment> {
        if !value.is_object() {
            return Err(MalformedAssessment::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Per-category breakdown plus the overall point total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RiskAssessmentDetails {
    #[serde(deserialize_with = "deserialize_points")]
    pub total_points: Option<i64>,
    pub authority: Option<CategoryAssessment>,
    pub insurance: Option<CategoryAssessment>,
    pub operation: Option<CategoryAssessment>,
    pub safety: Option<CategoryAssessment>,
    pub other: Option<CategoryAssessment>,
}

impl RiskAssessmentDetails {
    pub fn category(&self, category: RiskCategory) -> Option<&CategoryAssessment> {
        match category {
            RiskCategory::Authority => self.authority.as_ref(),
            RiskCategory::Insurance => self.insurance.as_ref(),
            RiskCategory::Operation => self.operation.as_ref(),
            RiskCategory::Safety => self.safety.as_ref(),
            RiskCategory::Other => self.other.as_ref(),
        }
    }
}

/// One category's point total, upstream rating label, and infraction list.
/// The upstream `OverallRating` is retained for auditing but never displayed;
/// ratings shown to users are recomputed from the point total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CategoryAssessment {
    #[serde(deserialize_with = "deserialize_points")]
    pub total_points: Option<i64>,
    pub overall_rating: Option<String>,
    pub infractions: Vec<Infraction>,
}

/// A single rule violation contributing to a category's point total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Infraction {
    pub rule_text: Option<String>,
    pub rule_output: Option<String>,
    #[serde(deserialize_with = "deserialize_points")]
    pub points: Option<i64>,
}

/// Raised only when the top-level payload is not a usable record; individual
/// missing fields never reach this path.
#[derive(Debug, thiserror::Error)]
pub enum MalformedAssessment {
    #[error("assessment payload is not a JSON object")]
    NotAnObject,
    #[error("assessment payload has an unexpected shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Lenient point parsing: anything that is not a JSON integer (floats,
/// strings, null) becomes `None` so it renders as an explicit unknown rather
/// than failing the whole record.
fn deserialize_points<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(serde_json::Value::as_i64))
}
