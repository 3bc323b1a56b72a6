use serde::{Deserialize, Serialize};

use super::banding::{format_points, RiskBand, UNKNOWN_INDICATOR, UNKNOWN_LABEL};
use super::domain::{CarrierAssessment, CategoryAssessment, RiskCategory};
use super::infractions::format_infractions;

/// Header title for every assessment summary.
pub const ASSESSMENT_TITLE: &str = "MyCarrierPortal Risk Assessment";

const MISSING_COMPANY: &str = "Unknown carrier";
const MISSING_IDENTIFIER: &str = "n/a";
const MISSING_POINTS: &str = "n/a";

/// Block Kit text object. Headers use `plain_text`, everything else `mrkdwn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    PlainText,
    Mrkdwn,
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::PlainText,
            text: text.into(),
            emoji: Some(true),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Mrkdwn,
            text: text.into(),
            emoji: None,
        }
    }
}

/// One display section of the assembled message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageBlock {
    Header { text: TextObject },
    Section { text: TextObject },
    Context { elements: Vec<TextObject> },
    Divider,
}

impl MessageBlock {
    fn section(text: String) -> Self {
        MessageBlock::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    fn context(elements: Vec<String>) -> Self {
        MessageBlock::Context {
            elements: elements.into_iter().map(TextObject::mrkdwn).collect(),
        }
    }
}

/// Callback payload envelope expected by the chat platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandReply {
    pub response_type: String,
    pub blocks: Vec<MessageBlock>,
}

impl CommandReply {
    pub fn in_channel(blocks: Vec<MessageBlock>) -> Self {
        Self {
            response_type: "in_channel".to_string(),
            blocks,
        }
    }
}

/// Assemble the full summary for one carrier assessment. Pure: identical
/// input yields identical blocks, missing fields substitute placeholders.
pub fn build_summary(assessment: &CarrierAssessment) -> Vec<MessageBlock> {
    let details = &assessment.risk_assessment_details;

    let mut blocks = vec![
        MessageBlock::Header {
            text: TextObject::plain(ASSESSMENT_TITLE),
        },
        identity_section(assessment),
        overall_section(details.total_points),
        MessageBlock::context(vec![format!(
            "Total Points: {}",
            points_text(details.total_points)
        )]),
        MessageBlock::Divider,
    ];

    for category in RiskCategory::ALL {
        let Some(detail) = details.category(category) else {
            continue;
        };
        blocks.push(category_section(category, detail));
        blocks.push(category_context(detail));
        blocks.push(MessageBlock::Divider);
    }

    blocks
}

fn identity_section(assessment: &CarrierAssessment) -> MessageBlock {
    let company = assessment.company_name.as_deref().unwrap_or(MISSING_COMPANY);
    let dot = assessment.dot_number.as_deref().unwrap_or(MISSING_IDENTIFIER);
    let docket = assessment
        .docket_number
        .as_deref()
        .unwrap_or(MISSING_IDENTIFIER);
    MessageBlock::section(format!("*{company}*\nDOT: {dot} / MC: {docket}"))
}

fn overall_section(points: Option<i64>) -> MessageBlock {
    let (indicator, label) = rating(points);
    MessageBlock::section(format!("*Overall assessment:* {indicator} {label}"))
}

fn category_section(category: RiskCategory, detail: &CategoryAssessment) -> MessageBlock {
    let (indicator, label) = rating(detail.total_points);
    MessageBlock::section(format!("*{}:* {indicator} {label}", category.title()))
}

fn category_context(detail: &CategoryAssessment) -> MessageBlock {
    let (_, label) = rating(detail.total_points);
    MessageBlock::context(vec![
        format!(
            "Risk Level: {label} | Points: {}",
            points_text(detail.total_points)
        ),
        format_infractions(&detail.infractions),
    ])
}

/// Indicator and label for a possibly-missing point total. Each rating is
/// derived from its own total only, never from another level of the record.
fn rating(points: Option<i64>) -> (&'static str, &'static str) {
    match points {
        Some(points) => {
            let band = RiskBand::classify(points);
            (band.indicator(), band.label())
        }
        None => (UNKNOWN_INDICATOR, UNKNOWN_LABEL),
    }
}

fn points_text(points: Option<i64>) -> String {
    match points {
        Some(points) => format_points(points),
        None => MISSING_POINTS.to_string(),
    }
}
