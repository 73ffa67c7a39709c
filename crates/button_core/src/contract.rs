use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clock::InvocationClock;

pub const DEFAULT_COMMENT: &str = "via MyStrom Button";

pub const STATUS_OK: u16 = 200;
pub const STATUS_UNPROCESSABLE: u16 = 422;

/// One datapoint as returned by the goal's datapoint listing.
///
/// Only `daystamp` is required; Beeminder sends more fields than are modeled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Datapoint {
    pub daystamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// What the handler wants recorded for today, before credentials are attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatapointSubmission {
    pub comment: String,
    pub daystamp: String,
    pub value: i64,
}

impl DatapointSubmission {
    pub fn for_clock(clock: &InvocationClock, comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            daystamp: clock.daystamp(),
            value: clock.datapoint_value(),
        }
    }
}

/// POST body for creating a datapoint. Field order is part of the wire format.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateDatapointRequest<'a> {
    pub auth_token: &'a str,
    pub comment: &'a str,
    pub daystamp: &'a str,
    pub value: i64,
}

impl<'a> CreateDatapointRequest<'a> {
    pub fn new(auth_token: &'a str, submission: &'a DatapointSubmission) -> Self {
        Self {
            auth_token,
            comment: &submission.comment,
            daystamp: &submission.daystamp,
            value: submission.value,
        }
    }
}

pub fn contains_daystamp(datapoints: &[Datapoint], daystamp: &str) -> bool {
    datapoints
        .iter()
        .any(|datapoint| datapoint.daystamp == daystamp)
}

/// Every way a button press can end without an unanticipated failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    EarlyPress,
    DuplicateDatapoint { daystamp: String },
    Sent { value: i64 },
    Refused,
}

impl TriggerOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Sent { .. } => STATUS_OK,
            Self::EarlyPress | Self::DuplicateDatapoint { .. } | Self::Refused => {
                STATUS_UNPROCESSABLE
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::EarlyPress => "Button pressed before 5AM".to_string(),
            Self::DuplicateDatapoint { daystamp } => {
                format!("Datapoint for \"{daystamp}\" already exists")
            }
            Self::Sent { value } => format!("Sent datapoint '{value}' to Beeminder!"),
            Self::Refused => "Request refused by Beeminder".to_string(),
        }
    }
}

/// Lambda response shape: `{"statusCode": .., "body": "<json string>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl From<&TriggerOutcome> for TriggerResponse {
    fn from(outcome: &TriggerOutcome) -> Self {
        Self {
            status_code: outcome.status_code(),
            body: Value::String(outcome.message()).to_string(),
        }
    }
}
