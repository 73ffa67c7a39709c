use button_core::clock::InvocationClock;
use button_core::contract::{
    contains_daystamp, DatapointSubmission, TriggerOutcome, TriggerResponse, DEFAULT_COMMENT,
};
use thiserror::Error;
use tracing::{error, info};

use crate::adapters::audit::AuditLog;
use crate::adapters::beeminder::{ApiError, DatapointApi};

/// Failures that are not a Beeminder refusal and so fail the invocation.
#[derive(Debug, Error)]
#[error("button trigger failed: {0}")]
pub struct TriggerError(#[from] pub ApiError);

/// Handle one button press.
///
/// Refusals from Beeminder (4xx/5xx) are logged as `"<status>: <body>"` and
/// answered with 422; every other API failure is returned as an error.
pub fn handle_trigger(
    clock: &InvocationClock,
    api: &impl DatapointApi,
    audit: &impl AuditLog,
) -> Result<TriggerResponse, TriggerError> {
    let outcome = match run_trigger(clock, api) {
        Ok(outcome) => outcome,
        Err(ApiError::Rejected { status, body }) => {
            audit.record(&format!("{status}: {body}"));
            TriggerOutcome::Refused
        }
        Err(failure) => {
            error!(error = %failure, "trigger_failed");
            return Err(TriggerError(failure));
        }
    };

    audit.record(&outcome.message());
    Ok(TriggerResponse::from(&outcome))
}

pub fn run_trigger(
    clock: &InvocationClock,
    api: &impl DatapointApi,
) -> Result<TriggerOutcome, ApiError> {
    let daystamp = clock.daystamp();
    info!(
        daystamp = %daystamp,
        minutes_before_nine = clock.minutes_before_nine(),
        "trigger_started"
    );

    if clock.is_early_press() {
        return Ok(TriggerOutcome::EarlyPress);
    }

    let datapoints = api.list_datapoints()?;
    info!(count = datapoints.len(), "datapoints_listed");
    if contains_daystamp(&datapoints, &daystamp) {
        return Ok(TriggerOutcome::DuplicateDatapoint { daystamp });
    }

    let submission = DatapointSubmission::for_clock(clock, DEFAULT_COMMENT);
    api.create_datapoint(&submission)?;
    info!(
        daystamp = %submission.daystamp,
        value = submission.value,
        "datapoint_submitted"
    );

    Ok(TriggerOutcome::Sent {
        value: submission.value,
    })
}
