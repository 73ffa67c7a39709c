use button_core::contract::{Datapoint, DatapointSubmission};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Beeminder answered with a 4xx or 5xx status.
    #[error("{status}: {body}")]
    Rejected { status: u16, body: String },
    /// Any other non-200 status, such as a redirect.
    #[error("unexpected Beeminder status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("request to Beeminder failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid Beeminder response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        if (400..600).contains(&status) {
            Self::Rejected { status, body }
        } else {
            Self::UnexpectedStatus { status, body }
        }
    }
}

/// Datapoint operations on the single goal this deployment tracks.
pub trait DatapointApi {
    fn list_datapoints(&self) -> Result<Vec<Datapoint>, ApiError>;
    /// A 200 status means the datapoint is stored; the reply body is not inspected.
    fn create_datapoint(&self, submission: &DatapointSubmission) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_and_server_errors_are_rejections() {
        for status in [400, 401, 422, 500, 503] {
            assert!(matches!(
                ApiError::from_status(status, "nope"),
                ApiError::Rejected { .. }
            ));
        }
    }

    #[test]
    fn other_statuses_are_unexpected() {
        for status in [201, 204, 302] {
            assert!(matches!(
                ApiError::from_status(status, ""),
                ApiError::UnexpectedStatus { .. }
            ));
        }
    }

    #[test]
    fn rejection_displays_status_and_body() {
        let error = ApiError::from_status(401, r#"{"errors":"bad_token"}"#);
        assert_eq!(error.to_string(), r#"401: {"errors":"bad_token"}"#);
    }
}
