use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://www.beeminder.com/api/v1";
pub const DEFAULT_USER: &str = "dwarvensphere";
pub const DEFAULT_GOAL: &str = "upbeforenine";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("{name} must be a single path segment, got '{value}'")]
    InvalidSegment { name: &'static str, value: String },
}

/// URL of a goal's datapoint collection, e.g.
/// `https://www.beeminder.com/api/v1/users/<user>/goals/<goal>/datapoints.json`.
pub fn datapoints_endpoint(api_base: &str, user: &str, goal: &str) -> Result<String, EndpointError> {
    let base = api_base.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(EndpointError::Empty("api base"));
    }
    let user = path_segment("user", user)?;
    let goal = path_segment("goal", goal)?;

    Ok(format!("{base}/users/{user}/goals/{goal}/datapoints.json"))
}

fn path_segment<'a>(name: &'static str, value: &'a str) -> Result<&'a str, EndpointError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EndpointError::Empty(name));
    }
    if trimmed
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
    {
        return Err(EndpointError::InvalidSegment {
            name,
            value: trimmed.to_string(),
        });
    }
    Ok(trimmed)
}
