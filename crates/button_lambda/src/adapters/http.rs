use std::fmt;
use std::future::Future;
use std::time::Duration;

use button_core::contract::{CreateDatapointRequest, Datapoint, DatapointSubmission, STATUS_OK};
use reqwest::{Client, Response};

use super::beeminder::{ApiError, DatapointApi};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Beeminder datapoint client for one goal endpoint.
///
/// The trait is synchronous; calls are driven on the current Tokio runtime via
/// `block_in_place`, so this must run on a multi-threaded runtime.
#[derive(Clone)]
pub struct HttpDatapointApi {
    client: Client,
    endpoint: String,
    auth_token: String,
}

impl HttpDatapointApi {
    pub fn new(endpoint: impl Into<String>, auth_token: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_token: auth_token.into(),
        })
    }

    async fn fetch_datapoints(&self) -> Result<Vec<Datapoint>, ApiError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("auth_token", self.auth_token.as_str())])
            .send()
            .await?;
        let body = successful_body(response).await?;

        serde_json::from_str(&body)
            .map_err(|error| ApiError::Decode(format!("datapoint listing: {error}")))
    }

    async fn post_datapoint(&self, submission: &DatapointSubmission) -> Result<(), ApiError> {
        let request = CreateDatapointRequest::new(&self.auth_token, submission);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;
        successful_body(response).await.map(|_| ())
    }
}

impl DatapointApi for HttpDatapointApi {
    fn list_datapoints(&self) -> Result<Vec<Datapoint>, ApiError> {
        block_on(self.fetch_datapoints())
    }

    fn create_datapoint(&self, submission: &DatapointSubmission) -> Result<(), ApiError> {
        block_on(self.post_datapoint(submission))
    }
}

impl fmt::Debug for HttpDatapointApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpDatapointApi")
            .field("endpoint", &self.endpoint)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

async fn successful_body(response: Response) -> Result<String, ApiError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    if status == STATUS_OK {
        Ok(body)
    } else {
        Err(ApiError::from_status(status, body))
    }
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
