use button_core::clock::InvocationClock;
use button_core::contract::TriggerResponse;
use button_lambda::adapters::audit::TracingAuditLog;
use button_lambda::adapters::http::HttpDatapointApi;
use button_lambda::config::ButtonConfig;
use button_lambda::handlers::trigger::handle_trigger;
use button_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

// The event only signals that the button was pressed; its payload is ignored.
fn handle_request(
    _event: LambdaEvent<Value>,
    api: &HttpDatapointApi,
) -> Result<TriggerResponse, Error> {
    let clock = InvocationClock::now();
    handle_trigger(&clock, api, &TracingAuditLog).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ButtonConfig::from_env()?;
    init_tracing(config.log_format);
    tracing::info!(config = ?config, "button_lambda_starting");

    let api = HttpDatapointApi::new(config.datapoints_endpoint, config.auth_token)?;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let api = api.clone();
        async move { handle_request(event, &api) }
    }))
    .await
}
