use gloo_net::http::Request;
use log::{info, warn};
use crate::config;
use crate::error::CallError;
use crate::models::{CallRequest, ErrorResponse};

/// Asks the call service to phone the user. Any 2xx counts as started; the
/// success body is not read.
pub async fn start_call(request: &CallRequest) -> Result<(), CallError> {
    info!("Requesting {} call", request.call_type);

    let response = Request::post(&config::start_call_url())
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| CallError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| CallError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    warn!("start_call rejected with status: {}", status);
    let body = response.json::<ErrorResponse>().await.ok();
    Err(rejection(status, body))
}

pub fn rejection(status: u16, body: Option<ErrorResponse>) -> CallError {
    CallError::Rejected {
        status,
        message: body.and_then(|b| b.message),
    }
}
