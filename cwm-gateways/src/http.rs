use cwm_core::gateways::geocode::GeoCodingError;
use reqwest::{
    blocking::{Client, Response},
    StatusCode,
};
use std::time::Duration;

pub fn client(user_agent: &str, timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}

pub fn request_error(err: reqwest::Error) -> GeoCodingError {
    if err.is_timeout() {
        GeoCodingError::TimedOut
    } else if err.is_connect() {
        GeoCodingError::Unavailable(err.to_string())
    } else {
        GeoCodingError::Service(err.to_string())
    }
}

/// Read the body of a successful response.
pub fn response_text(response: Response) -> Result<String, GeoCodingError> {
    log::debug!("Response {} from {}", response.status(), response.url());
    match response.status() {
        StatusCode::SERVICE_UNAVAILABLE => {
            return Err(GeoCodingError::Unavailable(response.status().to_string()));
        }
        StatusCode::GATEWAY_TIMEOUT => {
            return Err(GeoCodingError::TimedOut);
        }
        status if !status.is_success() => {
            return Err(GeoCodingError::Service(status.to_string()));
        }
        _ => {}
    }
    response.text().map_err(request_error)
}

pub fn invalid_body(err: serde_json::Error) -> GeoCodingError {
    log::warn!("Unexpected geocoding response: {err}");
    GeoCodingError::Service(format!("Invalid response: {err}"))
}
