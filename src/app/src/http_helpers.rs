//! HTTP helper functions for Crux Core
//!
//! URL construction for the device API and the translation of `crux_http`
//! results into [`RequestError`]s. The byte-level parts are plain functions so
//! they can be tested without a `crux_http::Response`.

use crux_http::Response;
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::config::{API_PREFIX, BASE_URL};
use crate::error::{RequestError, RequestResult};

/// Constructs the full address of a device API endpoint.
///
/// # Example
/// ```
/// use trailcam_ui_core::http_helpers::build_url;
/// let url = build_url("/system/status");
/// assert_eq!(url, "https://relative/api/system/status");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{API_PREFIX}{endpoint}")
}

fn url_with_segments(endpoint: &str, segments: &[&str]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&build_url(endpoint))?;
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

/// Endpoint address with `segment` appended as one percent-encoded path segment.
///
/// ```
/// use trailcam_ui_core::http_helpers::build_url_with_segment;
/// let url = build_url_with_segment("/gallery/photos", "a b#1.jpg");
/// assert_eq!(url, "https://relative/api/gallery/photos/a%20b%231.jpg");
/// ```
pub fn build_url_with_segment(endpoint: &str, segment: &str) -> String {
    match url_with_segments(endpoint, &[segment]) {
        Ok(url) => url.into(),
        Err(e) => {
            log::error!("invalid endpoint {endpoint}: {e}");
            format!("{}/{segment}", build_url(endpoint))
        }
    }
}

/// Same-origin path of an endpoint with encoded segments, for links the browser follows itself
pub fn api_path_with_segments(endpoint: &str, segments: &[&str]) -> String {
    match url_with_segments(endpoint, segments) {
        Ok(url) => url.path().to_string(),
        Err(e) => {
            log::error!("invalid endpoint {endpoint}: {e}");
            format!("{API_PREFIX}{endpoint}/{}", segments.join("/"))
        }
    }
}

/// Endpoint address with an encoded query string.
pub fn build_url_with_query(endpoint: &str, query: &[(&str, &str)]) -> String {
    let base = build_url(endpoint);
    if query.is_empty() {
        return base;
    }
    match Url::parse(&base) {
        Ok(mut url) => {
            url.query_pairs_mut().extend_pairs(query);
            url.into()
        }
        Err(e) => {
            log::error!("invalid endpoint {endpoint}: {e}");
            base
        }
    }
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Error payloads the device sends: `{"status": "error", "error": {"message": ..}}`
/// or a bare `{"message": ..}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
    message: Option<String>,
}

/// Message of a non-2xx response, taken verbatim from the body when possible.
pub fn error_message(status: u16, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(message) = parsed.error.and_then(|e| e.message).or(parsed.message) {
            return message;
        }
    }

    match std::str::from_utf8(body).map(str::trim) {
        Ok(text) if !text.is_empty() && !text.starts_with('{') => text.to_string(),
        _ => format!("API error: {status}"),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode the body of a finished request as JSON.
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &[u8]) -> RequestResult<T> {
    if !is_success(status) {
        return Err(RequestError::server(status, error_message(status, body)));
    }
    serde_json::from_slice(body)
        .map_err(|e| RequestError::server(status, format!("Invalid response body: {e}")))
}

/// Check the status of a finished request, ignoring a successful body.
pub fn decode_status(status: u16, body: &[u8]) -> RequestResult<()> {
    if is_success(status) {
        Ok(())
    } else {
        Err(RequestError::server(status, error_message(status, body)))
    }
}

fn take_parts(response: &mut Response<Vec<u8>>) -> (u16, Vec<u8>) {
    let status = u16::from(response.status());
    (status, response.take_body().unwrap_or_default())
}

/// Map a transport failure; the request never produced a response.
pub fn map_http_error(error: crux_http::HttpError) -> RequestError {
    RequestError::NetworkFailure(error.to_string())
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> RequestResult<T> {
    match result {
        Ok(mut response) => {
            let (status, body) = take_parts(&mut response);
            decode_json(status, &body)
        }
        Err(e) => Err(map_http_error(e)),
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> RequestResult<()> {
    match result {
        Ok(mut response) => {
            let (status, body) = take_parts(&mut response);
            decode_status(status, &body)
        }
        Err(e) => Err(map_http_error(e)),
    }
}
