//! API utilities for talking to the external data provider
//!
//! The provider listens on the same host as the dashboard, port 3000.
//! Every request helper returns `Result<T, String>` with a message that can be
//! shown to the user as-is.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const API_PORT: u16 = 3000;

/// Base URL built from `protocol` and `hostname` of the current location
fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Get the base URL for API requests, e.g. "http://localhost:3000".
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname)
}

/// Full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `GET path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", path, e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    decode(&text)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    serde_json::from_str(text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// `PUT path` with a JSON body; the response body is ignored
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = api_url(path);
    let response = Request::put(&url)
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send {}: {}", path, e))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(if text.is_empty() {
            format!("Server error: {}", response.status())
        } else {
            format!("Server error {}: {}", response.status(), text)
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(
            base_from_location("https:", "admin.example.com"),
            "https://admin.example.com:3000"
        );
        assert_eq!(base_from_location("http:", "localhost"), "http://localhost:3000");
    }

    #[test]
    fn test_decode_reports_parse_errors() {
        let ok: Vec<u32> = decode("[1,2,3]").unwrap();
        assert_eq!(ok, vec![1, 2, 3]);
        let err = decode::<Vec<u32>>("{not json").unwrap_err();
        assert!(err.starts_with("Failed to parse response"));
    }
}
