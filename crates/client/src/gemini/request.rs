//! generateContent request body and API error body.

use serde::{Deserialize, Serialize};

use crate::model::ModelRequest;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub role: &'static str,
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    pub text: String,
}

/// A tool made available to the model.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

/// Google Search grounding; takes no options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleSearch {}

impl From<&ModelRequest> for GenerateContentRequest {
    fn from(req: &ModelRequest) -> Self {
        let tools = if req.search_grounding { vec![Tool { google_search: GoogleSearch {} }] } else { Vec::new() };

        let content = RequestContent { role: "user", parts: vec![RequestPart { text: req.prompt.clone() }] };

        Self { contents: vec![content], tools }
    }
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
}

/// Best-effort message from an error response body.
pub fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounded_request_body() {
        let body = GenerateContentRequest::from(&ModelRequest::grounded("What is new?"));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "What is new?"}]}],
                "tools": [{"google_search": {}}]
            })
        );
    }

    #[test]
    fn test_ungrounded_request_omits_tools() {
        let req = ModelRequest { prompt: "hi".into(), search_grounding: false };
        let json = serde_json::to_value(GenerateContentRequest::from(&req)).unwrap();
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn test_error_message_from_api_body() {
        let body = br#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "API key not valid. Please pass a valid API key.");
    }

    #[test]
    fn test_error_message_from_plain_body() {
        assert_eq!(error_message(b"  upstream connect error  "), "upstream connect error");
        assert_eq!(error_message(b""), "");
    }
}
