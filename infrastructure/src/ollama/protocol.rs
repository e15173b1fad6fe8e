//! Wire types for the Ollama `/api/generate` endpoint
//!
//! One JSON request per section, streaming disabled. Only the `response`
//! field of the reply is consumed; other fields are ignored.

use openprop_application::GenerationParams;
use serde::{Deserialize, Serialize};

/// Request body for `/api/generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Fixed decoding parameters sent with every request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, params: &GenerationParams) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options: GenerateOptions {
                temperature: params.temperature,
                top_p: params.top_p,
                max_tokens: params.max_tokens,
            },
        }
    }
}

/// Response body; `response` holds the generated text
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_fixed_shape() {
        let request = GenerateRequest::new("llama3.2", "Write Team.", &GenerationParams::default());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "llama3.2");
        assert_eq!(value["prompt"], "Write Team.");
        assert_eq!(value["stream"], false);
        assert_eq!(value["options"]["temperature"], 0.7);
        assert_eq!(value["options"]["top_p"], 0.9);
        assert_eq!(value["options"]["max_tokens"], 512);
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let body = r#"{"model":"llama3.2","response":"Generated text","done":true}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "Generated text");
    }

    #[test]
    fn test_response_requires_response_field() {
        let body = r#"{"model":"llama3.2","done":true}"#;
        assert!(serde_json::from_str::<GenerateResponse>(body).is_err());
    }
}
