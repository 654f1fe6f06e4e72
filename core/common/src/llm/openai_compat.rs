//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! Groq などの互換エンドポイントを base_url で指定する。ストリーミングは使わない。

use crate::domain::ApiKey;
use crate::error::Error;
use crate::llm::provider::{ChatCompletion, ChatRequest};
use serde_json::{json, Value};

/// Groq の OpenAI 互換エンドポイント
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatCompletion {
    base_url: String,
    api_key: ApiKey,
    client: reqwest::blocking::Client,
}

impl OpenAiCompatCompletion {
    /// 新しいプロバイダを作成
    ///
    /// * `base_url` - ベース URL（末尾の `/` は取り除く）
    /// * `api_key` - Bearer トークン
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// リクエストペイロードを生成
    pub fn make_request_payload(request: &ChatRequest) -> Value {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| json!({ "role": m.role.as_api_str(), "content": m.content }))
            .collect();
        json!({
            "model": request.model.as_ref(),
            "messages": messages,
            "temperature": request.temperature,
            "stream": false
        })
    }

    /// レスポンスからテキストを抽出
    pub fn parse_response_text(response_json: &str) -> Result<String, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::json("Response has no choices[0].message.content"))
    }
}

impl ChatCompletion for OpenAiCompatCompletion {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn complete(&self, request: &ChatRequest) -> Result<String, Error> {
        let payload = Self::make_request_payload(request);
        let response = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&payload)
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
                .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text));
            return Err(Error::http(format!("Chat completions error: {}", error_msg)));
        }

        Self::parse_response_text(&response_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelName;
    use crate::llm::provider::ChatMessage;

    fn sample_request() -> ChatRequest {
        ChatRequest {
            model: ModelName::new("llama-3.3-70b-versatile"),
            temperature: 0.8,
            messages: vec![
                ChatMessage::system("You are a Viral Social Media Manager."),
                ChatMessage::human("Announcement:\nWe launched.\n\nGenerate Posts:"),
            ],
        }
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let p = OpenAiCompatCompletion::new("https://api.groq.com/openai/v1/", ApiKey::new("k"));
        assert_eq!(p.url(), "https://api.groq.com/openai/v1/chat/completions");
    }

    #[test]
    fn test_make_request_payload() {
        let payload = OpenAiCompatCompletion::make_request_payload(&sample_request());
        assert_eq!(payload["model"], "llama-3.3-70b-versatile");
        assert_eq!(payload["stream"], false);
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(
            messages[1]["content"],
            "Announcement:\nWe launched.\n\nGenerate Posts:"
        );
        let temp = payload["temperature"].as_f64().unwrap();
        assert!((temp - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_parse_response_text() {
        let body = r####"{"choices":[{"message":{"role":"assistant","content":"### Hi"}}]}"####;
        let text = OpenAiCompatCompletion::parse_response_text(body).unwrap();
        assert_eq!(text, "### Hi");
    }

    #[test]
    fn test_parse_response_api_error() {
        let body = r#"{"error":{"message":"Invalid API Key"}}"#;
        let err = OpenAiCompatCompletion::parse_response_text(body).unwrap_err();
        assert!(err.to_string().contains("Invalid API Key"));
    }

    #[test]
    fn test_parse_response_without_content() {
        let err = OpenAiCompatCompletion::parse_response_text(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_response_not_json() {
        let err = OpenAiCompatCompletion::parse_response_text("<html>").unwrap_err();
        assert!(err.to_string().contains("Failed to parse response JSON"));
    }
}
