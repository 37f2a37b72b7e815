// ==========================================
// 业务流程再造建议系统 - HTTP 补全客户端
// ==========================================
// 协议: POST JSON {model, prompt, max_tokens, temperature}
// 响应: JSON choices[0].text
// 红线: 单次请求,无重试,无调用方超时
// ==========================================

use crate::config::AppConfig;
use crate::llm::completion::CompletionService;
use crate::llm::error::{ServiceError, ServiceResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: Option<String>,
}

/// 解析补全响应体,取第一个 choice 的 text
pub fn parse_completion_body(body: &str) -> ServiceResult<String> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::MalformedResponse("choices 为空".to_string()))?
        .text
        .ok_or_else(|| ServiceError::MalformedResponse("choices[0] 缺少 text 字段".to_string()))
}

// ==========================================
// HttpCompletionClient
// ==========================================
pub struct HttpCompletionClient {
    client: Client,
    service_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl HttpCompletionClient {
    pub fn new(config: &AppConfig) -> ServiceResult<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            service_url: config.service_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl CompletionService for HttpCompletionClient {
    async fn complete(&self, prompt: &str) -> ServiceResult<String> {
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(
            url = %self.service_url,
            model = %self.model,
            prompt_len = prompt.len(),
            "发送补全请求"
        );

        let mut request_builder = self.client.post(&self.service_url).json(&request);
        if let Some(api_key) = &self.api_key {
            request_builder = request_builder.bearer_auth(api_key);
        }

        let response = request_builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = parse_completion_body(&body)?;
        info!(status = status.as_u16(), response_len = text.len(), "补全请求完成");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_choice_text() {
        let body = r#"{"id":"cmpl-1","choices":[{"text":"Reduce changeover time.","index":0},{"text":"ignored"}]}"#;
        assert_eq!(parse_completion_body(body).unwrap(), "Reduce changeover time.");
    }

    #[test]
    fn test_parse_empty_choices() {
        let result = parse_completion_body(r#"{"choices":[]}"#);
        assert!(matches!(result, Err(ServiceError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_missing_text() {
        let result = parse_completion_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#);
        assert!(matches!(result, Err(ServiceError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_not_json() {
        let result = parse_completion_body("<html>gateway</html>");
        assert!(matches!(result, Err(ServiceError::MalformedResponse(_))));
    }

    #[test]
    fn test_request_shape() {
        let request = CompletionRequest {
            model: "m",
            prompt: "p",
            max_tokens: 16,
            temperature: 0.5,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"model": "m", "prompt": "p", "max_tokens": 16, "temperature": 0.5})
        );
    }
}
