//! 讨论指南生成客户端

use async_trait::async_trait;
use rig::{client::CompletionClient, completion::Prompt};
use serde_json::json;
use tracing::debug;

use crate::config::{SYNTHESIS_API_KEY_ENV, SynthesisConfig};
use crate::llm::client::GuideSynthesizer;
use crate::llm::client::error::LlmError;

const PROVIDER: &str = "OpenAI";

/// 通用补全客户端，整个指南只发一次请求
#[derive(Clone)]
pub struct SynthesisClient {
    config: SynthesisConfig,
}

impl SynthesisClient {
    /// 密钥在调用时才检查
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// 额外请求参数：推理强度与纯文本输出
    pub fn additional_params(&self) -> serde_json::Value {
        json!({
            "reasoning_effort": self.config.reasoning_effort.to_string(),
            "response_format": { "type": "text" },
        })
    }

    fn ensure_credential(&self) -> Result<&str, LlmError> {
        let api_key = self.config.api_key.trim();
        if api_key.is_empty() {
            return Err(LlmError::MissingCredential {
                provider: PROVIDER,
                env_var: SYNTHESIS_API_KEY_ENV,
            });
        }
        Ok(api_key)
    }
}

#[async_trait]
impl GuideSynthesizer for SynthesisClient {
    async fn synthesize(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.ensure_credential()?;

        let client = rig::providers::openai::Client::builder(api_key)
            .base_url(&self.config.api_base_url)
            .build();
        let agent = client
            .completion_model(&self.config.model)
            .completions_api()
            .into_agent_builder()
            .additional_params(self.additional_params())
            .build();

        debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "sending synthesis request"
        );

        agent
            .prompt(prompt)
            .await
            .map_err(|e| LlmError::Synthesis {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReasoningEffort;

    #[tokio::test]
    async fn test_missing_key_is_reported_at_point_of_use() {
        let client = SynthesisClient::new(SynthesisConfig {
            api_key: String::new(),
            ..Default::default()
        });
        match client.synthesize("write a guide").await {
            Err(LlmError::MissingCredential { env_var, .. }) => {
                assert_eq!(env_var, "OPENAI_API_KEY")
            }
            _ => panic!("expected a missing credential error"),
        }
    }

    #[test]
    fn test_additional_params() {
        let client = SynthesisClient::new(SynthesisConfig {
            api_key: "sk-test".to_string(),
            reasoning_effort: ReasoningEffort::High,
            ..Default::default()
        });
        let params = client.additional_params();
        assert_eq!(params["reasoning_effort"], "high");
        assert_eq!(params["response_format"]["type"], "text");
    }
}
