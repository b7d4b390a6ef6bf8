//! 搜索增强补全客户端

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::{SEARCH_API_KEY_ENV, SearchConfig};
use crate::llm::client::SearchProvider;
use crate::llm::client::error::LlmError;
use crate::llm::client::types::{SearchRequest, SearchResponse, SearchResult};

const PROVIDER: &str = "Perplexity";

/// 搜索客户端，一个问题对应一次请求，不做重试
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    config: SearchConfig,
}

impl SearchClient {
    /// 使用显式传入的配置创建客户端，密钥缺失时直接失败
    pub fn new(config: SearchConfig) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::MissingCredential {
                provider: PROVIDER,
                env_var: SEARCH_API_KEY_ENV,
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LlmError::Transport {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base_url.trim_end_matches('/')
        )
    }
}

/// 将响应体解析为搜索结果，只取第一个choice
pub fn parse_search_response(body: &str) -> Result<SearchResult, LlmError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Decode {
            provider: PROVIDER,
            message: e.to_string(),
        })?;

    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            citation_tokens = usage.citation_tokens,
            num_search_queries = usage.num_search_queries,
            "search usage"
        );
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyChoices { provider: PROVIDER })?;

    Ok(SearchResult {
        answer_text: choice.message.content,
        citations: response.citations,
    })
}

#[async_trait]
impl SearchProvider for SearchClient {
    async fn search(&self, question: &str) -> Result<SearchResult, LlmError> {
        let request = SearchRequest::new(&self.config, question);
        debug!(model = %self.config.model, question, "sending search request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Transport {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| LlmError::Transport {
            provider: PROVIDER,
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(LlmError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        parse_search_response(&body)
    }
}
