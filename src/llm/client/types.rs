//! 搜索API的请求与响应结构

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// 搜索补全请求体
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub search_domain_filter: Vec<String>,
    pub return_images: bool,
    pub return_related_questions: bool,
    pub search_recency_filter: String,
    pub top_k: u32,
    pub stream: bool,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

impl SearchRequest {
    /// 按配置中的固定采样参数构建单个问题的请求
    pub fn new(config: &SearchConfig, question: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage::system(config.system_prompt.clone()),
                ChatMessage::user(question),
            ],
            temperature: config.temperature,
            top_p: config.top_p,
            search_domain_filter: vec![],
            return_images: false,
            return_related_questions: false,
            search_recency_filter: config.search_recency_filter.clone(),
            top_k: config.top_k,
            stream: false,
            presence_penalty: config.presence_penalty,
            frequency_penalty: config.frequency_penalty,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
}

/// 搜索用量统计，仅用于日志
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    #[serde(default)]
    pub citation_tokens: Option<u64>,
    #[serde(default)]
    pub num_search_queries: Option<u64>,
}

/// 搜索补全响应体
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub citations: Vec<String>,
    pub choices: Vec<ResponseChoice>,
    #[serde(default)]
    pub usage: Option<SearchUsage>,
}

/// 单个问题的搜索结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub answer_text: String,
    pub citations: Vec<String>,
}
