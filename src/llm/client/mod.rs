//! LLM客户端 - 搜索与指南生成两个外部服务的统一接口

use async_trait::async_trait;

pub mod error;
pub mod search;
pub mod synthesis;
pub mod types;

pub use error::LlmError;
pub use search::SearchClient;
pub use synthesis::SynthesisClient;
pub use types::SearchResult;

/// 搜索增强问答服务
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// 提交一个已填入公司名的问题，返回回答与引用列表
    async fn search(&self, question: &str) -> Result<SearchResult, LlmError>;
}

/// 讨论指南生成服务
#[async_trait]
pub trait GuideSynthesizer: Send + Sync {
    /// 提交完整的指令文本，返回生成的指南
    async fn synthesize(&self, prompt: &str) -> Result<String, LlmError>;
}
