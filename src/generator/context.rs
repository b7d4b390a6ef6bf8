use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::llm::client::{GuideSynthesizer, SearchClient, SearchProvider, SynthesisClient};

#[derive(Clone)]
pub struct GeneratorContext {
    /// 搜索服务，用于逐题调研
    pub search_client: Arc<dyn SearchProvider>,
    /// 指南生成服务
    pub synthesis_client: Arc<dyn GuideSynthesizer>,
    /// 配置
    pub config: Config,
}

impl GeneratorContext {
    /// 按配置创建真实的服务客户端，搜索密钥缺失时立即失败
    pub fn new(config: Config) -> Result<Self> {
        let search_client = SearchClient::new(config.search.clone())?;
        let synthesis_client = SynthesisClient::new(config.synthesis.clone());

        Ok(Self {
            search_client: Arc::new(search_client),
            synthesis_client: Arc::new(synthesis_client),
            config,
        })
    }

    /// 使用外部提供的客户端创建上下文
    pub fn with_clients(
        config: Config,
        search_client: Arc<dyn SearchProvider>,
        synthesis_client: Arc<dyn GuideSynthesizer>,
    ) -> Self {
        Self {
            search_client,
            synthesis_client,
            config,
        }
    }
}
