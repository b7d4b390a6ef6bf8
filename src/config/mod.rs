use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::i18n::TargetLanguage;

/// 搜索API密钥的环境变量名
pub const SEARCH_API_KEY_ENV: &str = "PERPLEXITY_API";

/// 指南生成API密钥的环境变量名
pub const SYNTHESIS_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "prospect-brief.toml";

/// 推理强度
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum ReasoningEffort {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    #[default]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl std::fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReasoningEffort::Low => write!(f, "low"),
            ReasoningEffort::Medium => write!(f, "medium"),
            ReasoningEffort::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for ReasoningEffort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ReasoningEffort::Low),
            "medium" => Ok(ReasoningEffort::Medium),
            "high" => Ok(ReasoningEffort::High),
            _ => Err(format!("Unknown reasoning effort: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 公司名称，为空时进入交互模式
    pub company_name: Option<String>,

    /// 输出目录
    pub output_path: PathBuf,

    /// 指南语言
    pub target_language: TargetLanguage,

    /// 指南生成失败时是否单独保存调研记录
    pub save_partial_transcript: bool,

    /// 是否额外输出渲染后的HTML指南
    pub render_html: bool,

    /// 是否启用详细日志
    pub verbose: bool,

    /// 搜索API配置
    pub search: SearchConfig,

    /// 指南生成API配置
    pub synthesis: SynthesisConfig,
}

/// 搜索API配置，采样参数在一次运行中固定不变
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    /// 来源时效过滤（day / week / month / year）
    pub search_recency_filter: String,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    /// 单个问题组内的最大并发请求数
    pub max_parallels: usize,
    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

/// 指南生成API配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SynthesisConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub reasoning_effort: ReasoningEffort,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: None,
            output_path: PathBuf::from("./prospect-brief.out"),
            target_language: TargetLanguage::default(),
            save_partial_transcript: true,
            render_html: true,
            verbose: false,
            search: SearchConfig::default(),
            synthesis: SynthesisConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var(SEARCH_API_KEY_ENV).unwrap_or_default(),
            api_base_url: String::from("https://api.perplexity.ai"),
            model: String::from("sonar-pro"),
            system_prompt: String::from("Be precise and concise."),
            temperature: 0.2,
            top_p: 0.9,
            top_k: 0,
            search_recency_filter: String::from("month"),
            presence_penalty: 0.0,
            frequency_penalty: 1.0,
            max_parallels: 5,
            timeout_seconds: 120,
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var(SYNTHESIS_API_KEY_ENV).unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("o3-mini"),
            reasoning_effort: ReasoningEffort::default(),
        }
    }
}
