use crate::config::{Config, DEFAULT_CONFIG_FILE, ReasoningEffort};
use crate::i18n::TargetLanguage;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;

/// prospect-brief - 公司调研与销售讨论指南生成工具
#[derive(Parser, Debug)]
#[command(name = "prospect-brief")]
#[command(
    about = "Researches a company through a search-augmented LLM and turns the cited answers into a sales discussion guide."
)]
#[command(version)]
pub struct Args {
    /// 公司名称，不指定时进入交互模式
    #[arg(short = 'n', long = "company")]
    pub company: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 输出路径
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 搜索API KEY
    #[arg(long)]
    pub search_api_key: Option<String>,

    /// 搜索模型
    #[arg(long)]
    pub search_model: Option<String>,

    /// 指南生成API KEY
    #[arg(long)]
    pub synthesis_api_key: Option<String>,

    /// 指南生成模型
    #[arg(long)]
    pub synthesis_model: Option<String>,

    /// 推理强度 (low, medium, high)
    #[arg(long)]
    pub reasoning_effort: Option<String>,

    /// 单组内最大并发请求数
    #[arg(long)]
    pub max_parallels: Option<usize>,

    /// 指南语言 (en, zh, ja, ko, de, fr, ru)
    #[arg(long)]
    pub target_language: Option<String>,

    /// 不输出HTML格式的指南
    #[arg(long)]
    pub no_html: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置，命令行参数优先于配置文件
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(config_path) => Config::from_file(config_path)
                .context(format!("Unable to load config file {:?}", config_path))?,
            None => {
                let default_config_path = std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(DEFAULT_CONFIG_FILE);

                if default_config_path.exists() {
                    Config::from_file(&default_config_path).context(format!(
                        "Unable to load default config file {:?}",
                        default_config_path
                    ))?
                } else {
                    Config::default()
                }
            }
        };

        if let Some(company) = self.company {
            config.company_name = Some(company);
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }

        if let Some(api_key) = self.search_api_key {
            config.search.api_key = api_key;
        }
        if let Some(model) = self.search_model {
            config.search.model = model;
        }
        if let Some(max_parallels) = self.max_parallels {
            if max_parallels == 0 {
                return Err(anyhow!("--max-parallels must be at least 1"));
            }
            config.search.max_parallels = max_parallels;
        }

        if let Some(api_key) = self.synthesis_api_key {
            config.synthesis.api_key = api_key;
        }
        if let Some(model) = self.synthesis_model {
            config.synthesis.model = model;
        }
        if let Some(effort) = self.reasoning_effort {
            config.synthesis.reasoning_effort = effort
                .parse::<ReasoningEffort>()
                .map_err(|e| anyhow!(e))?;
        }

        if let Some(target_language_str) = self.target_language {
            if let Ok(target_language) = target_language_str.parse::<TargetLanguage>() {
                config.target_language = target_language;
            } else {
                eprintln!(
                    "⚠️ Unknown target language: {}, falling back to {}",
                    target_language_str,
                    config.target_language.display_name()
                );
            }
        }

        if self.no_html {
            config.render_html = false;
        }
        if self.verbose {
            config.verbose = true;
        }

        Ok(config)
    }
}

// Include tests
#[cfg(test)]
mod tests;
