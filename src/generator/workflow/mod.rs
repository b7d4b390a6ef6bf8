use crate::config::Config;
use crate::generator::compose;
use crate::generator::context::GeneratorContext;
use crate::generator::outlet::{DiskOutlet, download_content, render_guide_html};
use crate::generator::progress::{ArtifactKind, ConsoleReporter, ProgressReporter};
use crate::generator::research;
use crate::generator::research::types::ResearchReport;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;

pub mod timing;

use timing::{TimingKeys, TimingScope};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Please enter a valid company name.")]
    EmptyCompanyName,

    #[error("Error generating conversation topics: {0}")]
    GuideFailed(String),
}

/// 单次分析的全部产物
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub company_name: String,
    pub report: ResearchReport,
    /// 汇总后的调研记录
    pub transcript: String,
    pub guide: Option<String>,
    pub guide_error: Option<String>,
    /// 下载文件内容，仅在指南生成成功后存在
    pub download: Option<String>,
    pub artifacts: Vec<(ArtifactKind, PathBuf)>,
    /// 写入失败的文件，不影响其余产物
    pub artifact_errors: Vec<(ArtifactKind, String)>,
}

impl AnalysisOutcome {
    pub fn succeeded(&self) -> bool {
        self.guide.is_some()
    }

    fn record_artifact(
        &mut self,
        kind: ArtifactKind,
        saved: Result<PathBuf>,
        reporter: &dyn ProgressReporter,
    ) {
        match saved {
            Ok(path) => {
                reporter.artifact_saved(kind, &path);
                self.artifacts.push((kind, path));
            }
            Err(e) => {
                let error = format!("{:#}", e);
                warn!(artifact = %kind, error = %error, "failed to save artifact");
                reporter.artifact_failed(kind, &error);
                self.artifact_errors.push((kind, error));
            }
        }
    }
}

/// 对一个公司执行完整分析：调研 -> 生成指南 -> 保存文件
///
/// 公司名为空时不发起任何请求。调研组失败、指南生成失败与文件写入失败都会
/// 通知reporter并体现在返回的结果中，只有输入校验和调研记录序列化错误以`Err`返回。
pub async fn run_analysis(
    context: &GeneratorContext,
    company_input: &str,
    reporter: &dyn ProgressReporter,
) -> Result<AnalysisOutcome> {
    let company_name = company_input.trim();
    if company_name.is_empty() {
        let err = WorkflowError::EmptyCompanyName;
        reporter.input_rejected(&err.to_string());
        return Err(err.into());
    }

    let span = info_span!("analysis", run_id = %Uuid::new_v4(), company = company_name);
    analyze(context, company_name, reporter)
        .instrument(span)
        .await
}

async fn analyze(
    context: &GeneratorContext,
    company_name: &str,
    reporter: &dyn ProgressReporter,
) -> Result<AnalysisOutcome> {
    let config = &context.config;
    let mut timing = TimingScope::new();
    reporter.run_started(company_name);

    timing.start_phase(TimingKeys::RESEARCH);
    let report = research::execute(context, company_name, reporter).await;
    timing.end_phase(TimingKeys::RESEARCH);

    let transcript = report
        .transcript()
        .context("Failed to serialize research transcript")?;
    if transcript.is_empty() {
        warn!("no question group returned data, the guide will be written from an empty transcript");
    }

    let mut outcome = AnalysisOutcome {
        company_name: company_name.to_string(),
        report,
        transcript: transcript.text(),
        guide: None,
        guide_error: None,
        download: None,
        artifacts: vec![],
        artifact_errors: vec![],
    };

    reporter.synthesis_started();
    timing.start_phase(TimingKeys::SYNTHESIS);
    let guide = compose::write_guide(context, company_name, &outcome.transcript).await;
    timing.end_phase(TimingKeys::SYNTHESIS);

    let outlet = DiskOutlet::new(&config.output_path, company_name);
    timing.start_phase(TimingKeys::OUTPUT);
    match guide {
        Ok(guide) => {
            reporter.guide_ready(&guide);

            let content = download_content(&outcome.transcript, &guide);
            let saved = outlet.save_download(&content).await;
            outcome.record_artifact(ArtifactKind::Download, saved, reporter);

            if config.render_html {
                let html = render_guide_html(company_name, &guide);
                let saved = outlet.save_guide_html(&html).await;
                outcome.record_artifact(ArtifactKind::GuideHtml, saved, reporter);
            }

            outcome.download = Some(content);
            outcome.guide = Some(guide);
        }
        Err(e) => {
            warn!(error = %e, "guide generation failed");
            let error = e.to_string();
            reporter.synthesis_failed(&error);
            outcome.guide_error = Some(error);

            if config.save_partial_transcript && !transcript.is_empty() {
                let saved = outlet.save_partial_transcript(&outcome.transcript).await;
                outcome.record_artifact(ArtifactKind::PartialTranscript, saved, reporter);
            }
        }
    }
    timing.end_phase(TimingKeys::OUTPUT);

    let timing_report = timing.generate_timing_report();
    debug!("{}", timing_report);
    if config.verbose {
        println!("\n⏱️ {}", timing_report);
    }

    Ok(outcome)
}

/// 启动分析流程
///
/// 配置中给出公司名时只分析一次；否则进入交互模式，逐行读取公司名，
/// 单次失败不会结束会话。
pub async fn launch(config: &Config) -> Result<()> {
    let context = GeneratorContext::new(config.clone())?;
    let reporter = ConsoleReporter;

    match config.company_name.as_deref() {
        Some(company_name) => {
            let outcome = run_analysis(&context, company_name, &reporter).await?;
            match outcome.guide_error {
                Some(error) => Err(WorkflowError::GuideFailed(error).into()),
                None => {
                    println!("✅ Conversation topics are ready");
                    Ok(())
                }
            }
        }
        None => interactive_session(&context, &reporter).await,
    }
}

async fn interactive_session(
    context: &GeneratorContext,
    reporter: &dyn ProgressReporter,
) -> Result<()> {
    println!("Company Analysis and Conversation Starter Generator");
    println!("(type 'quit' or press Ctrl-D to leave)\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Enter the Company Name: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if matches!(input, "quit" | "exit") {
            break;
        }

        match run_analysis(context, input, reporter).await {
            Ok(outcome) if outcome.succeeded() => {
                println!("✅ Conversation topics are ready\n");
            }
            Ok(_) => {}
            // 输入校验失败已经通过reporter提示
            Err(e) if e.downcast_ref::<WorkflowError>().is_some() => {}
            Err(e) => eprintln!("❌ {:#}", e),
        }
    }

    Ok(())
}
