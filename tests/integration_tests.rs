use async_trait::async_trait;
use prospect_brief::config::Config;
use prospect_brief::generator::context::GeneratorContext;
use prospect_brief::generator::progress::{ArtifactKind, ProgressReporter};
use prospect_brief::generator::research::catalog::QUESTION_GROUPS;
use prospect_brief::generator::research::types::SECTION_SEPARATOR;
use prospect_brief::llm::client::{GuideSynthesizer, LlmError, SearchProvider, SearchResult};
use prospect_brief::run_analysis;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// 回答不带引用；问题中包含任一 `outage_markers` 时模拟网络故障
struct StubSearch {
    outage_markers: &'static [&'static str],
    calls: AtomicUsize,
}

#[async_trait]
impl SearchProvider for StubSearch {
    async fn search(&self, question: &str) -> Result<SearchResult, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.outage_markers.iter().any(|m| question.contains(m)) {
            return Err(LlmError::Transport {
                provider: "stub",
                message: "network outage".to_string(),
            });
        }
        Ok(SearchResult {
            answer_text: format!("Stub answer for '{}'", question),
            citations: vec![],
        })
    }
}

/// `fail`为true时模拟合成服务不可用
struct StubSynthesizer {
    fail: bool,
}

#[async_trait]
impl GuideSynthesizer for StubSynthesizer {
    async fn synthesize(&self, _prompt: &str) -> Result<String, LlmError> {
        if self.fail {
            return Err(LlmError::Status {
                provider: "stub",
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        Ok("# Discussion guide for Acme Corp".to_string())
    }
}

/// 静默reporter，只统计失败组数
#[derive(Default)]
struct QuietReporter {
    failed_groups: AtomicUsize,
    guides: AtomicUsize,
}

impl ProgressReporter for QuietReporter {
    fn input_rejected(&self, _message: &str) {}
    fn run_started(&self, _company: &str) {}
    fn group_started(&self, _index: usize, _total: usize, _title: &str) {}
    fn group_completed(&self, _index: usize, _total: usize, _title: &str) {}
    fn group_failed(&self, _index: usize, _total: usize, _title: &str, _error: &str) {
        self.failed_groups.fetch_add(1, Ordering::SeqCst);
    }
    fn research_completed(&self, _succeeded: usize, _total: usize) {}
    fn synthesis_started(&self) {}
    fn synthesis_failed(&self, _error: &str) {}
    fn guide_ready(&self, _guide: &str) {
        self.guides.fetch_add(1, Ordering::SeqCst);
    }
    fn artifact_saved(&self, _kind: ArtifactKind, _path: &Path) {}
    fn artifact_failed(&self, _kind: ArtifactKind, _error: &str) {}
}

fn create_context(temp_dir: &TempDir, search: Arc<StubSearch>) -> GeneratorContext {
    create_context_with(temp_dir, search, StubSynthesizer { fail: false })
}

fn create_context_with(
    temp_dir: &TempDir,
    search: Arc<StubSearch>,
    synthesizer: StubSynthesizer,
) -> GeneratorContext {
    let config = Config {
        output_path: temp_dir.path().join("briefs"),
        render_html: false,
        ..Default::default()
    };
    GeneratorContext::with_clients(config, search, Arc::new(synthesizer))
}

#[tokio::test]
async fn test_full_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let search = Arc::new(StubSearch {
        outage_markers: &[],
        calls: AtomicUsize::new(0),
    });
    let context = create_context(&temp_dir, search.clone());
    let reporter = QuietReporter::default();

    let outcome = run_analysis(&context, "Acme Corp", &reporter).await.unwrap();

    assert_eq!(search.calls.load(Ordering::SeqCst), 25);
    assert_eq!(reporter.failed_groups.load(Ordering::SeqCst), 0);
    assert_eq!(reporter.guides.load(Ordering::SeqCst), 1);

    let expected = format!(
        "{}\n--------------\n# Discussion guide for Acme Corp",
        outcome.transcript
    );
    let written = std::fs::read_to_string(
        temp_dir.path().join("briefs").join("Acme Corp_questions_topics.txt"),
    )
    .unwrap();
    assert_eq!(written, expected);
    assert_eq!(outcome.download, Some(expected));
    assert_eq!(outcome.transcript.matches(SECTION_SEPARATOR).count(), 5);
}

#[tokio::test]
async fn test_empty_company_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let search = Arc::new(StubSearch {
        outage_markers: &[],
        calls: AtomicUsize::new(0),
    });
    let context = create_context(&temp_dir, search.clone());

    let result = run_analysis(&context, "  ", &QuietReporter::default()).await;

    assert!(result.is_err());
    assert_eq!(search.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_network_outage_for_one_group() {
    let temp_dir = TempDir::new().unwrap();
    // 财务组的三个问题全部失败
    let search = Arc::new(StubSearch {
        outage_markers: &["funding rounds", "investors", "financial reports"],
        calls: AtomicUsize::new(0),
    });
    let context = create_context(&temp_dir, search);
    let reporter = QuietReporter::default();

    let outcome = run_analysis(&context, "Acme Corp", &reporter).await.unwrap();

    assert_eq!(reporter.failed_groups.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.report.groups.len(), 5);
    assert_eq!(outcome.report.failures[0].title, QUESTION_GROUPS[2].title);
    assert!(!outcome.transcript.contains("investors"));
    assert!(outcome.succeeded());
}

#[tokio::test]
async fn test_synthesis_failure_keeps_transcript() {
    let temp_dir = TempDir::new().unwrap();
    let search = Arc::new(StubSearch {
        outage_markers: &[],
        calls: AtomicUsize::new(0),
    });
    let context = create_context_with(&temp_dir, search.clone(), StubSynthesizer { fail: true });
    let reporter = QuietReporter::default();

    let outcome = run_analysis(&context, "Acme Corp", &reporter).await.unwrap();

    assert_eq!(search.calls.load(Ordering::SeqCst), 25);
    assert!(outcome.guide_error.is_some());
    assert!(outcome.download.is_none());
    assert_eq!(reporter.guides.load(Ordering::SeqCst), 0);

    let briefs = temp_dir.path().join("briefs");
    assert!(!briefs.join("Acme Corp_questions_topics.txt").exists());
    let saved = std::fs::read_to_string(briefs.join("Acme Corp_research.txt")).unwrap();
    assert_eq!(saved, outcome.transcript);
}
