//! 运行进度的对外通知

use std::path::Path;

/// 输出文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// 调研记录 + 分隔行 + 讨论指南
    Download,
    /// 指南生成失败时单独保存的调研记录
    PartialTranscript,
    /// 渲染后的HTML指南
    GuideHtml,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Download => write!(f, "conversation topics"),
            ArtifactKind::PartialTranscript => write!(f, "research transcript"),
            ArtifactKind::GuideHtml => write!(f, "rendered guide"),
        }
    }
}

/// 进度回调。index从1开始
pub trait ProgressReporter: Send + Sync {
    fn input_rejected(&self, message: &str);
    fn run_started(&self, company: &str);
    fn group_started(&self, index: usize, total: usize, title: &str);
    fn group_completed(&self, index: usize, total: usize, title: &str);
    fn group_failed(&self, index: usize, total: usize, title: &str, error: &str);
    fn research_completed(&self, succeeded: usize, total: usize);
    fn synthesis_started(&self);
    fn synthesis_failed(&self, error: &str);
    fn guide_ready(&self, guide: &str);
    fn artifact_saved(&self, kind: ArtifactKind, path: &Path);
    fn artifact_failed(&self, kind: ArtifactKind, error: &str);
}

/// 终端输出
#[derive(Default)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn input_rejected(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    fn run_started(&self, company: &str) {
        println!("🔍 Analyzing company: {}", company);
    }

    fn group_started(&self, index: usize, total: usize, title: &str) {
        println!("🤖 Processing group {} of {}: {}", index, total, title);
    }

    fn group_completed(&self, index: usize, total: usize, title: &str) {
        println!(
            "✓ [{:>3}%] {} done",
            index * 100 / total.max(1),
            title
        );
    }

    fn group_failed(&self, index: usize, total: usize, title: &str, error: &str) {
        eprintln!(
            "❌ [{:>3}%] Error retrieving data for group '{}': {}",
            index * 100 / total.max(1),
            title,
            error
        );
    }

    fn research_completed(&self, succeeded: usize, total: usize) {
        println!(
            "✅ Company data retrieval complete ({} of {} groups)",
            succeeded, total
        );
    }

    fn synthesis_started(&self) {
        println!("🔄 Generating conversation topics for discussion...");
    }

    fn synthesis_failed(&self, error: &str) {
        eprintln!("❌ Error generating conversation topics: {}", error);
    }

    fn guide_ready(&self, guide: &str) {
        println!("\n## Conversation Starters and Topics\n");
        println!("{}\n", guide);
    }

    fn artifact_saved(&self, kind: ArtifactKind, path: &Path) {
        println!("💾 Saved {}: {}", kind, path.display());
    }

    fn artifact_failed(&self, kind: ArtifactKind, error: &str) {
        eprintln!("❌ Failed to save {}: {}", kind, error);
    }
}
