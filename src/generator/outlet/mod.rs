use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::generator::research::types::SECTION_SEPARATOR;
use crate::utils::file_names::safe_file_stem;

/// 下载文件内容：调研记录 + 分隔行 + 讨论指南
pub fn download_content(transcript: &str, guide: &str) -> String {
    format!("{}{}{}", transcript, SECTION_SEPARATOR, guide)
}

/// 将指南渲染为独立的HTML页面
pub fn render_guide_html(company_name: &str, guide: &str) -> String {
    let body = markdown::to_html(guide);
    let title = markdown::to_html(&format!("Conversation topics: {}", company_name));
    // to_html 会把标题包在 <p> 中
    let title = title
        .trim()
        .trim_start_matches("<p>")
        .trim_end_matches("</p>");
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        title, body
    )
}

/// 磁盘输出，文件名以公司名为前缀
pub struct DiskOutlet {
    output_dir: PathBuf,
    file_stem: String,
}

impl DiskOutlet {
    pub fn new(output_dir: &Path, company_name: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            file_stem: safe_file_stem(company_name),
        }
    }

    pub fn download_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_questions_topics.txt", self.file_stem))
    }

    pub fn partial_transcript_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_research.txt", self.file_stem))
    }

    pub fn guide_html_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_guide.html", self.file_stem))
    }

    /// 保存下载文件
    pub async fn save_download(&self, content: &str) -> Result<PathBuf> {
        let path = self.download_path();
        self.write(&path, content).await?;
        Ok(path)
    }

    /// 指南生成失败时单独保存调研记录
    pub async fn save_partial_transcript(&self, transcript: &str) -> Result<PathBuf> {
        let path = self.partial_transcript_path();
        self.write(&path, transcript).await?;
        Ok(path)
    }

    pub async fn save_guide_html(&self, html: &str) -> Result<PathBuf> {
        let path = self.guide_html_path();
        self.write(&path, html).await?;
        Ok(path)
    }

    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .await
            .context(format!("Failed to create output dir: {:?}", self.output_dir))?;
        fs::write(path, content)
            .await
            .context(format!("Failed to write {:?}", path))?;
        Ok(())
    }
}
