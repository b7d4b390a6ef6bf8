use regex::{Captures, Regex};
use std::sync::LazyLock;

static CITATION_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap());

/// 将回答中的 `[i]` 引用标记改写为指向第i个来源的Markdown链接
///
/// 标记从1开始编号。超出引用列表范围的标记（包括 `[0]`）保持原样。
/// 改写只扫描一遍原文，来源文本本身不会被再次改写。
pub fn render_citations(answer: &str, citations: &[String]) -> String {
    if citations.is_empty() {
        return answer.to_string();
    }

    CITATION_MARKER
        .replace_all(answer, |caps: &Captures| {
            let marker = &caps[0];
            match caps[1].parse::<usize>() {
                Ok(index) if index >= 1 && index <= citations.len() => {
                    format!("{}({})", marker, citations[index - 1])
                }
                _ => marker.to_string(),
            }
        })
        .into_owned()
}
