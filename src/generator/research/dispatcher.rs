use thiserror::Error;
use tracing::debug;

use crate::llm::client::{LlmError, SearchProvider, SearchResult};
use crate::utils::threads::do_parallel_with_limit;

/// 一批问题中任意一个失败，整批视为失败
#[derive(Debug, Error)]
#[error("question {position} of {total} failed ({question}): {source}")]
pub struct DispatchError {
    /// 从1开始的问题序号
    pub position: usize,
    pub total: usize,
    pub question: String,
    #[source]
    pub source: LlmError,
}

/// 并发提交一批独立问题，结果与输入按下标一一对应
pub async fn dispatch_all(
    provider: &dyn SearchProvider,
    questions: &[String],
    max_parallels: usize,
) -> Result<Vec<SearchResult>, DispatchError> {
    debug!(
        questions = questions.len(),
        max_parallels, "dispatching question batch"
    );

    let futures: Vec<_> = questions
        .iter()
        .map(|question| provider.search(question))
        .collect();

    let outcomes = do_parallel_with_limit(futures, max_parallels).await;

    let total = questions.len();
    let mut results = Vec::with_capacity(total);
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(result) => results.push(result),
            Err(source) => {
                return Err(DispatchError {
                    position: index + 1,
                    total,
                    question: questions[index].clone(),
                    source,
                });
            }
        }
    }

    Ok(results)
}
