use tracing::{info, warn};

use crate::generator::context::GeneratorContext;
use crate::generator::progress::ProgressReporter;

pub mod catalog;
pub mod citations;
pub mod dispatcher;
pub mod types;

use catalog::{QUESTION_GROUPS, QuestionGroup};
use citations::render_citations;
use dispatcher::{DispatchError, dispatch_all};
use types::{GroupFailure, GroupResult, ResearchReport};

/// 按固定顺序依次调研全部问题组
///
/// 组与组之间严格串行，组内问题并发提交。某组失败时记录错误并跳过，
/// 后续各组照常执行。
pub async fn execute(
    context: &GeneratorContext,
    company_name: &str,
    reporter: &dyn ProgressReporter,
) -> ResearchReport {
    execute_groups(context, company_name, &QUESTION_GROUPS, reporter).await
}

pub async fn execute_groups(
    context: &GeneratorContext,
    company_name: &str,
    groups: &[QuestionGroup],
    reporter: &dyn ProgressReporter,
) -> ResearchReport {
    let total = groups.len();
    let mut report = ResearchReport::default();

    for (offset, group) in groups.iter().enumerate() {
        let index = offset + 1;
        reporter.group_started(index, total, group.title);

        match research_group(context, company_name, group).await {
            Ok(result) => {
                info!(group = group.title, answers = result.answers.len(), "group completed");
                report.groups.push(result);
                reporter.group_completed(index, total, group.title);
            }
            Err(e) => {
                warn!(group = group.title, error = %e, "group skipped");
                let error = e.to_string();
                reporter.group_failed(index, total, group.title, &error);
                report.failures.push(GroupFailure {
                    title: group.title.to_string(),
                    error,
                });
            }
        }
    }

    reporter.research_completed(report.groups.len(), total);
    report
}

/// 调研单个问题组
async fn research_group(
    context: &GeneratorContext,
    company_name: &str,
    group: &QuestionGroup,
) -> Result<GroupResult, DispatchError> {
    let questions = group.format_questions(company_name);
    let results = dispatch_all(
        context.search_client.as_ref(),
        &questions,
        context.config.search.max_parallels,
    )
    .await?;

    let mut group_result = GroupResult::new(group.title);
    for (template, result) in group.templates.iter().zip(results) {
        let rendered = render_citations(&result.answer_text, &result.citations);
        group_result.insert(*template, rendered);
    }
    Ok(group_result)
}
