use chrono::NaiveDate;
use tracing::info;

use crate::generator::context::GeneratorContext;
use crate::i18n::TargetLanguage;
use crate::llm::client::LlmError;

/// 讨论指南的固定撰写指令，`{company_name}`、`{current_date}`、
/// `{combined_info}` 与 `{language_instruction}` 在构建时填入
const GUIDE_TEMPLATE: &str = r#"
I am a business development professional at a consulting company specializing in Data, Machine Learning, and Software Engineering. We have proven expertise in AI and scalable data pipelines. For my upcoming call with {company_name}, I need a discussion guide that focuses on our Provectus IDP offering—with a backup "moon shot" AI idea—customized to the prospect.

Today's date is {current_date}.

## 1. Company Summary
- **Overview:** Provide a brief summary of the company based on the searched information.
- **Services:** Summarize the company’s main services.
- **Public/Private Status:**
  - If public, include the stock ticker, a summary of the stock trend over the last 12 months, and a brief 10-K summary.
  - If private, summarize the “Crunchbase health” (e.g., when they last raised a funding round and total funding) along with 1-2 sentences on the overall company health.

## 2. Provectus IDP Value Thesis
- **Thesis Statement:** Summarize in 1-2 sentences how Provectus IDP can help the company save money and improve end user outcomes.

## 3. Identified New Business Opportunities
- **Topics to Explore:**
  - **Primary:** Why would Provectus IDP be a great fit for your company?
  - **Fallback:** If IDP is not the right fit, discuss 1-2 cool AI use cases as an alternative.
- **Open-Ended Questions:**
  - Customize questions for IDP use cases, focusing on ML/AI in the context of life sciences.
  - Provide conversation starters specifically tailored to explore the benefits of Provectus IDP.

## 4. Develop and Nurture Client Relationships
- **Key Questions:** Provide 1-2 concise, prompting questions to help build rapport and further explore how Provectus IDP aligns with their needs.

**Additional Information:**
Here is the searched information about the company: {combined_info}

*Please format your response using Markdown for clarity and ease of reading.*
{language_instruction}
"#;

/// 构建指南请求文本，调研记录原样嵌入
pub fn build_guide_prompt(
    company_name: &str,
    transcript: &str,
    target_language: &TargetLanguage,
    current_date: NaiveDate,
) -> String {
    // 调研记录最后填入，避免其中的花括号文本被当作占位符
    GUIDE_TEMPLATE
        .replace("{company_name}", company_name)
        .replace("{current_date}", &current_date.format("%Y-%m-%d").to_string())
        .replace(
            "{language_instruction}",
            target_language.guide_instruction(),
        )
        .replace("{combined_info}", transcript)
}

/// 根据调研记录生成讨论指南
pub async fn write_guide(
    context: &GeneratorContext,
    company_name: &str,
    transcript: &str,
) -> Result<String, LlmError> {
    let prompt = build_guide_prompt(
        company_name,
        transcript,
        &context.config.target_language,
        chrono::Local::now().date_naive(),
    );
    info!(
        language = %context.config.target_language,
        prompt_chars = prompt.len(),
        "requesting discussion guide"
    );

    context.synthesis_client.synthesize(&prompt).await
}
