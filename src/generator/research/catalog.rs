//! 固定的六组调研问题模板

/// 模板中的公司名占位符
pub const COMPANY_PLACEHOLDER: &str = "{company_name}";

/// 一组围绕同一主题的问题模板
#[derive(Debug, Clone, Copy)]
pub struct QuestionGroup {
    pub title: &'static str,
    pub templates: &'static [&'static str],
}

impl QuestionGroup {
    /// 将公司名填入本组所有模板，顺序与模板一致
    pub fn format_questions(&self, company_name: &str) -> Vec<String> {
        self.templates
            .iter()
            .map(|template| format_question(template, company_name))
            .collect()
    }
}

/// 将公司名填入单个模板
pub fn format_question(template: &str, company_name: &str) -> String {
    template.replace(COMPANY_PLACEHOLDER, company_name)
}

pub static QUESTION_GROUPS: [QuestionGroup; 6] = [
    QuestionGroup {
        title: "What are their core projects and recent developments?",
        templates: &[
            "What are {company_name} core projects and recent developments?",
            "What are the main products or services that {company_name} offers?",
            "What recent projects or initiatives have {company_name} launched?",
            "Have {company_name} pivoted or expanded into new areas recently?",
            "What technologies or methodologies are {company_name} investing in?",
        ],
    },
    QuestionGroup {
        title: "How are they communicating their vision and direction?",
        templates: &[
            "How are {company_name} communicating their vision and direction?",
            "What kind of public speeches, interviews, or conference presentations have {company_name} leaders given?",
            "Have {company_name} published any white papers, research articles, or thought leadership pieces recently?",
            "How does {company_name} position themselves in industry discussions (e.g., sustainability, innovation, longevity)?",
        ],
    },
    QuestionGroup {
        title: "What is their financial health and funding status?",
        templates: &[
            "What funding rounds have {company_name} completed, and how much capital have they raised?",
            "Who are {company_name} investors, and what is the scale of their financial backing?",
            "Are there any publicly available financial reports or statements of {company_name}?",
        ],
    },
    QuestionGroup {
        title: "How reputable and influential are they in their industry?",
        templates: &[
            "How reputable and influential is {company_name} in their industry?",
            "What awards, recognitions, or certifications has {company_name} received?",
            "How is {company_name} perceived by industry experts and analysts?",
            "What partnerships or collaborations do {company_name} have with other well-known organizations?",
            "Are there any customer testimonials, case studies, or independent reviews of {company_name}?",
        ],
    },
    QuestionGroup {
        title: "What are potential concerns or ethical considerations?",
        templates: &[
            "What are potential concerns or ethical considerations of {company_name}?",
            "Are there any controversies or ethical debates surrounding {company_name} products or services?",
            "What is the feedback from {company_name} customers and the broader public?",
            "Do {company_name} have clear policies regarding sustainability, ethical practices, or data privacy?",
        ],
    },
    QuestionGroup {
        title: "What additional aspects should I consider?",
        templates: &[
            "What is the {company_name} long-term vision and roadmap?",
            "How do {company_name} differentiate themselves from competitors?",
            "What are the key challenges {company_name} currently face?",
            "How do {company_name} handle innovation, and what is their approach to research and development?",
        ],
    },
];
