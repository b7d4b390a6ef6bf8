use serde::{Deserialize, Serialize};

/// 讨论指南的输出语言
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum TargetLanguage {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "ru")]
    Russian,
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLanguage::English => write!(f, "en"),
            TargetLanguage::Chinese => write!(f, "zh"),
            TargetLanguage::Japanese => write!(f, "ja"),
            TargetLanguage::Korean => write!(f, "ko"),
            TargetLanguage::German => write!(f, "de"),
            TargetLanguage::French => write!(f, "fr"),
            TargetLanguage::Russian => write!(f, "ru"),
        }
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(TargetLanguage::English),
            "zh" | "chinese" | "中文" => Ok(TargetLanguage::Chinese),
            "ja" | "japanese" | "日本語" => Ok(TargetLanguage::Japanese),
            "ko" | "korean" | "한국어" => Ok(TargetLanguage::Korean),
            "de" | "german" | "deutsch" => Ok(TargetLanguage::German),
            "fr" | "french" | "français" => Ok(TargetLanguage::French),
            "ru" | "russian" | "русский" => Ok(TargetLanguage::Russian),
            _ => Err(format!("Unknown target language: {}", s)),
        }
    }
}

impl TargetLanguage {
    /// 获取语言的描述性名称
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::Chinese => "中文",
            TargetLanguage::Japanese => "日本語",
            TargetLanguage::Korean => "한국어",
            TargetLanguage::German => "Deutsch",
            TargetLanguage::French => "Français",
            TargetLanguage::Russian => "Русский",
        }
    }

    /// 附加到指南提示词末尾的语言指令
    pub fn guide_instruction(&self) -> &'static str {
        match self {
            TargetLanguage::English => {
                "Write the discussion guide in English, in a concise and professional tone."
            }
            TargetLanguage::Chinese => "请使用中文撰写这份讨论指南，语言简洁、专业。",
            TargetLanguage::Japanese => {
                "このディスカッションガイドは日本語で、簡潔かつプロフェッショナルな文体で作成してください。"
            }
            TargetLanguage::Korean => {
                "이 논의 가이드는 한국어로, 간결하고 전문적인 어조로 작성해 주세요."
            }
            TargetLanguage::German => {
                "Verfassen Sie den Gesprächsleitfaden auf Deutsch, knapp und professionell."
            }
            TargetLanguage::French => {
                "Rédigez le guide de discussion en français, de manière concise et professionnelle."
            }
            TargetLanguage::Russian => {
                "Напишите руководство для беседы на русском языке, кратко и профессионально."
            }
        }
    }
}
