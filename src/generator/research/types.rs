use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

/// 调研记录各段之间、以及调研记录与指南之间的分隔行
pub const SECTION_SEPARATOR: &str = "\n--------------\n";

/// 单个问题的回答，键为未填入公司名的原始模板
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
    pub template: String,
    pub answer: String,
}

/// 一个问题组的结果：原始模板 -> 已渲染引用的回答
#[derive(Debug, Clone, PartialEq)]
pub struct GroupResult {
    pub title: String,
    pub answers: Vec<AnsweredQuestion>,
}

impl GroupResult {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            answers: vec![],
        }
    }

    /// 模板在组内唯一，重复插入时覆盖旧值
    pub fn insert(&mut self, template: impl Into<String>, answer: impl Into<String>) {
        let template = template.into();
        let answer = answer.into();
        match self.answers.iter_mut().find(|a| a.template == template) {
            Some(existing) => existing.answer = answer,
            None => self.answers.push(AnsweredQuestion { template, answer }),
        }
    }

    /// 序列化为四空格缩进的JSON对象，非ASCII字符转义为`\uXXXX`
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
        self.serialize(&mut serializer)?;
        // 输出只含ASCII
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for GroupResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.answers.len()))?;
        for answered in &self.answers {
            map.serialize_entry(&answered.template, &answered.answer)?;
        }
        map.end()
    }
}

/// 四空格缩进，且把`~`之后的字符写成`\uXXXX`（BMP之外用代理对）
struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"    "),
        }
    }
}

impl Formatter for AsciiPrettyFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (offset, ch) in fragment.char_indices() {
            if ch <= '~' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..offset])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = offset + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// 被跳过的问题组
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFailure {
    pub title: String,
    pub error: String,
}

/// 一次调研的全部结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResearchReport {
    /// 成功的问题组，按目录顺序
    pub groups: Vec<GroupResult>,
    pub failures: Vec<GroupFailure>,
}

impl ResearchReport {
    /// 生成调研记录：各组JSON按顺序以分隔行拼接
    pub fn transcript(&self) -> serde_json::Result<AggregateTranscript> {
        let sections = self
            .groups
            .iter()
            .map(GroupResult::to_pretty_json)
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(AggregateTranscript { sections })
    }
}

/// 汇总后的调研记录
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateTranscript {
    pub sections: Vec<String>,
}

impl AggregateTranscript {
    pub fn text(&self) -> String {
        self.sections.join(SECTION_SEPARATOR)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
