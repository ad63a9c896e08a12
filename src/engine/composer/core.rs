use crate::domain::delivery::DeliveryTable;
use crate::domain::fields;
use crate::domain::record::{FieldRecord, ProjectForm};
use crate::domain::types::MinutesKind;
use crate::engine::coercion::ensure_terminal_period;
use crate::engine::common_fields::{CommonFields, CommonFieldsCalculator};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

const PROJECT_NAME_PLACEHOLDER: &str = "【请补充项目名称】";
const BUSINESS_CODE_PLACEHOLDER: &str = "【请补充项目商机编码】";

// ==========================================
// ClauseContext - 条款求值上下文
// ==========================================
// 一次生成内不可变：原始字段 + 公共派生字段 + 当前文档前缀
pub struct ClauseContext<'a> {
    pub record: &'a FieldRecord,
    pub common: &'a CommonFields,
    pub prefix: &'static str,
}

impl<'a> ClauseContext<'a> {
    /// 共享字段（trim 后非空）
    pub fn value(&self, key: &str) -> Option<&'a str> {
        self.record.text(key)
    }

    /// 共享字段，缺失时使用占位符
    pub fn value_or(&self, key: &str, placeholder: &str) -> String {
        self.value(key).unwrap_or(placeholder).to_string()
    }

    /// 本文档前缀字段（trim 后非空）
    pub fn own(&self, suffix: &str) -> Option<&'a str> {
        self.record.text(&fields::prefixed(self.prefix, suffix))
    }

    /// 本文档前缀字段，缺失时使用占位符
    pub fn own_or(&self, suffix: &str, placeholder: &str) -> String {
        self.own(suffix).unwrap_or(placeholder).to_string()
    }
}

/// 条款求值函数；返回空串（trim 后）表示该条款不输出
pub type ClauseFn = fn(&ClauseContext<'_>) -> String;

// ==========================================
// MinutesProfile - 单类纪要的拼装配置
// ==========================================
pub enum SectionBody {
    /// 逐条求值，空条款跳过，非空条款从 1 连续编号
    Clauses(Vec<ClauseFn>),
    /// 固定文本，原样输出
    Text(&'static str),
}

pub struct Section {
    pub heading: Option<&'static str>,
    pub body: SectionBody,
}

pub struct MinutesProfile {
    pub kind: MinutesKind,
    /// 读取的字段前缀（SJ_ / TB_ / JD_）
    pub prefix: &'static str,
    /// 标题下方的会议名称
    pub meeting_name: &'static str,
    pub sections: Vec<Section>,
    /// 固定结束语
    pub closing: &'static str,
}

// ==========================================
// MinutesDocument - 生成结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinutesDocument {
    pub kind: MinutesKind,
    pub title: String,
    pub text: String,
}

impl fmt::Display for MinutesDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// ==========================================
// MinutesComposer - 纪要拼装器
// ==========================================
pub struct MinutesComposer;

impl MinutesComposer {
    /// 按纪要类型生成
    pub fn compose(kind: MinutesKind, form: &ProjectForm) -> MinutesDocument {
        let profile = MinutesProfile::for_kind(kind);
        Self::compose_with(&profile, &form.fields, &form.delivery)
    }

    /// 按给定配置生成
    #[instrument(skip_all, fields(kind = %profile.kind))]
    pub fn compose_with(
        profile: &MinutesProfile,
        record: &FieldRecord,
        delivery: &DeliveryTable,
    ) -> MinutesDocument {
        let common = CommonFieldsCalculator::compute(record, delivery);
        let ctx = ClauseContext {
            record,
            common: &common,
            prefix: profile.prefix,
        };

        let project_name = ctx.value_or(fields::PROJECT_NAME, PROJECT_NAME_PLACEHOLDER);
        let business_code = ctx.value_or(fields::BUSINESS_CODE, BUSINESS_CODE_PLACEHOLDER);

        let mut output = format!(
            "{}（{}）\n\n{}\n",
            project_name, business_code, profile.meeting_name
        );

        for section in &profile.sections {
            if let Some(heading) = section.heading {
                output.push_str(heading);
                output.push('\n');
            }
            match &section.body {
                SectionBody::Clauses(clauses) => {
                    let emitted = push_numbered(&mut output, clauses, &ctx);
                    debug!(heading = section.heading.unwrap_or(""), emitted, "条款输出");
                }
                SectionBody::Text(text) => {
                    output.push_str(text);
                    output.push('\n');
                }
            }
        }

        output.push_str(profile.closing);

        MinutesDocument {
            kind: profile.kind,
            title: profile.kind.title().to_string(),
            text: output,
        }
    }
}

/// 输出编号条款，返回实际输出条数
fn push_numbered(output: &mut String, clauses: &[ClauseFn], ctx: &ClauseContext<'_>) -> usize {
    let mut counter = 0;
    for clause in clauses {
        let text = ensure_terminal_period(&clause(ctx));
        if text.is_empty() {
            continue;
        }
        counter += 1;
        output.push_str(&format!("{}、{}\n", counter, text));
    }
    counter
}
