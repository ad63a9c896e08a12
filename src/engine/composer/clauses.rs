// 三类纪要共用的条款片段

use super::core::ClauseContext;
use crate::domain::fields;
use crate::domain::types::YesNo;
use crate::engine::coercion::{fixed2, percent2, to_float};

pub(super) const CONSTRUCTION_PLACEHOLDER: &str = "【请补充建设内容】";
pub(super) const CAPACITY_PLACEHOLDER: &str = "【请选择产能能力】";
pub(super) const LEVEL_PLACEHOLDER: &str = "【请选择项目级别】";
pub(super) const BUSINESS_TYPE_PLACEHOLDER: &str = "【请补充业务类型】";
pub(super) const METHOD_PLACEHOLDER: &str = "【请选择投标方式】";

const CLIENT_PLACEHOLDER: &str = "【请补充签约客户】";
const PROCUREMENT_UNSET: &str = "【请选择是否后向外采】";

/// 外采金额句式差异
#[derive(Debug, Clone, Copy)]
pub struct ProcurementStyle {
    /// 是否输出外采占比
    pub show_ratio: bool,
    /// 句尾标点（"，" 续接后文 / "。" 收尾）
    pub terminator: &'static str,
}

/// 签约客户描述，已自带句号
///
/// 最终客户为空或与签约客户相同时不输出最终客户
pub(super) fn client_description(ctx: &ClauseContext<'_>) -> String {
    let client = match ctx.value(fields::CONTRACT_CLIENT) {
        Some(c) => c,
        None => return CLIENT_PLACEHOLDER.to_string(),
    };
    match ctx.value(fields::END_CLIENT) {
        Some(end) if end != client => format!("{}，最终客户是{}。", client, end),
        _ => format!("{}。", client),
    }
}

/// 建设内容，去掉一个末尾全角句号（由外层句子补句号）
pub(super) fn construction_content_trimmed(ctx: &ClauseContext<'_>) -> String {
    let content = ctx.value_or(fields::CONSTRUCTION_CONTENT, CONSTRUCTION_PLACEHOLDER);
    match content.strip_suffix('。') {
        Some(stripped) => stripped.to_string(),
        None => content,
    }
}

/// 产能能力 + 项目级别，例: "多产能A类"
pub(super) fn capacity_and_level(ctx: &ClauseContext<'_>) -> String {
    format!(
        "{}{}",
        ctx.value_or(fields::CAPACITY_TYPE, CAPACITY_PLACEHOLDER),
        ctx.value_or(fields::PROJECT_LEVEL, LEVEL_PLACEHOLDER)
    )
}

/// 牵头事业部 + 协助事业部 + 铁三角 + 交付明细
pub(super) fn lead_and_roles(ctx: &ClauseContext<'_>) -> String {
    let common = ctx.common;
    format!(
        "由{}牵头，{}{}{}",
        common.lead_department,
        common.assist_departments_text,
        common.role_summary_text,
        common.delivery_detail_text
    )
}

pub(super) fn budget_wan(ctx: &ClauseContext<'_>) -> String {
    fixed2(ctx.common.budget_wan)
}

/// 毛利率/利润率等百分数字段，非数字按 0 处理
pub(super) fn margin(ctx: &ClauseContext<'_>, suffix: &str) -> String {
    fixed2(to_float(ctx.own(suffix)))
}

/// 是否外采 三态句式
pub(super) fn procurement_text(ctx: &ClauseContext<'_>, style: ProcurementStyle) -> String {
    match YesNo::parse(ctx.value(fields::PROCUREMENT)) {
        YesNo::Yes => {
            let mut parts = vec![
                "涉及外采".to_string(),
                format!("外采预算{}万元（含税）", fixed2(ctx.common.procurement_wan)),
            ];
            if style.show_ratio {
                parts.push(format!("外采占比{}", percent2(ctx.common.procurement_ratio)));
            }
            format!("{}{}", parts.join("，"), style.terminator)
        }
        YesNo::No => format!("不涉及外采{}", style.terminator),
        YesNo::Unset => format!("{}{}", PROCUREMENT_UNSET, style.terminator),
    }
}

/// 外采风险条款
pub(super) fn procurement_risk(ctx: &ClauseContext<'_>) -> String {
    match YesNo::parse(ctx.value(fields::PROCUREMENT)) {
        YesNo::Yes => ctx.value_or(fields::PROCUREMENT_RISK, "【请补充外采风险】"),
        YesNo::No => "本项目不涉及外采".to_string(),
        YesNo::Unset => "【请评估是否涉及外采】".to_string(),
    }
}

/// 条件评估项：标志为"是"取评估内容，"否"取固定不涉及句，未选择取评估占位符
pub(super) struct Assessment {
    pub flag: &'static str,
    pub detail: &'static str,
    pub detail_placeholder: &'static str,
    pub not_applicable: &'static str,
    pub unset: &'static str,
}

pub(super) fn assessment(ctx: &ClauseContext<'_>, item: &Assessment) -> String {
    match YesNo::parse(ctx.own(item.flag)) {
        YesNo::Yes => ctx.own_or(item.detail, item.detail_placeholder),
        YesNo::No => item.not_applicable.to_string(),
        YesNo::Unset => item.unset.to_string(),
    }
}

pub(super) const COOPERATION: Assessment = Assessment {
    flag: fields::COOPERATION_NEEDED,
    detail: fields::COOPERATION_ASSESSMENT,
    detail_placeholder: "【请补充项目合作评估】",
    not_applicable: "本项目不涉及项目合作",
    unset: "【请评估是否项目合作】",
};

pub(super) const PRE_INVESTMENT: Assessment = Assessment {
    flag: fields::PRE_INVESTMENT_NEEDED,
    detail: fields::PRE_INVESTMENT_DETAILS,
    detail_placeholder: "【请补充预投入情况】",
    not_applicable: "本项目不涉及预投入情况",
    unset: "【请评估是否涉及预投入】",
};

pub(super) const SECURITY: Assessment = Assessment {
    flag: fields::IS_PRIMARY_SYSTEM,
    detail: fields::SECURITY_ASSESSMENT,
    detail_placeholder: "【请补充网络和信息安全评估】",
    not_applicable: "本项目不涉及亿迅主责系统",
    unset: "【请评估是否亿迅主责系统】",
};

/// 交付要求条款（投标/交底共用）
pub(super) fn delivery_requirement(ctx: &ClauseContext<'_>) -> String {
    format!(
        "本项目交付要求：交付周期为{}，{}",
        ctx.own_or(fields::DELIVERY_PERIOD, "【请补充交付周期】"),
        ctx.own_or(fields::DELIVERY_RISK, "【请补充交付风险】")
    )
}

/// 其他风险，未填写时条款为空（不编号）
pub(super) fn other_risk(ctx: &ClauseContext<'_>) -> String {
    ctx.value(fields::OTHER_RISK).unwrap_or("").to_string()
}
