// 三类纪要的条款顺序、分节与结束语

use super::clauses::{
    self, assessment, capacity_and_level, client_description, construction_content_trimmed,
    delivery_requirement, lead_and_roles, margin, other_risk, procurement_risk,
    procurement_text, ProcurementStyle, BUSINESS_TYPE_PLACEHOLDER, CONSTRUCTION_PLACEHOLDER,
    METHOD_PLACEHOLDER,
};
use super::core::{ClauseContext, ClauseFn, MinutesProfile, Section, SectionBody};
use crate::domain::fields;
use crate::domain::types::{BiddingMethod, MinutesKind};
use crate::engine::coercion::format_localized_date;

const ENTITY_PLACEHOLDER: &str = "【请选择投标主体】";
const OPENING_DATE_PLACEHOLDER: &str = "【请补充开标时间】";
const RESPONSE_DATE_PLACEHOLDER: &str = "【请补充应答时间】";
const AWARD_DATE_PLACEHOLDER: &str = "【请补充中标时间】";
const SIGNING_DATE_PLACEHOLDER: &str = "【请补充签约时间】";

const KICKOFF_HANDOVER: &str = "1、项目售前资料交底：销售经理、方案经理已对项目所有售前的会议纪要、客户沟通记录、客户需求及交付要求等资料交接给交付经理、项目经理；\n2、项目投标资料交底：销售经理、方案经理已对招标文件、投标文件、技术规范书等资料交接给交付经理、项目经理；\n3、项目实施计划交底：项目经理已完成项目里程碑计划，各关键节点已有明确的交付成果要求，铁三角已确认该时间节点可行；\n4、项目干系人交底：销售经理已上传项目干系人清单，清单已包含客户（签约客户/最终客户）以及合作伙伴干系人的名单和联系方式，铁三角对项目干系人已知晓。";

impl MinutesProfile {
    pub fn for_kind(kind: MinutesKind) -> Self {
        match kind {
            MinutesKind::Opportunity => opportunity_profile(),
            MinutesKind::Bidding => bidding_profile(),
            MinutesKind::Kickoff => kickoff_profile(),
        }
    }
}

// ==========================================
// 商机评估会
// ==========================================

fn opportunity_profile() -> MinutesProfile {
    MinutesProfile {
        kind: MinutesKind::Opportunity,
        prefix: fields::OPPORTUNITY_PREFIX,
        meeting_name: "商机评估会",
        sections: vec![Section {
            heading: None,
            body: SectionBody::Clauses(vec![
                opportunity_overview as ClauseFn,
                opportunity_organization,
                opportunity_finance,
                opportunity_project_risk,
                procurement_risk,
                cooperation_assessment,
                pre_investment_assessment,
                atomic_capability,
                other_risk,
            ]),
        }],
        closing: "综合评估各要素，铁三角成员评估跟进此商机。",
    }
}

fn opportunity_overview(ctx: &ClauseContext<'_>) -> String {
    format!(
        "本项目是{}，项目签约客户是{}项目建设内容为{}",
        ctx.value_or(fields::PROJECT_NAME, "【请补充项目名称】"),
        client_description(ctx),
        ctx.value_or(fields::CONSTRUCTION_CONTENT, CONSTRUCTION_PLACEHOLDER)
    )
}

fn opportunity_organization(ctx: &ClauseContext<'_>) -> String {
    format!(
        "本项目属于{}项目，{}",
        capacity_and_level(ctx),
        lead_and_roles(ctx)
    )
}

fn opportunity_finance(ctx: &ClauseContext<'_>) -> String {
    let style = ProcurementStyle {
        show_ratio: false,
        terminator: "，",
    };
    format!(
        "本项目预算{}万元（含税），{}毛利率预估{}%（不含税），利润率预估{}%（不含税）",
        clauses::budget_wan(ctx),
        procurement_text(ctx, style),
        margin(ctx, fields::GROSS_MARGIN),
        margin(ctx, fields::NET_MARGIN)
    )
}

fn opportunity_project_risk(ctx: &ClauseContext<'_>) -> String {
    format!(
        "本项目存在风险：\n{}",
        ctx.own_or(fields::PROJECT_RISK, "【请补充项目风险（商机）】")
    )
}

// ==========================================
// 投标评估会
// ==========================================

fn bidding_profile() -> MinutesProfile {
    MinutesProfile {
        kind: MinutesKind::Bidding,
        prefix: fields::BIDDING_PREFIX,
        meeting_name: "投标评估会",
        sections: vec![
            Section {
                heading: Some("一、项目基本信息"),
                body: SectionBody::Clauses(vec![
                    bidding_overview as ClauseFn,
                    bidding_organization,
                    bidding_finance,
                ]),
            },
            Section {
                heading: Some("二、风险及应对措施"),
                body: SectionBody::Clauses(vec![
                    bidding_risk as ClauseFn,
                    delivery_requirement,
                    procurement_risk,
                    cooperation_assessment,
                    maintenance_requirements,
                    security_assessment,
                    maintenance_assessment,
                    financial_assessment,
                    testing_requirements,
                    trial_run,
                    other_risk,
                ]),
            },
        ],
        closing: "三、会议结论\n综合评估各要素，铁三角评估可参与此项目投标，并根据内控审批权限作投标审批决策。",
    }
}

fn bidding_overview(ctx: &ClauseContext<'_>) -> String {
    format!(
        "本项目为{}项目，项目签约客户是{}客户计划采用{}。",
        ctx.own_or(fields::BUSINESS_TYPE, BUSINESS_TYPE_PLACEHOLDER),
        client_description(ctx),
        bidding_method_description(ctx)
    )
}

fn bidding_organization(ctx: &ClauseContext<'_>) -> String {
    format!(
        "项目建设内容为：{}。{}",
        construction_content_trimmed(ctx),
        lead_and_roles(ctx)
    )
}

fn bidding_finance(ctx: &ClauseContext<'_>) -> String {
    let style = ProcurementStyle {
        show_ratio: true,
        terminator: "，",
    };
    format!(
        "本项目预算{}万元（含税），属于{}项目，{}毛利率预估{}%（不含税）。",
        clauses::budget_wan(ctx),
        capacity_and_level(ctx),
        procurement_text(ctx, style),
        margin(ctx, fields::GROSS_MARGIN)
    )
}

/// 投标评估会的投标方式描述（只识别招标类与应答类）
fn bidding_method_description(ctx: &ClauseContext<'_>) -> String {
    let method = match BiddingMethod::parse(ctx.own(fields::BIDDING_METHOD)) {
        Some(m) => m,
        None => return METHOD_PLACEHOLDER.to_string(),
    };
    let entity = ctx.own_or(fields::BIDDING_ENTITY, ENTITY_PLACEHOLDER);

    if method.is_open_tender() {
        format!(
            "{}方式，拟以{}名义投标，开标时间为{}",
            method,
            entity,
            own_date(ctx, fields::BID_OPENING_DATE, OPENING_DATE_PLACEHOLDER)
        )
    } else if method.is_response_based() {
        format!(
            "{}方式，拟以{}名义应答，应答时间为{}",
            method,
            entity,
            own_date(ctx, fields::BID_RESPONSE_DATE, RESPONSE_DATE_PLACEHOLDER)
        )
    } else {
        method.label().to_string()
    }
}

/// 招投标风险：只有招标类方式才需要评估
fn bidding_risk(ctx: &ClauseContext<'_>) -> String {
    match BiddingMethod::parse(ctx.own(fields::BIDDING_METHOD)) {
        Some(m) if m.is_open_tender() => {
            ctx.own_or(fields::BIDDING_RISK, "【请补充招投标风险评估】")
        }
        Some(m) => format!("本项目客户采用{}方式，不涉及招投标风险", m),
        None => METHOD_PLACEHOLDER.to_string(),
    }
}

// ==========================================
// 项目交底会
// ==========================================

fn kickoff_profile() -> MinutesProfile {
    MinutesProfile {
        kind: MinutesKind::Kickoff,
        prefix: fields::KICKOFF_PREFIX,
        meeting_name: "项目交底会",
        sections: vec![
            Section {
                heading: Some("一、项目基本信息"),
                body: SectionBody::Clauses(vec![
                    kickoff_overview as ClauseFn,
                    kickoff_finance,
                    kickoff_organization,
                ]),
            },
            Section {
                heading: Some("二、项目文件交底"),
                body: SectionBody::Text(KICKOFF_HANDOVER),
            },
            Section {
                heading: Some("三、风险及应对举措"),
                body: SectionBody::Clauses(vec![
                    delivery_requirement as ClauseFn,
                    maintenance_requirements,
                    procurement_risk,
                    trial_run,
                    maintenance_assessment,
                    testing_requirements,
                    other_risk,
                ]),
            },
        ],
        closing: "四、其他参会部门意见\n公共架构评估师意见详见会议纪要中【公共架构结论】部分。\n五、会议结论\n项目铁三角对项目情况、项目角色分工、项目计划及里程碑节点、项目风险及问题解决方案等内容均已了解清晰，交底完成，请项目组尽快完成合同签约。",
    }
}

fn kickoff_overview(ctx: &ClauseContext<'_>) -> String {
    format!(
        "本项目为{}项目，项目签约客户是{}客户采用{}。",
        ctx.own_or(fields::BUSINESS_TYPE, BUSINESS_TYPE_PLACEHOLDER),
        client_description(ctx),
        kickoff_method_description(ctx)
    )
}

fn kickoff_finance(ctx: &ClauseContext<'_>) -> String {
    let style = ProcurementStyle {
        show_ratio: true,
        terminator: "。",
    };
    format!(
        "本项目预算{}万元（含税），{}",
        clauses::budget_wan(ctx),
        procurement_text(ctx, style)
    )
}

fn kickoff_organization(ctx: &ClauseContext<'_>) -> String {
    format!(
        "项目建设内容为：{}。本项目属于{}项目，{}",
        construction_content_trimmed(ctx),
        capacity_and_level(ctx),
        lead_and_roles(ctx)
    )
}

/// 项目交底会的签约方式描述（完整签约方式词表）
fn kickoff_method_description(ctx: &ClauseContext<'_>) -> String {
    let method = match BiddingMethod::parse(ctx.own(fields::BIDDING_METHOD)) {
        Some(m) => m,
        None => return METHOD_PLACEHOLDER.to_string(),
    };

    let open_date = own_date(ctx, fields::BID_OPENING_DATE, OPENING_DATE_PLACEHOLDER);
    let award_date = own_date(ctx, fields::AWARD_DATE, AWARD_DATE_PLACEHOLDER);
    let signing_date = own_date(ctx, fields::SIGNING_DATE, SIGNING_DATE_PLACEHOLDER);
    let response_date = own_date(ctx, fields::BID_RESPONSE_DATE, RESPONSE_DATE_PLACEHOLDER);

    match &method {
        BiddingMethod::PublicTender | BiddingMethod::InvitedTender | BiddingMethod::Comparison => {
            format!(
                "{}方式，开标时间为{}，中标时间为{}，计划{}前完成签约",
                method, open_date, award_date, signing_date
            )
        }
        BiddingMethod::SingleSource => format!(
            "{}方式，无需招投标，{}已完成应答，计划{}前完成签约",
            method, response_date, signing_date
        ),
        BiddingMethod::AtomicOrder | BiddingMethod::OrderBased => {
            format!("{}方式，预计客户在{}前完成下单", method, signing_date)
        }
        BiddingMethod::Inquiry | BiddingMethod::CompetitiveNegotiation => format!(
            "{}方式，{}已完成应答，预计客户在{}前完成签约",
            method, response_date, signing_date
        ),
        BiddingMethod::ECommerce | BiddingMethod::DirectPurchase => {
            format!("{}方式，预计客户在{}前完成签约", method, signing_date)
        }
        BiddingMethod::Other(raw) => raw.clone(),
    }
}

/// 前缀日期字段，中文日期格式；未填写时使用占位符
fn own_date(ctx: &ClauseContext<'_>, suffix: &str, placeholder: &str) -> String {
    ctx.own(suffix)
        .map(format_localized_date)
        .unwrap_or_else(|| placeholder.to_string())
}

// ==========================================
// 单字段条款
// ==========================================

fn cooperation_assessment(ctx: &ClauseContext<'_>) -> String {
    assessment(ctx, &clauses::COOPERATION)
}

fn pre_investment_assessment(ctx: &ClauseContext<'_>) -> String {
    assessment(ctx, &clauses::PRE_INVESTMENT)
}

fn security_assessment(ctx: &ClauseContext<'_>) -> String {
    assessment(ctx, &clauses::SECURITY)
}

fn atomic_capability(ctx: &ClauseContext<'_>) -> String {
    ctx.own_or(fields::ATOMIC_CAPABILITY, "【请补充原子能力评估】")
}

fn maintenance_requirements(ctx: &ClauseContext<'_>) -> String {
    ctx.own_or(fields::MAINTENANCE_REQUIREMENTS, "【请补充运维要求】")
}

fn maintenance_assessment(ctx: &ClauseContext<'_>) -> String {
    ctx.own_or(fields::MAINTENANCE_ASSESSMENT, "【请补充运维服务评估意见】")
}

fn financial_assessment(ctx: &ClauseContext<'_>) -> String {
    ctx.own_or(fields::FINANCIAL_ASSESSMENT, "【请补充财务评估】")
}

fn testing_requirements(ctx: &ClauseContext<'_>) -> String {
    ctx.own_or(fields::TESTING_REQUIREMENTS, "【请补充等保测评、第三方测评要求】")
}

fn trial_run(ctx: &ClauseContext<'_>) -> String {
    ctx.own_or(fields::TRIAL_RUN, "【请补充试运行情况】")
}
