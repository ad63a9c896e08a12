// ==========================================
// 项目会议纪要助手 - 粘贴结果后处理
// ==========================================
// 职责: 把识别出的原文清洗为表单字段值
// 红线: 只输出需要写入的字段，调用方按字段合并，不得清空未出现的字段
// ==========================================

use crate::domain::fields::{self, BIDDING_PREFIX, KICKOFF_PREFIX, OPPORTUNITY_PREFIX};
use crate::domain::roles::{DELIVERY_MANAGER, PROJECT_MANAGER, SALES_MANAGER, SOLUTION_MANAGER};
use crate::domain::types::{BIDDING_REVIEW_METHODS, KICKOFF_METHODS};
use crate::domain::{FieldRecord, YesNo};
use crate::importer::paste_extractor::{PasteField, ParsedPaste};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// 商机编号截断点：空白、"合同编号"、"项目类型"
static CODE_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+|合同编号|项目类型").expect("CODE_TERMINATOR regex should compile")
});

/// 带千分位逗号的金额
static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*(\.\d+)?").expect("AMOUNT regex should compile"));

static SIGNED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(\.\d+)?").expect("SIGNED_NUMBER regex should compile"));

// ==========================================
// FormPatch - 待合并的稀疏记录
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormPatch {
    pub record: FieldRecord,
    /// 成功填充的项数（铁三角整体计 1 项）
    pub filled: usize,
}

impl FormPatch {
    fn put(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.record.set(key, value);
        self.filled += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }
}

pub struct PatchBuilder;

impl PatchBuilder {
    #[instrument(skip_all, fields(captured = parsed.len()))]
    pub fn build(parsed: &ParsedPaste) -> FormPatch {
        let mut patch = FormPatch::default();

        patch.put(fields::PROJECT_NAME, parsed.get(PasteField::ProjectName).unwrap_or(""));
        if let Some(code) = parsed.get(PasteField::BusinessCode) {
            patch.put(fields::BUSINESS_CODE, &clean_business_code(code));
        }
        patch.put(fields::CONTRACT_CLIENT, parsed.get(PasteField::Client).unwrap_or(""));
        patch.put(fields::CONSTRUCTION_CONTENT, parsed.get(PasteField::Content).unwrap_or(""));

        if let Some(budget) = parsed.get(PasteField::Budget).and_then(clean_amount) {
            patch.put(fields::BUDGET_AMOUNT, &budget);
        }

        patch.put(fields::PROJECT_LEVEL, parsed.get(PasteField::Level).unwrap_or(""));
        patch.put(fields::CAPACITY_TYPE, parsed.get(PasteField::CapacityType).unwrap_or(""));

        Self::apply_procurement(parsed, &mut patch);
        Self::apply_margins(parsed, &mut patch);

        if let Some(method) = parsed.get(PasteField::BiddingMethod) {
            if let Some(option) = fuzzy_option(method, &BIDDING_REVIEW_METHODS) {
                patch.put(&fields::prefixed(BIDDING_PREFIX, fields::BIDDING_METHOD), option);
            }
            if let Some(option) = fuzzy_option(method, &KICKOFF_METHODS) {
                patch.put(&fields::prefixed(KICKOFF_PREFIX, fields::BIDDING_METHOD), option);
            }
        }
        patch.put(
            &fields::prefixed(BIDDING_PREFIX, fields::BIDDING_ENTITY),
            parsed.get(PasteField::BiddingEntity).unwrap_or(""),
        );
        if let Some(business_type) = parsed.get(PasteField::BusinessType) {
            patch.put(&fields::prefixed(KICKOFF_PREFIX, fields::BUSINESS_TYPE), business_type);
            patch.put(&fields::prefixed(BIDDING_PREFIX, fields::BUSINESS_TYPE), business_type);
        }
        if let Some(duration) = parsed.get(PasteField::Duration) {
            patch.put(&fields::prefixed(KICKOFF_PREFIX, fields::DELIVERY_PERIOD), duration);
            patch.put(&fields::prefixed(BIDDING_PREFIX, fields::DELIVERY_PERIOD), duration);
        }

        if let Some(text) = iron_triangle_text(parsed) {
            patch.put(fields::IRON_TRIANGLE, &text);
        }

        debug!(filled = patch.filled, "粘贴结果已转换为表单字段");
        patch
    }

    /// 外部采购预算优先：大于 0 视为涉及外采，否则视为不涉及；缺失时才采用原始是否外采
    fn apply_procurement(parsed: &ParsedPaste, patch: &mut FormPatch) {
        match parsed.get(PasteField::ExtBudget) {
            Some(raw) => {
                let Some(amount) = clean_amount(raw) else {
                    return;
                };
                let value = amount.parse::<f64>().unwrap_or(0.0);
                if value > 0.0 {
                    patch.put(fields::PROCUREMENT, "是");
                    patch.put(fields::PROCUREMENT_AMOUNT, &value.to_string());
                    patch.put(
                        fields::PROCUREMENT_RISK,
                        parsed.get(PasteField::ProcurementSituation).unwrap_or(""),
                    );
                } else {
                    patch.put(fields::PROCUREMENT, "否");
                }
            }
            None => {
                let flag = YesNo::parse(parsed.get(PasteField::Procurement));
                patch.put(fields::PROCUREMENT, &flag.to_string());
            }
        }
    }

    fn apply_margins(parsed: &ParsedPaste, patch: &mut FormPatch) {
        if let Some(gross) = parsed.get(PasteField::GrossMargin).and_then(first_number) {
            patch.put(&fields::prefixed(OPPORTUNITY_PREFIX, fields::GROSS_MARGIN), gross);
            patch.put(&fields::prefixed(BIDDING_PREFIX, fields::GROSS_MARGIN), gross);
        }
        if let Some(net) = parsed.get(PasteField::NetMargin).and_then(first_number) {
            patch.put(&fields::prefixed(OPPORTUNITY_PREFIX, fields::NET_MARGIN), net);
        }
    }
}

/// 截取商机编号首段，去掉粘连的后续字段
pub fn clean_business_code(raw: &str) -> String {
    CODE_TERMINATOR
        .split(raw)
        .next()
        .unwrap_or_default()
        .to_string()
}

/// 提取首个金额并去掉千分位逗号
///
/// # 返回
/// - None: 文本中没有金额
pub fn clean_amount(raw: &str) -> Option<String> {
    let amount = AMOUNT.find(raw)?.as_str().replace(',', "");
    (!amount.is_empty()).then_some(amount)
}

fn first_number(raw: &str) -> Option<&str> {
    SIGNED_NUMBER.find(raw).map(|m| m.as_str())
}

/// 下拉选项模糊匹配：选项与原文互相包含即命中，取第一个
pub fn fuzzy_option<'o>(raw: &str, options: &[&'o str]) -> Option<&'o str> {
    options
        .iter()
        .find(|opt| raw.contains(**opt) || opt.contains(raw))
        .copied()
}

/// 四个角色任一识别到时，按固定顺序重组铁三角文本
fn iron_triangle_text(parsed: &ParsedPaste) -> Option<String> {
    let roles = [
        (PROJECT_MANAGER, PasteField::ProjectManager),
        (SALES_MANAGER, PasteField::SalesManager),
        (SOLUTION_MANAGER, PasteField::SolutionManager),
        (DELIVERY_MANAGER, PasteField::DeliveryManager),
    ];
    if !roles.iter().any(|(_, field)| parsed.contains(*field)) {
        return None;
    }
    let lines: Vec<String> = roles
        .iter()
        .map(|(title, field)| format!("{}：{}", title, parsed.get(*field).unwrap_or("")))
        .collect();
    Some(lines.join("\n"))
}
