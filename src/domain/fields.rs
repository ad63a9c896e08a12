// ==========================================
// 项目会议纪要助手 - 表单字段标识
// ==========================================
// 职责: 统一维护表单字段 ID（与导入/导出 JSON 的键一致）
// 约定: SJ_ = 商机评估会, TB_ = 投标评估会, JD_ = 项目交底会
// ==========================================

// ===== 共享字段 =====
pub const PROJECT_NAME: &str = "projectName";
pub const BUSINESS_CODE: &str = "businessCode";
pub const CONTRACT_CLIENT: &str = "contractClient";
pub const END_CLIENT: &str = "endClient";
pub const CONSTRUCTION_CONTENT: &str = "constructionContent";
pub const CAPACITY_TYPE: &str = "capacityType";
pub const PROJECT_LEVEL: &str = "projectLevel";
pub const BUDGET_AMOUNT: &str = "budgetAmount";
pub const PROCUREMENT: &str = "procurement";
pub const PROCUREMENT_AMOUNT: &str = "procurementAmount";
pub const PROCUREMENT_RISK: &str = "procurementRisk";
pub const IRON_TRIANGLE: &str = "ironTriangleInput";
pub const OTHER_RISK: &str = "OT_risk";

// ===== 文档前缀 =====
pub const OPPORTUNITY_PREFIX: &str = "SJ_";
pub const BIDDING_PREFIX: &str = "TB_";
pub const KICKOFF_PREFIX: &str = "JD_";

// ===== 带前缀字段的后缀部分 =====
pub const PROJECT_RISK: &str = "projectRisk";
pub const GROSS_MARGIN: &str = "grossMargin";
pub const NET_MARGIN: &str = "netMargin";
pub const COOPERATION_NEEDED: &str = "projectCooperationNeeded";
pub const COOPERATION_ASSESSMENT: &str = "projectCooperationAssessment";
pub const PRE_INVESTMENT_NEEDED: &str = "preInvestmentNeeded";
pub const PRE_INVESTMENT_DETAILS: &str = "preInvestmentDetails";
pub const ATOMIC_CAPABILITY: &str = "atomicCapability";
pub const BUSINESS_TYPE: &str = "businessType";
pub const BIDDING_METHOD: &str = "biddingMethod";
pub const BIDDING_ENTITY: &str = "biddingEntity";
pub const BID_OPENING_DATE: &str = "bidOpeningDate";
pub const BID_RESPONSE_DATE: &str = "bidResponseDate";
pub const AWARD_DATE: &str = "awardDate";
pub const SIGNING_DATE: &str = "signingDate";
pub const BIDDING_RISK: &str = "biddingRisk";
pub const DELIVERY_PERIOD: &str = "deliveryPeriod";
pub const DELIVERY_RISK: &str = "deliveryRisk";
pub const MAINTENANCE_REQUIREMENTS: &str = "maintenanceRequirements";
pub const MAINTENANCE_ASSESSMENT: &str = "maintenanceAssessment";
pub const FINANCIAL_ASSESSMENT: &str = "financialAssessment";
pub const TESTING_REQUIREMENTS: &str = "testingRequirements";
pub const TRIAL_RUN: &str = "trialRun";
pub const IS_PRIMARY_SYSTEM: &str = "isPrimarySystem";
pub const SECURITY_ASSESSMENT: &str = "securityAssessment";

/// 拼接带文档前缀的字段 ID
///
/// # 示例
/// ```
/// use meeting_minutes::domain::fields;
/// assert_eq!(fields::prefixed("TB_", fields::GROSS_MARGIN), "TB_grossMargin");
/// ```
pub fn prefixed(prefix: &str, suffix: &str) -> String {
    format!("{}{}", prefix, suffix)
}

/// 交付明细表在导出 JSON 中的键
pub const DELIVERY_DETAILS: &str = "deliveryDetails";
