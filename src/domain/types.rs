// ==========================================
// 项目会议纪要助手 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 是/否 三态标志
// ==========================================
// 表单下拉框: "是" / "否" / 未选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,   // 是
    No,    // 否
    Unset, // 未选择
}

impl YesNo {
    /// 精确匹配 "是"/"否"，其余（含空白）均视为未选择
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("是") => YesNo::Yes,
            Some("否") => YesNo::No,
            _ => YesNo::Unset,
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => write!(f, "是"),
            YesNo::No => write!(f, "否"),
            YesNo::Unset => write!(f, ""),
        }
    }
}

// ==========================================
// 产能类型
// ==========================================
pub const SINGLE_CAPACITY: &str = "单产能";

// ==========================================
// 投标/签约方式 (Bidding Method)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiddingMethod {
    PublicTender,           // 公开招标
    InvitedTender,          // 邀请招标
    Comparison,             // 比选
    SingleSource,           // 单一来源
    Inquiry,                // 询价
    CompetitiveNegotiation, // 竞争性谈判
    AtomicOrder,            // 原子能力下单
    OrderBased,             // 订单方式
    ECommerce,              // 电商采购
    DirectPurchase,         // 直接采购
    Other(String),          // 未识别，原样输出
}

/// 投标评估会可选的投标方式
pub const BIDDING_REVIEW_METHODS: [&str; 6] =
    ["公开招标", "邀请招标", "比选", "单一来源", "询价", "竞争性谈判"];

/// 项目交底会可选的签约方式
pub const KICKOFF_METHODS: [&str; 10] = [
    "公开招标",
    "邀请招标",
    "比选",
    "单一来源",
    "询价",
    "竞争性谈判",
    "原子能力下单",
    "订单方式",
    "电商采购",
    "直接采购",
];

impl BiddingMethod {
    /// 解析方式字段
    ///
    /// # 返回
    /// - None: 字段缺失或为空白
    /// - Some(Other): 非枚举值，保留原文
    pub fn parse(value: Option<&str>) -> Option<Self> {
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;
        Some(match value {
            "公开招标" => BiddingMethod::PublicTender,
            "邀请招标" => BiddingMethod::InvitedTender,
            "比选" => BiddingMethod::Comparison,
            "单一来源" => BiddingMethod::SingleSource,
            "询价" => BiddingMethod::Inquiry,
            "竞争性谈判" => BiddingMethod::CompetitiveNegotiation,
            "原子能力下单" => BiddingMethod::AtomicOrder,
            "订单方式" => BiddingMethod::OrderBased,
            "电商采购" => BiddingMethod::ECommerce,
            "直接采购" => BiddingMethod::DirectPurchase,
            other => BiddingMethod::Other(other.to_string()),
        })
    }

    pub fn label(&self) -> &str {
        match self {
            BiddingMethod::PublicTender => "公开招标",
            BiddingMethod::InvitedTender => "邀请招标",
            BiddingMethod::Comparison => "比选",
            BiddingMethod::SingleSource => "单一来源",
            BiddingMethod::Inquiry => "询价",
            BiddingMethod::CompetitiveNegotiation => "竞争性谈判",
            BiddingMethod::AtomicOrder => "原子能力下单",
            BiddingMethod::OrderBased => "订单方式",
            BiddingMethod::ECommerce => "电商采购",
            BiddingMethod::DirectPurchase => "直接采购",
            BiddingMethod::Other(raw) => raw,
        }
    }

    /// 招标类（需要开标，存在招投标风险）
    pub fn is_open_tender(&self) -> bool {
        matches!(
            self,
            BiddingMethod::PublicTender | BiddingMethod::InvitedTender | BiddingMethod::Comparison
        )
    }

    /// 应答类（单一来源/询价/竞争性谈判）
    pub fn is_response_based(&self) -> bool {
        matches!(
            self,
            BiddingMethod::SingleSource
                | BiddingMethod::Inquiry
                | BiddingMethod::CompetitiveNegotiation
        )
    }
}

impl fmt::Display for BiddingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 纪要类型 (Minutes Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinutesKind {
    Opportunity, // 商机评估会
    Bidding,     // 投标评估会
    Kickoff,     // 项目交底会
}

impl MinutesKind {
    pub const ALL: [MinutesKind; 3] = [
        MinutesKind::Opportunity,
        MinutesKind::Bidding,
        MinutesKind::Kickoff,
    ];

    /// 对话框标题
    pub fn title(&self) -> &'static str {
        match self {
            MinutesKind::Opportunity => "商机评估会纪要",
            MinutesKind::Bidding => "投标评估会纪要",
            MinutesKind::Kickoff => "项目交底会纪要",
        }
    }

    /// 解析命令行/接口参数（英文标识或中文会议名）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "opportunity" | "商机评估会" => Some(MinutesKind::Opportunity),
            "bidding" | "投标评估会" => Some(MinutesKind::Bidding),
            "kickoff" | "项目交底会" => Some(MinutesKind::Kickoff),
            _ => None,
        }
    }
}

impl fmt::Display for MinutesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinutesKind::Opportunity => write!(f, "opportunity"),
            MinutesKind::Bidding => write!(f, "bidding"),
            MinutesKind::Kickoff => write!(f, "kickoff"),
        }
    }
}
