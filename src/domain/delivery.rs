// ==========================================
// 项目会议纪要助手 - 交付明细表
// ==========================================
// 职责: 牵头/协助交付事业部明细（固定 1 + 7 行）
// 导出键: 类型 / 事业部 / 项目经理 / 交付内容 / 预算（万元）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 协助交付事业部行数
pub const ASSIST_ROW_COUNT: u8 = 7;

const LEAD_LABEL: &str = "牵头交付事业部";
const ASSIST_LABEL_PREFIX: &str = "协助交付事业部";

// ==========================================
// 交付角色 (Delivery Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeliveryRole {
    Lead,       // 牵头交付事业部
    Assist(u8), // 协助交付事业部N (1 起)
}

impl DeliveryRole {
    pub fn is_lead(&self) -> bool {
        matches!(self, DeliveryRole::Lead)
    }

    /// 交付明细中经理称谓
    pub fn manager_title(&self) -> &'static str {
        match self {
            DeliveryRole::Lead => "项目经理",
            DeliveryRole::Assist(_) => "子项目经理",
        }
    }
}

impl fmt::Display for DeliveryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryRole::Lead => write!(f, "{}", LEAD_LABEL),
            DeliveryRole::Assist(n) => write!(f, "{}{}", ASSIST_LABEL_PREFIX, n),
        }
    }
}

impl TryFrom<String> for DeliveryRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let label = value.trim();
        if label == LEAD_LABEL {
            return Ok(DeliveryRole::Lead);
        }
        label
            .strip_prefix(ASSIST_LABEL_PREFIX)
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=ASSIST_ROW_COUNT).contains(n))
            .map(DeliveryRole::Assist)
            .ok_or_else(|| format!("未知的交付类型: {}", value))
    }
}

impl From<DeliveryRole> for String {
    fn from(role: DeliveryRole) -> Self {
        role.to_string()
    }
}

// ==========================================
// DeliveryDetailRow - 交付明细行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDetailRow {
    #[serde(rename = "类型")]
    pub role: DeliveryRole,

    #[serde(rename = "事业部", default)]
    pub department: String,

    #[serde(rename = "项目经理", default)]
    pub manager: String,

    #[serde(rename = "交付内容", default)]
    pub deliverable: String,

    #[serde(rename = "预算（万元）", default)]
    pub budget_wan: String,
}

impl DeliveryDetailRow {
    pub fn blank(role: DeliveryRole) -> Self {
        Self {
            role,
            department: String::new(),
            manager: String::new(),
            deliverable: String::new(),
            budget_wan: String::new(),
        }
    }

    /// 事业部已选择（参与汇总）
    pub fn has_department(&self) -> bool {
        !self.department.trim().is_empty()
    }
}

// ==========================================
// DeliveryTable - 固定长度的交付明细表
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryTable {
    rows: Vec<DeliveryDetailRow>,
}

impl DeliveryTable {
    /// 标准空表：牵头 1 行 + 协助 7 行
    pub fn standard() -> Self {
        let rows = std::iter::once(DeliveryRole::Lead)
            .chain((1..=ASSIST_ROW_COUNT).map(DeliveryRole::Assist))
            .map(DeliveryDetailRow::blank)
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[DeliveryDetailRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按位置取可写行（超出固定长度返回 None）
    pub fn row_mut(&mut self, index: usize) -> Option<&mut DeliveryDetailRow> {
        self.rows.get_mut(index)
    }

    /// 按交付角色取可写行
    pub fn row_for_mut(&mut self, role: DeliveryRole) -> Option<&mut DeliveryDetailRow> {
        self.rows.iter_mut().find(|r| r.role == role)
    }

    /// 已选择事业部的行（保持表内顺序）
    pub fn filled_rows(&self) -> impl Iterator<Item = &DeliveryDetailRow> {
        self.rows.iter().filter(|r| r.has_department())
    }

    /// 清空所有行内容，保留行类型
    pub fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            *row = DeliveryDetailRow::blank(row.role);
        }
    }
}

impl Default for DeliveryTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_layout() {
        let table = DeliveryTable::standard();
        assert_eq!(table.len(), 8);
        assert_eq!(table.rows()[0].role, DeliveryRole::Lead);
        assert_eq!(table.rows()[7].role, DeliveryRole::Assist(7));
        assert_eq!(table.filled_rows().count(), 0);
    }

    #[test]
    fn test_row_for_role() {
        let mut table = DeliveryTable::standard();
        if let Some(row) = table.row_for_mut(DeliveryRole::Assist(4)) {
            row.department = "交付四部".to_string();
        }
        assert_eq!(table.rows()[4].department, "交付四部");
        assert_eq!(table.filled_rows().count(), 1);
    }

    #[test]
    fn test_role_label_parsing() {
        assert_eq!(
            DeliveryRole::try_from("牵头交付事业部".to_string()),
            Ok(DeliveryRole::Lead)
        );
        assert_eq!(
            DeliveryRole::try_from("协助交付事业部3".to_string()),
            Ok(DeliveryRole::Assist(3))
        );
        assert!(DeliveryRole::try_from("协助交付事业部9".to_string()).is_err());
        assert_eq!(DeliveryRole::Assist(2).to_string(), "协助交付事业部2");
    }

    #[test]
    fn test_row_serde_uses_chinese_keys() {
        let mut row = DeliveryDetailRow::blank(DeliveryRole::Lead);
        row.department = "云网事业部".to_string();
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["类型"], "牵头交付事业部");
        assert_eq!(json["事业部"], "云网事业部");
        assert_eq!(json["预算（万元）"], "");
    }
}
