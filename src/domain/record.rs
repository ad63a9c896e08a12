// ==========================================
// 项目会议纪要助手 - 表单记录
// ==========================================
// 职责: 表单字段值的扁平映射 (字段 ID → 字符串值)
// 红线: 键缺失 与 空字符串 语义不同，但下游逻辑一律视为"未填写"
// ==========================================

use crate::domain::delivery::DeliveryTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// FieldRecord - 表单字段记录
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord(BTreeMap<String, String>);

impl FieldRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 原始值（不做 trim）
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// 有效值：trim 后非空才返回
    ///
    /// # 返回
    /// - Some(&str): trim 后的值
    /// - None: 键缺失，或值为空白
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// 原始值，缺失时返回空串
    pub fn raw(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 合并稀疏记录：只覆盖 `patch` 中出现的字段，其余字段保持不变
    pub fn merge(&mut self, patch: &FieldRecord) {
        for (key, value) in patch.iter() {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FieldRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ==========================================
// ProjectForm - 完整表单快照
// ==========================================
// 字段记录 + 固定 8 行的交付明细表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub fields: FieldRecord,
    pub delivery: DeliveryTable,
}

impl ProjectForm {
    pub fn new(fields: FieldRecord) -> Self {
        Self {
            fields,
            delivery: DeliveryTable::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_treats_blank_as_missing() {
        let record: FieldRecord = [("a", "  "), ("b", " 值 ")].into_iter().collect();
        assert_eq!(record.text("a"), None);
        assert_eq!(record.text("b"), Some("值"));
        assert_eq!(record.text("c"), None);
        assert!(record.contains("a"));
        assert!(!record.contains("c"));
    }

    #[test]
    fn test_merge_only_overwrites_present_keys() {
        let mut record: FieldRecord = [("projectName", "旧名称"), ("budgetAmount", "100")]
            .into_iter()
            .collect();
        let patch: FieldRecord = [("projectName", "新名称")].into_iter().collect();

        record.merge(&patch);

        assert_eq!(record.get("projectName"), Some("新名称"));
        assert_eq!(record.get("budgetAmount"), Some("100"));
    }
}
