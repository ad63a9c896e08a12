// ==========================================
// 项目会议纪要助手 - 镜像字段同步
// ==========================================
// 职责: 三份纪要中同义字段的联动赋值
// 模型: 有向同步图 + 按字段 ID 记录的"同步中"集合，防止环路重入
// 红线: 目标字段带可选值表时，表外的值不写入
// ==========================================

use crate::domain::fields;
use crate::domain::record::FieldRecord;
use crate::domain::types::{BIDDING_REVIEW_METHODS, KICKOFF_METHODS};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// 默认镜像字段对（双向）
const DEFAULT_PAIRS: [(&str, &str, &str); 11] = [
    ("SJ_", "TB_", fields::GROSS_MARGIN),
    ("SJ_", "TB_", fields::COOPERATION_ASSESSMENT),
    ("SJ_", "TB_", fields::COOPERATION_NEEDED),
    ("TB_", "JD_", fields::BUSINESS_TYPE),
    ("TB_", "JD_", fields::BIDDING_METHOD),
    ("JD_", "TB_", fields::DELIVERY_PERIOD),
    ("JD_", "TB_", fields::DELIVERY_RISK),
    ("JD_", "TB_", fields::MAINTENANCE_REQUIREMENTS),
    ("JD_", "TB_", fields::TRIAL_RUN),
    ("JD_", "TB_", fields::MAINTENANCE_ASSESSMENT),
    ("JD_", "TB_", fields::TESTING_REQUIREMENTS),
];

/// 下拉字段的可选值表
const DEFAULT_VOCABULARIES: [(&str, &str, &[&str]); 2] = [
    ("TB_", fields::BIDDING_METHOD, &BIDDING_REVIEW_METHODS),
    ("JD_", fields::BIDDING_METHOD, &KICKOFF_METHODS),
];

// ==========================================
// FieldMirror - 镜像字段同步图
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct FieldMirror {
    edges: BTreeMap<String, Vec<String>>,
    vocabularies: BTreeMap<String, &'static [&'static str]>,
}

impl FieldMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置的三份纪要镜像关系
    pub fn standard() -> Self {
        let mut mirror = Self::new();
        for (left_prefix, right_prefix, suffix) in DEFAULT_PAIRS {
            mirror.link_both(
                &fields::prefixed(left_prefix, suffix),
                &fields::prefixed(right_prefix, suffix),
            );
        }
        for (prefix, suffix, options) in DEFAULT_VOCABULARIES {
            mirror.restrict(&fields::prefixed(prefix, suffix), options);
        }
        mirror
    }

    /// 限定字段只接受 options 中的值（只约束联动写入）
    pub fn restrict(&mut self, field: &str, options: &'static [&'static str]) {
        self.vocabularies.insert(field.to_string(), options);
    }

    pub fn accepts(&self, field: &str, value: &str) -> bool {
        self.vocabularies
            .get(field)
            .map_or(true, |options| options.iter().any(|option| *option == value))
    }

    /// 单向: source 变化时写入 target
    pub fn link(&mut self, source: &str, target: &str) {
        let targets = self.edges.entry(source.to_string()).or_default();
        if !targets.iter().any(|t| t == target) {
            targets.push(target.to_string());
        }
    }

    pub fn link_both(&mut self, a: &str, b: &str) {
        self.link(a, b);
        self.link(b, a);
    }

    pub fn targets(&self, source: &str) -> &[String] {
        self.edges.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 写入字段并沿同步图传播
    ///
    /// # 返回
    /// 被联动更新的字段 ID（不含 source 本身）
    pub fn set_and_propagate(
        &self,
        record: &mut FieldRecord,
        source: &str,
        value: &str,
    ) -> Vec<String> {
        record.set(source, value);

        let mut in_progress: HashSet<String> = HashSet::new();
        let mut updated = Vec::new();
        self.propagate(record, source, value, &mut in_progress, &mut updated);
        debug!(source, updated = updated.len(), "镜像字段同步");
        updated
    }

    /// 整体写入补丁后再传播
    ///
    /// 补丁自带的字段不会被联动覆盖
    ///
    /// # 返回
    /// 被联动更新的字段 ID（不含补丁中的字段）
    pub fn apply_and_propagate(&self, record: &mut FieldRecord, patch: &FieldRecord) -> Vec<String> {
        for (key, value) in patch.iter() {
            record.set(key, value);
        }

        let mut updated = Vec::new();
        for (key, value) in patch.iter() {
            let mut in_progress: HashSet<String> = patch
                .iter()
                .filter(|(other, _)| *other != key)
                .map(|(other, _)| other.to_string())
                .collect();
            self.propagate(record, key, value, &mut in_progress, &mut updated);
        }
        debug!(patch = patch.len(), updated = updated.len(), "补丁镜像同步");
        updated
    }

    fn propagate(
        &self,
        record: &mut FieldRecord,
        source: &str,
        value: &str,
        in_progress: &mut HashSet<String>,
        updated: &mut Vec<String>,
    ) {
        if !in_progress.insert(source.to_string()) {
            return;
        }
        for target in self.targets(source) {
            if in_progress.contains(target) || !self.accepts(target, value) {
                continue;
            }
            record.set(target.as_str(), value);
            updated.push(target.clone());
            self.propagate(record, target, value, in_progress, updated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pair_syncs_both_directions() {
        let mirror = FieldMirror::standard();
        let mut record = FieldRecord::new();

        let updated = mirror.set_and_propagate(&mut record, "SJ_grossMargin", "15");
        assert_eq!(updated, vec!["TB_grossMargin".to_string()]);
        assert_eq!(record.get("TB_grossMargin"), Some("15"));

        mirror.set_and_propagate(&mut record, "JD_biddingMethod", "询价");
        assert_eq!(record.get("TB_biddingMethod"), Some("询价"));
    }

    #[test]
    fn test_cycle_terminates_and_chains_propagate() {
        let mut mirror = FieldMirror::new();
        mirror.link("a", "b");
        mirror.link("b", "c");
        mirror.link("c", "a");

        let mut record = FieldRecord::new();
        let updated = mirror.set_and_propagate(&mut record, "a", "x");

        assert_eq!(updated, vec!["b".to_string(), "c".to_string()]);
        assert_eq!(record.get("c"), Some("x"));
    }

    #[test]
    fn test_value_outside_target_vocabulary_is_not_mirrored() {
        let mirror = FieldMirror::standard();
        let mut record = FieldRecord::new();

        let updated = mirror.set_and_propagate(&mut record, "JD_biddingMethod", "电商采购");
        assert!(updated.is_empty());
        assert_eq!(record.get("JD_biddingMethod"), Some("电商采购"));
        assert!(!record.contains("TB_biddingMethod"));

        assert!(mirror.accepts("TB_biddingMethod", "比选"));
        assert!(!mirror.accepts("TB_biddingMethod", "订单方式"));
        assert!(mirror.accepts("projectName", "任意"));
    }

    #[test]
    fn test_patch_fields_are_not_overwritten_by_mirroring() {
        let mirror = FieldMirror::standard();
        let mut record = FieldRecord::new();
        let patch: FieldRecord = [("TB_biddingMethod", "公开招标"), ("JD_biddingMethod", "询价")]
            .into_iter()
            .collect();

        let updated = mirror.apply_and_propagate(&mut record, &patch);
        assert!(updated.is_empty());
        assert_eq!(record.get("TB_biddingMethod"), Some("公开招标"));
        assert_eq!(record.get("JD_biddingMethod"), Some("询价"));

        let patch: FieldRecord = [("JD_deliveryRisk", "低")].into_iter().collect();
        let updated = mirror.apply_and_propagate(&mut record, &patch);
        assert_eq!(updated, vec!["TB_deliveryRisk".to_string()]);
    }

    #[test]
    fn test_unlinked_field_only_sets_itself() {
        let mirror = FieldMirror::standard();
        let mut record = FieldRecord::new();
        let updated = mirror.set_and_propagate(&mut record, "projectName", "园区");
        assert!(updated.is_empty());
        assert_eq!(record.len(), 1);
    }
}
