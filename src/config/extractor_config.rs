// ==========================================
// 项目会议纪要助手 - 粘贴识别配置
// ==========================================
// 职责: 粘贴识别用到的组织模板相关数据（标题词表/回看窗口/排除词）
// 说明: 所有字段带默认值，配置文件只需写出要覆盖的项
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// 默认段落标题词（行首匹配即视为字段标题）
const DEFAULT_KEY_PHRASES: [&str; 29] = [
    "项目预算",
    "项目名称",
    "商机编号",
    "合同编号",
    "基本信息",
    "会前信息",
    "会议内容记录",
    "问题及解决方案",
    "会议决议",
    "参会人员",
    "铁三角",
    "项目后向采购是否",
    "核心能力标签",
    "项目各板块需求",
    "项目实施可行性",
    "技术要求",
    "总体方案",
    "招标文件",
    "运维服务要求",
    "应急方案",
    "是否包含监控",
    "请确认项目类型",
    "是否需要签订",
    "项目外采评估",
    "人工成本评估",
    "列收方式",
    "外采评估",
    "是否需要标前引入",
    "项目后向采购基本情况",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// 字段标题词表
    pub key_phrases: Vec<String>,

    /// 下拉框未选择时的占位词（等于或以此开头的行视为标题）
    pub placeholder_token: String,

    /// "项目预算" 之后向下查找金额的行数
    pub budget_lookahead: usize,

    /// 预算查找中可跳过的伪标题
    pub budget_false_headers: Vec<String>,

    /// "外部采购预算/金额" 之后向下查找的行数
    pub external_budget_lookahead: usize,

    /// 含有这些词的行不视为金额行
    pub money_exclusions: Vec<String>,

    /// 项目级别取值的最大字符数（超过视为误抓段落）
    pub level_max_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            key_phrases: strings(&DEFAULT_KEY_PHRASES),
            placeholder_token: "请选择".to_string(),
            budget_lookahead: 8,
            budget_false_headers: strings(&["合同金额", "软件金额"]),
            external_budget_lookahead: 3,
            money_exclusions: strings(&["结构", "含税", "不含税"]),
            level_max_chars: 10,
        }
    }
}

impl ExtractorConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.key_phrases.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid("key_phrases 不能为空".to_string()));
        }
        if self.budget_lookahead == 0 {
            return Err(ConfigError::Invalid("budget_lookahead 必须大于 0".to_string()));
        }
        if self.external_budget_lookahead == 0 {
            return Err(ConfigError::Invalid(
                "external_budget_lookahead 必须大于 0".to_string(),
            ));
        }
        if self.level_max_chars == 0 {
            return Err(ConfigError::Invalid("level_max_chars 必须大于 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.key_phrases.len(), 29);
        assert_eq!(config.budget_lookahead, 8);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: ExtractorConfig =
            serde_json::from_str(r#"{"budget_lookahead": 4, "key_phrases": ["自定义标题"]}"#)
                .unwrap();
        assert_eq!(config.budget_lookahead, 4);
        assert_eq!(config.key_phrases, vec!["自定义标题".to_string()]);
        assert_eq!(config.external_budget_lookahead, 3);
        assert_eq!(config.level_max_chars, 10);
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = ExtractorConfig {
            budget_lookahead: 0,
            ..ExtractorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ExtractorConfig {
            key_phrases: vec![" ".to_string()],
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
