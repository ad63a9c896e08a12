// ==========================================
// 项目会议纪要助手 - 粘贴行分类
// ==========================================
// 职责: 对粘贴文本的每一行一次性分类（标题行/金额候选行/内容行）
// 红线: 只看单行内容，不看上下文
// ==========================================

use crate::config::ExtractorConfig;
use regex::Regex;
use std::sync::LazyLock;

/// 编号列表前缀，如 "1、" "2."
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[、.]").expect("NUMBERED_ITEM regex should compile"));

/// 仅是标签、本身不带金额的伪金额行
const CONTRACT_AMOUNT_LABEL: &str = "合同金额";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Key,
    /// 标题行，但预算向下查找时可以越过（如 "合同金额："）
    FalseBudgetHeader,
    Money,
    Content,
}

impl LineClass {
    pub fn is_key(self) -> bool {
        matches!(self, LineClass::Key | LineClass::FalseBudgetHeader)
    }
}

pub fn has_digit(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit())
}

/// 行首是否为 "数字+、/." 的编号
pub fn is_numbered_item(line: &str) -> bool {
    NUMBERED_ITEM.is_match(line)
}

/// 首个冒号（半角或全角）之后的剩余文本
pub fn after_colon(line: &str) -> Option<&str> {
    line.char_indices()
        .find(|(_, c)| *c == ':' || *c == '：')
        .map(|(idx, c)| &line[idx + c.len_utf8()..])
}

#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    config: &'a ExtractorConfig,
}

impl<'a> LineClassifier<'a> {
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, line: &str) -> LineClass {
        if self.is_key(line) {
            if self.is_false_budget_header(line) {
                LineClass::FalseBudgetHeader
            } else {
                LineClass::Key
            }
        } else if self.is_money(line) {
            LineClass::Money
        } else {
            LineClass::Content
        }
    }

    /// 字段标题行：冒号结尾、下拉占位词、或以已知标题词开头
    pub fn is_key(&self, line: &str) -> bool {
        if line.ends_with(':') || line.ends_with('：') {
            return true;
        }
        if line.starts_with(self.config.placeholder_token.as_str()) {
            return true;
        }
        self.config
            .key_phrases
            .iter()
            .filter(|k| !k.is_empty())
            .any(|k| line.starts_with(k.as_str()))
    }

    /// 金额候选行
    ///
    /// 含数字，不含排除词；"合同金额" 去掉后必须仍有数字；
    /// 两个以上 "-" 或 "/" 视为日期区间，不算金额
    pub fn is_money(&self, line: &str) -> bool {
        if !has_digit(line) {
            return false;
        }
        if self
            .config
            .money_exclusions
            .iter()
            .any(|word| !word.is_empty() && line.contains(word.as_str()))
        {
            return false;
        }
        if line.contains(CONTRACT_AMOUNT_LABEL)
            && !has_digit(&line.replacen(CONTRACT_AMOUNT_LABEL, "", 1))
        {
            return false;
        }
        line.matches('-').count() < 2 && line.matches('/').count() < 2
    }

    /// 预算向下查找时可跳过的伪标题
    pub fn is_false_budget_header(&self, line: &str) -> bool {
        self.config
            .budget_false_headers
            .iter()
            .any(|h| !h.is_empty() && line.contains(h.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lines() {
        let config = ExtractorConfig::default();
        let classifier = LineClassifier::new(&config);

        assert!(classifier.is_key("客户经理："));
        assert!(classifier.is_key("联系人:"));
        assert!(classifier.is_key("请选择"));
        assert!(classifier.is_key("请选择项目级别"));
        assert!(classifier.is_key("项目预算（万元）"));
        assert!(classifier.is_key("铁三角成员"));
        assert!(!classifier.is_key("1、完成平台部署"));
        assert!(!classifier.is_key("建设一套智慧园区平台"));
    }

    #[test]
    fn test_money_lines() {
        let config = ExtractorConfig::default();
        let classifier = LineClassifier::new(&config);

        assert!(classifier.is_money("1,234,567.89元"));
        assert!(classifier.is_money("合同金额 500000"));
        assert!(!classifier.is_money("合同金额"));
        assert!(!classifier.is_money("不含税 100"));
        assert!(!classifier.is_money("收入结构 3:7"));
        assert!(!classifier.is_money("2024-01-01"));
        assert!(!classifier.is_money("2024/01/01"));
        assert!(!classifier.is_money("暂无"));
    }

    #[test]
    fn test_classify_and_helpers() {
        let config = ExtractorConfig::default();
        let classifier = LineClassifier::new(&config);

        assert_eq!(classifier.classify("项目名称："), LineClass::Key);
        assert_eq!(classifier.classify("300万元"), LineClass::Money);
        assert_eq!(classifier.classify("平台建设"), LineClass::Content);
        assert_eq!(classifier.classify("软件金额："), LineClass::FalseBudgetHeader);
        assert_eq!(classifier.classify("合同金额 500000"), LineClass::Money);
        assert!(LineClass::FalseBudgetHeader.is_key());
        assert!(!LineClass::Money.is_key());

        assert!(is_numbered_item("2.接口改造"));
        assert!(is_numbered_item("12、联调"));
        assert!(!is_numbered_item("第1期"));

        assert_eq!(after_colon("商机编号：ABC：1"), Some("ABC：1"));
        assert_eq!(after_colon("key: v"), Some(" v"));
        assert_eq!(after_colon("无冒号"), None);
        assert!(classifier.is_false_budget_header("软件金额："));
    }
}
