// ==========================================
// 项目会议纪要助手 - 粘贴文本字段识别
// ==========================================
// 职责: 从外部系统复制的竖排文本中尽力识别表单字段
// 红线: 永不失败；只输出识别到的字段，未识别字段一律缺省
// ==========================================
// 状态机（每行先一次性分类为 LineClass，再驱动状态转移）:
//   Idle                  → 逐行按规则优先级分派
//   CapturingBlock        → 多行捕获（建设内容/后向采购基本情况），吞掉已消费的行
//   BudgetScan / ExtScan  → 向下窗口查找，只看不吞，被查看的行仍会正常分派
// ==========================================

use crate::config::ExtractorConfig;
use crate::importer::line_classifier::{
    after_colon, has_digit, is_numbered_item, LineClass, LineClassifier,
};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, instrument};

#[cfg(test)]
mod tests;

static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(\.\d+)?%").expect("PERCENT regex should compile"));

// ==========================================
// PasteField - 可识别字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PasteField {
    BusinessCode,
    Budget,
    GrossMargin,
    NetMargin,
    Content,
    ProcurementSituation,
    ExtBudget,
    ProjectName,
    Client,
    Level,
    CapacityType,
    Procurement,
    BusinessType,
    BiddingMethod,
    BiddingEntity,
    Duration,
    ProjectManager,
    SalesManager,
    SolutionManager,
    DeliveryManager,
}

/// 识别结果：稀疏映射，值均为非空原文
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedPaste {
    values: BTreeMap<PasteField, String>,
}

impl ParsedPaste {
    pub fn get(&self, field: PasteField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: PasteField) -> bool {
        self.values.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PasteField, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn capture(&mut self, field: PasteField, value: String) {
        self.values.insert(field, value);
    }
}

impl FromIterator<(PasteField, String)> for ParsedPaste {
    fn from_iter<I: IntoIterator<Item = (PasteField, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// ==========================================
// 单行字段映射表（规则 8）
// ==========================================
#[derive(Debug, Clone, Copy)]
enum Matcher {
    StartsWith(&'static [&'static str]),
    Contains(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, line: &str) -> bool {
        match self {
            Matcher::StartsWith(words) => words.iter().any(|w| line.starts_with(w)),
            Matcher::Contains(words) => words.iter().any(|w| line.contains(w)),
        }
    }
}

struct SimpleRule {
    field: PasteField,
    matcher: Matcher,
    exclude: Option<&'static str>,
}

static SIMPLE_RULES: [SimpleRule; 13] = [
    SimpleRule { field: PasteField::ProjectName, matcher: Matcher::Contains(&["项目名称"]), exclude: Some("ID") },
    SimpleRule { field: PasteField::Client, matcher: Matcher::StartsWith(&["签约客户", "客户名称"]), exclude: None },
    SimpleRule { field: PasteField::Level, matcher: Matcher::StartsWith(&["项目级别"]), exclude: None },
    SimpleRule { field: PasteField::CapacityType, matcher: Matcher::Contains(&["产品能力"]), exclude: None },
    SimpleRule { field: PasteField::Procurement, matcher: Matcher::Contains(&["是否需要后向采购"]), exclude: None },
    SimpleRule { field: PasteField::BusinessType, matcher: Matcher::StartsWith(&["业务类型"]), exclude: None },
    SimpleRule { field: PasteField::BiddingMethod, matcher: Matcher::StartsWith(&["投标方式", "签约类型"]), exclude: None },
    SimpleRule { field: PasteField::BiddingEntity, matcher: Matcher::StartsWith(&["投标主体"]), exclude: None },
    SimpleRule { field: PasteField::Duration, matcher: Matcher::Contains(&["项目工期", "服务期"]), exclude: None },
    SimpleRule { field: PasteField::ProjectManager, matcher: Matcher::StartsWith(&["项目经理"]), exclude: None },
    SimpleRule { field: PasteField::SalesManager, matcher: Matcher::StartsWith(&["销售经理"]), exclude: None },
    SimpleRule { field: PasteField::SolutionManager, matcher: Matcher::StartsWith(&["方案经理", "售前解方经理"]), exclude: None },
    SimpleRule { field: PasteField::DeliveryManager, matcher: Matcher::StartsWith(&["交付经理"]), exclude: None },
];

/// 单行分派结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    BusinessCode,
    Budget,
    Margin(PasteField),
    Block { field: PasteField, stop_at_budget: bool },
    ExternalBudget,
    Simple(PasteField),
    Unmatched,
}

#[derive(Debug)]
enum ScanState {
    Idle,
    CapturingBlock {
        field: PasteField,
        stop_at_budget: bool,
        parts: Vec<String>,
    },
}

const BUDGET_HEADER: &str = "项目预算";

// ==========================================
// PasteExtractor - 识别器
// ==========================================
pub struct PasteExtractor<'a> {
    config: &'a ExtractorConfig,
    classifier: LineClassifier<'a>,
}

impl<'a> PasteExtractor<'a> {
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self {
            config,
            classifier: LineClassifier::new(config),
        }
    }

    /// 识别粘贴文本
    ///
    /// 同一字段多次命中时后者覆盖前者；结束时丢弃空值
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    pub fn extract(&self, text: &str) -> ParsedPaste {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let classes: Vec<LineClass> = lines.iter().map(|l| self.classifier.classify(l)).collect();

        let mut result = ParsedPaste::default();
        let mut state = ScanState::Idle;
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            state = match state {
                ScanState::Idle => match self.rule_for(line) {
                    Rule::Block { field, stop_at_budget } => {
                        let parts = after_colon(line)
                            .map(str::trim)
                            .filter(|v| !v.is_empty())
                            .map(|v| vec![v.to_string()])
                            .unwrap_or_default();
                        i += 1;
                        ScanState::CapturingBlock { field, stop_at_budget, parts }
                    }
                    rule => {
                        if let Some((field, value)) = self.apply_rule(rule, &lines, &classes, i) {
                            result.capture(field, value);
                        }
                        i += 1;
                        ScanState::Idle
                    }
                },
                ScanState::CapturingBlock { field, stop_at_budget, mut parts } => {
                    if ends_block(line, classes[i], stop_at_budget) {
                        // 不消费当前行，回到 Idle 重新分派
                        result.capture(field, parts.join("\n"));
                        ScanState::Idle
                    } else {
                        parts.push(line.to_string());
                        i += 1;
                        ScanState::CapturingBlock { field, stop_at_budget, parts }
                    }
                }
            };
        }

        if let ScanState::CapturingBlock { field, parts, .. } = state {
            result.capture(field, parts.join("\n"));
        }

        result.values.retain(|_, v| !v.is_empty());
        debug!(fields = result.len(), "粘贴识别完成");
        result
    }

    /// 规则优先级分派（首个命中的规则生效）
    fn rule_for(&self, line: &str) -> Rule {
        if line.contains("商机编号") && !line.contains("mss") {
            Rule::BusinessCode
        } else if line.starts_with(BUDGET_HEADER) {
            Rule::Budget
        } else if line.contains("毛利率") {
            Rule::Margin(PasteField::GrossMargin)
        } else if line.contains("净利润率") {
            Rule::Margin(PasteField::NetMargin)
        } else if line.starts_with("建设内容") {
            Rule::Block { field: PasteField::Content, stop_at_budget: true }
        } else if line.starts_with("项目后向采购基本情况") {
            Rule::Block { field: PasteField::ProcurementSituation, stop_at_budget: false }
        } else if line.contains("外部采购预算") || line.contains("外部采购金额") {
            Rule::ExternalBudget
        } else {
            SIMPLE_RULES
                .iter()
                .find(|r| r.matcher.matches(line) && r.exclude.map_or(true, |x| !line.contains(x)))
                .map_or(Rule::Unmatched, |r| Rule::Simple(r.field))
        }
    }

    fn apply_rule(
        &self,
        rule: Rule,
        lines: &[&str],
        classes: &[LineClass],
        i: usize,
    ) -> Option<(PasteField, String)> {
        let line = lines[i];
        match rule {
            Rule::BusinessCode => Some((PasteField::BusinessCode, inline_or_next(lines, i))),
            Rule::Budget => self
                .scan_budget(lines, classes, i)
                .map(|v| (PasteField::Budget, v)),
            Rule::Margin(field) => {
                let value = PERCENT
                    .find(line)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| inline_or_next(lines, i));
                Some((field, value))
            }
            Rule::ExternalBudget => self
                .scan_external_budget(lines, i)
                .map(|v| (PasteField::ExtBudget, v)),
            Rule::Simple(PasteField::Level) => {
                let value = inline_or_next(lines, i);
                (value.chars().count() < self.config.level_max_chars)
                    .then_some((PasteField::Level, value))
            }
            Rule::Simple(field) => Some((field, inline_or_next(lines, i))),
            Rule::Block { .. } | Rule::Unmatched => None,
        }
    }

    /// 预算：先看冒号后的内联值，再向下窗口查找首个金额行；遇到真标题即停
    fn scan_budget(&self, lines: &[&str], classes: &[LineClass], i: usize) -> Option<String> {
        if let Some(inline) = after_colon(lines[i]).map(str::trim) {
            if self.classifier.is_money(inline) {
                return Some(inline.to_string());
            }
        }

        let window = lines.iter().zip(classes).skip(i + 1).take(self.config.budget_lookahead);
        for (next, class) in window {
            match class {
                LineClass::Key => break,
                LineClass::Money => return Some(next.to_string()),
                LineClass::FalseBudgetHeader | LineClass::Content => {}
            }
        }
        None
    }

    fn scan_external_budget(&self, lines: &[&str], i: usize) -> Option<String> {
        lines
            .iter()
            .skip(i + 1)
            .take(self.config.external_budget_lookahead)
            .find(|next| has_digit(next) && !next.contains("结构"))
            .map(|next| next.to_string())
    }
}

/// 多行捕获的结束条件：遇到非编号的标题行（建设内容另遇 "项目预算" 即停）
fn ends_block(line: &str, class: LineClass, stop_at_budget: bool) -> bool {
    (stop_at_budget && line.starts_with(BUDGET_HEADER)) || (class.is_key() && !is_numbered_item(line))
}

/// 冒号后的非空内联值，否则取下一行原文，否则为空
fn inline_or_next(lines: &[&str], i: usize) -> String {
    after_colon(lines[i])
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| lines.get(i + 1).copied())
        .unwrap_or_default()
        .to_string()
}
