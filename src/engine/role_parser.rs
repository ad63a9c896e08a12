// ==========================================
// 项目会议纪要助手 - 铁三角角色解析
// ==========================================
// 职责: 从铁三角文本中提取 角色：姓名(事业部)
// 输入: 任意文本（冒号/括号支持全角与半角，允许跨行空白）
// 输出: 角色 → RoleAssignment；同一角色多次出现时后者覆盖前者
// ==========================================

use crate::domain::roles::{RoleAssignment, RoleAssignments, CANONICAL_ROLES};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 角色：姓名(事业部)
static ROLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(.+?)\s*[:：]\s*(.+?)\s*[(（](.+?)[)）]")
        .expect("ROLE_PATTERN regex should compile")
});

/// 项目经理：姓名(事业部)，取首次出现
static LEAD_DEPARTMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)项目经理\s*[:：]\s*(?:.+?)\s*[(（](.+?)[)）]")
        .expect("LEAD_DEPARTMENT_PATTERN regex should compile")
});

const PENDING: &str = "【待定】";
const MISSING_IRON_TRIANGLE: &str = "【铁三角信息未填写】。";

// ==========================================
// RoleAssignmentParser - 铁三角角色解析器
// ==========================================
pub struct RoleAssignmentParser;

impl RoleAssignmentParser {
    /// 解析全部角色
    ///
    /// 姓名或事业部 trim 后为空的匹配不记录
    pub fn parse(text: &str) -> RoleAssignments {
        let mut roles = RoleAssignments::new();
        for caps in ROLE_PATTERN.captures_iter(text.trim()) {
            let label = caps[1].trim();
            let name = caps[2].trim();
            let department = caps[3].trim();
            if label.is_empty() || name.is_empty() || department.is_empty() {
                continue;
            }
            roles.insert(label.to_string(), RoleAssignment::new(name, department));
        }
        debug!(count = roles.len(), "铁三角角色解析完成");
        roles
    }

    /// 牵头事业部：项目经理所在事业部
    pub fn lead_department(text: &str) -> Option<String> {
        LEAD_DEPARTMENT_PATTERN
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|dept| !dept.is_empty())
    }

    /// 铁三角汇总句
    ///
    /// 例: 项目经理是张三(研发部)，销售经理是【待定】(【待定】)，...
    pub fn summary(text: Option<&str>) -> String {
        let text = match text.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => t,
            None => return MISSING_IRON_TRIANGLE.to_string(),
        };

        let roles = Self::parse(text);
        let parts: Vec<String> = CANONICAL_ROLES
            .iter()
            .map(|role| match roles.get(*role) {
                Some(info) => format!("{}是{}({})", role, info.name, info.department),
                None => format!("{}是{}({})", role, PENDING, PENDING),
            })
            .collect();

        format!("{}。", parts.join("，"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_roles() {
        let roles = RoleAssignmentParser::parse("项目经理：张三(研发部)\n销售经理：李四(市场部)");
        assert_eq!(roles.len(), 2);
        assert_eq!(roles["项目经理"], RoleAssignment::new("张三", "研发部"));
        assert_eq!(roles["销售经理"], RoleAssignment::new("李四", "市场部"));
        assert!(!roles.contains_key("方案经理"));
    }

    #[test]
    fn test_parse_mixed_width_delimiters_and_whitespace() {
        let text = "方案经理 : 王五 （ 云网事业部 ）\n交付经理：\n赵六\n(智呼事业部)";
        let roles = RoleAssignmentParser::parse(text);
        assert_eq!(roles["方案经理"], RoleAssignment::new("王五", "云网事业部"));
        assert_eq!(roles["交付经理"], RoleAssignment::new("赵六", "智呼事业部"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let roles = RoleAssignmentParser::parse("项目经理：张三(研发部)\n项目经理：钱七(IT系统事业部)");
        assert_eq!(roles["项目经理"], RoleAssignment::new("钱七", "IT系统事业部"));
    }

    #[test]
    fn test_summary_fills_pending_roles() {
        let summary = RoleAssignmentParser::summary(Some("项目经理：张三(研发部)"));
        assert_eq!(
            summary,
            "项目经理是张三(研发部)，销售经理是【待定】(【待定】)，方案经理是【待定】(【待定】)，交付经理是【待定】(【待定】)。"
        );
    }

    #[test]
    fn test_summary_without_text() {
        assert_eq!(RoleAssignmentParser::summary(None), "【铁三角信息未填写】。");
        assert_eq!(RoleAssignmentParser::summary(Some("  ")), "【铁三角信息未填写】。");
    }

    #[test]
    fn test_lead_department() {
        let text = "销售经理：李四(市场部)\n项目经理：张三（IT系统事业部）";
        assert_eq!(
            RoleAssignmentParser::lead_department(text),
            Some("IT系统事业部".to_string())
        );
        assert_eq!(RoleAssignmentParser::lead_department("项目经理：张三"), None);
    }
}
