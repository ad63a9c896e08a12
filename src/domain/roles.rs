// ==========================================
// 项目会议纪要助手 - 铁三角角色
// ==========================================
// 职责: 角色 → (姓名, 事业部) 的解析结果
// 红线: 解析结果中 name / department 均非空；未匹配的角色不出现在映射中
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const PROJECT_MANAGER: &str = "项目经理";
pub const SALES_MANAGER: &str = "销售经理";
pub const SOLUTION_MANAGER: &str = "方案经理";
pub const DELIVERY_MANAGER: &str = "交付经理";

/// 纪要中固定顺序输出的四个铁三角角色
pub const CANONICAL_ROLES: [&str; 4] = [
    PROJECT_MANAGER,
    SALES_MANAGER,
    SOLUTION_MANAGER,
    DELIVERY_MANAGER,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub name: String,
    pub department: String,
}

impl RoleAssignment {
    pub fn new(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
        }
    }
}

/// 角色标签 → 角色信息
pub type RoleAssignments = HashMap<String, RoleAssignment>;
