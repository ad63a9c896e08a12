// ==========================================
// 项目会议纪要助手 - 领域模型层
// ==========================================
// 职责: 表单记录、交付明细、铁三角角色、枚举类型
// 红线: 不含解析逻辑,不含纪要拼装逻辑
// ==========================================

pub mod delivery;
pub mod fields;
pub mod record;
pub mod roles;
pub mod types;

// 重导出核心类型
pub use delivery::{DeliveryDetailRow, DeliveryRole, DeliveryTable};
pub use record::{FieldRecord, ProjectForm};
pub use roles::{RoleAssignment, RoleAssignments};
pub use types::{BiddingMethod, MinutesKind, YesNo};
