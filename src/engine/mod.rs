// ==========================================
// 项目会议纪要助手 - 引擎层
// ==========================================
// 职责: 纯函数计算，不持有状态，不做 I/O
// 组成: 数值规整 / 铁三角解析 / 公共字段 / 纪要拼装 / 镜像字段同步
// ==========================================

pub mod coercion;
pub mod common_fields;
pub mod composer;
pub mod mirror;
pub mod role_parser;

// 重导出引擎
pub use common_fields::{CommonFields, CommonFieldsCalculator};
pub use composer::{MinutesComposer, MinutesDocument, MinutesProfile};
pub use mirror::FieldMirror;
pub use role_parser::RoleAssignmentParser;
