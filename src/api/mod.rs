// ==========================================
// 项目会议纪要助手 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行调用
// ==========================================

pub mod error;
pub mod minutes_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use minutes_api::{MinutesApi, PasteOutcome};
