// ==========================================
// 项目会议纪要助手 - API层错误类型
// ==========================================
// 职责: 汇总导入层与配置层错误，转换为面向用户的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("纪要数据导入/导出失败: {0}")]
    Import(#[from] ImportError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
