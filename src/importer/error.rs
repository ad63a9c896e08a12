// ==========================================
// 项目会议纪要助手 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 粘贴识别本身不失败，错误只来自记录文件的读写
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    // ===== 数据结构错误 =====
    #[error("记录格式不正确: {0}")]
    InvalidShape(String),

    #[error("导入的数组为空，没有可用记录")]
    EmptyArray,
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
