// ==========================================
// 项目会议纪要助手 - 配置层
// ==========================================
// 职责: 粘贴识别词表与窗口参数（可由 JSON 配置文件覆盖）
// ==========================================

pub mod app_config;
pub mod error;
pub mod extractor_config;

// 重导出
pub use app_config::{default_config_path, AppConfig, CONFIG_ENV_VAR};
pub use error::{ConfigError, ConfigResult};
pub use extractor_config::ExtractorConfig;
