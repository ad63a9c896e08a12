// ==========================================
// 项目会议纪要助手 - 应用配置加载
// ==========================================
// 加载顺序: 显式路径 → MINUTES_CONFIG 环境变量 → 用户配置目录 → 内置默认值
// 配置文件不存在时使用默认值；存在但无法解析时报错
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::extractor_config::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "MINUTES_CONFIG";

const CONFIG_DIR_NAME: &str = "meeting-minutes";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub extractor: ExtractorConfig,
}

impl AppConfig {
    /// 从指定文件加载并校验
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.extractor.validate()?;
        info!(path = %path.display(), "配置文件已加载");
        Ok(config)
    }

    /// 按加载顺序解析配置
    ///
    /// # 参数
    /// - explicit: 命令行等显式指定的路径（指定后文件必须存在）
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            return Self::from_file(&path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("未找到配置文件，使用内置默认配置");
                Ok(Self::default())
            }
        }
    }
}

/// 用户配置目录下的默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_file_overrides_extractor() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"extractor": {{"external_budget_lookahead": 5}}}}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.extractor.external_budget_lookahead, 5);
        assert_eq!(config.extractor.budget_lookahead, 8);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/meeting-minutes.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"extractor": {{"budget_lookahead": 0}}}}"#).unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
