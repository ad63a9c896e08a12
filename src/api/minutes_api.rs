// ==========================================
// 纪要助手API
// ==========================================
// 职责: 封装纪要生成、粘贴识别、数据导入导出与镜像字段联动
// 红线: 粘贴与导入只覆盖识别到的字段
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use crate::domain::{MinutesKind, ProjectForm};
use crate::engine::{CommonFields, CommonFieldsCalculator, FieldMirror, MinutesComposer, MinutesDocument};
use crate::importer::{FormPatch, ParsedPaste, PasteExtractor, PasteSource, PatchBuilder, RecordIo};
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// 粘贴填充结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasteOutcome {
    /// 成功填充的项数
    pub filled: usize,
    /// 因镜像联动而额外更新的字段
    pub mirrored: Vec<String>,
}

/// 纪要助手API
pub struct MinutesApi {
    config: AppConfig,
    mirror: FieldMirror,
}

impl MinutesApi {
    pub fn new(config: AppConfig) -> Self {
        Self::with_mirror(config, FieldMirror::standard())
    }

    pub fn with_mirror(config: AppConfig, mirror: FieldMirror) -> Self {
        Self { config, mirror }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ==========================================
    // 纪要生成
    // ==========================================

    pub fn compose(&self, kind: MinutesKind, form: &ProjectForm) -> MinutesDocument {
        MinutesComposer::compose(kind, form)
    }

    /// 按名称生成（英文标识或中文会议名）
    pub fn compose_named(&self, kind: &str, form: &ProjectForm) -> ApiResult<MinutesDocument> {
        let kind = MinutesKind::parse(kind).ok_or_else(|| {
            ApiError::InvalidInput(format!(
                "未知纪要类型 {}（可选: opportunity / bidding / kickoff）",
                kind
            ))
        })?;
        Ok(self.compose(kind, form))
    }

    pub fn compose_all(&self, form: &ProjectForm) -> Vec<MinutesDocument> {
        MinutesKind::ALL
            .iter()
            .map(|kind| self.compose(*kind, form))
            .collect()
    }

    pub fn common_fields(&self, form: &ProjectForm) -> CommonFields {
        CommonFieldsCalculator::compute(&form.fields, &form.delivery)
    }

    // ==========================================
    // 粘贴识别
    // ==========================================

    pub fn parse_paste(&self, text: &str) -> ParsedPaste {
        PasteExtractor::new(&self.config.extractor).extract(text)
    }

    pub fn paste_patch(&self, text: &str) -> FormPatch {
        PatchBuilder::build(&self.parse_paste(text))
    }

    /// 识别粘贴文本并合并进表单，识别到的字段同时同步到镜像字段
    #[instrument(skip_all)]
    pub fn apply_paste(&self, form: &mut ProjectForm, text: &str) -> PasteOutcome {
        let patch = self.paste_patch(text);
        let mirrored: BTreeSet<String> = self
            .mirror
            .apply_and_propagate(&mut form.fields, &patch.record)
            .into_iter()
            .collect();

        info!(filled = patch.filled, "粘贴识别已填充");
        PasteOutcome {
            filled: patch.filled,
            mirrored: mirrored.into_iter().collect(),
        }
    }

    /// 从来源读取并填充；来源无数据时返回 None
    pub async fn paste_from(
        &self,
        source: &dyn PasteSource,
        form: &mut ProjectForm,
    ) -> Option<PasteOutcome> {
        let text = source.read_text().await?;
        Some(self.apply_paste(form, &text))
    }

    /// 写入单个字段并联动镜像字段
    pub fn set_field(&self, form: &mut ProjectForm, key: &str, value: &str) -> Vec<String> {
        self.mirror.set_and_propagate(&mut form.fields, key, value)
    }

    // ==========================================
    // 导入/导出
    // ==========================================

    pub fn import_file(&self, path: &Path) -> ApiResult<ProjectForm> {
        Ok(RecordIo::read_file(path)?)
    }

    pub fn import_json(&self, text: &str) -> ApiResult<ProjectForm> {
        Ok(RecordIo::from_json_str(text)?)
    }

    pub fn export_json(&self, form: &ProjectForm) -> ApiResult<String> {
        Ok(RecordIo::to_json_string(form)?)
    }

    /// 以时间戳文件名导出到目录
    pub fn export_to_dir(&self, form: &ProjectForm, dir: &Path) -> ApiResult<PathBuf> {
        if !dir.is_dir() {
            return Err(ApiError::InvalidInput(format!(
                "导出目录不存在: {}",
                dir.display()
            )));
        }
        Ok(RecordIo::write_to_dir(form, dir, Local::now())?)
    }
}

impl Default for MinutesApi {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
