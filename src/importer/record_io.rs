// ==========================================
// 项目会议纪要助手 - 纪要数据导入/导出
// ==========================================
// 职责: 表单记录 ⇄ 扁平 JSON（字段 ID 为键，交付明细放在 deliveryDetails）
// 红线: 导入只覆盖文件中出现的字段；交付明细按 "类型" 回填固定 8 行，缺类型时按位置
// ==========================================

use crate::domain::fields::{self, DELIVERY_DETAILS};
use crate::domain::{DeliveryDetailRow, DeliveryRole, FieldRecord, ProjectForm};
use crate::importer::error::{ImportError, ImportResult};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

const DEFAULT_FILE_STEM: &str = "纪要数据";
const UNSAFE_FILE_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub struct RecordIo;

impl RecordIo {
    // ==========================================
    // 导出
    // ==========================================

    /// 导出为 JSON 对象，交付明细只包含已选择事业部的行
    pub fn to_value(form: &ProjectForm) -> ImportResult<Value> {
        let mut object = Map::new();
        for (key, value) in form.fields.iter() {
            if key == DELIVERY_DETAILS {
                continue;
            }
            object.insert(key.to_string(), Value::String(value.to_string()));
        }
        let rows: Vec<&DeliveryDetailRow> = form.delivery.filled_rows().collect();
        object.insert(DELIVERY_DETAILS.to_string(), serde_json::to_value(rows)?);
        Ok(Value::Object(object))
    }

    /// 4 空格缩进的 JSON 文本
    pub fn to_json_string(form: &ProjectForm) -> ImportResult<String> {
        let value = Self::to_value(form)?;
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| ImportError::InvalidShape(e.to_string()))
    }

    /// 导出文件名: {项目名称|纪要数据}({商机编号})_{YYYYMMDDHHMM}.json，非法字符替换为 "_"
    pub fn export_file_name(record: &FieldRecord, now: DateTime<Local>) -> String {
        let stem = record.get(fields::PROJECT_NAME).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_FILE_STEM);
        let code = record
            .get(fields::BUSINESS_CODE)
            .filter(|v| !v.is_empty())
            .map(|c| format!("({})", c))
            .unwrap_or_default();
        let name = format!("{}{}_{}.json", stem, code, now.format("%Y%m%d%H%M"));
        name.chars()
            .map(|c| if UNSAFE_FILE_CHARS.contains(&c) { '_' } else { c })
            .collect()
    }

    /// 写入目录，返回文件完整路径
    #[instrument(skip(form))]
    pub fn write_to_dir(form: &ProjectForm, dir: &Path, now: DateTime<Local>) -> ImportResult<PathBuf> {
        let path = dir.join(Self::export_file_name(&form.fields, now));
        std::fs::write(&path, Self::to_json_string(form)?)?;
        info!(path = %path.display(), "纪要数据已导出");
        Ok(path)
    }

    // ==========================================
    // 导入
    // ==========================================

    /// 解析导入 JSON（数组形式取第一个元素）
    pub fn from_json_str(text: &str) -> ImportResult<ProjectForm> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> ImportResult<ProjectForm> {
        let mut form = ProjectForm::default();
        Self::apply_value(&mut form, value)?;
        Ok(form)
    }

    /// 把导入数据合并进已有表单
    ///
    /// 文件中出现的字段覆盖原值；出现 deliveryDetails 时先清空明细再回填
    pub fn apply_value(form: &mut ProjectForm, value: Value) -> ImportResult<()> {
        let object = match value {
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::Object(map)) => map,
                Some(other) => {
                    return Err(ImportError::InvalidShape(format!(
                        "数组首个元素不是对象: {}",
                        json_type(&other)
                    )))
                }
                None => return Err(ImportError::EmptyArray),
            },
            Value::Object(map) => map,
            other => {
                return Err(ImportError::InvalidShape(format!(
                    "顶层应为对象，实际为 {}",
                    json_type(&other)
                )))
            }
        };

        for (key, value) in object {
            if key == DELIVERY_DETAILS {
                Self::apply_delivery(form, value)?;
                continue;
            }
            match scalar_text(&value) {
                Some(text) => form.fields.set(key, text),
                None if value.is_null() => {}
                None => warn!(field = %key, "跳过非标量字段"),
            }
        }
        Ok(())
    }

    fn apply_delivery(form: &mut ProjectForm, value: Value) -> ImportResult<()> {
        let rows = match value {
            Value::Array(rows) => rows,
            Value::Null => return Ok(()),
            other => {
                return Err(ImportError::InvalidShape(format!(
                    "deliveryDetails 应为数组，实际为 {}",
                    json_type(&other)
                )))
            }
        };

        form.delivery.clear();
        for (index, row) in rows.iter().enumerate() {
            let role = row
                .get("类型")
                .and_then(Value::as_str)
                .and_then(|label| DeliveryRole::try_from(label.to_string()).ok());
            let target = match role {
                Some(role) => form.delivery.row_for_mut(role),
                None => form.delivery.row_mut(index),
            };
            let Some(target) = target else {
                warn!(index, "交付明细行无法对应固定行，已忽略");
                continue;
            };
            target.department = cell(row, "事业部");
            target.manager = cell(row, "项目经理");
            target.deliverable = cell(row, "交付内容");
            target.budget_wan = cell(row, "预算（万元）");
        }
        Ok(())
    }

    #[instrument]
    pub fn read_file(path: &Path) -> ImportResult<ProjectForm> {
        let text = std::fs::read_to_string(path)?;
        let form = Self::from_json_str(&text)?;
        info!(fields = form.fields.len(), "纪要数据已导入");
        Ok(form)
    }
}

/// 标量转文本；null、数组、对象返回 None
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn cell(row: &Value, key: &str) -> String {
    row.get(key).and_then(scalar_text).unwrap_or_default()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "布尔值",
        Value::Number(_) => "数字",
        Value::String(_) => "字符串",
        Value::Array(_) => "数组",
        Value::Object(_) => "对象",
    }
}
