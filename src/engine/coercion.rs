// ==========================================
// 项目会议纪要助手 - 数值/日期/文本规整
// ==========================================
// 职责: 安全数值解析、句末标点补全、日期中文化
// 红线: 所有函数均不返回错误，非法输入回落为默认值或原文
// ==========================================

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d", "%Y年%m月%d日"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// 解析浮点数，失败时返回 `default`
///
/// 空串、空白、非数字以及 NaN/inf 等非有限值都视为非法
pub fn to_float_or_default(text: Option<&str>, default: f64) -> f64 {
    text.map(str::trim)
        .and_then(|t| t.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// 解析浮点数，失败时返回 0.0
pub fn to_float(text: Option<&str>) -> f64 {
    to_float_or_default(text, 0.0)
}

/// 句末补全句号
///
/// - 空（含纯空白）输入返回空串
/// - 已以 `。` 或 `.` 结尾则原样返回（trim 后）
pub fn ensure_terminal_period(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.ends_with('。') || trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{}。", trimmed)
    }
}

/// 日期转为 "YYYY年M月D日"（月/日不补零）
///
/// 无法识别的输入原样返回
pub fn format_localized_date(date_text: &str) -> String {
    match parse_date(date_text) {
        Some(date) => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        None => date_text.to_string(),
    }
}

fn parse_date(date_text: &str) -> Option<NaiveDate> {
    let value = date_text.trim();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// 保留两位小数（-0 按 0 输出）
pub fn fixed2(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}", value)
}

/// 比例转百分比字符串，保留两位小数，例如 0.25 → "25.00%"
pub fn percent2(ratio: f64) -> String {
    format!("{}%", fixed2(ratio * 100.0))
}
