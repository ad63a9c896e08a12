// ==========================================
// 纪要数据导入/导出集成测试
// ==========================================
// 职责: 验证 表单 → JSON 文件 → 表单 的往返一致性与文件命名
// ==========================================


use meeting_minutes::{logging, ApiError, MinutesApi, MinutesKind};
use std::path::Path;
use tempfile::TempDir;
use test_helpers::{write_temp_record, write_temp_text, FormBuilder};

#[test]
fn test_file_round_trip_reproduces_form_and_minutes() {
    let api = MinutesApi::default();
    let form = FormBuilder::sample()
        .field("TB_biddingMethod", "公开招标")
        .field("TB_bidOpeningDate", "2025-03-18")
        .delivery_row(0, "云网事业部", "平台建设", "60", "张三")
        .delivery_row(1, "智呼事业部", "话务系统", "20", "孙八")
        .build();

    let file = write_temp_record(&form);
    let restored = api.import_file(file.path()).unwrap();

    assert_eq!(restored.fields, form.fields);
    assert_eq!(restored.delivery, form.delivery);
    for kind in MinutesKind::ALL {
        assert_eq!(api.compose(kind, &restored), api.compose(kind, &form));
    }
}

#[test]
fn test_round_trip_keeps_assist_only_delivery_row() {
    logging::init_test();
    let api = MinutesApi::default();
    let form = FormBuilder::sample()
        .delivery_row(2, "智呼事业部", "话务系统", "20", "钱七")
        .build();
    let before = api.common_fields(&form);
    assert_eq!(before.assist_departments_text, "智呼事业部协助交付。");

    let text = api.export_json(&form).unwrap();
    let restored = api.import_json(&text).unwrap();

    assert_eq!(restored, form);
    assert_eq!(api.common_fields(&restored), before);
    assert_eq!(
        api.compose(MinutesKind::Kickoff, &restored),
        api.compose(MinutesKind::Kickoff, &form)
    );
}

#[test]
fn test_export_to_dir_uses_timestamped_name() {
    let api = MinutesApi::default();
    let dir = TempDir::new().unwrap();
    let form = FormBuilder::new()
        .field("projectName", "园区|平台")
        .field("businessCode", "SJ001")
        .build();

    let path = api.export_to_dir(&form, dir.path()).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().to_string();

    assert!(name.starts_with("园区_平台(SJ001)_"), "{}", name);
    assert!(name.ends_with(".json"));
    // YYYYMMDDHHMM
    let stamp = name.trim_start_matches("园区_平台(SJ001)_").trim_end_matches(".json");
    assert_eq!(stamp.len(), 12);
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));

    let restored = api.import_file(&path).unwrap();
    assert_eq!(restored.fields.get("projectName"), Some("园区|平台"));
}

#[test]
fn test_export_to_missing_dir_is_invalid_input() {
    let api = MinutesApi::default();
    let err = api
        .export_to_dir(&FormBuilder::new().build(), Path::new("/nonexistent/minutes-out"))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_import_database_array_export() {
    let api = MinutesApi::default();
    let file = write_temp_text(
        r#"[{"projectName": "数据库导出项目", "budgetAmount": 2000000, "deliveryDetails": []}]"#,
    );
    let form = api.import_file(file.path()).unwrap();

    assert_eq!(form.fields.get("projectName"), Some("数据库导出项目"));
    let common = api.common_fields(&form);
    assert_eq!(common.budget_wan, 200.0);
    assert_eq!(form.delivery.filled_rows().count(), 0);
}

#[test]
fn test_import_errors_surface_as_api_errors() {
    let api = MinutesApi::default();

    let file = write_temp_text("[]");
    assert!(matches!(api.import_file(file.path()), Err(ApiError::Import(_))));

    let file = write_temp_text("not json");
    assert!(matches!(api.import_file(file.path()), Err(ApiError::Import(_))));

    assert!(matches!(
        api.import_file(Path::new("/nonexistent/record.json")),
        Err(ApiError::Import(_))
    ));
}
