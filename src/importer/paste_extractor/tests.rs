// ==========================================
// 粘贴识别 - 单元测试
// ==========================================

use super::*;

fn extract(text: &str) -> ParsedPaste {
    let config = ExtractorConfig::default();
    PasteExtractor::new(&config).extract(text)
}

#[test]
fn test_empty_input_recovers_nothing() {
    assert!(extract("").is_empty());
    assert!(extract("   \n\n\t\n").is_empty());
    assert!(extract("无关内容\n再来一行").is_empty());
}

#[test]
fn test_budget_found_three_lines_below_header() {
    let text = "项目预算\n（含税，单位：元）\n暂定\n1,234,567.89元\n项目名称：智慧园区";
    let parsed = extract(text);
    assert_eq!(parsed.get(PasteField::Budget), Some("1,234,567.89元"));
    assert_eq!(parsed.get(PasteField::ProjectName), Some("智慧园区"));
}

#[test]
fn test_budget_inline_value() {
    let parsed = extract("项目预算：300万元");
    assert_eq!(parsed.get(PasteField::Budget), Some("300万元"));
}

#[test]
fn test_budget_scan_skips_false_header_and_stops_at_real_header() {
    let parsed = extract("项目预算\n合同金额：\n软件金额：\n880000");
    assert_eq!(parsed.get(PasteField::Budget), Some("880000"));

    let parsed = extract("项目预算\n项目名称：A\n880000");
    assert_eq!(parsed.get(PasteField::Budget), None);
}

#[test]
fn test_budget_scan_window_is_bounded() {
    let mut text = String::from("项目预算\n");
    for _ in 0..8 {
        text.push_str("说明文字\n");
    }
    text.push_str("500000\n");
    assert_eq!(extract(&text).get(PasteField::Budget), None);
}

#[test]
fn test_business_code_raw_capture() {
    let parsed = extract("商机编号：ABC-123 合同编号：XYZ");
    assert_eq!(parsed.get(PasteField::BusinessCode), Some("ABC-123 合同编号：XYZ"));

    // mss 行不是商机编号
    let parsed = extract("mss商机编号：M-1");
    assert_eq!(parsed.get(PasteField::BusinessCode), None);

    let parsed = extract("商机编号\nSJ-2024-001");
    assert_eq!(parsed.get(PasteField::BusinessCode), Some("SJ-2024-001"));
}

#[test]
fn test_margins() {
    let parsed = extract("项目毛利率 32.5%\n净利润率：-3%");
    assert_eq!(parsed.get(PasteField::GrossMargin), Some("32.5%"));
    assert_eq!(parsed.get(PasteField::NetMargin), Some("-3%"));

    let parsed = extract("毛利率：\n约三成");
    assert_eq!(parsed.get(PasteField::GrossMargin), Some("约三成"));
}

#[test]
fn test_construction_content_multi_line() {
    let text = "建设内容：智慧园区平台\n1、安防子系统\n2.能耗子系统\n整体联调\n项目预算：100万\n";
    let parsed = extract(text);
    assert_eq!(
        parsed.get(PasteField::Content),
        Some("智慧园区平台\n1、安防子系统\n2.能耗子系统\n整体联调")
    );
    // 结束行仍被分派
    assert_eq!(parsed.get(PasteField::Budget), Some("100万"));
}

#[test]
fn test_content_block_stops_at_key_line() {
    let parsed = extract("建设内容\n平台建设\n铁三角\n项目经理：张三(研发部)");
    assert_eq!(parsed.get(PasteField::Content), Some("平台建设"));
    assert_eq!(parsed.get(PasteField::ProjectManager), Some("张三(研发部)"));
}

#[test]
fn test_content_block_consumes_matching_lines() {
    // 被吞入建设内容的行不再分派
    let parsed = extract("建设内容\n签约客户是某局\n");
    assert_eq!(parsed.get(PasteField::Content), Some("签约客户是某局"));
    assert_eq!(parsed.get(PasteField::Client), None);
}

#[test]
fn test_procurement_situation_runs_to_end() {
    let parsed = extract("项目后向采购基本情况：\n采购服务器\n采购软件许可");
    assert_eq!(
        parsed.get(PasteField::ProcurementSituation),
        Some("采购服务器\n采购软件许可")
    );
}

#[test]
fn test_empty_block_is_dropped() {
    let parsed = extract("建设内容：\n项目名称：A");
    assert!(!parsed.contains(PasteField::Content));
    assert_eq!(parsed.get(PasteField::ProjectName), Some("A"));
}

#[test]
fn test_external_budget_lookahead() {
    let parsed = extract("外部采购预算\n收入结构 1:1\n200,000");
    assert_eq!(parsed.get(PasteField::ExtBudget), Some("200,000"));

    let parsed = extract("外部采购金额\n无\n无\n无\n5000");
    assert_eq!(parsed.get(PasteField::ExtBudget), None);
}

#[test]
fn test_simple_fields() {
    let text = "项目名称：智慧园区\n项目ID名称：X\n客户名称：某市政府\n项目级别：A级\n\
                产品能力：多产能\n是否需要后向采购：是\n业务类型：集成\n签约类型：公开招标采购\n\
                投标主体：省公司\n服务期：3年\n销售经理：李四(市场部)\n售前解方经理：王五(方案部)\n\
                交付经理：赵六(交付部)";
    let parsed = extract(text);
    assert_eq!(parsed.get(PasteField::ProjectName), Some("智慧园区"));
    assert_eq!(parsed.get(PasteField::Client), Some("某市政府"));
    assert_eq!(parsed.get(PasteField::Level), Some("A级"));
    assert_eq!(parsed.get(PasteField::CapacityType), Some("多产能"));
    assert_eq!(parsed.get(PasteField::Procurement), Some("是"));
    assert_eq!(parsed.get(PasteField::BusinessType), Some("集成"));
    assert_eq!(parsed.get(PasteField::BiddingMethod), Some("公开招标采购"));
    assert_eq!(parsed.get(PasteField::BiddingEntity), Some("省公司"));
    assert_eq!(parsed.get(PasteField::Duration), Some("3年"));
    assert_eq!(parsed.get(PasteField::SalesManager), Some("李四(市场部)"));
    assert_eq!(parsed.get(PasteField::SolutionManager), Some("王五(方案部)"));
    assert_eq!(parsed.get(PasteField::DeliveryManager), Some("赵六(交付部)"));
}

#[test]
fn test_long_level_is_rejected() {
    let parsed = extract("项目级别：根据含税的项目预算金额划分的级别说明");
    assert!(!parsed.contains(PasteField::Level));
}

#[test]
fn test_last_capture_wins_and_empty_is_filtered() {
    let parsed = extract("项目名称：旧名称\n项目名称：新名称");
    assert_eq!(parsed.get(PasteField::ProjectName), Some("新名称"));

    // 最后一次命中为空值时，字段整体缺省
    let parsed = extract("项目名称：旧名称\n建设内容：\n项目名称");
    assert!(!parsed.contains(PasteField::ProjectName));
}

#[test]
fn test_custom_budget_window() {
    let config = ExtractorConfig {
        budget_lookahead: 1,
        ..ExtractorConfig::default()
    };
    let parsed = PasteExtractor::new(&config).extract("项目预算\n说明\n100");
    assert_eq!(parsed.get(PasteField::Budget), None);
}

#[test]
fn test_numbered_key_lines_stay_inside_block_and_placeholder_ends_it() {
    let parsed = extract("建设内容\n1、一期：\n2、二期\n请选择\n项目预算\n500000");
    assert_eq!(parsed.get(PasteField::Content), Some("1、一期：\n2、二期"));
    assert_eq!(parsed.get(PasteField::Budget), Some("500000"));

    let parsed = extract("项目预算\n请选择\n500000");
    assert_eq!(parsed.get(PasteField::Budget), None);
}
