// ==========================================
// 项目会议纪要助手 - 公共字段计算
// ==========================================
// 职责: 三类纪要共享的派生量
// 输入: FieldRecord + 交付明细表
// 输出: CommonFields (预算万元/外采占比/牵头事业部/铁三角与交付汇总)
// ==========================================

use crate::domain::delivery::{DeliveryDetailRow, DeliveryTable};
use crate::domain::fields;
use crate::domain::record::FieldRecord;
use crate::domain::types::SINGLE_CAPACITY;
use crate::engine::coercion::{fixed2, to_float};
use crate::engine::role_parser::RoleAssignmentParser;
use serde::Serialize;
use tracing::instrument;

const UNKNOWN_DEPARTMENT: &str = "【未知事业部】";
const YUAN_PER_WAN: f64 = 10_000.0;

// ==========================================
// CommonFields - 公共派生字段
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonFields {
    pub budget_wan: f64,
    pub procurement_wan: f64,
    /// 外采金额 / 项目预算；预算为 0 时恒为 0
    pub procurement_ratio: f64,
    pub lead_department: String,
    pub role_summary_text: String,
    pub assist_departments_text: String,
    pub delivery_detail_text: String,
}

// ==========================================
// CommonFieldsCalculator - 公共字段计算器
// ==========================================
pub struct CommonFieldsCalculator;

impl CommonFieldsCalculator {
    #[instrument(skip_all)]
    pub fn compute(record: &FieldRecord, delivery: &DeliveryTable) -> CommonFields {
        let budget_wan = to_float(record.get(fields::BUDGET_AMOUNT)) / YUAN_PER_WAN;
        let procurement_wan = to_float(record.get(fields::PROCUREMENT_AMOUNT)) / YUAN_PER_WAN;
        let procurement_ratio = if budget_wan != 0.0 {
            procurement_wan / budget_wan
        } else {
            0.0
        };

        let iron_triangle = record.raw(fields::IRON_TRIANGLE);
        let lead_department = RoleAssignmentParser::lead_department(iron_triangle)
            .unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string());
        let role_summary_text = RoleAssignmentParser::summary(record.get(fields::IRON_TRIANGLE));

        let filled: Vec<&DeliveryDetailRow> = delivery.filled_rows().collect();
        let multi_capacity = record.get(fields::CAPACITY_TYPE) != Some(SINGLE_CAPACITY);

        let (assist_departments_text, delivery_detail_text) = if multi_capacity && !filled.is_empty()
        {
            (assist_departments(&filled), delivery_details(&filled))
        } else {
            (String::new(), String::new())
        };

        CommonFields {
            budget_wan,
            procurement_wan,
            procurement_ratio,
            lead_department,
            role_summary_text,
            assist_departments_text,
            delivery_detail_text,
        }
    }
}

/// 协助交付事业部汇总，例: "云网事业部、智呼事业部协助交付。"
fn assist_departments(rows: &[&DeliveryDetailRow]) -> String {
    let depts: Vec<&str> = rows
        .iter()
        .filter(|row| !row.role.is_lead())
        .map(|row| row.department.trim())
        .collect();

    if depts.is_empty() {
        String::new()
    } else {
        format!("{}协助交付。", depts.join("、"))
    }
}

/// 交付明细枚举，每项以 "N）" 开头，"；\n" 分隔，句号结尾
fn delivery_details(rows: &[&DeliveryDetailRow]) -> String {
    let items: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| format!("{}）{}", index + 1, delivery_item(row)))
        .collect();

    format!("\n{}。", items.join("；\n"))
}

fn delivery_item(row: &DeliveryDetailRow) -> String {
    let mut part = row.department.trim().to_string();

    let deliverable = row.deliverable.trim();
    if !deliverable.is_empty() {
        part.push_str(&format!("负责交付{}", deliverable));
    }

    let budget = to_float(Some(&row.budget_wan));
    if budget > 0.0 {
        part.push_str(&format!("，预算{}万元", fixed2(budget)));
    }

    let manager = row.manager.trim();
    if !manager.is_empty() {
        part.push_str(&format!("，{}是{}", row.role.manager_title(), manager));
    }

    part
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> FieldRecord {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn fill_row(table: &mut DeliveryTable, index: usize, dept: &str, manager: &str, deliverable: &str, budget: &str) {
        let row = table.row_mut(index).unwrap();
        row.department = dept.to_string();
        row.manager = manager.to_string();
        row.deliverable = deliverable.to_string();
        row.budget_wan = budget.to_string();
    }

    #[test]
    fn test_budget_and_ratio() {
        let common = CommonFieldsCalculator::compute(
            &record(&[("budgetAmount", "1000000"), ("procurementAmount", "250000")]),
            &DeliveryTable::standard(),
        );
        assert_eq!(common.budget_wan, 100.0);
        assert_eq!(common.procurement_wan, 25.0);
        assert_eq!(common.procurement_ratio, 0.25);
    }

    #[test]
    fn test_zero_budget_guards_ratio() {
        let common = CommonFieldsCalculator::compute(
            &record(&[("budgetAmount", "0"), ("procurementAmount", "500000")]),
            &DeliveryTable::standard(),
        );
        assert_eq!(common.procurement_ratio, 0.0);

        let common = CommonFieldsCalculator::compute(&FieldRecord::new(), &DeliveryTable::standard());
        assert_eq!(common.budget_wan, 0.0);
        assert_eq!(common.procurement_ratio, 0.0);
        assert_eq!(common.lead_department, "【未知事业部】");
    }

    #[test]
    fn test_lead_department_from_iron_triangle() {
        let common = CommonFieldsCalculator::compute(
            &record(&[("ironTriangleInput", "项目经理：张三(云网事业部)")]),
            &DeliveryTable::standard(),
        );
        assert_eq!(common.lead_department, "云网事业部");
        assert!(common.role_summary_text.starts_with("项目经理是张三(云网事业部)"));
    }

    #[test]
    fn test_delivery_summaries() {
        let mut table = DeliveryTable::standard();
        fill_row(&mut table, 0, "云网事业部", "张三", "网络改造", "80");
        fill_row(&mut table, 1, "智呼事业部", "", "", "0");
        fill_row(&mut table, 3, "IT系统事业部", "李四", "", "12.5");

        let common = CommonFieldsCalculator::compute(&record(&[("capacityType", "多产能")]), &table);

        assert_eq!(common.assist_departments_text, "智呼事业部、IT系统事业部协助交付。");
        assert_eq!(
            common.delivery_detail_text,
            "\n1）云网事业部负责交付网络改造，预算80.00万元，项目经理是张三；\n2）智呼事业部；\n3）IT系统事业部，预算12.50万元，子项目经理是李四。"
        );
    }

    #[test]
    fn test_single_capacity_suppresses_delivery_summaries() {
        let mut table = DeliveryTable::standard();
        fill_row(&mut table, 0, "云网事业部", "张三", "网络改造", "80");
        fill_row(&mut table, 1, "智呼事业部", "", "", "");

        let common = CommonFieldsCalculator::compute(&record(&[("capacityType", "单产能")]), &table);
        assert_eq!(common.assist_departments_text, "");
        assert_eq!(common.delivery_detail_text, "");
    }

    #[test]
    fn test_lead_only_has_no_assist_text() {
        let mut table = DeliveryTable::standard();
        fill_row(&mut table, 0, "云网事业部", "", "", "");

        let common = CommonFieldsCalculator::compute(&FieldRecord::new(), &table);
        assert_eq!(common.assist_departments_text, "");
        assert_eq!(common.delivery_detail_text, "\n1）云网事业部。");
    }
}
