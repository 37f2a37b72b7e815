// ==========================================
// 指标汇总与规则评估集成测试
// ==========================================
// 测试目标: 样例数据集（1-6 月）的汇总值与低效标记
// ==========================================

mod test_helpers;

use bpr_agent::engine::{EngineError, InefficiencyRuleEngine, MetricsReducer};
use bpr_agent::importer::{ImportError, InputLoader};
use bpr_agent::InefficiencyFlag;
use test_helpers::{fixture, temp_file_with};

#[test]
fn test_sample_dataset_summary() {
    let records = InputLoader::default()
        .load_performance(&fixture("sample_performance.csv"))
        .expect("Failed to load sample dataset");
    assert_eq!(records.len(), 6);

    let summary = MetricsReducer::new().summarize(&records).unwrap();

    assert!((summary.avg_cycle_time - 749.0 / 6.0).abs() < 1e-9);
    assert!((summary.avg_cycle_time - 124.8333).abs() < 1e-4);
    assert!((summary.defect_rate - 3200.0 / 6.0).abs() < 1e-9);
    assert!((summary.defect_rate - 533.3333).abs() < 1e-4);
    assert!((summary.machine_downtime - 155.0).abs() < 1e-9);
    assert_eq!(summary.throughput, 60900);
}

#[test]
fn test_sample_dataset_fires_all_flags() {
    let records = InputLoader::default()
        .load_performance(&fixture("sample_performance.csv"))
        .unwrap();
    let summary = MetricsReducer::new().summarize(&records).unwrap();

    let flags = InefficiencyRuleEngine::new().evaluate(&summary);

    assert_eq!(
        flags,
        vec![
            InefficiencyFlag::HighDefectRate,
            InefficiencyFlag::ExcessiveDowntime,
            InefficiencyFlag::SlowCycleTime,
        ]
    );
}

#[test]
fn test_healthy_line_has_no_flags() {
    let sheet = temp_file_with(
        ".csv",
        "UnitsProduced,Defects,CycleTime,DowntimeHours\n\
         5000,0,90,5\n\
         5200,0,95,4\n",
    );
    let records = InputLoader::default().load_performance(sheet.path()).unwrap();
    let summary = MetricsReducer::new().summarize(&records).unwrap();

    assert!(InefficiencyRuleEngine::new().evaluate(&summary).is_empty());
}

#[test]
fn test_blank_rows_are_not_records() {
    let sheet = temp_file_with(
        ".csv",
        "UnitsProduced,Defects,CycleTime,DowntimeHours\n\
         ,,,\n\
         100,2,60,1\n\
         ,,,\n",
    );
    let records = InputLoader::default().load_performance(sheet.path()).unwrap();
    assert_eq!(records.len(), 1);

    let summary = MetricsReducer::new().summarize(&records).unwrap();
    assert!((summary.defect_rate - 2.0).abs() < 1e-9);
}

#[test]
fn test_excel_sheet_matches_csv_sheet() {
    let loader = InputLoader::default();
    let from_xlsx = loader
        .load_performance(&fixture("sample_performance.xlsx"))
        .expect("Failed to load Excel dataset");
    let from_csv = loader
        .load_performance(&fixture("sample_performance.csv"))
        .unwrap();

    // Excel 数值单元格为浮点数,整数列仍按整数读入
    assert_eq!(from_xlsx, from_csv);

    let summary = MetricsReducer::new().summarize(&from_xlsx).unwrap();
    assert_eq!(summary.throughput, 60900);
    assert!((summary.machine_downtime - 155.0).abs() < 1e-9);
    assert_eq!(InefficiencyRuleEngine::new().evaluate(&summary).len(), 3);
}

#[test]
fn test_empty_excel_sheet_is_empty_input() {
    let records = InputLoader::default()
        .load_performance(&fixture("empty_sheet.xlsx"))
        .unwrap();
    assert!(records.is_empty());

    let result = MetricsReducer::new().summarize(&records);
    assert_eq!(result, Err(EngineError::EmptyInput));
}

#[test]
fn test_out_of_range_units_are_rejected_on_load() {
    let sheet = temp_file_with(
        ".csv",
        "UnitsProduced,Defects,CycleTime,DowntimeHours\n1e30,0,60,1\n",
    );
    let result = InputLoader::default().load_performance(sheet.path());
    assert!(matches!(
        result,
        Err(ImportError::TypeConversionError { row: 1, .. })
    ));
}
