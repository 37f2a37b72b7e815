// ==========================================
// 业务流程再造建议系统 - 图表数据
// ==========================================
// 职责: 汇总指标 → 柱状图数据（交给外部图表渲染器）
// ==========================================

use crate::domain::performance::PerformanceSummary;
use crate::domain::report::{ChartBar, ChartData};
use crate::engine::rules::{
    CYCLE_TIME_BENCHMARK_MINUTES, DEFECT_RATE_THRESHOLD, DOWNTIME_THRESHOLD_HOURS,
};

pub fn build_chart_data(summary: &PerformanceSummary) -> ChartData {
    ChartData {
        title: "Performance Summary".to_string(),
        bars: vec![
            ChartBar {
                label: "Average Cycle Time".to_string(),
                value: summary.avg_cycle_time,
                unit: "mins".to_string(),
                threshold: Some(CYCLE_TIME_BENCHMARK_MINUTES),
            },
            ChartBar {
                label: "Defect Rate".to_string(),
                value: summary.defect_rate,
                unit: "defects/period".to_string(),
                threshold: Some(DEFECT_RATE_THRESHOLD),
            },
            ChartBar {
                label: "Machine Downtime".to_string(),
                value: summary.machine_downtime,
                unit: "hours".to_string(),
                threshold: Some(DOWNTIME_THRESHOLD_HOURS),
            },
            ChartBar {
                label: "Throughput".to_string(),
                value: summary.throughput as f64,
                unit: "units".to_string(),
                threshold: None,
            },
        ],
    }
}
