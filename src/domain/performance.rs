// ==========================================
// 业务流程再造建议系统 - 绩效领域模型
// ==========================================
// 输入表头: UnitsProduced / Defects / CycleTime / DowntimeHours
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// PerformanceRecord - 单期绩效记录
// ==========================================
// 一行对应一个统计周期,加载后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub units_produced: i64,      // 产量 (件)
    pub defects: i64,             // 缺陷数
    pub cycle_time_minutes: f64,  // 周期时间 (分钟)
    pub downtime_hours: f64,      // 停机时间 (小时)
}

impl PerformanceRecord {
    pub fn new(
        units_produced: i64,
        defects: i64,
        cycle_time_minutes: f64,
        downtime_hours: f64,
    ) -> Self {
        Self {
            units_produced,
            defects,
            cycle_time_minutes,
            downtime_hours,
        }
    }
}

// ==========================================
// PerformanceSummary - 汇总指标
// ==========================================
// 每次运行重新计算,不持久化
// 注意: defect_rate = 缺陷总数 / 记录条数（按周期,不按产量）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub avg_cycle_time: f64,    // 平均周期时间 (分钟)
    pub defect_rate: f64,       // 每周期平均缺陷数
    pub machine_downtime: f64,  // 停机时间合计 (小时)
    pub throughput: i64,        // 产量合计
}

/// 汇总指标的文本表示（嵌入提示词与报告,数值不做舍入）
impl fmt::Display for PerformanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Average Cycle Time: {} mins", self.avg_cycle_time)?;
        writeln!(f, "- Defect Rate: {}", self.defect_rate)?;
        writeln!(f, "- Machine Downtime: {} hours", self.machine_downtime)?;
        write!(f, "- Throughput: {} units", self.throughput)
    }
}
