// ==========================================
// 业务流程再造建议系统 - 绩效汇总引擎
// ==========================================
// 职责: 绩效记录 → 四项汇总指标
// 输入: 非空、有序的 PerformanceRecord 序列（顺序不影响结果）
// 输出: PerformanceSummary
// ==========================================

use crate::domain::performance::{PerformanceRecord, PerformanceSummary};
use crate::engine::error::{EngineError, EngineResult};

// ==========================================
// MetricsReducer - 绩效汇总引擎
// ==========================================
pub struct MetricsReducer {
    // 无状态引擎
}

impl MetricsReducer {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算汇总指标
    ///
    /// # 规则
    /// - avg_cycle_time = cycle_time_minutes 算术平均
    /// - defect_rate = 缺陷总数 / 记录条数（按周期,不按产量）
    /// - machine_downtime = downtime_hours 合计
    /// - throughput = units_produced 合计
    ///
    /// # 错误
    /// - EngineError::EmptyInput: 记录为空
    /// - EngineError::InvalidInput: 整数合计溢出 i64
    pub fn summarize(&self, records: &[PerformanceRecord]) -> EngineResult<PerformanceSummary> {
        if records.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let count = records.len() as f64;
        let total_cycle_time: f64 = records.iter().map(|r| r.cycle_time_minutes).sum();
        let total_defects = checked_total(records, "Defects", |r| r.defects)?;
        let throughput = checked_total(records, "UnitsProduced", |r| r.units_produced)?;

        Ok(PerformanceSummary {
            avg_cycle_time: total_cycle_time / count,
            defect_rate: total_defects as f64 / count,
            machine_downtime: records.iter().map(|r| r.downtime_hours).sum(),
            throughput,
        })
    }
}

/// 整数列合计,溢出时报错而非回绕
fn checked_total(
    records: &[PerformanceRecord],
    field: &str,
    value: impl Fn(&PerformanceRecord) -> i64,
) -> EngineResult<i64> {
    records
        .iter()
        .map(value)
        .try_fold(0i64, i64::checked_add)
        .ok_or_else(|| EngineError::InvalidInput(format!("{} 合计超出 i64 范围", field)))
}

impl Default for MetricsReducer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PerformanceRecord> {
        vec![
            PerformanceRecord::new(100, 2, 60.0, 1.5),
            PerformanceRecord::new(300, 4, 90.0, 2.5),
        ]
    }

    #[test]
    fn test_summarize_basic() {
        let summary = MetricsReducer::new().summarize(&sample()).unwrap();

        assert_eq!(summary.throughput, 400);
        assert!((summary.avg_cycle_time - 75.0).abs() < 1e-9);
        assert!((summary.defect_rate - 3.0).abs() < 1e-9);
        assert!((summary.machine_downtime - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_defect_rate_is_per_record_not_per_unit() {
        let records = vec![PerformanceRecord::new(1000, 10, 60.0, 0.0)];
        let summary = MetricsReducer::new().summarize(&records).unwrap();

        // 10 / 1 条记录,而非 10 / 1000 件
        assert!((summary.defect_rate - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty_input() {
        let result = MetricsReducer::new().summarize(&[]);
        assert_eq!(result, Err(EngineError::EmptyInput));
    }

    #[test]
    fn test_throughput_overflow_is_invalid_input() {
        let records = vec![
            PerformanceRecord::new(i64::MAX, 0, 60.0, 1.0),
            PerformanceRecord::new(1, 0, 60.0, 1.0),
        ];

        match MetricsReducer::new().summarize(&records) {
            Err(EngineError::InvalidInput(msg)) => assert!(msg.contains("UnitsProduced")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_defects_overflow_is_invalid_input() {
        let records = vec![
            PerformanceRecord::new(10, i64::MAX, 60.0, 1.0),
            PerformanceRecord::new(10, 1, 60.0, 1.0),
        ];

        let result = MetricsReducer::new().summarize(&records);
        assert!(matches!(result, Err(EngineError::InvalidInput(msg)) if msg.contains("Defects")));
    }

    #[test]
    fn test_throughput_is_order_independent() {
        let mut records = sample();
        records.push(PerformanceRecord::new(50, 0, 30.0, 0.0));
        let forward = MetricsReducer::new().summarize(&records).unwrap();

        records.reverse();
        let backward = MetricsReducer::new().summarize(&records).unwrap();

        assert_eq!(forward.throughput, 450);
        assert_eq!(forward.throughput, backward.throughput);
    }

    #[test]
    fn test_defect_rate_monotonic_in_defects() {
        let reducer = MetricsReducer::new();
        let mut records = sample();
        let mut previous = reducer.summarize(&records).unwrap().defect_rate;

        for _ in 0..5 {
            records[0].defects += 3;
            let current = reducer.summarize(&records).unwrap().defect_rate;
            assert!(current >= previous);
            previous = current;
        }
    }
}
