// ==========================================
// 业务流程再造建议系统 - 低效规则引擎
// ==========================================
// 职责: 汇总指标 → 低效标记
// 红线: 三条规则独立评估,不短路,严格大于
// 阈值为固定常量,不可配置
// ==========================================

use crate::domain::inefficiency::InefficiencyFlag;
use crate::domain::performance::PerformanceSummary;
use tracing::debug;

/// 规则1: 缺陷率阈值
pub const DEFECT_RATE_THRESHOLD: f64 = 0.05;
/// 规则2: 停机时间阈值（小时）
pub const DOWNTIME_THRESHOLD_HOURS: f64 = 100.0;
/// 规则3: 周期时间行业基准（分钟）
pub const CYCLE_TIME_BENCHMARK_MINUTES: f64 = 120.0;

// ==========================================
// InefficiencyRuleEngine - 低效规则引擎
// ==========================================
pub struct InefficiencyRuleEngine {
    // 无状态引擎
}

impl InefficiencyRuleEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 评估全部规则
    ///
    /// # 返回
    /// 命中的标记,按规范顺序（缺陷率 → 停机 → 周期时间）
    pub fn evaluate(&self, summary: &PerformanceSummary) -> Vec<InefficiencyFlag> {
        let flags: Vec<InefficiencyFlag> = InefficiencyFlag::ALL
            .iter()
            .copied()
            .filter(|flag| self.is_triggered(*flag, summary))
            .collect();

        debug!(flag_count = flags.len(), "低效规则评估完成");
        flags
    }

    /// 单条规则判定
    pub fn is_triggered(&self, flag: InefficiencyFlag, summary: &PerformanceSummary) -> bool {
        match flag {
            InefficiencyFlag::HighDefectRate => summary.defect_rate > DEFECT_RATE_THRESHOLD,
            InefficiencyFlag::ExcessiveDowntime => {
                summary.machine_downtime > DOWNTIME_THRESHOLD_HOURS
            }
            InefficiencyFlag::SlowCycleTime => {
                summary.avg_cycle_time > CYCLE_TIME_BENCHMARK_MINUTES
            }
        }
    }
}

impl Default for InefficiencyRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
