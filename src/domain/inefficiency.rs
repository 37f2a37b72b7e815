// ==========================================
// 业务流程再造建议系统 - 低效标记
// ==========================================
// 固定三类标记,展示顺序: 缺陷率 → 停机 → 周期时间
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InefficiencyFlag {
    HighDefectRate,     // 规则1: 缺陷率过高
    ExcessiveDowntime,  // 规则2: 停机过长
    SlowCycleTime,      // 规则3: 周期时间超基准
}

impl InefficiencyFlag {
    /// 规范顺序（与规则编号一致）
    pub const ALL: [InefficiencyFlag; 3] = [
        InefficiencyFlag::HighDefectRate,
        InefficiencyFlag::ExcessiveDowntime,
        InefficiencyFlag::SlowCycleTime,
    ];

    /// 标记文本（逐字写入提示词和报告）
    pub fn message(&self) -> &'static str {
        match self {
            InefficiencyFlag::HighDefectRate => "High defect rate in assembly line.",
            InefficiencyFlag::ExcessiveDowntime => "Excessive machine downtime.",
            InefficiencyFlag::SlowCycleTime => {
                "Cycle time exceeds industry benchmark (120 mins)."
            }
        }
    }
}

impl fmt::Display for InefficiencyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
