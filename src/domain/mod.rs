// ==========================================
// 业务流程再造建议系统 - 领域模型层
// ==========================================
// 职责: 定义绩效记录、汇总指标、低效标记、报告实体
// 红线: 不含文件读取逻辑,不含网络调用
// ==========================================

pub mod inefficiency;
pub mod performance;
pub mod report;

// 重导出核心类型
pub use inefficiency::InefficiencyFlag;
pub use performance::{PerformanceRecord, PerformanceSummary};
pub use report::{
    ChartBar, ChartData, ProcessText, Recommendation, ReportContext, ReportDocument, RunMeta,
};
