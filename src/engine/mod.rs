// ==========================================
// 业务流程再造建议系统 - 引擎层
// ==========================================
// 职责: 指标汇总、规则评估、提示词组装、流水线编排
// 红线: 汇总/规则/提示词均为纯函数,不做 I/O
// ==========================================

pub mod error;
pub mod metrics;
pub mod orchestrator;
pub mod prompt;
pub mod rules;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use metrics::MetricsReducer;
pub use orchestrator::{
    new_run_id, Analysis, PipelineError, PipelineResult, ReportOrchestrator, ReportOutcome,
    ReportRequest,
};
pub use prompt::{render_flags, PromptComposer, REQUESTED_SECTIONS};
pub use rules::{
    InefficiencyRuleEngine, CYCLE_TIME_BENCHMARK_MINUTES, DEFECT_RATE_THRESHOLD,
    DOWNTIME_THRESHOLD_HOURS,
};
