// ==========================================
// 业务流程再造建议系统 - 核心库
// ==========================================
// 技术栈: Rust + tokio + reqwest
// 系统定位: 决策支持系统（建议由外部补全服务生成,人工最终决策）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部文件
pub mod importer;

// 引擎层 - 指标、规则、提示词、编排
pub mod engine;

// 补全服务层 - 外部 LLM
pub mod llm;

// 报告输出层
pub mod report;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 阶段耗时统计
pub mod perf;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    InefficiencyFlag, PerformanceRecord, PerformanceSummary, ProcessText, Recommendation,
    ReportContext, ReportDocument,
};

// 引擎
pub use engine::{
    InefficiencyRuleEngine, MetricsReducer, PromptComposer, ReportOrchestrator, ReportOutcome,
    ReportRequest,
};

// 补全服务
pub use llm::{CompletionService, HttpCompletionClient};

// API
pub use api::{ApiError, ApiResult, ReportApi};

// 配置
pub use config::AppConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Business Process Reengineering Suggestion Agent";
