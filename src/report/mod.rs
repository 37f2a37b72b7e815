// ==========================================
// 业务流程再造建议系统 - 报告输出层
// ==========================================
// 职责: 文本报告、可打印文档、结构化产物与图表数据
// 红线: 每次运行独立目录,写入一次,不追加
// ==========================================

pub mod chart;
pub mod error;
pub mod renderer;
pub mod text_writer;

pub use chart::build_chart_data;
pub use error::{WriteError, WriteResult};
pub use renderer::{
    sanitize_latin1, JsonReportRenderer, MarkdownReportRenderer, ReportRenderer,
    JSON_REPORT_FILE, MARKDOWN_REPORT_FILE,
};
pub use text_writer::{TextReportWriter, CONTEXT_FILE, TEXT_REPORT_FILE};
