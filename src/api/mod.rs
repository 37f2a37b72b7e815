// ==========================================
// 业务流程再造建议系统 - API 层
// ==========================================
// 职责: 面向命令行/展示层的业务接口
// ==========================================

pub mod error;
pub mod report_api;

pub use error::{ApiError, ApiResult};
pub use report_api::ReportApi;
