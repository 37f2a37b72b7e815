// ==========================================
// 业务流程再造建议系统 - 补全服务层
// ==========================================
// 职责: 外部文本补全服务的窄接口与 HTTP 实现
// ==========================================

pub mod completion;
pub mod error;
pub mod http_client;

pub use completion::CompletionService;
pub use error::{ServiceError, ServiceResult};
pub use http_client::{parse_completion_body, HttpCompletionClient};
