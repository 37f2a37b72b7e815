// ==========================================
// 业务流程再造建议系统 - 补全服务错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("补全服务请求失败: {0}")]
    Http(String),

    #[error("补全服务返回错误状态 ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("补全服务响应格式错误: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Http(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
