// ==========================================
// 业务流程再造建议系统 - API层错误类型
// ==========================================
// 职责: 将各层技术错误归并为面向展示层的错误分类
// 分类: 输入缺失 / 数据为空 / 服务错误 / 写入错误
// ==========================================

use crate::config::ConfigError;
use crate::engine::{EngineError, PipelineError};
use crate::importer::ImportError;
use crate::llm::ServiceError;
use crate::report::WriteError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    /// 必需文件不存在（致命）
    #[error("输入文件缺失: {0}")]
    MissingInput(String),

    /// 绩效表无有效数据行（致命）
    #[error("绩效数据为空: 至少需要一条有效记录")]
    EmptyInput,

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("文件导入失败: {0}")]
    ImportError(String),

    // ==========================================
    // 外部服务错误
    // ==========================================
    #[error("补全服务错误: {0}")]
    Service(#[from] ServiceError),

    // ==========================================
    // 输出错误
    // ==========================================
    #[error("报告写入错误: {0}")]
    Write(#[from] WriteError),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(path) => ApiError::MissingInput(path),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::EmptyInput => ApiError::EmptyInput,
            EngineError::InvalidInput(msg) => ApiError::InvalidInput(msg),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Import(e) => e.into(),
            PipelineError::Engine(e) => e.into(),
            PipelineError::Service(e) => ApiError::Service(e),
            PipelineError::Write(e) => ApiError::Write(e),
        }
    }
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
