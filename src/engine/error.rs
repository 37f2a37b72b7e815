// ==========================================
// 业务流程再造建议系统 - 引擎层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 绩效记录为空（均值与缺陷率无定义）
    #[error("绩效数据为空: 至少需要一条有效记录")]
    EmptyInput,

    #[error("无效输入: {0}")]
    InvalidInput(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
