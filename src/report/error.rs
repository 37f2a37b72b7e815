// ==========================================
// 业务流程再造建议系统 - 报告输出错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("报告写入失败 ({path}): {message}")]
    Io { path: String, message: String },

    #[error("报告序列化失败: {0}")]
    Serialize(String),
}

impl WriteError {
    pub fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        WriteError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WriteError {
    fn from(err: serde_json::Error) -> Self {
        WriteError::Serialize(err.to_string())
    }
}

pub type WriteResult<T> = Result<T, WriteError>;
