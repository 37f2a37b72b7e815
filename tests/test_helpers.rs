// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试夹具路径、临时输入文件、补全服务桩
// ==========================================
#![allow(dead_code)]

use async_trait::async_trait;
use bpr_agent::llm::{CompletionService, ServiceError, ServiceResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// 初始化测试日志（重复调用无副作用）
pub fn init_test_logging() {
    bpr_agent::logging::init_test();
}

/// 夹具目录下的文件路径
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// 创建带指定扩展名的临时文件
pub fn temp_file_with(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ==========================================
// 补全服务桩
// ==========================================
pub enum StubReply {
    Text(String),
    Status(u16),
}

pub struct StubCompletion {
    reply: StubReply,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: StubReply::Text(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: StubReply::Status(status),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的提示词（按调用顺序）
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, prompt: &str) -> ServiceResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Status(status) => Err(ServiceError::Status {
                status: *status,
                body: "stub failure".to_string(),
            }),
        }
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}
