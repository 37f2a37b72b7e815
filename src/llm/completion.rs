// ==========================================
// 业务流程再造建议系统 - 补全服务接口
// ==========================================
// 用途: 发送提示词,接收文本
// 实现者: HttpCompletionClient（测试中注入桩实现）
// ==========================================

use crate::llm::error::ServiceResult;
use async_trait::async_trait;

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// 单次补全调用
    ///
    /// # 返回
    /// - Ok(String): 服务返回的原始文本
    /// - Err(ServiceError): 网络错误、非成功状态或响应格式错误（不重试）
    async fn complete(&self, prompt: &str) -> ServiceResult<String>;

    /// 模型标识（写入报告元信息）
    fn model_name(&self) -> &str;
}
