// ==========================================
// 业务流程再造建议系统 - 报告 API
// ==========================================
// 职责: 展示层入口,持有配置派生的编排器,归并错误
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use crate::engine::{Analysis, ReportOrchestrator, ReportOutcome, ReportRequest};
use crate::llm::{CompletionService, HttpCompletionClient};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct ReportApi {
    orchestrator: ReportOrchestrator,
}

impl ReportApi {
    /// 注入补全服务（测试或自定义客户端）
    pub fn new(completion: Arc<dyn CompletionService>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            orchestrator: ReportOrchestrator::new(completion, output_dir),
        }
    }

    /// 按配置创建 HTTP 补全客户端
    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        let client = HttpCompletionClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.output_dir.clone()))
    }

    /// 生成报告（完整流水线）
    ///
    /// 非致命问题（如流程图缺失）已在加载阶段记录日志,并随结果返回
    pub async fn generate_report(&self, request: &ReportRequest) -> ApiResult<ReportOutcome> {
        Ok(self.orchestrator.run(request).await?)
    }

    /// 仅分析绩效表（不调用补全服务）
    pub fn analyze(&self, performance_path: &Path) -> ApiResult<Analysis> {
        Ok(self.orchestrator.analyze(performance_path)?)
    }

    /// 预览提示词（不调用补全服务）
    pub fn preview_prompt(&self, process_path: &Path, performance_path: &Path) -> ApiResult<String> {
        let (_, prompt) = self
            .orchestrator
            .prepare_prompt(process_path, performance_path)?;
        Ok(prompt)
    }

    /// 追问（上下文为字符串）
    pub async fn ask_followup(&self, context: &str, question: &str) -> ApiResult<String> {
        Ok(self.orchestrator.ask_followup(context, question).await?)
    }

    /// 追问（上下文来自上一次运行写出的 context.txt）
    pub async fn ask_followup_from_file(
        &self,
        context_path: &Path,
        question: &str,
    ) -> ApiResult<String> {
        if !context_path.exists() {
            return Err(ApiError::MissingInput(context_path.display().to_string()));
        }
        let context = std::fs::read_to_string(context_path)
            .map_err(|e| ApiError::ImportError(format!("{}: {}", context_path.display(), e)))?;
        self.ask_followup(&context, question).await
    }
}
