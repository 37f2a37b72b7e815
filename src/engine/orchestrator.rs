// ==========================================
// 业务流程再造建议系统 - 报告流水线编排
// ==========================================
// 流程: 输入加载 → 指标汇总 → 规则评估 → 提示词组装 → 补全调用 → 报告写出
// 红线: 直线流水线,每个阶段只执行一次,任何阶段失败立即返回,不重试
// ==========================================

use crate::domain::inefficiency::InefficiencyFlag;
use crate::domain::performance::PerformanceSummary;
use crate::domain::report::{Recommendation, ReportContext, ReportDocument, RunMeta};
use crate::engine::error::EngineError;
use crate::engine::metrics::MetricsReducer;
use crate::engine::prompt::PromptComposer;
use crate::engine::rules::InefficiencyRuleEngine;
use crate::importer::{ImportError, InputLoader};
use crate::llm::{CompletionService, ServiceError};
use crate::perf::StageGuard;
use crate::report::{
    build_chart_data, JsonReportRenderer, MarkdownReportRenderer, ReportRenderer,
    TextReportWriter, WriteError,
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// 流水线错误
// ==========================================
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

// ==========================================
// 请求与结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub process_path: PathBuf,
    pub performance_path: PathBuf,
    pub diagram_path: Option<PathBuf>,
    pub context: ReportContext,
}

/// 仅指标与规则（无网络调用）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub record_count: usize,
    pub summary: PerformanceSummary,
    pub flags: Vec<InefficiencyFlag>,
}

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub run_id: String,
    pub run_dir: PathBuf,
    pub analysis: Analysis,
    pub recommendation: Recommendation,
    pub text_report_path: PathBuf,
    pub context_path: PathBuf,
    pub rendered_paths: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// 运行 ID: 时间戳 + UUID 前 8 位,保证并发运行的输出路径互不相同
pub fn new_run_id(now: &NaiveDateTime) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}_{}", now.format("%Y%m%d_%H%M%S"), &uuid[..8])
}

// ==========================================
// ReportOrchestrator - 流水线编排器
// ==========================================
pub struct ReportOrchestrator {
    loader: InputLoader,
    reducer: MetricsReducer,
    rules: InefficiencyRuleEngine,
    composer: PromptComposer,
    completion: Arc<dyn CompletionService>,
    text_writer: TextReportWriter,
    renderers: Vec<Box<dyn ReportRenderer>>,
    output_dir: PathBuf,
}

impl ReportOrchestrator {
    /// 使用默认加载器与渲染器（Markdown + JSON）
    pub fn new(completion: Arc<dyn CompletionService>, output_dir: impl Into<PathBuf>) -> Self {
        Self::with_renderers(
            completion,
            output_dir,
            vec![Box::new(MarkdownReportRenderer), Box::new(JsonReportRenderer)],
        )
    }

    pub fn with_renderers(
        completion: Arc<dyn CompletionService>,
        output_dir: impl Into<PathBuf>,
        renderers: Vec<Box<dyn ReportRenderer>>,
    ) -> Self {
        Self {
            loader: InputLoader::default(),
            reducer: MetricsReducer::new(),
            rules: InefficiencyRuleEngine::new(),
            composer: PromptComposer::new(),
            completion,
            text_writer: TextReportWriter,
            renderers,
            output_dir: output_dir.into(),
        }
    }

    /// 阶段 2: 指标汇总 + 规则评估
    pub fn analyze(&self, performance_path: &Path) -> PipelineResult<Analysis> {
        let records = {
            let _perf = StageGuard::new("load_performance");
            self.loader.load_performance(performance_path)?
        };

        let _perf = StageGuard::new("analyze");
        let summary = self.reducer.summarize(&records)?;
        let flags = self.rules.evaluate(&summary);

        info!(
            record_count = records.len(),
            throughput = summary.throughput,
            flag_count = flags.len(),
            "绩效分析完成"
        );

        Ok(Analysis {
            record_count: records.len(),
            summary,
            flags,
        })
    }

    /// 阶段 1-3 的前半: 校验输入并组装提示词（不调用补全服务）
    pub fn prepare_prompt(
        &self,
        process_path: &Path,
        performance_path: &Path,
    ) -> PipelineResult<(Analysis, String)> {
        // 两个必需文件均先做存在性校验,再进入解析
        for path in [process_path, performance_path] {
            if !path.exists() {
                return Err(ImportError::FileNotFound(path.display().to_string()).into());
            }
        }

        let process_text = {
            let _perf = StageGuard::new("load_process_text");
            self.loader.load_process_text(process_path)?
        };
        let analysis = self.analyze(performance_path)?;

        let prompt = self
            .composer
            .compose(&analysis.summary, &analysis.flags, &process_text);
        info!(prompt_len = prompt.len(), "提示词组装完成");

        Ok((analysis, prompt))
    }

    /// 完整流水线
    #[instrument(skip_all, fields(
        process = %request.process_path.display(),
        performance = %request.performance_path.display()
    ))]
    pub async fn run(&self, request: &ReportRequest) -> PipelineResult<ReportOutcome> {
        let mut warnings = Vec::new();

        let (diagram_path, diagram_warning) =
            self.loader.check_diagram(request.diagram_path.as_deref());
        warnings.extend(diagram_warning);

        let (analysis, prompt) =
            self.prepare_prompt(&request.process_path, &request.performance_path)?;

        let recommendation = {
            let _perf = StageGuard::new("completion");
            Recommendation::new(self.completion.complete(&prompt).await?)
        };

        let _perf = StageGuard::new("write_report");
        let generated_at = Local::now().naive_local();
        let run_id = new_run_id(&generated_at);
        let run_dir = self.text_writer.prepare_run_dir(&self.output_dir, &run_id)?;

        let text_report_path =
            self.text_writer
                .write_report(&run_dir, &generated_at, &recommendation)?;
        let context_path = self.text_writer.write_context(
            &run_dir,
            &self.composer.compose_context(&prompt, &recommendation),
        )?;

        let document = ReportDocument {
            meta: RunMeta {
                run_id: run_id.clone(),
                generated_at,
                model: self.completion.model_name().to_string(),
            },
            context: request.context.clone(),
            summary: analysis.summary,
            flags: analysis.flags.clone(),
            recommendation: recommendation.clone(),
            chart: build_chart_data(&analysis.summary),
            diagram_path,
        };

        let mut rendered_paths = Vec::with_capacity(self.renderers.len());
        for renderer in &self.renderers {
            let path = renderer.render(&document, &run_dir)?;
            info!(renderer = renderer.name(), path = %path.display(), "报告已渲染");
            rendered_paths.push(path);
        }

        info!(run_id = %run_id, run_dir = %run_dir.display(), "报告生成完成");

        Ok(ReportOutcome {
            run_id,
            run_dir,
            analysis,
            recommendation,
            text_report_path,
            context_path,
            rendered_paths,
            warnings,
        })
    }

    /// 追问: 基于上一次运行的上下文再调用一次补全服务
    pub async fn ask_followup(&self, context: &str, question: &str) -> PipelineResult<String> {
        let prompt = self.composer.compose_followup(context, question)?;
        let _perf = StageGuard::new("followup");
        Ok(self.completion.complete(&prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_run_ids_are_unique() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let a = new_run_id(&now);
        let b = new_run_id(&now);

        assert!(a.starts_with("20260301_093000_"));
        assert_eq!(a.len(), "20260301_093000_".len() + 8);
        assert_ne!(a, b);
    }
}
