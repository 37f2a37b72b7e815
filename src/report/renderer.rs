// ==========================================
// 业务流程再造建议系统 - 报告渲染器
// ==========================================
// 用途: 将同一份 ReportDocument 交给文档/图表渲染方
// 实现者:
// - MarkdownReportRenderer: 可打印文档（Latin-1 净化）
// - JsonReportRenderer: 结构化产物（含图表数据）
// ==========================================

use crate::domain::report::ReportDocument;
use crate::engine::prompt::render_flags;
use crate::report::error::{WriteError, WriteResult};
use crate::report::text_writer::TIMESTAMP_FORMAT;
use std::fs;
use std::path::{Path, PathBuf};

pub const MARKDOWN_REPORT_FILE: &str = "report.md";
pub const JSON_REPORT_FILE: &str = "report.json";

pub trait ReportRenderer: Send + Sync {
    /// 渲染器名称（日志用）
    fn name(&self) -> &'static str;

    /// 渲染并写入 run_dir,返回产物路径
    fn render(&self, document: &ReportDocument, run_dir: &Path) -> WriteResult<PathBuf>;
}

/// Latin-1 净化: 超出 U+00FF 的字符替换为 '?'
pub fn sanitize_latin1(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

fn write_file(path: PathBuf, content: &str) -> WriteResult<PathBuf> {
    fs::write(&path, content).map_err(|e| WriteError::io(&path, e))?;
    Ok(path)
}

// ==========================================
// MarkdownReportRenderer - 可打印文档
// ==========================================
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    pub fn render_to_string(&self, document: &ReportDocument) -> String {
        let mut out = String::new();

        out.push_str("# Business Process Reengineering Report\n\n");
        out.push_str(&format!("- Name: {}\n", document.context.user_name));
        out.push_str(&format!("- Organization: {}\n", document.context.organization));
        out.push_str(&format!(
            "- Generated: {}\n",
            document.meta.generated_at.format(TIMESTAMP_FORMAT)
        ));
        out.push_str(&format!("- Model: {}\n\n", document.meta.model));

        out.push_str("## Performance Summary\n\n");
        out.push_str("| Metric | Value | Threshold |\n|---|---|---|\n");
        for bar in &document.chart.bars {
            let threshold = bar
                .threshold
                .map(|t| format!("{}", t))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "| {} | {:.2} {} | {} |\n",
                bar.label, bar.value, bar.unit, threshold
            ));
        }

        out.push_str("\n## Detected Inefficiencies\n\n");
        out.push_str(&render_flags(&document.flags));
        out.push_str("\n\n");

        if let Some(diagram) = &document.diagram_path {
            out.push_str("## Process Diagram\n\n");
            out.push_str(&format!("![process diagram]({})\n\n", diagram.display()));
        }

        out.push_str("## Recommendations\n\n");
        out.push_str(document.recommendation.as_str());
        out.push('\n');

        sanitize_latin1(&out)
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn render(&self, document: &ReportDocument, run_dir: &Path) -> WriteResult<PathBuf> {
        write_file(run_dir.join(MARKDOWN_REPORT_FILE), &self.render_to_string(document))
    }
}

// ==========================================
// JsonReportRenderer - 结构化产物
// ==========================================
pub struct JsonReportRenderer;

impl ReportRenderer for JsonReportRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &ReportDocument, run_dir: &Path) -> WriteResult<PathBuf> {
        let json = serde_json::to_string_pretty(document)?;
        write_file(run_dir.join(JSON_REPORT_FILE), &json)
    }
}
