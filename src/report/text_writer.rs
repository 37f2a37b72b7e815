// ==========================================
// 业务流程再造建议系统 - 文本报告写出
// ==========================================
// 产物: report.txt（时间戳表头 + 建议原文）, context.txt（追问上下文）
// 红线: 单次写入,失败立即返回,不重试
// ==========================================

use crate::domain::report::Recommendation;
use crate::report::error::{WriteError, WriteResult};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TEXT_REPORT_FILE: &str = "report.txt";
pub const CONTEXT_FILE: &str = "context.txt";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct TextReportWriter;

impl TextReportWriter {
    /// 创建本次运行的输出目录 `<output_dir>/<run_id>/`
    pub fn prepare_run_dir(&self, output_dir: &Path, run_id: &str) -> WriteResult<PathBuf> {
        let run_dir = output_dir.join(run_id);
        fs::create_dir_all(&run_dir).map_err(|e| WriteError::io(&run_dir, e))?;
        Ok(run_dir)
    }

    /// 渲染文本报告内容
    pub fn render(&self, generated_at: &NaiveDateTime, recommendation: &Recommendation) -> String {
        format!(
            "Business Process Reengineering Report\nGenerated: {}\n{}\n\n{}",
            generated_at.format(TIMESTAMP_FORMAT),
            "=".repeat(60),
            recommendation.as_str()
        )
    }

    /// 写出文本报告
    pub fn write_report(
        &self,
        run_dir: &Path,
        generated_at: &NaiveDateTime,
        recommendation: &Recommendation,
    ) -> WriteResult<PathBuf> {
        let path = run_dir.join(TEXT_REPORT_FILE);
        fs::write(&path, self.render(generated_at, recommendation))
            .map_err(|e| WriteError::io(&path, e))?;

        info!(path = %path.display(), "文本报告已写出");
        Ok(path)
    }

    /// 写出追问上下文
    pub fn write_context(&self, run_dir: &Path, context: &str) -> WriteResult<PathBuf> {
        let path = run_dir.join(CONTEXT_FILE);
        fs::write(&path, context).map_err(|e| WriteError::io(&path, e))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_text_report_has_timestamp_and_verbatim_body() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TextReportWriter;
        let run_dir = writer.prepare_run_dir(dir.path(), "run-1").unwrap();
        let body = "1) Root cause: bottleneck at weld station.\n\n  ✓ keep ünïcode";

        let path = writer
            .write_report(&run_dir, &ts(), &Recommendation::new(body))
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Business Process Reengineering Report\nGenerated: 2026-03-01 09:30:00\n"));
        assert!(content.ends_with(body));
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        // 以普通文件占位,使目录创建失败
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let result = TextReportWriter.prepare_run_dir(&blocker, "run-1");
        assert!(matches!(result, Err(WriteError::Io { .. })));
    }
}
