// ==========================================
// 业务流程再造建议系统 - 流程文档文本提取
// ==========================================
// 支持: PDF (.pdf) / 纯文本 (.txt/.md)
// 提取结果原样返回,不截断、不转义
// ==========================================

use crate::domain::report::ProcessText;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::TextExtractor;
use std::path::Path;

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// PDF 文本提取
// ==========================================
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, file_path: &Path) -> ImportResult<ProcessText> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "pdf" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let text = pdf_extract::extract_text(file_path).map_err(|e| {
            ImportError::TextExtractionError {
                path: file_path.display().to_string(),
                message: format!("{:?}", e),
            }
        })?;

        Ok(ProcessText::new(text))
    }
}

// ==========================================
// 纯文本读取
// ==========================================
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, file_path: &Path) -> ImportResult<ProcessText> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "txt" && ext != "md" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        Ok(ProcessText::new(std::fs::read_to_string(file_path)?))
    }
}

// ==========================================
// 通用提取器（根据扩展名自动选择）
// ==========================================
pub struct UniversalTextExtractor;

impl TextExtractor for UniversalTextExtractor {
    fn extract_text(&self, file_path: &Path) -> ImportResult<ProcessText> {
        ensure_exists(file_path)?;

        match extension_of(file_path).as_str() {
            "pdf" => PdfTextExtractor.extract_text(file_path),
            "txt" | "md" => PlainTextExtractor.extract_text(file_path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}
