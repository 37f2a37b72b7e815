// ==========================================
// 业务流程再造建议系统 - 导入接口 Trait
// ==========================================
// 职责: 定义文件解析/字段映射/文本提取接口（不包含实现）
// ==========================================

use crate::domain::performance::PerformanceRecord;
use crate::domain::report::ProcessText;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 表格文件 → 原始行（表头 → 单元格文本）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始记录
    ///
    /// # 返回
    /// - Ok(Vec<HashMap>): 每行一个映射,已跳过完全空白的行
    /// - Err: 文件不存在、格式不支持、解析失败
    fn parse_to_raw_records(&self, file_path: &Path)
        -> ImportResult<Vec<HashMap<String, String>>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 原始行 → PerformanceRecord
// 实现者: PerformanceFieldMapper
pub trait FieldMapper: Send + Sync {
    /// # 参数
    /// - row: 原始行
    /// - row_number: 数据行号（从 1 开始,不含表头）
    fn map_to_record(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<PerformanceRecord>;
}

// ==========================================
// TextExtractor Trait
// ==========================================
// 用途: 流程文档 → 纯文本
// 实现者: PdfTextExtractor, PlainTextExtractor
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, file_path: &Path) -> ImportResult<ProcessText>;
}
