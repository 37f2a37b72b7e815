// ==========================================
// 业务流程再造建议系统 - 输入加载器
// ==========================================
// 职责: 整合导入流程,从文件到内存实体
// 流程: 存在性校验 → 解析 → 映射（绩效表）/ 文本提取（流程文档）
// ==========================================

use crate::domain::performance::PerformanceRecord;
use crate::domain::report::ProcessText;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::PerformanceFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{FieldMapper, FileParser, TextExtractor};
use crate::importer::text_extractor::UniversalTextExtractor;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

// ==========================================
// InputLoader - 输入加载器
// ==========================================
pub struct InputLoader {
    sheet_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    text_extractor: Box<dyn TextExtractor>,
}

impl Default for InputLoader {
    fn default() -> Self {
        Self::new(
            Box::new(UniversalFileParser),
            Box::new(PerformanceFieldMapper),
            Box::new(UniversalTextExtractor),
        )
    }
}

impl InputLoader {
    pub fn new(
        sheet_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        text_extractor: Box<dyn TextExtractor>,
    ) -> Self {
        Self {
            sheet_parser,
            field_mapper,
            text_extractor,
        }
    }

    /// 加载绩效表
    ///
    /// # 返回
    /// - Ok(Vec<PerformanceRecord>): 保持文件行序,可能为空（由汇总阶段判定）
    /// - Err(FileNotFound): 文件不存在
    /// - Err: 格式不支持、解析或类型转换失败
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_performance(&self, path: &Path) -> ImportResult<Vec<PerformanceRecord>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        debug!("步骤 1: 解析表格文件");
        let rows = self.sheet_parser.parse_to_raw_records(path)?;

        debug!(total_rows = rows.len(), "步骤 2: 字段映射");
        let records = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.field_mapper.map_to_record(row, idx + 1))
            .collect::<ImportResult<Vec<_>>>()?;

        info!(record_count = records.len(), "绩效数据加载完成");
        Ok(records)
    }

    /// 加载流程文档文本
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_process_text(&self, path: &Path) -> ImportResult<ProcessText> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let text = self.text_extractor.extract_text(path)?;
        info!(text_len = text.len(), "流程文档文本提取完成");
        Ok(text)
    }

    /// 检查可选流程图
    ///
    /// 不存在时返回 None 并记录警告,不中断运行
    pub fn check_diagram(&self, path: Option<&Path>) -> (Option<PathBuf>, Option<String>) {
        match path {
            None => (None, None),
            Some(p) if p.exists() => (Some(p.to_path_buf()), None),
            Some(p) => {
                let message = format!("流程图不存在,已跳过: {}", p.display());
                warn!(path = %p.display(), "流程图不存在,跳过可视化步骤");
                (None, Some(message))
            }
        }
    }
}
