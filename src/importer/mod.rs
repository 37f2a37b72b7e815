// ==========================================
// 业务流程再造建议系统 - 导入层
// ==========================================
// 职责: 外部文件 → 内存实体
// 支持: Excel, CSV（绩效表）; PDF, TXT（流程文档）
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod performance_importer;
pub mod text_extractor;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::PerformanceFieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use performance_importer::InputLoader;
pub use text_extractor::{PdfTextExtractor, PlainTextExtractor, UniversalTextExtractor};

// 重导出 Trait 接口
pub use importer_trait::{FieldMapper, FileParser, TextExtractor};
