// ==========================================
// 业务流程再造建议系统 - 字段映射器实现
// ==========================================
// 职责: 原始行 → PerformanceRecord + 类型转换
// 表头: 精确匹配,区分大小写
// ==========================================

use crate::domain::performance::PerformanceRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FieldMapper;
use std::collections::HashMap;

// 标准列名
pub const COL_UNITS_PRODUCED: &str = "UnitsProduced";
pub const COL_DEFECTS: &str = "Defects";
pub const COL_CYCLE_TIME: &str = "CycleTime";
pub const COL_DOWNTIME_HOURS: &str = "DowntimeHours";

pub struct PerformanceFieldMapper;

impl FieldMapper for PerformanceFieldMapper {
    fn map_to_record(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<PerformanceRecord> {
        Ok(PerformanceRecord {
            units_produced: self.parse_i64(row, COL_UNITS_PRODUCED, row_number)?,
            defects: self.parse_i64(row, COL_DEFECTS, row_number)?,
            cycle_time_minutes: self.parse_f64(row, COL_CYCLE_TIME, row_number)?,
            downtime_hours: self.parse_f64(row, COL_DOWNTIME_HOURS, row_number)?,
        })
    }
}

impl PerformanceFieldMapper {
    /// 提取必需字段（列缺失或单元格为空均报错）
    fn get_required<'a>(
        &self,
        row: &'a HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<&'a str> {
        let value = row
            .get(key)
            .ok_or_else(|| ImportError::MissingColumn(key.to_string()))?
            .trim();

        if value.is_empty() {
            return Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: "值为空".to_string(),
            });
        }
        Ok(value)
    }

    /// 解析浮点数
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<f64> {
        let value = self.get_required(row, key, row_number)?;
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为浮点数: {}", value),
            })
    }

    /// 解析整数
    ///
    /// Excel 数值单元格可能以 "10000.0" 形式出现,整值浮点数也接受;
    /// 超出 i64 范围的值报错,不做饱和截断
    fn parse_i64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<i64> {
        let value = self.get_required(row, key, row_number)?;
        if let Ok(v) = value.parse::<i64>() {
            return Ok(v);
        }

        match value.parse::<f64>() {
            Ok(v)
                if v.is_finite()
                    && v.fract() == 0.0
                    && v >= i64::MIN as f64
                    && v < i64::MAX as f64 =>
            {
                Ok(v as i64)
            }
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为整数: {}", value),
            }),
        }
    }
}
