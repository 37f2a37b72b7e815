// ==========================================
// 业务流程再造建议系统 - 报告领域模型
// ==========================================
// 职责: 流程文本、建议文本、报告文档及图表数据
// 生命周期: 单次运行内创建,写出报告后丢弃
// ==========================================

use crate::domain::inefficiency::InefficiencyFlag;
use crate::domain::performance::PerformanceSummary;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ==========================================
// ProcessText - 流程文档提取文本
// ==========================================
// 不做任何结构化处理,原样进入提示词
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessText(String);

impl ProcessText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProcessText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==========================================
// Recommendation - 补全服务返回的建议文本
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recommendation(String);

impl Recommendation {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==========================================
// ReportContext - 报告请求人信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    pub user_name: String,
    pub organization: String,
}

impl ReportContext {
    /// 空白输入回落到默认占位名
    pub fn new(user_name: Option<&str>, organization: Option<&str>) -> Self {
        fn or_default(value: Option<&str>, default: &str) -> String {
            match value.map(str::trim) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => default.to_string(),
            }
        }

        Self {
            user_name: or_default(user_name, "User"),
            organization: or_default(organization, "Organization"),
        }
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ==========================================
// RunMeta - 运行元信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMeta {
    pub run_id: String,
    pub generated_at: NaiveDateTime,
    pub model: String,
}

// ==========================================
// ChartData - 交给外部图表渲染器的数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub threshold: Option<f64>, // 对应规则阈值（无规则时为 None）
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub bars: Vec<ChartBar>,
}

// ==========================================
// ReportDocument - 一次运行的完整报告内容
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub meta: RunMeta,
    pub context: ReportContext,
    pub summary: PerformanceSummary,
    pub flags: Vec<InefficiencyFlag>,
    pub recommendation: Recommendation,
    pub chart: ChartData,
    pub diagram_path: Option<PathBuf>,
}
