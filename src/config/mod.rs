// ==========================================
// 业务流程再造建议系统 - 配置层
// ==========================================
// 职责: 系统配置加载,支持文件与环境变量覆写
// ==========================================

pub mod app_config;

// 重导出核心配置
pub use app_config::{default_output_dir, env_keys, AppConfig, ConfigError, ConfigResult};
