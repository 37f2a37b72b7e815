// ==========================================
// 业务流程再造建议系统 - 应用配置
// ==========================================
// 职责: 补全服务地址/凭证/模型等配置的加载
// 加载顺序: 默认值 → JSON 配置文件 → 环境变量 → 命令行参数（调用方覆写）
// 进程启动时读取一次,运行期不再变更
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    pub const SERVICE_URL: &str = "BPR_AGENT_SERVICE_URL";
    pub const API_KEY: &str = "BPR_AGENT_API_KEY";
    pub const MODEL: &str = "BPR_AGENT_MODEL";
    pub const MAX_TOKENS: &str = "BPR_AGENT_MAX_TOKENS";
    pub const TEMPERATURE: &str = "BPR_AGENT_TEMPERATURE";
    pub const OUTPUT_DIR: &str = "BPR_AGENT_OUTPUT_DIR";
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("配置文件格式错误: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_url: String,     // 补全服务完整地址
    pub api_key: Option<String>, // 访问凭证（为空则不发送 Authorization）
    pub model: String,           // 模型标识
    pub max_tokens: u32,
    pub temperature: f32,
    pub output_dir: PathBuf,     // 报告输出根目录
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:1234/v1/completions".to_string(),
            api_key: None,
            model: "local-model".to_string(),
            max_tokens: 1024,
            temperature: 0.3,
            output_dir: default_output_dir(),
        }
    }
}

// 凭证不进入日志
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("service_url", &self.service_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl AppConfig {
    /// 加载配置（默认值 → 配置文件 → 环境变量）
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// 从 JSON 文件读取,缺省字段使用默认值
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// 用环境变量覆写（空白值忽略）
    ///
    /// lookup 由调用方提供,测试时可注入固定映射
    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = get(env_keys::SERVICE_URL) {
            self.service_url = v;
        }
        if let Some(v) = get(env_keys::API_KEY) {
            self.api_key = Some(v);
        }
        if let Some(v) = get(env_keys::MODEL) {
            self.model = v;
        }
        if let Some(v) = get(env_keys::MAX_TOKENS) {
            self.max_tokens = parse_value(env_keys::MAX_TOKENS, &v)?;
        }
        if let Some(v) = get(env_keys::TEMPERATURE) {
            self.temperature = parse_value(env_keys::TEMPERATURE, &v)?;
        }
        if let Some(v) = get(env_keys::OUTPUT_DIR) {
            self.output_dir = PathBuf::from(v);
        }
        Ok(())
    }
}

fn parse_value<T>(key: &str, value: &str) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::ConfigValueError {
        key: key.to_string(),
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// 默认报告输出目录
///
/// 优先使用用户本地数据目录,取不到时回退到当前目录下的 reports/
pub fn default_output_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("bpr-agent").join("reports"),
        None => PathBuf::from("./reports"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_defaults() {
        let mut config = AppConfig::default();
        config
            .apply_env(lookup_from(&[
                (env_keys::SERVICE_URL, "https://llm.example.com/v1/completions"),
                (env_keys::API_KEY, "sk-test"),
                (env_keys::MODEL, "deepseek-v3"),
                (env_keys::MAX_TOKENS, "2048"),
                (env_keys::TEMPERATURE, "0.7"),
                (env_keys::OUTPUT_DIR, "/tmp/bpr"),
            ]))
            .unwrap();

        assert_eq!(config.service_url, "https://llm.example.com/v1/completions");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "deepseek-v3");
        assert_eq!(config.max_tokens, 2048);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/bpr"));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config
            .apply_env(lookup_from(&[(env_keys::MODEL, "   ")]))
            .unwrap();
        assert_eq!(config.model, "local-model");
    }

    #[test]
    fn test_invalid_numeric_env_value() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(lookup_from(&[(env_keys::MAX_TOKENS, "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ConfigValueError { ref key, .. } if key == env_keys::MAX_TOKENS));
    }

    #[test]
    fn test_partial_config_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"model": "gpt-test", "max_tokens": 256}}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.model, "gpt-test");
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.service_url, AppConfig::default().service_url);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("sk-secret".to_string()),
            ..AppConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("***"));
    }
}
