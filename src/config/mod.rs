/// 音频转换层配置
///
/// 提供TOML/JSON配置文件、环境变量和运行时控制台变量
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod cvars;

pub use cvars::AudioCvars;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 音频转换层主配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtlConfig {
    /// 忽略窗口焦点变化（失焦/获焦触发器不调用中间件）
    #[serde(default)]
    pub ignore_window_focus: bool,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AtlConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    ///
    /// - `ATL_IGNORE_WINDOW_FOCUS`: `true`/`false` 或 `1`/`0`
    /// - `ATL_LOG_LEVEL`: `trace`/`debug`/`info`/`warn`/`error`
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("ATL_IGNORE_WINDOW_FOCUS") {
            if let Some(flag) = parse_flag(&val) {
                self.ignore_window_focus = flag;
            }
        }
        if let Ok(val) = env::var("ATL_LOG_LEVEL") {
            if let Some(level) = LogLevel::parse(&val) {
                self.logging.level = level;
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.logging.validate()
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./atl.toml
    /// 2. ./atl.json
    /// 3. ~/.config/audio_atl/atl.toml
    /// 4. 使用默认配置
    ///
    /// 最后应用环境变量覆盖。
    pub fn load_or_default() -> Self {
        Self::load_from_paths(&Self::search_paths())
    }

    /// 按给定顺序加载第一个可用的配置文件，然后应用环境变量覆盖
    ///
    /// 不存在的文件静默跳过；存在但无法解析或验证失败的文件记录警告后跳过。
    pub fn load_from_paths(paths: &[PathBuf]) -> Self {
        let mut config = paths
            .iter()
            .find_map(|path| Self::try_load(path))
            .unwrap_or_else(|| {
                tracing::info!(target: "atl", "Using default configuration");
                Self::default()
            });
        config.apply_env_overrides();
        config
    }

    /// 默认查找路径
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("atl.toml"), PathBuf::from("atl.json")];
        if let Some(home) = env::var_os("HOME") {
            paths.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("audio_atl")
                    .join("atl.toml"),
            );
        }
        paths
    }

    fn try_load(path: &Path) -> Option<Self> {
        let loaded = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        };
        let config = match loaded {
            Ok(config) => config,
            Err(ConfigError::FileError(e)) if e.kind() == io::ErrorKind::NotFound => {
                return None;
            }
            Err(e) => {
                tracing::warn!(
                    target: "atl",
                    path = %path.display(),
                    error = %e,
                    "Skipping malformed config file"
                );
                return None;
            }
        };
        if let Err(e) = config.validate() {
            tracing::warn!(
                target: "atl",
                path = %path.display(),
                error = %e,
                "Skipping invalid config file"
            );
            return None;
        }
        tracing::info!(target: "atl", "Loaded config from {}", path.display());
        Some(config)
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别（`RUST_LOG` 优先）
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,

    /// 额外的过滤指令，例如 `atl=trace`
    pub directives: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_to_console: true,
            directives: Vec::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(bad) = self.directives.iter().find(|d| d.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "Empty log directive: {:?}",
                bad
            )));
        }
        Ok(())
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    pub fn parse(val: &str) -> Option<Self> {
        match val.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// 过滤指令字符串
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// 串行化修改进程环境变量的测试
#[cfg(test)]
pub(crate) static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
