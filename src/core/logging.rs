//! 日志初始化
//!
//! 使用tracing日志框架。`RUST_LOG` 环境变量优先，其次使用配置中的级别与指令。

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// 构建过滤器
///
/// 此时尚未安装订阅者，无效指令的诊断信息直接写到标准错误而不经过 `tracing`。
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives_str = config.level.as_filter().to_string();
    for directive in &config.directives {
        directives_str.push(',');
        directives_str.push_str(directive.trim());
    }
    EnvFilter::try_new(&directives_str).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}: {}", directives_str, e);
        EnvFilter::new(config.level.as_filter())
    })
}

/// 初始化日志系统
///
/// 重复调用无副作用（已有全局订阅者时忽略）。
pub fn init_logging(config: &LoggingConfig) {
    if !config.log_to_console {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .try_init();
    tracing::info!(target: "atl", "Audio translation layer logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ENV_LOCK};
    use std::env;

    fn config_with(level: LogLevel, directives: &[&str]) -> LoggingConfig {
        LoggingConfig {
            level,
            directives: directives.iter().map(|d| d.to_string()).collect(),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_filter_from_level_and_directives() {
        let _guard = ENV_LOCK.lock();
        env::remove_var("RUST_LOG");

        let filter = build_filter(&config_with(LogLevel::Debug, &[" atl=trace "])).to_string();
        assert!(filter.contains("debug"), "{filter}");
        assert!(filter.contains("atl=trace"), "{filter}");
    }

    #[test]
    fn test_invalid_directive_falls_back_to_level() {
        let _guard = ENV_LOCK.lock();
        env::remove_var("RUST_LOG");

        let filter = build_filter(&config_with(LogLevel::Warn, &["atl=loudest"])).to_string();
        assert_eq!(filter, "warn");
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let _guard = ENV_LOCK.lock();
        env::set_var("RUST_LOG", "error");
        let filter = build_filter(&config_with(LogLevel::Trace, &["atl=trace"])).to_string();
        env::remove_var("RUST_LOG");

        assert_eq!(filter, "error");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let config = LoggingConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn test_disabled_console_logging() {
        let config = LoggingConfig {
            log_to_console: false,
            ..LoggingConfig::default()
        };
        init_logging(&config);
    }
}
