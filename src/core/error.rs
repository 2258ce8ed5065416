//! 统一错误处理模块
//!
//! ## 错误分层
//!
//! - **可恢复结果**: 内部实体执行结果通过 `ExecutionStatus` 返回给调度层，不是错误
//! - **基础设施错误** (`AtlError`): 配置加载、ID 分配等初始化阶段的错误
//! - **不变量违反**: 配置与代码之间的接线错误，直接 panic

use crate::config::ConfigError;
use crate::domain::ids::ControlId;
use thiserror::Error;

/// 音频转换层错误类型
#[derive(Error, Debug)]
pub enum AtlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Trigger implementation ids exhausted")]
    TriggerImplIdsExhausted,

    #[error("Control already registered: {0}")]
    DuplicateControl(ControlId),
}

/// 音频转换层结果类型
pub type AtlResult<T> = Result<T, AtlError>;
