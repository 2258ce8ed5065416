//! 音频中间件接口
//!
//! 内部触发器通过 [`AudioImpl`] 执行全局操作（焦点、静音、暂停）。
//! 中间件自身的线程安全由实现方保证。

use crate::domain::status::ExecutionStatus;

/// 中间件实现
pub trait AudioImpl: Send + Sync {
    /// 应用失去窗口焦点
    fn on_lose_focus(&self) -> ExecutionStatus;

    /// 应用获得窗口焦点
    fn on_get_focus(&self) -> ExecutionStatus;

    fn mute_all(&self) -> ExecutionStatus;

    fn unmute_all(&self) -> ExecutionStatus;

    fn pause_all(&self) -> ExecutionStatus;

    fn resume_all(&self) -> ExecutionStatus;

    /// 中间件名称（用于日志）
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// 中间件侧的对象句柄
pub trait ImplObject {}

/// 中间件侧的事件句柄
pub trait ImplEvent {}

/// 空中间件
///
/// 未加载任何中间件时使用，所有操作直接返回成功。
#[derive(Debug, Default, Clone, Copy)]
pub struct NullImpl;

impl NullImpl {
    pub fn new() -> Self {
        Self
    }
}

impl AudioImpl for NullImpl {
    fn on_lose_focus(&self) -> ExecutionStatus {
        tracing::debug!(target: "atl", "null impl: lose focus");
        ExecutionStatus::Success
    }

    fn on_get_focus(&self) -> ExecutionStatus {
        tracing::debug!(target: "atl", "null impl: get focus");
        ExecutionStatus::Success
    }

    fn mute_all(&self) -> ExecutionStatus {
        tracing::debug!(target: "atl", "null impl: mute all");
        ExecutionStatus::Success
    }

    fn unmute_all(&self) -> ExecutionStatus {
        tracing::debug!(target: "atl", "null impl: unmute all");
        ExecutionStatus::Success
    }

    fn pause_all(&self) -> ExecutionStatus {
        tracing::debug!(target: "atl", "null impl: pause all");
        ExecutionStatus::Success
    }

    fn resume_all(&self) -> ExecutionStatus {
        tracing::debug!(target: "atl", "null impl: resume all");
        ExecutionStatus::Success
    }

    fn name(&self) -> &str {
        "null"
    }
}
