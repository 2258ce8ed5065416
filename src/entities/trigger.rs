//! 内部触发器实现
//!
//! 焦点与全局静音/暂停属于管理操作而不是可听的对象事件：中间件返回
//! `Success` 时改为 `SuccessDoNotTrack`，失败状态原样返回给调用方。

use crate::config::AudioCvars;
use crate::domain::ids::TriggerImplId;
use crate::domain::status::ExecutionStatus;
use crate::middleware::{AudioImpl, ImplEvent, ImplObject};
use std::fmt;
use std::sync::Arc;

/// 触发器实现
pub trait TriggerImpl {
    /// 注册时分配的ID
    fn id(&self) -> TriggerImplId;

    /// 执行触发器
    fn execute(
        &self,
        impl_object: Option<&mut dyn ImplObject>,
        impl_event: Option<&mut dyn ImplEvent>,
    ) -> ExecutionStatus;
}

// ============================================================================
// 空操作
// ============================================================================

/// 空操作触发器
///
/// 逻辑触发器有意不对应任何后端操作时的占位实现。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoNothingTrigger {
    id: TriggerImplId,
}

impl DoNothingTrigger {
    pub fn new(id: TriggerImplId) -> Self {
        Self { id }
    }
}

impl TriggerImpl for DoNothingTrigger {
    fn id(&self) -> TriggerImplId {
        self.id
    }

    fn execute(
        &self,
        _impl_object: Option<&mut dyn ImplObject>,
        _impl_event: Option<&mut dyn ImplEvent>,
    ) -> ExecutionStatus {
        ExecutionStatus::SuccessDoNotTrack
    }
}

// ============================================================================
// 窗口焦点
// ============================================================================

/// 焦点变化方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusChange {
    Lost,
    Gained,
}

/// 失焦/获焦触发器
///
/// `ignore_window_focus` 控制台变量开启时不调用中间件。
pub struct FocusTrigger {
    id: TriggerImplId,
    change: FocusChange,
    middleware: Arc<dyn AudioImpl>,
    cvars: Arc<AudioCvars>,
}

impl FocusTrigger {
    pub fn new(
        id: TriggerImplId,
        change: FocusChange,
        middleware: Arc<dyn AudioImpl>,
        cvars: Arc<AudioCvars>,
    ) -> Self {
        Self {
            id,
            change,
            middleware,
            cvars,
        }
    }

    pub fn lose_focus(
        id: TriggerImplId,
        middleware: Arc<dyn AudioImpl>,
        cvars: Arc<AudioCvars>,
    ) -> Self {
        Self::new(id, FocusChange::Lost, middleware, cvars)
    }

    pub fn get_focus(
        id: TriggerImplId,
        middleware: Arc<dyn AudioImpl>,
        cvars: Arc<AudioCvars>,
    ) -> Self {
        Self::new(id, FocusChange::Gained, middleware, cvars)
    }

    pub fn change(&self) -> FocusChange {
        self.change
    }
}

impl fmt::Debug for FocusTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusTrigger")
            .field("id", &self.id)
            .field("change", &self.change)
            .field("middleware", &self.middleware.name())
            .finish_non_exhaustive()
    }
}

impl TriggerImpl for FocusTrigger {
    fn id(&self) -> TriggerImplId {
        self.id
    }

    fn execute(
        &self,
        _impl_object: Option<&mut dyn ImplObject>,
        _impl_event: Option<&mut dyn ImplEvent>,
    ) -> ExecutionStatus {
        if self.cvars.ignore_window_focus() {
            tracing::trace!(target: "atl", change = ?self.change, "window focus ignored");
            return ExecutionStatus::SuccessDoNotTrack;
        }

        let status = match self.change {
            FocusChange::Lost => self.middleware.on_lose_focus(),
            FocusChange::Gained => self.middleware.on_get_focus(),
        };
        if status.is_failure() {
            tracing::warn!(
                target: "atl",
                change = ?self.change,
                middleware = self.middleware.name(),
                ?status,
                "focus change failed"
            );
        }

        status.untracked()
    }
}

// ============================================================================
// 全局静音/暂停
// ============================================================================

/// 中间件全局操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalAction {
    MuteAll,
    UnmuteAll,
    PauseAll,
    ResumeAll,
}

impl GlobalAction {
    fn apply(&self, middleware: &dyn AudioImpl) -> ExecutionStatus {
        match self {
            Self::MuteAll => middleware.mute_all(),
            Self::UnmuteAll => middleware.unmute_all(),
            Self::PauseAll => middleware.pause_all(),
            Self::ResumeAll => middleware.resume_all(),
        }
    }
}

/// 静音/取消静音/暂停/恢复全部 触发器
pub struct GlobalTrigger {
    id: TriggerImplId,
    action: GlobalAction,
    middleware: Arc<dyn AudioImpl>,
}

impl GlobalTrigger {
    pub fn new(id: TriggerImplId, action: GlobalAction, middleware: Arc<dyn AudioImpl>) -> Self {
        Self {
            id,
            action,
            middleware,
        }
    }

    pub fn action(&self) -> GlobalAction {
        self.action
    }
}

impl fmt::Debug for GlobalTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalTrigger")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("middleware", &self.middleware.name())
            .finish()
    }
}

impl TriggerImpl for GlobalTrigger {
    fn id(&self) -> TriggerImplId {
        self.id
    }

    fn execute(
        &self,
        _impl_object: Option<&mut dyn ImplObject>,
        _impl_event: Option<&mut dyn ImplEvent>,
    ) -> ExecutionStatus {
        let status = self.action.apply(self.middleware.as_ref());
        if status.is_failure() {
            tracing::warn!(
                target: "atl",
                action = ?self.action,
                middleware = self.middleware.name(),
                ?status,
                "global action failed"
            );
        }
        status.untracked()
    }
}

// ============================================================================
// 闭合枚举
// ============================================================================

/// 内部触发器
#[derive(Debug)]
pub enum InternalTrigger {
    DoNothing(DoNothingTrigger),
    Focus(FocusTrigger),
    Global(GlobalTrigger),
}

impl TriggerImpl for InternalTrigger {
    fn id(&self) -> TriggerImplId {
        match self {
            Self::DoNothing(trigger) => trigger.id(),
            Self::Focus(trigger) => trigger.id(),
            Self::Global(trigger) => trigger.id(),
        }
    }

    fn execute(
        &self,
        impl_object: Option<&mut dyn ImplObject>,
        impl_event: Option<&mut dyn ImplEvent>,
    ) -> ExecutionStatus {
        match self {
            Self::DoNothing(trigger) => trigger.execute(impl_object, impl_event),
            Self::Focus(trigger) => trigger.execute(impl_object, impl_event),
            Self::Global(trigger) => trigger.execute(impl_object, impl_event),
        }
    }
}

impl From<DoNothingTrigger> for InternalTrigger {
    fn from(trigger: DoNothingTrigger) -> Self {
        Self::DoNothing(trigger)
    }
}

impl From<FocusTrigger> for InternalTrigger {
    fn from(trigger: FocusTrigger) -> Self {
        Self::Focus(trigger)
    }
}

impl From<GlobalTrigger> for InternalTrigger {
    fn from(trigger: GlobalTrigger) -> Self {
        Self::Global(trigger)
    }
}
