//! 请求执行结果

use serde::{Deserialize, Serialize};

/// 开关状态、触发器、参数执行后返回给调度层的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// 成功，调用方需要跟踪结果
    Success,
    /// 成功，但不得纳入事件生命周期跟踪（焦点、全局静音等管理操作）
    SuccessDoNotTrack,
    /// 成功，需要刷新
    SuccessNeedsRefresh,
    /// 部分成功
    PartialSuccess,
    /// 尚未完成
    Pending,
    /// 失败
    Failure,
    /// 无效的对象ID
    FailureInvalidObjectId,
    /// 无效的控件ID
    FailureInvalidControlId,
    /// 无效的请求
    FailureInvalidRequest,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::Success
                | Self::SuccessDoNotTrack
                | Self::SuccessNeedsRefresh
                | Self::PartialSuccess
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::Failure
                | Self::FailureInvalidObjectId
                | Self::FailureInvalidControlId
                | Self::FailureInvalidRequest
        )
    }

    /// 调用方是否应将该结果纳入跟踪
    pub fn should_track(&self) -> bool {
        self.is_success() && *self != Self::SuccessDoNotTrack
    }

    /// 将 `Success` 重映射为 `SuccessDoNotTrack`，其余状态原样返回
    pub fn untracked(self) -> Self {
        match self {
            Self::Success => Self::SuccessDoNotTrack,
            other => other,
        }
    }
}
