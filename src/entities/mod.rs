//! 内部实体
//!
//! 音频转换层自带的开关状态、触发器与参数实现。调度层将逻辑控件ID解析为
//! 这些行为对象后，对目标音频对象同步调用；行为对象不持有目标对象。
//!
//! - `switch_state` - 遮挡计算类型、相对/绝对速度跟踪
//! - `trigger` - 空操作、焦点、全局静音/暂停
//! - `parameter` - 速度参数（占位）
//! - `registry` - 初始化时构建、关闭时释放的内部实体集合

pub mod parameter;
pub mod registry;
pub mod switch_state;
pub mod trigger;

pub use parameter::{Parameter, ParameterBehavior, VelocityParameter};
pub use registry::{InternalBindings, InternalEntities, InternalSwitch};
pub use switch_state::{
    OcclusionObstructionState, SwitchState, SwitchStateBehavior, VelocityTrackingState,
};
pub use trigger::{
    DoNothingTrigger, FocusChange, FocusTrigger, GlobalAction, GlobalTrigger, InternalTrigger,
    TriggerImpl,
};

use crate::domain::object::ObjectFlags;

/// 速度类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VelocityKind {
    /// 相对听者的速度
    Relative,
    /// 世界空间速度
    Absolute,
}

impl VelocityKind {
    /// 对应的跟踪标志
    pub fn tracking_flag(&self) -> ObjectFlags {
        match self {
            Self::Relative => ObjectFlags::TRACK_RELATIVE_VELOCITY,
            Self::Absolute => ObjectFlags::TRACK_ABSOLUTE_VELOCITY,
        }
    }
}
