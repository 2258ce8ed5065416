//! 领域层模块
//! 内部实体操作的值对象与外部协作者接口

pub mod ids;
pub mod listener;
pub mod object;
#[cfg(test)]
mod property_tests;
pub mod status;

// 重新导出主要类型
pub use ids::{AudioObjectId, ControlId, SwitchStateId, TriggerImplId, TriggerImplIdAllocator};
pub use listener::{ListenerAttributes, ListenerManager, ListenerProvider};
pub use object::{AtlAudioObject, AudioObject, ObjectFlags, OcclusionType};
pub use status::ExecutionStatus;
