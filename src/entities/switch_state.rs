//! 内部开关状态
//!
//! 空间行为（遮挡、速度跟踪）不作用于全局对象：全局对象没有位置，
//! 通过句柄身份比较跳过。
//!
//! 未知状态ID的处理不对称：
//! - 遮挡类型退化为 `Ignore`（状态集合会随配置扩展）
//! - 速度跟踪只有开/关两态，未知ID属于接线错误，直接 panic

use super::VelocityKind;
use crate::domain::ids::{AudioObjectId, SwitchStateId, OFF_STATE_ID, ON_STATE_ID};
use crate::domain::listener::ListenerProvider;
use crate::domain::object::{AudioObject, OcclusionType};
use crate::domain::status::ExecutionStatus;
use std::fmt;
use std::sync::Arc;

/// 开关状态行为
pub trait SwitchStateBehavior {
    /// 将状态应用到目标对象
    fn set(&self, object: &mut dyn AudioObject) -> ExecutionStatus;

    /// 绑定的状态ID
    fn state_id(&self) -> SwitchStateId;
}

// ============================================================================
// 遮挡/阻挡计算类型
// ============================================================================

/// 遮挡/阻挡计算类型状态
pub struct OcclusionObstructionState {
    state_id: SwitchStateId,
    listener_provider: Arc<dyn ListenerProvider>,
    global_object: AudioObjectId,
}

impl OcclusionObstructionState {
    pub fn new(
        state_id: SwitchStateId,
        listener_provider: Arc<dyn ListenerProvider>,
        global_object: AudioObjectId,
    ) -> Self {
        Self {
            state_id,
            listener_provider,
            global_object,
        }
    }

    /// 解析出的遮挡类型，未知ID退化为 `Ignore`
    pub fn occlusion_type(&self) -> OcclusionType {
        OcclusionType::from_state_id(self.state_id).unwrap_or(OcclusionType::Ignore)
    }
}

impl fmt::Debug for OcclusionObstructionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OcclusionObstructionState")
            .field("state_id", &self.state_id)
            .field("global_object", &self.global_object)
            .finish_non_exhaustive()
    }
}

impl SwitchStateBehavior for OcclusionObstructionState {
    fn set(&self, object: &mut dyn AudioObject) -> ExecutionStatus {
        if object.id() == self.global_object {
            return ExecutionStatus::Success;
        }

        let listener_position = self.listener_provider.active_listener_attributes().position();

        let occlusion_type = match OcclusionType::from_state_id(self.state_id) {
            Some(occlusion_type) => occlusion_type,
            None => {
                tracing::trace!(
                    target: "atl",
                    state_id = %self.state_id,
                    "unknown occlusion state, using Ignore"
                );
                OcclusionType::Ignore
            }
        };

        object.handle_set_occlusion_type(occlusion_type, listener_position);
        if occlusion_type == OcclusionType::Ignore {
            object.set_obstruction_occlusion(0.0, 0.0);
        }

        ExecutionStatus::Success
    }

    fn state_id(&self) -> SwitchStateId {
        self.state_id
    }
}

// ============================================================================
// 速度跟踪
// ============================================================================

/// 相对/绝对速度跟踪状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VelocityTrackingState {
    state_id: SwitchStateId,
    global_object: AudioObjectId,
    kind: VelocityKind,
}

impl VelocityTrackingState {
    pub fn new(state_id: SwitchStateId, global_object: AudioObjectId, kind: VelocityKind) -> Self {
        Self {
            state_id,
            global_object,
            kind,
        }
    }

    /// 相对速度跟踪
    pub fn relative(state_id: SwitchStateId, global_object: AudioObjectId) -> Self {
        Self::new(state_id, global_object, VelocityKind::Relative)
    }

    /// 绝对速度跟踪
    pub fn absolute(state_id: SwitchStateId, global_object: AudioObjectId) -> Self {
        Self::new(state_id, global_object, VelocityKind::Absolute)
    }

    pub fn kind(&self) -> VelocityKind {
        self.kind
    }
}

impl SwitchStateBehavior for VelocityTrackingState {
    /// # Panics
    ///
    /// 状态ID既不是 on 也不是 off 时 panic。
    fn set(&self, object: &mut dyn AudioObject) -> ExecutionStatus {
        if object.id() == self.global_object {
            return ExecutionStatus::Success;
        }

        let flag = self.kind.tracking_flag();
        match self.state_id {
            ON_STATE_ID => object.set_flag(flag),
            OFF_STATE_ID => object.remove_flag(flag),
            unknown => {
                tracing::error!(
                    target: "atl",
                    state_id = %unknown,
                    kind = ?self.kind,
                    "velocity tracking state must be on or off"
                );
                panic!(
                    "invalid {:?} velocity tracking state id {}",
                    self.kind, unknown
                );
            }
        }

        ExecutionStatus::Success
    }

    fn state_id(&self) -> SwitchStateId {
        self.state_id
    }
}

// ============================================================================
// 闭合枚举
// ============================================================================

/// 内部开关状态
#[derive(Debug)]
pub enum SwitchState {
    OcclusionObstruction(OcclusionObstructionState),
    VelocityTracking(VelocityTrackingState),
}

impl SwitchStateBehavior for SwitchState {
    fn set(&self, object: &mut dyn AudioObject) -> ExecutionStatus {
        match self {
            Self::OcclusionObstruction(state) => state.set(object),
            Self::VelocityTracking(state) => state.set(object),
        }
    }

    fn state_id(&self) -> SwitchStateId {
        match self {
            Self::OcclusionObstruction(state) => state.state_id(),
            Self::VelocityTracking(state) => state.state_id(),
        }
    }
}

impl From<OcclusionObstructionState> for SwitchState {
    fn from(state: OcclusionObstructionState) -> Self {
        Self::OcclusionObstruction(state)
    }
}

impl From<VelocityTrackingState> for SwitchState {
    fn from(state: VelocityTrackingState) -> Self {
        Self::VelocityTracking(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{
        ADAPTIVE_STATE_ID, HIGH_STATE_ID, IGNORE_STATE_ID, LOW_STATE_ID, MEDIUM_STATE_ID,
    };
    use crate::domain::listener::{ListenerAttributes, ListenerManager};
    use crate::domain::object::{AtlAudioObject, ObjectFlags};
    use glam::Vec3;

    fn listener_at(position: Vec3) -> Arc<ListenerManager> {
        let manager = ListenerManager::new();
        manager.set_active_listener(ListenerAttributes::from_position(position));
        Arc::new(manager)
    }

    fn occluded_object() -> AtlAudioObject {
        let mut object = AtlAudioObject::new(AudioObjectId::new(10));
        object.set_obstruction_occlusion(0.5, 0.75);
        object
    }

    #[test]
    fn test_occlusion_medium_forwards_listener_position() {
        let state = OcclusionObstructionState::new(
            MEDIUM_STATE_ID,
            listener_at(Vec3::new(1.0, 2.0, 3.0)),
            AudioObjectId::GLOBAL,
        );
        let mut object = occluded_object();

        assert_eq!(state.set(&mut object), ExecutionStatus::Success);
        assert_eq!(object.occlusion_type(), OcclusionType::Medium);
        assert_eq!(
            object.occlusion_listener_position(),
            Some(Vec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(object.obstruction(), 0.5);
        assert_eq!(object.occlusion(), 0.75);
    }

    #[test]
    fn test_occlusion_each_reserved_state() {
        let listener = listener_at(Vec3::ZERO);
        let cases = [
            (IGNORE_STATE_ID, OcclusionType::Ignore),
            (ADAPTIVE_STATE_ID, OcclusionType::Adaptive),
            (LOW_STATE_ID, OcclusionType::Low),
            (MEDIUM_STATE_ID, OcclusionType::Medium),
            (HIGH_STATE_ID, OcclusionType::High),
        ];
        for (state_id, expected) in cases {
            let state =
                OcclusionObstructionState::new(state_id, listener.clone(), AudioObjectId::GLOBAL);
            let mut object = occluded_object();
            assert_eq!(state.set(&mut object), ExecutionStatus::Success);
            assert_eq!(object.occlusion_type(), expected);
            assert_eq!(state.occlusion_type(), expected);
        }
    }

    #[test]
    fn test_occlusion_ignore_resets_values() {
        let state = OcclusionObstructionState::new(
            IGNORE_STATE_ID,
            listener_at(Vec3::ONE),
            AudioObjectId::GLOBAL,
        );
        let mut object = occluded_object();
        state.set(&mut object);
        assert_eq!(object.obstruction(), 0.0);
        assert_eq!(object.occlusion(), 0.0);
    }

    #[test]
    fn test_occlusion_unknown_state_behaves_like_ignore() {
        let state = OcclusionObstructionState::new(
            SwitchStateId::from_name("ultra"),
            listener_at(Vec3::ONE),
            AudioObjectId::GLOBAL,
        );
        let mut object = occluded_object();
        object.handle_set_occlusion_type(OcclusionType::High, Vec3::ZERO);

        assert_eq!(state.set(&mut object), ExecutionStatus::Success);
        assert_eq!(object.occlusion_type(), OcclusionType::Ignore);
        assert_eq!(object.obstruction(), 0.0);
        assert_eq!(object.occlusion(), 0.0);

        let snapshot = object.clone();
        assert_eq!(state.set(&mut object), ExecutionStatus::Success);
        assert_eq!(object, snapshot);
    }

    #[test]
    fn test_occlusion_skips_global_object() {
        let state = OcclusionObstructionState::new(
            HIGH_STATE_ID,
            listener_at(Vec3::ONE),
            AudioObjectId::GLOBAL,
        );
        let mut global = AtlAudioObject::global();
        global.set_obstruction_occlusion(0.25, 0.25);
        let before = global.clone();

        assert_eq!(state.set(&mut global), ExecutionStatus::Success);
        assert_eq!(global, before);
    }

    #[test]
    fn test_global_check_is_by_handle_not_by_value() {
        let state = OcclusionObstructionState::new(
            HIGH_STATE_ID,
            listener_at(Vec3::ONE),
            AudioObjectId::GLOBAL,
        );
        // 与全局对象状态完全相同，但句柄不同
        let mut lookalike = AtlAudioObject::new(AudioObjectId::new(2));
        assert_eq!(state.set(&mut lookalike), ExecutionStatus::Success);
        assert_eq!(lookalike.occlusion_type(), OcclusionType::High);
    }

    #[test]
    fn test_velocity_tracking_last_write_wins() {
        let on = VelocityTrackingState::relative(ON_STATE_ID, AudioObjectId::GLOBAL);
        let off = VelocityTrackingState::relative(OFF_STATE_ID, AudioObjectId::GLOBAL);
        let mut object = AtlAudioObject::new(AudioObjectId::new(3));

        assert_eq!(on.set(&mut object), ExecutionStatus::Success);
        assert!(object.flags().contains(ObjectFlags::TRACK_RELATIVE_VELOCITY));
        assert!(!object.flags().contains(ObjectFlags::TRACK_ABSOLUTE_VELOCITY));

        assert_eq!(off.set(&mut object), ExecutionStatus::Success);
        assert!(!object.flags().contains(ObjectFlags::TRACK_RELATIVE_VELOCITY));
    }

    #[test]
    fn test_absolute_velocity_tracking_leaves_other_flags() {
        let on = VelocityTrackingState::absolute(ON_STATE_ID, AudioObjectId::GLOBAL);
        let mut object = AtlAudioObject::new(AudioObjectId::new(3))
            .with_flags(ObjectFlags::TRACK_RELATIVE_VELOCITY);

        on.set(&mut object);
        assert_eq!(
            object.flags(),
            ObjectFlags::TRACK_RELATIVE_VELOCITY | ObjectFlags::TRACK_ABSOLUTE_VELOCITY
        );
    }

    #[test]
    fn test_velocity_tracking_skips_global_object() {
        let on = VelocityTrackingState::absolute(ON_STATE_ID, AudioObjectId::GLOBAL);
        let mut global = AtlAudioObject::global();
        assert_eq!(on.set(&mut global), ExecutionStatus::Success);
        assert_eq!(global.flags(), ObjectFlags::NONE);
    }

    #[test]
    #[should_panic(expected = "invalid Relative velocity tracking state id")]
    fn test_velocity_tracking_unknown_state_panics() {
        let state = VelocityTrackingState::relative(MEDIUM_STATE_ID, AudioObjectId::GLOBAL);
        let mut object = AtlAudioObject::new(AudioObjectId::new(3));
        state.set(&mut object);
    }

    #[test]
    fn test_velocity_tracking_unknown_state_on_global_object_is_noop() {
        let state = VelocityTrackingState::absolute(MEDIUM_STATE_ID, AudioObjectId::GLOBAL);
        let mut global = AtlAudioObject::global();
        assert_eq!(state.set(&mut global), ExecutionStatus::Success);
    }

    #[test]
    fn test_switch_state_enum_dispatch() {
        let state: SwitchState =
            VelocityTrackingState::relative(ON_STATE_ID, AudioObjectId::GLOBAL).into();
        let mut object = AtlAudioObject::new(AudioObjectId::new(4));
        assert_eq!(state.state_id(), ON_STATE_ID);
        assert_eq!(state.set(&mut object), ExecutionStatus::Success);
        assert!(object.flags().contains(ObjectFlags::TRACK_RELATIVE_VELOCITY));
    }
}
