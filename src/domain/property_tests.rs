//! 领域对象属性测试
//!
//! 使用proptest验证内部实体在任意输入下的不变量

#[cfg(test)]
mod tests {
    use crate::domain::ids::*;
    use crate::domain::listener::{ListenerAttributes, ListenerManager};
    use crate::domain::object::{AtlAudioObject, AudioObject, ObjectFlags, OcclusionType};
    use crate::domain::status::ExecutionStatus;
    use crate::entities::{
        OcclusionObstructionState, SwitchState, SwitchStateBehavior, VelocityTrackingState,
    };
    use glam::Vec3;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn finite_f32() -> impl Strategy<Value = f32> {
        (-1000.0f32..1000.0).prop_filter("must be finite", |&x| x.is_finite())
    }

    fn valid_vec3() -> impl Strategy<Value = Vec3> {
        (finite_f32(), finite_f32(), finite_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn any_status() -> impl Strategy<Value = ExecutionStatus> {
        prop_oneof![
            Just(ExecutionStatus::Success),
            Just(ExecutionStatus::SuccessDoNotTrack),
            Just(ExecutionStatus::SuccessNeedsRefresh),
            Just(ExecutionStatus::PartialSuccess),
            Just(ExecutionStatus::Pending),
            Just(ExecutionStatus::Failure),
            Just(ExecutionStatus::FailureInvalidObjectId),
            Just(ExecutionStatus::FailureInvalidControlId),
            Just(ExecutionStatus::FailureInvalidRequest),
        ]
    }

    fn any_flags() -> impl Strategy<Value = ObjectFlags> {
        any::<u32>().prop_map(ObjectFlags::from_bits_truncate)
    }

    fn unknown_occlusion_state() -> impl Strategy<Value = SwitchStateId> {
        any::<u32>()
            .prop_map(SwitchStateId::new)
            .prop_filter("must not be a reserved occlusion state", |id| {
                OcclusionType::from_state_id(*id).is_none()
            })
    }

    fn listener(position: Vec3) -> Arc<ListenerManager> {
        let manager = ListenerManager::new();
        manager.set_active_listener(ListenerAttributes::from_position(position));
        Arc::new(manager)
    }

    fn object_with(
        id: u32,
        flags: ObjectFlags,
        obstruction: f32,
        occlusion: f32,
    ) -> AtlAudioObject {
        let mut object = AtlAudioObject::new(AudioObjectId::new(id)).with_flags(flags);
        object.set_obstruction_occlusion(obstruction, occlusion);
        object
    }

    proptest! {
        #[test]
        fn untracked_only_changes_success(status in any_status()) {
            let remapped = status.untracked();
            if status == ExecutionStatus::Success {
                prop_assert_eq!(remapped, ExecutionStatus::SuccessDoNotTrack);
            } else {
                prop_assert_eq!(remapped, status);
            }
            prop_assert_ne!(remapped, ExecutionStatus::Success);
        }

        #[test]
        fn name_hash_ignores_ascii_case(name in "[a-z_]{1,24}") {
            prop_assert_eq!(
                ControlId::from_name(&name),
                ControlId::from_name(&name.to_ascii_uppercase())
            );
        }

        #[test]
        fn unknown_occlusion_state_behaves_like_ignore(
            state_id in unknown_occlusion_state(),
            position in valid_vec3(),
            obstruction in 0.0f32..=1.0,
            occlusion in 0.0f32..=1.0,
        ) {
            let provider = listener(position);
            let global = AudioObjectId::GLOBAL;
            let unknown = OcclusionObstructionState::new(state_id, provider.clone(), global);
            let ignore = OcclusionObstructionState::new(IGNORE_STATE_ID, provider, global);

            let mut via_unknown = object_with(2, ObjectFlags::NONE, obstruction, occlusion);
            let mut via_ignore = via_unknown.clone();

            prop_assert_eq!(unknown.set(&mut via_unknown), ExecutionStatus::Success);
            prop_assert_eq!(ignore.set(&mut via_ignore), ExecutionStatus::Success);
            prop_assert_eq!(&via_unknown, &via_ignore);
            prop_assert_eq!(via_unknown.occlusion_type(), OcclusionType::Ignore);
            prop_assert_eq!(via_unknown.obstruction(), 0.0);
            prop_assert_eq!(via_unknown.occlusion(), 0.0);

            let once = via_unknown.clone();
            unknown.set(&mut via_unknown);
            prop_assert_eq!(via_unknown, once);
        }

        #[test]
        fn occlusion_forwards_listener_position(position in valid_vec3()) {
            let state = OcclusionObstructionState::new(
                HIGH_STATE_ID,
                listener(position),
                AudioObjectId::GLOBAL,
            );
            let mut object = AtlAudioObject::new(AudioObjectId::new(3));
            state.set(&mut object);
            prop_assert_eq!(object.occlusion_listener_position(), Some(position));
        }

        #[test]
        fn velocity_tracking_last_write_wins(
            initial in any_flags(),
            writes in prop::collection::vec(any::<bool>(), 1..16),
            absolute in any::<bool>(),
        ) {
            let make = |state_id| if absolute {
                VelocityTrackingState::absolute(state_id, AudioObjectId::GLOBAL)
            } else {
                VelocityTrackingState::relative(state_id, AudioObjectId::GLOBAL)
            };
            let on = make(ON_STATE_ID);
            let off = make(OFF_STATE_ID);
            let flag = on.kind().tracking_flag();

            let mut object = AtlAudioObject::new(AudioObjectId::new(4)).with_flags(initial);
            for &enable in &writes {
                let state = if enable { &on } else { &off };
                prop_assert_eq!(state.set(&mut object), ExecutionStatus::Success);
            }

            let last = *writes.last().unwrap();
            prop_assert_eq!(object.flags().contains(flag), last);
            prop_assert_eq!(object.flags() - flag, initial - flag);
        }

        #[test]
        fn global_object_is_never_mutated(
            state_id in any::<u32>().prop_map(SwitchStateId::new),
            flags in any_flags(),
            position in valid_vec3(),
        ) {
            let states: Vec<SwitchState> = vec![
                OcclusionObstructionState::new(state_id, listener(position), AudioObjectId::GLOBAL)
                    .into(),
                VelocityTrackingState::relative(state_id, AudioObjectId::GLOBAL).into(),
                VelocityTrackingState::absolute(state_id, AudioObjectId::GLOBAL).into(),
            ];
            let mut global = AtlAudioObject::global().with_flags(flags);
            global.set_obstruction_occlusion(0.3, 0.6);
            let before = global.clone();

            for state in &states {
                prop_assert_eq!(state.set(&mut global), ExecutionStatus::Success);
            }
            prop_assert_eq!(global, before);
        }
    }
}
