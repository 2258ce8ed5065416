//! 内部实体集合
//!
//! 音频系统初始化时构建一次，绑定听者提供者、全局对象、中间件与控制台变量；
//! 关闭时释放。按保留控件ID查找并调用对应的行为对象。

use super::parameter::{Parameter, ParameterBehavior, VelocityParameter};
use super::switch_state::{
    OcclusionObstructionState, SwitchState, SwitchStateBehavior, VelocityTrackingState,
};
use super::trigger::{
    DoNothingTrigger, FocusTrigger, GlobalAction, GlobalTrigger, InternalTrigger, TriggerImpl,
};
use crate::config::AudioCvars;
use crate::core::error::{AtlError, AtlResult};
use crate::domain::ids::*;
use crate::domain::listener::ListenerProvider;
use crate::domain::object::AudioObject;
use crate::domain::status::ExecutionStatus;
use crate::middleware::{AudioImpl, ImplEvent, ImplObject};
use std::collections::HashMap;
use std::sync::Arc;

/// 内部实体初始化时绑定的外部协作者
#[derive(Clone)]
pub struct InternalBindings {
    pub listener_provider: Arc<dyn ListenerProvider>,
    pub global_object: AudioObjectId,
    pub middleware: Arc<dyn AudioImpl>,
    pub cvars: Arc<AudioCvars>,
}

/// 内部开关及其状态
#[derive(Debug)]
pub struct InternalSwitch {
    id: ControlId,
    name: &'static str,
    states: HashMap<SwitchStateId, SwitchState>,
}

impl InternalSwitch {
    fn new(name: &'static str, states: Vec<SwitchState>) -> Self {
        let states = states
            .into_iter()
            .map(|state| (state.state_id(), state))
            .collect();
        Self {
            id: ControlId::from_name(name),
            name,
            states,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self, state_id: SwitchStateId) -> Option<&SwitchState> {
        self.states.get(&state_id)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

/// 内部实体集合
#[derive(Debug)]
pub struct InternalEntities {
    switches: HashMap<ControlId, InternalSwitch>,
    triggers: HashMap<ControlId, InternalTrigger>,
    parameters: HashMap<ControlId, Parameter>,
}

fn insert_unique<V>(map: &mut HashMap<ControlId, V>, id: ControlId, value: V) -> AtlResult<()> {
    if map.contains_key(&id) {
        return Err(AtlError::DuplicateControl(id));
    }
    map.insert(id, value);
    Ok(())
}

impl InternalEntities {
    /// 构建全部内部开关、触发器与参数
    ///
    /// 每个触发器从 `allocator` 获取唯一的实现ID。
    pub fn new(
        bindings: &InternalBindings,
        allocator: &mut TriggerImplIdAllocator,
    ) -> AtlResult<Self> {
        let mut entities = Self {
            switches: HashMap::new(),
            triggers: HashMap::new(),
            parameters: HashMap::new(),
        };

        entities.create_switches(bindings)?;
        entities.create_triggers(bindings, allocator)?;
        entities.create_parameters()?;

        tracing::info!(
            target: "atl",
            switches = entities.switches.len(),
            triggers = entities.triggers.len(),
            parameters = entities.parameters.len(),
            middleware = bindings.middleware.name(),
            "internal entities created"
        );
        Ok(entities)
    }

    fn create_switches(&mut self, bindings: &InternalBindings) -> AtlResult<()> {
        let global_object = bindings.global_object;

        let occlusion_states: Vec<SwitchState> = [
            IGNORE_STATE_ID,
            ADAPTIVE_STATE_ID,
            LOW_STATE_ID,
            MEDIUM_STATE_ID,
            HIGH_STATE_ID,
        ]
        .into_iter()
        .map(|state_id| {
            OcclusionObstructionState::new(
                state_id,
                bindings.listener_provider.clone(),
                global_object,
            )
            .into()
        })
        .collect();

        let relative_states: Vec<SwitchState> = [ON_STATE_ID, OFF_STATE_ID]
            .into_iter()
            .map(|state_id| VelocityTrackingState::relative(state_id, global_object).into())
            .collect();

        let absolute_states: Vec<SwitchState> = [ON_STATE_ID, OFF_STATE_ID]
            .into_iter()
            .map(|state_id| VelocityTrackingState::absolute(state_id, global_object).into())
            .collect();

        for switch in [
            InternalSwitch::new(OCCLUSION_CALCULATION_SWITCH_NAME, occlusion_states),
            InternalSwitch::new(RELATIVE_VELOCITY_TRACKING_SWITCH_NAME, relative_states),
            InternalSwitch::new(ABSOLUTE_VELOCITY_TRACKING_SWITCH_NAME, absolute_states),
        ] {
            insert_unique(&mut self.switches, switch.id(), switch)?;
        }
        Ok(())
    }

    fn create_triggers(
        &mut self,
        bindings: &InternalBindings,
        allocator: &mut TriggerImplIdAllocator,
    ) -> AtlResult<()> {
        let middleware = &bindings.middleware;
        let cvars = &bindings.cvars;

        let do_nothing = DoNothingTrigger::new(allocator.allocate()?);
        insert_unique(&mut self.triggers, DO_NOTHING_TRIGGER_ID, do_nothing.into())?;

        let lose_focus =
            FocusTrigger::lose_focus(allocator.allocate()?, middleware.clone(), cvars.clone());
        insert_unique(&mut self.triggers, LOSE_FOCUS_TRIGGER_ID, lose_focus.into())?;

        let get_focus =
            FocusTrigger::get_focus(allocator.allocate()?, middleware.clone(), cvars.clone());
        insert_unique(&mut self.triggers, GET_FOCUS_TRIGGER_ID, get_focus.into())?;

        for (control_id, action) in [
            (MUTE_ALL_TRIGGER_ID, GlobalAction::MuteAll),
            (UNMUTE_ALL_TRIGGER_ID, GlobalAction::UnmuteAll),
            (PAUSE_ALL_TRIGGER_ID, GlobalAction::PauseAll),
            (RESUME_ALL_TRIGGER_ID, GlobalAction::ResumeAll),
        ] {
            let trigger = GlobalTrigger::new(allocator.allocate()?, action, middleware.clone());
            insert_unique(&mut self.triggers, control_id, trigger.into())?;
        }
        Ok(())
    }

    fn create_parameters(&mut self) -> AtlResult<()> {
        insert_unique(
            &mut self.parameters,
            ABSOLUTE_VELOCITY_PARAMETER_ID,
            VelocityParameter::absolute().into(),
        )?;
        insert_unique(
            &mut self.parameters,
            RELATIVE_VELOCITY_PARAMETER_ID,
            VelocityParameter::relative().into(),
        )
    }

    pub fn switch(&self, switch_id: ControlId) -> Option<&InternalSwitch> {
        self.switches.get(&switch_id)
    }

    pub fn switch_state(
        &self,
        switch_id: ControlId,
        state_id: SwitchStateId,
    ) -> Option<&SwitchState> {
        self.switch(switch_id)?.state(state_id)
    }

    pub fn trigger(&self, trigger_id: ControlId) -> Option<&InternalTrigger> {
        self.triggers.get(&trigger_id)
    }

    pub fn parameter(&self, parameter_id: ControlId) -> Option<&Parameter> {
        self.parameters.get(&parameter_id)
    }

    /// 所有触发器的实现ID
    pub fn trigger_impl_ids(&self) -> impl Iterator<Item = TriggerImplId> + '_ {
        self.triggers.values().map(|trigger| trigger.id())
    }

    /// 设置开关状态，未知开关或状态返回 `FailureInvalidControlId`
    pub fn set_switch_state(
        &self,
        switch_id: ControlId,
        state_id: SwitchStateId,
        object: &mut dyn AudioObject,
    ) -> ExecutionStatus {
        match self.switch_state(switch_id, state_id) {
            Some(state) => state.set(object),
            None => {
                tracing::warn!(
                    target: "atl",
                    switch_id = %switch_id,
                    state_id = %state_id,
                    "unknown internal switch state"
                );
                ExecutionStatus::FailureInvalidControlId
            }
        }
    }

    /// 执行触发器，未知触发器返回 `FailureInvalidControlId`
    pub fn execute_trigger(
        &self,
        trigger_id: ControlId,
        impl_object: Option<&mut dyn ImplObject>,
        impl_event: Option<&mut dyn ImplEvent>,
    ) -> ExecutionStatus {
        match self.trigger(trigger_id) {
            Some(trigger) => trigger.execute(impl_object, impl_event),
            None => {
                tracing::warn!(target: "atl", trigger_id = %trigger_id, "unknown internal trigger");
                ExecutionStatus::FailureInvalidControlId
            }
        }
    }

    /// 设置参数，未知参数返回 `FailureInvalidControlId`
    pub fn set_parameter(
        &self,
        parameter_id: ControlId,
        object: &mut dyn AudioObject,
        value: f32,
    ) -> ExecutionStatus {
        match self.parameter(parameter_id) {
            Some(parameter) => parameter.set(object, value),
            None => {
                tracing::warn!(
                    target: "atl",
                    parameter_id = %parameter_id,
                    "unknown internal parameter"
                );
                ExecutionStatus::FailureInvalidControlId
            }
        }
    }
}

impl Drop for InternalEntities {
    fn drop(&mut self) {
        tracing::debug!(target: "atl", "internal entities released");
    }
}
