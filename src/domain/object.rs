//! 音频对象
//!
//! `AudioObject` 是内部实体操作的目标接口；`AtlAudioObject` 为其内存实现。
//! 全局对象（非定位音频）通过 [`AudioObjectId::GLOBAL`] 句柄识别。

use crate::domain::ids::{
    AudioObjectId, SwitchStateId, ADAPTIVE_STATE_ID, HIGH_STATE_ID, IGNORE_STATE_ID, LOW_STATE_ID,
    MEDIUM_STATE_ID,
};
use bitflags::bitflags;
use glam::Vec3;
use serde::{Deserialize, Serialize};

bitflags! {
    /// 音频对象标志位
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        const NONE = 0;

        const TRACK_ABSOLUTE_VELOCITY = 1 << 0;
        const TRACK_RELATIVE_VELOCITY = 1 << 1;

        const VIRTUAL = 1 << 8;
        const WAITING_FOR_INITIAL_TRANSFORMATION = 1 << 9;
    }
}

/// 遮挡计算类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OcclusionType {
    /// 不计算遮挡
    #[default]
    Ignore,
    /// 根据距离自适应选择射线数量
    Adaptive,
    Low,
    Medium,
    High,
}

impl OcclusionType {
    /// 由保留状态ID映射遮挡类型，未知ID返回 `None`
    pub fn from_state_id(state_id: SwitchStateId) -> Option<Self> {
        match state_id {
            IGNORE_STATE_ID => Some(Self::Ignore),
            ADAPTIVE_STATE_ID => Some(Self::Adaptive),
            LOW_STATE_ID => Some(Self::Low),
            MEDIUM_STATE_ID => Some(Self::Medium),
            HIGH_STATE_ID => Some(Self::High),
            _ => None,
        }
    }
}

/// 内部实体可操作的音频对象
pub trait AudioObject {
    /// 对象句柄
    fn id(&self) -> AudioObjectId;

    /// 设置遮挡类型，对象可用听者位置重新计算射线/衰减参数
    fn handle_set_occlusion_type(&mut self, occlusion_type: OcclusionType, listener_position: Vec3);

    /// 设置阻挡与遮挡衰减值
    fn set_obstruction_occlusion(&mut self, obstruction: f32, occlusion: f32);

    fn set_flag(&mut self, flag: ObjectFlags);

    fn remove_flag(&mut self, flag: ObjectFlags);

    fn flags(&self) -> ObjectFlags;

    fn occlusion_type(&self) -> OcclusionType;

    fn obstruction(&self) -> f32;

    fn occlusion(&self) -> f32;
}

/// 音频对象的内存实现
#[derive(Debug, Clone, PartialEq)]
pub struct AtlAudioObject {
    id: AudioObjectId,
    flags: ObjectFlags,
    occlusion_type: OcclusionType,
    obstruction: f32,
    occlusion: f32,
    /// 最近一次设置遮挡类型时的听者位置
    occlusion_listener_position: Option<Vec3>,
    needs_occlusion_update: bool,
}

impl AtlAudioObject {
    pub fn new(id: AudioObjectId) -> Self {
        Self {
            id,
            flags: ObjectFlags::NONE,
            occlusion_type: OcclusionType::Ignore,
            obstruction: 0.0,
            occlusion: 0.0,
            occlusion_listener_position: None,
            needs_occlusion_update: false,
        }
    }

    /// 创建全局对象
    pub fn global() -> Self {
        Self::new(AudioObjectId::GLOBAL)
    }

    pub fn with_flags(mut self, flags: ObjectFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn occlusion_listener_position(&self) -> Option<Vec3> {
        self.occlusion_listener_position
    }

    /// 遮挡类型变化后是否需要重新计算
    pub fn needs_occlusion_update(&self) -> bool {
        self.needs_occlusion_update
    }

    /// 遮挡结果写回后调用
    pub fn clear_occlusion_update(&mut self) {
        self.needs_occlusion_update = false;
    }
}

impl AudioObject for AtlAudioObject {
    fn id(&self) -> AudioObjectId {
        self.id
    }

    fn handle_set_occlusion_type(
        &mut self,
        occlusion_type: OcclusionType,
        listener_position: Vec3,
    ) {
        self.occlusion_type = occlusion_type;
        self.occlusion_listener_position = Some(listener_position);
        self.needs_occlusion_update = occlusion_type != OcclusionType::Ignore;
    }

    fn set_obstruction_occlusion(&mut self, obstruction: f32, occlusion: f32) {
        self.obstruction = obstruction.clamp(0.0, 1.0);
        self.occlusion = occlusion.clamp(0.0, 1.0);
    }

    fn set_flag(&mut self, flag: ObjectFlags) {
        self.flags.insert(flag);
    }

    fn remove_flag(&mut self, flag: ObjectFlags) {
        self.flags.remove(flag);
    }

    fn flags(&self) -> ObjectFlags {
        self.flags
    }

    fn occlusion_type(&self) -> OcclusionType {
        self.occlusion_type
    }

    fn obstruction(&self) -> f32 {
        self.obstruction
    }

    fn occlusion(&self) -> f32 {
        self.occlusion
    }
}
