//! 标识符值对象
//!
//! 控件、开关状态、触发器实现和音频对象的标识符。
//! 控件与开关状态的 ID 由名称哈希得到（小写名称 SHA-256 摘要的前 4 字节，小端序），
//! 保留名称的 ID 以常量形式提供。

use crate::core::error::{AtlError, AtlResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 无效 ID
pub const INVALID_ID: u32 = 0;

/// 计算名称的 ID（大小写不敏感）
pub fn name_to_id(name: &str) -> u32 {
    let mut hasher = Sha256::new();
    hasher.update(name.to_lowercase().as_bytes());
    let digest = hasher.finalize();
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// 控件ID（开关、触发器、参数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlId(pub u32);

impl ControlId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// 从控件名称计算ID
    pub fn from_name(name: &str) -> Self {
        Self(name_to_id(name))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// 开关状态ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SwitchStateId(pub u32);

impl SwitchStateId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// 从状态名称计算ID
    pub fn from_name(name: &str) -> Self {
        Self(name_to_id(name))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SwitchStateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// 触发器实现ID
///
/// 注册时由 [`TriggerImplIdAllocator`] 分配，实例存活期间不会复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriggerImplId(pub u32);

impl TriggerImplId {
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TriggerImplId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音频对象句柄
///
/// 按身份比较：两个对象即使状态相同，句柄不同即为不同对象。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AudioObjectId(pub u32);

impl AudioObjectId {
    /// 全局对象（非定位音频）
    pub const GLOBAL: AudioObjectId = AudioObjectId(1);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn is_global(&self) -> bool {
        *self == Self::GLOBAL
    }
}

/// 触发器实现ID分配器
///
/// 从 1 开始单调递增，耗尽时返回错误而不是回绕。
#[derive(Debug)]
pub struct TriggerImplIdAllocator {
    next: Option<u32>,
}

impl Default for TriggerImplIdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl TriggerImplIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从指定值开始分配
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: (first != INVALID_ID).then_some(first),
        }
    }

    /// 分配下一个ID
    pub fn allocate(&mut self) -> AtlResult<TriggerImplId> {
        let id = self.next.ok_or(AtlError::TriggerImplIdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(TriggerImplId(id))
    }
}

// ============================================================================
// 保留名称
// ============================================================================

pub const OCCLUSION_CALCULATION_SWITCH_NAME: &str = "occlusion_calculation_type";
pub const RELATIVE_VELOCITY_TRACKING_SWITCH_NAME: &str = "relative_velocity_tracking";
pub const ABSOLUTE_VELOCITY_TRACKING_SWITCH_NAME: &str = "absolute_velocity_tracking";

pub const IGNORE_STATE_NAME: &str = "ignore";
pub const ADAPTIVE_STATE_NAME: &str = "adaptive";
pub const LOW_STATE_NAME: &str = "low";
pub const MEDIUM_STATE_NAME: &str = "medium";
pub const HIGH_STATE_NAME: &str = "high";
pub const ON_STATE_NAME: &str = "on";
pub const OFF_STATE_NAME: &str = "off";

pub const DO_NOTHING_TRIGGER_NAME: &str = "do_nothing";
pub const LOSE_FOCUS_TRIGGER_NAME: &str = "lose_focus";
pub const GET_FOCUS_TRIGGER_NAME: &str = "get_focus";
pub const MUTE_ALL_TRIGGER_NAME: &str = "mute_all";
pub const UNMUTE_ALL_TRIGGER_NAME: &str = "unmute_all";
pub const PAUSE_ALL_TRIGGER_NAME: &str = "pause_all";
pub const RESUME_ALL_TRIGGER_NAME: &str = "resume_all";

pub const ABSOLUTE_VELOCITY_PARAMETER_NAME: &str = "absolute_velocity";
pub const RELATIVE_VELOCITY_PARAMETER_NAME: &str = "relative_velocity";

// ============================================================================
// 保留ID（与上面的名称一一对应）
// ============================================================================

pub const OCCLUSION_CALCULATION_SWITCH_ID: ControlId = ControlId(0x4403_1496);
pub const RELATIVE_VELOCITY_TRACKING_SWITCH_ID: ControlId = ControlId(0xB1F0_B13F);
pub const ABSOLUTE_VELOCITY_TRACKING_SWITCH_ID: ControlId = ControlId(0x5CFC_D5A2);

pub const IGNORE_STATE_ID: SwitchStateId = SwitchStateId(0x16F5_0A5F);
pub const ADAPTIVE_STATE_ID: SwitchStateId = SwitchStateId(0x73F0_C34B);
pub const LOW_STATE_ID: SwitchStateId = SwitchStateId(0x9DF0_1F6C);
pub const MEDIUM_STATE_ID: SwitchStateId = SwitchStateId(0x6A45_82C0);
pub const HIGH_STATE_ID: SwitchStateId = SwitchStateId(0xB1C9_F76E);
pub const ON_STATE_ID: SwitchStateId = SwitchStateId(0x851E_D3B8);
pub const OFF_STATE_ID: SwitchStateId = SwitchStateId(0xDD66_DCB4);

pub const DO_NOTHING_TRIGGER_ID: ControlId = ControlId(0xBC02_323D);
pub const LOSE_FOCUS_TRIGGER_ID: ControlId = ControlId(0x8A61_B6AE);
pub const GET_FOCUS_TRIGGER_ID: ControlId = ControlId(0x295C_D87B);
pub const MUTE_ALL_TRIGGER_ID: ControlId = ControlId(0xDFDE_8912);
pub const UNMUTE_ALL_TRIGGER_ID: ControlId = ControlId(0xDF41_8C65);
pub const PAUSE_ALL_TRIGGER_ID: ControlId = ControlId(0x9496_0AEA);
pub const RESUME_ALL_TRIGGER_ID: ControlId = ControlId(0x5645_EB7D);

pub const ABSOLUTE_VELOCITY_PARAMETER_ID: ControlId = ControlId(0x9DCC_5136);
pub const RELATIVE_VELOCITY_PARAMETER_ID: ControlId = ControlId(0x8359_AE38);
