//! 听者
//!
//! 内部实体只读取当前活动听者的快照，位置分量用于遮挡计算。

use glam::{Affine3A, Vec3};
use parking_lot::RwLock;

/// 听者属性快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListenerAttributes {
    /// 世界变换
    pub transform: Affine3A,
    /// 速度
    pub velocity: Vec3,
}

impl Default for ListenerAttributes {
    fn default() -> Self {
        Self {
            transform: Affine3A::IDENTITY,
            velocity: Vec3::ZERO,
        }
    }
}

impl ListenerAttributes {
    /// 从位置创建（无旋转）
    pub fn from_position(position: Vec3) -> Self {
        Self {
            transform: Affine3A::from_translation(position),
            velocity: Vec3::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// 世界位置
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.transform.translation)
    }
}

/// 活动听者提供者
///
/// 不允许失败：没有活动听者时返回默认（单位）变换。
pub trait ListenerProvider: Send + Sync {
    fn active_listener_attributes(&self) -> ListenerAttributes;
}

/// 线程安全的听者管理器
#[derive(Debug, Default)]
pub struct ListenerManager {
    active: RwLock<Option<ListenerAttributes>>,
}

impl ListenerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新活动听者
    pub fn set_active_listener(&self, attributes: ListenerAttributes) {
        *self.active.write() = Some(attributes);
    }

    /// 移除活动听者，之后返回默认变换
    pub fn clear_active_listener(&self) {
        *self.active.write() = None;
    }

    pub fn has_active_listener(&self) -> bool {
        self.active.read().is_some()
    }
}

impl ListenerProvider for ListenerManager {
    fn active_listener_attributes(&self) -> ListenerAttributes {
        (*self.active.read()).unwrap_or_default()
    }
}
