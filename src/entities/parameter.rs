//! 内部参数
//!
//! 速度参数目前只占位：不修改对象，始终返回成功。

use super::VelocityKind;
use crate::domain::object::AudioObject;
use crate::domain::status::ExecutionStatus;

/// 参数行为
pub trait ParameterBehavior {
    fn set(&self, object: &mut dyn AudioObject, value: f32) -> ExecutionStatus;
}

/// 绝对/相对速度参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VelocityParameter {
    kind: VelocityKind,
}

impl VelocityParameter {
    pub fn absolute() -> Self {
        Self {
            kind: VelocityKind::Absolute,
        }
    }

    pub fn relative() -> Self {
        Self {
            kind: VelocityKind::Relative,
        }
    }

    pub fn kind(&self) -> VelocityKind {
        self.kind
    }
}

impl ParameterBehavior for VelocityParameter {
    fn set(&self, _object: &mut dyn AudioObject, _value: f32) -> ExecutionStatus {
        // TODO: 中间件提供多普勒参数后在此映射速度
        ExecutionStatus::Success
    }
}

/// 内部参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Velocity(VelocityParameter),
}

impl ParameterBehavior for Parameter {
    fn set(&self, object: &mut dyn AudioObject, value: f32) -> ExecutionStatus {
        match self {
            Self::Velocity(parameter) => parameter.set(object, value),
        }
    }
}

impl From<VelocityParameter> for Parameter {
    fn from(parameter: VelocityParameter) -> Self {
        Self::Velocity(parameter)
    }
}
