//! 舵机层错误类型定义

use crate::actuator::ActuatorError;
use crate::role::JointRole;
use thiserror::Error;

/// 舵机层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServoError {
    // ==================== Configuration Errors ====================
    /// 不支持的机械行程
    #[error("Unsupported rotation limit: {value}° (expected 180 or 270)")]
    InvalidRotationLimit {
        /// 原始值（度）
        value: u16,
    },

    /// 中位（90 + 安装偏置）超出舵机可寻址范围
    #[error("Center position {center:.1}° (offset {offset:+.1}°) outside [0, 180]")]
    CenterOutOfRange {
        /// 安装偏置（度）
        offset: f64,
        /// 计算得到的中位（度）
        center: f64,
    },

    // ==================== Range Errors ====================
    /// 物理角度超出 [0, 180]，拒绝下发
    #[error("{role} angle {angle:.3}° outside [0, 180], command rejected")]
    AngleOutOfRange {
        /// 关节角色
        role: JointRole,
        /// 物理角度（度）
        angle: f64,
    },

    // ==================== I/O Errors ====================
    /// 执行器错误
    #[error("Actuator error: {0}")]
    Actuator(#[from] ActuatorError),
}

impl ServoError {
    /// 是否为配置错误（应在初始化阶段暴露）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRotationLimit { .. } | Self::CenterOutOfRange { .. }
        )
    }

    /// 是否为范围错误
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::AngleOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servo_error_display() {
        let err = ServoError::InvalidRotationLimit { value: 200 };
        assert_eq!(
            format!("{}", err),
            "Unsupported rotation limit: 200° (expected 180 or 270)"
        );

        let err = ServoError::CenterOutOfRange {
            offset: 95.0,
            center: 185.0,
        };
        assert_eq!(
            format!("{}", err),
            "Center position 185.0° (offset +95.0°) outside [0, 180]"
        );

        let err = ServoError::AngleOutOfRange {
            role: JointRole::Wrist,
            angle: -3.5,
        };
        assert_eq!(
            format!("{}", err),
            "wrist angle -3.500° outside [0, 180], command rejected"
        );
    }

    #[test]
    fn test_from_actuator_error() {
        let err: ServoError = ActuatorError::NotAttached.into();
        assert!(matches!(err, ServoError::Actuator(ActuatorError::NotAttached)));
        assert!(!err.is_config_error());
        assert!(!err.is_range_error());
    }

    #[test]
    fn test_classification() {
        assert!(ServoError::InvalidRotationLimit { value: 90 }.is_config_error());
        assert!(
            ServoError::AngleOutOfRange {
                role: JointRole::Arm,
                angle: 200.0
            }
            .is_range_error()
        );
    }
}
