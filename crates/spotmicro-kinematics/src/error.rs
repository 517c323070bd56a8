//! 运动学错误类型定义

use crate::types::LegJoint;
use thiserror::Error;

/// 逆运动学求解错误
///
/// 所有变体都表示目标足端位置在几何上不可达，求解结果未定义。
/// 调用方必须处理该错误，不得把未定义角度继续下发给舵机。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// 高度必须为正的有限值
    #[error("Foot height must be positive and finite, got {z} mm")]
    NonPositiveHeight {
        /// 输入高度（mm）
        z: f64,
    },

    /// 侧向偏移为有限值
    #[error("Foot offset must be finite (y = {y} mm, x = {x} mm)")]
    NonFiniteOffset {
        /// 侧向偏移（mm）
        y: f64,
        /// 前后偏移（mm）
        x: f64,
    },

    /// `y + HIP_LENGTH == 0`，髋部斜边为 0/0
    #[error("Degenerate hip geometry: lateral offset {y} mm cancels the hip length")]
    DegenerateHipOffset {
        /// 侧向偏移（mm）
        y: f64,
    },

    /// 反余弦参数超出 [-1, 1]（三角不等式不成立）
    #[error("Target out of reach for {joint} joint: acos argument {argument:.6} outside [-1, 1]")]
    OutOfReach {
        /// 出错的关节
        joint: LegJoint,
        /// acos 参数
        argument: f64,
    },

    /// 其他非有限的中间量或结果
    #[error("Non-finite {joint} angle computed")]
    NonFinite {
        /// 出错的关节
        joint: LegJoint,
    },
}

impl KinematicsError {
    /// 出错关节（输入校验类错误没有关节）
    pub fn joint(&self) -> Option<LegJoint> {
        match self {
            Self::OutOfReach { joint, .. } | Self::NonFinite { joint } => Some(*joint),
            Self::NonPositiveHeight { .. }
            | Self::NonFiniteOffset { .. }
            | Self::DegenerateHipOffset { .. } => None,
        }
    }
}
