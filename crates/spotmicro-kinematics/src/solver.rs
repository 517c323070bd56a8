//! 闭式逆运动学求解器
//!
//! 把足端目标 `(z, y, x)` 分解为两个平面问题：
//!
//! 1. **髋平面**（y-z）：由侧向偏移求髋关节角，并得到倾斜后的等效腿长 `z2`
//! 2. **矢状面**（x-z）：由前后偏移修正腿长为 `z3`，再用余弦定理求腿、腕关节角
//!
//! # 兼容性说明
//!
//! 矢状面中的 `leg_angle_with_x` 先乘以 180 再参与 `cos`，
//! 腿关节的 acos 参数中还减去了 `atan(x / z3)`。两者都是参考几何模型的一部分，
//! 求解器逐位保留这一行为，`x != 0` 时的输出以此为准。
//!
//! # 示例
//!
//! ```rust
//! use spotmicro_kinematics::{FootTarget, IkSolver};
//!
//! let solver = IkSolver::new();
//! let angles = solver.calc_angles(FootTarget::new(150.0, 0.0, 0.0)).unwrap();
//! assert!((angles.hip.0 - 90.0).abs() < 1e-6);
//! ```

use crate::error::KinematicsError;
use crate::geometry::{HIP_LENGTH, LEG_LENGTH, WRIST_LENGTH};
use crate::types::{FootTarget, JointAngles, LegJoint};
use crate::units::Rad;
use std::f64::consts::PI;
use tracing::trace;

/// 单腿 IK 求解器
///
/// 无内部状态，连杆尺寸取自 [`crate::geometry`] 常量。
/// 相同输入总是得到逐位相同的输出。
#[derive(Debug, Clone, Copy, Default)]
pub struct IkSolver;

impl IkSolver {
    pub const fn new() -> Self {
        Self
    }

    /// 求解三个逻辑关节角
    ///
    /// # 错误
    ///
    /// - `z <= 0` 或输入非有限值
    /// - `y + HIP_LENGTH == 0`（髋部几何退化）
    /// - 任一 acos 参数超出 `[-1, 1]`（目标不可达）
    ///
    /// 出错时不会返回任何角度。
    pub fn calc_angles(&self, target: FootTarget) -> Result<JointAngles, KinematicsError> {
        let FootTarget { z, y, x } = target;

        // NaN 也走这里
        if !(z > 0.0 && z.is_finite()) {
            return Err(KinematicsError::NonPositiveHeight { z });
        }
        if !(y.is_finite() && x.is_finite()) {
            return Err(KinematicsError::NonFiniteOffset { y, x });
        }

        let (l1, l2) = (LEG_LENGTH, WRIST_LENGTH);

        // 髋平面
        let hip_offset = y + HIP_LENGTH;
        if hip_offset == 0.0 {
            return Err(KinematicsError::DegenerateHipOffset { y });
        }
        let hip_angle_with_y1 = Rad((hip_offset / z).atan());
        let hip_hyp = hip_offset / hip_angle_with_y1.sin();
        let hip_angle_with_y2 = Rad(checked_acos(LegJoint::Hip, HIP_LENGTH / hip_hyp)?);
        let hip = (hip_angle_with_y2 + hip_angle_with_y1).to_deg();

        // 倾斜后的腿长
        let z2 = HIP_LENGTH * hip_angle_with_y2.tan();

        // 矢状面
        let leg_angle_with_x = (x / z2).atan() * 180.0;
        let leg_angle_with_x_deg = (leg_angle_with_x * 180.0) / PI;
        let z3 = z2 / leg_angle_with_x.cos();

        let leg_arg = (z3.powi(2) + l1.powi(2) - l2.powi(2)) / (2.0 * z3 * l1) - (x / z3).atan();
        let leg = Rad(checked_acos(LegJoint::Leg, leg_arg)?).to_deg();

        let wrist_arg = (l1.powi(2) + l2.powi(2) - z3.powi(2)) / (2.0 * l1 * l2);
        let wrist = Rad(checked_acos(LegJoint::Wrist, wrist_arg)?).to_deg();

        trace!(
            %target,
            hip_hyp,
            z2,
            leg_angle_with_x,
            leg_angle_with_x_deg,
            z3,
            "IK intermediates"
        );

        let angles = JointAngles::new(hip, leg, wrist);
        if let Some((joint, _)) = angles.iter().find(|(_, angle)| !angle.is_finite()) {
            return Err(KinematicsError::NonFinite { joint });
        }

        Ok(angles)
    }
}

/// 带定义域检查的 acos
fn checked_acos(joint: LegJoint, argument: f64) -> Result<f64, KinematicsError> {
    if !argument.is_finite() {
        return Err(KinematicsError::NonFinite { joint });
    }
    if !(-1.0..=1.0).contains(&argument) {
        return Err(KinematicsError::OutOfReach { joint, argument });
    }
    Ok(argument.acos())
}
