//! 关节角色与角度约定
//!
//! 同一逻辑关节角在不同舵机上对应的物理角不同：舵机盘的安装位置带来固定偏置，
//! 左右腿镜像安装带来方向翻转。机械行程（[`RotationLimit`]）在这里兼作镜像标志。
//!
//! | 角色     | 行程 180°                  | 其他行程                   |
//! |----------|----------------------------|----------------------------|
//! | Shoulder | `logical + offset`         | `logical + offset`         |
//! | Arm      | `logical + offset`         | `180 - logical + offset`   |
//! | Wrist    | `180 - logical + offset`   | `logical + offset`         |
//!
//! 本层不做任何限幅，越界在执行器边界处检查。

use crate::error::ServoError;
use serde::{Deserialize, Serialize};
use spotmicro_kinematics::{Deg, LegJoint};
use std::fmt;

/// 舵机机械行程
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum RotationLimit {
    /// 180° 舵机（非镜像安装）
    Deg180 = 180,
    /// 270° 舵机（镜像安装）
    Deg270 = 270,
}

impl RotationLimit {
    /// 行程（度）
    #[inline]
    pub const fn degrees(self) -> u16 {
        self as u16
    }

    /// 是否为镜像安装（行程不等于 180°）
    #[inline]
    pub const fn is_mirrored(self) -> bool {
        !matches!(self, RotationLimit::Deg180)
    }

    /// 另一种安装方向
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            RotationLimit::Deg180 => RotationLimit::Deg270,
            RotationLimit::Deg270 => RotationLimit::Deg180,
        }
    }
}

impl TryFrom<u16> for RotationLimit {
    type Error = ServoError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            180 => Ok(RotationLimit::Deg180),
            270 => Ok(RotationLimit::Deg270),
            _ => Err(ServoError::InvalidRotationLimit { value }),
        }
    }
}

impl From<RotationLimit> for u16 {
    fn from(limit: RotationLimit) -> u16 {
        limit.degrees()
    }
}

impl fmt::Display for RotationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// 关节角色
///
/// 决定逻辑角到物理角的换算公式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointRole {
    /// 肩部舵机，驱动髋关节
    Shoulder,
    /// 大臂舵机，驱动腿关节
    Arm,
    /// 腕部舵机，驱动腕关节
    Wrist,
}

impl JointRole {
    /// 按求解输出顺序排列的角色
    pub const ALL: [JointRole; 3] = [JointRole::Shoulder, JointRole::Arm, JointRole::Wrist];

    /// 该角色消费的逻辑关节
    pub const fn joint(self) -> LegJoint {
        match self {
            JointRole::Shoulder => LegJoint::Hip,
            JointRole::Arm => LegJoint::Leg,
            JointRole::Wrist => LegJoint::Wrist,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            JointRole::Shoulder => "shoulder",
            JointRole::Arm => "arm",
            JointRole::Wrist => "wrist",
        }
    }

    /// 逻辑关节角 → 舵机物理角
    pub fn convert(self, logical: Deg, offset: Deg, limit: RotationLimit) -> Deg {
        let direct = logical + offset;
        let mirrored = Deg::DEG_180 - logical + offset;
        match (self, limit.is_mirrored()) {
            (JointRole::Shoulder, _) => direct,
            (JointRole::Arm, false) | (JointRole::Wrist, true) => direct,
            (JointRole::Arm, true) | (JointRole::Wrist, false) => mirrored,
        }
    }
}

impl From<LegJoint> for JointRole {
    fn from(joint: LegJoint) -> Self {
        match joint {
            LegJoint::Hip => JointRole::Shoulder,
            LegJoint::Leg => JointRole::Arm,
            LegJoint::Wrist => JointRole::Wrist,
        }
    }
}

impl fmt::Display for JointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANGLES: [f64; 5] = [0.0, 12.5, 45.0, 90.0, 171.25];
    const OFFSETS: [f64; 4] = [-15.0, -2.0, 0.0, 7.0];

    #[test]
    fn test_rotation_limit_try_from() {
        assert_eq!(RotationLimit::try_from(180).unwrap(), RotationLimit::Deg180);
        assert_eq!(RotationLimit::try_from(270).unwrap(), RotationLimit::Deg270);
        assert_eq!(
            RotationLimit::try_from(360).unwrap_err(),
            ServoError::InvalidRotationLimit { value: 360 }
        );
        assert!(!RotationLimit::Deg180.is_mirrored());
        assert!(RotationLimit::Deg270.is_mirrored());
        assert_eq!(RotationLimit::Deg180.flipped(), RotationLimit::Deg270);
    }

    #[test]
    fn test_shoulder_ignores_mirroring() {
        for &a in &ANGLES {
            for &o in &OFFSETS {
                for limit in [RotationLimit::Deg180, RotationLimit::Deg270] {
                    assert_eq!(
                        JointRole::Shoulder.convert(Deg(a), Deg(o), limit),
                        Deg(a + o)
                    );
                }
            }
        }
    }

    #[test]
    fn test_arm_passthrough_and_mirror() {
        for &a in &ANGLES {
            for &o in &OFFSETS {
                assert_eq!(
                    JointRole::Arm.convert(Deg(a), Deg(o), RotationLimit::Deg180),
                    Deg(a + o)
                );
                assert_eq!(
                    JointRole::Arm.convert(Deg(a), Deg(o), RotationLimit::Deg270),
                    Deg(180.0 - a + o)
                );
            }
        }
    }

    #[test]
    fn test_wrist_formulas() {
        for &a in &ANGLES {
            for &o in &OFFSETS {
                assert_eq!(
                    JointRole::Wrist.convert(Deg(a), Deg(o), RotationLimit::Deg180),
                    Deg(180.0 - a + o)
                );
                assert_eq!(
                    JointRole::Wrist.convert(Deg(a), Deg(o), RotationLimit::Deg270),
                    Deg(a + o)
                );
            }
        }
    }

    #[test]
    fn test_left_right_symmetry() {
        // 镜像安装 + 偏置 o 等价于 180 减去非镜像安装 + 偏置 -o
        for role in [JointRole::Arm, JointRole::Wrist] {
            for limit in [RotationLimit::Deg180, RotationLimit::Deg270] {
                for &a in &ANGLES {
                    for &o in &OFFSETS {
                        let mirrored = role.convert(Deg(a), Deg(o), limit.flipped());
                        let plain = role.convert(Deg(a), Deg(-o), limit);
                        assert!((mirrored.0 - (180.0 - plain.0)).abs() < 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_clamping() {
        let angle = JointRole::Arm.convert(Deg(175.0), Deg(20.0), RotationLimit::Deg180);
        assert_eq!(angle, Deg(195.0));
    }

    #[test]
    fn test_role_joint_mapping() {
        for role in JointRole::ALL {
            assert_eq!(JointRole::from(role.joint()), role);
        }
    }

    #[test]
    fn test_serde_uses_degrees() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            limit: RotationLimit,
            role: JointRole,
        }

        let text = toml::to_string(&Wrapper {
            limit: RotationLimit::Deg270,
            role: JointRole::Arm,
        })
        .unwrap();
        assert!(text.contains("limit = 270"), "{}", text);
        assert!(text.contains("role = \"arm\""), "{}", text);

        let bad = toml::from_str::<Wrapper>("limit = 90\nrole = \"arm\"\n");
        assert!(bad.is_err());
    }
}
