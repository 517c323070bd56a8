//! 足端目标与关节角类型
//!
//! - [`FootTarget`]：相对髋部参考点的足端偏移（mm）
//! - [`JointAngles`]：一次 IK 求解得到的三个逻辑关节角（度）
//! - [`LegJoint`]：单腿三个关节的编译期安全索引

use crate::units::Deg;
use std::fmt;
use std::ops::Index;

/// 单腿关节枚举
///
/// 顺序固定：髋（hip）→ 腿（leg）→ 腕（wrist）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegJoint {
    /// 髋关节（侧摆）
    Hip = 0,
    /// 腿关节（大腿俯仰）
    Leg = 1,
    /// 腕关节（小腿/膝）
    Wrist = 2,
}

impl LegJoint {
    /// 所有关节，按求解输出顺序
    pub const ALL: [LegJoint; 3] = [LegJoint::Hip, LegJoint::Leg, LegJoint::Wrist];

    /// 关节索引（0-2）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 关节名称
    pub const fn name(self) -> &'static str {
        match self {
            LegJoint::Hip => "hip",
            LegJoint::Leg => "leg",
            LegJoint::Wrist => "wrist",
        }
    }
}

impl fmt::Display for LegJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 足端目标位置（mm，相对髋部参考点）
///
/// `z` 为髋部到地面的竖直距离，物理上必须为正；`y`、`x` 有符号。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FootTarget {
    /// 高度（mm）
    pub z: f64,
    /// 侧向偏移（mm）
    pub y: f64,
    /// 前后偏移（mm）
    pub x: f64,
}

impl FootTarget {
    /// 创建足端目标（参数顺序与 `calc_angles(z, y, x)` 一致）
    #[inline]
    pub const fn new(z: f64, y: f64, x: f64) -> Self {
        Self { z, y, x }
    }

    /// 正下方目标（`y = x = 0`）
    #[inline]
    pub const fn straight_down(z: f64) -> Self {
        Self::new(z, 0.0, 0.0)
    }
}

impl fmt::Display for FootTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(z={:.1}, y={:.1}, x={:.1}) mm", self.z, self.y, self.x)
    }
}

/// 三个逻辑关节角（度）
///
/// 每次求解新建，不缓存。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointAngles {
    pub hip: Deg,
    pub leg: Deg,
    pub wrist: Deg,
}

impl JointAngles {
    #[inline]
    pub const fn new(hip: Deg, leg: Deg, wrist: Deg) -> Self {
        Self { hip, leg, wrist }
    }

    /// 按 [`LegJoint::ALL`] 顺序返回数组
    #[inline]
    pub fn to_array(self) -> [Deg; 3] {
        [self.hip, self.leg, self.wrist]
    }

    /// 三个角度均为有限值
    pub fn is_finite(&self) -> bool {
        self.hip.is_finite() && self.leg.is_finite() && self.wrist.is_finite()
    }

    /// 与关节一起迭代
    pub fn iter(&self) -> impl Iterator<Item = (LegJoint, Deg)> + '_ {
        LegJoint::ALL.into_iter().map(move |joint| (joint, self[joint]))
    }
}

impl Index<LegJoint> for JointAngles {
    type Output = Deg;

    #[inline]
    fn index(&self, joint: LegJoint) -> &Deg {
        match joint {
            LegJoint::Hip => &self.hip,
            LegJoint::Leg => &self.leg,
            LegJoint::Wrist => &self.wrist,
        }
    }
}

impl fmt::Display for JointAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hip={}, leg={}, wrist={}",
            self.hip, self.leg, self.wrist
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_index_order() {
        for (i, joint) in LegJoint::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
    }

    #[test]
    fn test_joint_angles_index() {
        let angles = JointAngles::new(Deg(1.0), Deg(2.0), Deg(3.0));
        assert_eq!(angles[LegJoint::Hip], Deg(1.0));
        assert_eq!(angles[LegJoint::Leg], Deg(2.0));
        assert_eq!(angles[LegJoint::Wrist], Deg(3.0));
        assert_eq!(angles.to_array(), [Deg(1.0), Deg(2.0), Deg(3.0)]);

        let collected: Vec<_> = angles.iter().collect();
        assert_eq!(collected[2], (LegJoint::Wrist, Deg(3.0)));
    }

    #[test]
    fn test_is_finite() {
        let ok = JointAngles::new(Deg(1.0), Deg(2.0), Deg(3.0));
        assert!(ok.is_finite());

        let bad = JointAngles::new(Deg(1.0), Deg(f64::NAN), Deg(3.0));
        assert!(!bad.is_finite());
    }

    #[test]
    fn test_display() {
        let target = FootTarget::straight_down(150.0);
        assert_eq!(format!("{}", target), "(z=150.0, y=0.0, x=0.0) mm");
        assert_eq!(format!("{}", LegJoint::Wrist), "wrist");
    }
}
