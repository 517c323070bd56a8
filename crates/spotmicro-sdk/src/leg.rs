//! 单腿控制管线
//!
//! 每个控制周期调用一次 [`Leg::reach`]：
//!
//! ```text
//! FootTarget ──IkSolver──▶ JointAngles ──JointRole::convert──▶ 物理角 ×3 ──Limb──▶ 脉宽 ×3
//! ```
//!
//! 三个物理角全部检查通过后才会写入舵机：目标不可达（`KinematicsError`）或
//! 物理角越界（`ServoError::AngleOutOfRange`）时本周期不写任何舵机。
//! 执行器写入失败不在此列：按 shoulder → arm → wrist 顺序下发，
//! 出错前已写入的舵机保持新位置，之后的舵机不再写入。
//!
//! # 示例
//!
//! ```rust
//! use spotmicro_sdk::prelude::*;
//!
//! let config = RobotConfig::default();
//! let mut leg = Leg::new(LegId::FrontLeft, config.leg(LegId::FrontLeft), |_, _| {
//!     RecordingActuator::new()
//! })
//! .unwrap();
//!
//! let command = leg.reach(FootTarget::new(150.0, 0.0, 0.0)).unwrap();
//! assert_eq!(command.pulses.len(), 3);
//! ```

use crate::config::LegConfig;
use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use spotmicro_kinematics::{Deg, FootTarget, IkSolver, JointAngles};
use spotmicro_servo::{JointRole, Limb, LimbConfig, ServoActuator};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// 腿编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegId {
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
}

impl LegId {
    pub const ALL: [LegId; 4] = [
        LegId::FrontLeft,
        LegId::FrontRight,
        LegId::RearLeft,
        LegId::RearRight,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LegId::FrontLeft => "front-left",
            LegId::FrontRight => "front-right",
            LegId::RearLeft => "rear-left",
            LegId::RearRight => "rear-right",
        }
    }

    /// 简写（fl / fr / rl / rr）
    pub const fn short_name(self) -> &'static str {
        match self {
            LegId::FrontLeft => "fl",
            LegId::FrontRight => "fr",
            LegId::RearLeft => "rl",
            LegId::RearRight => "rr",
        }
    }

    /// 右侧腿（默认配置中为镜像安装）
    pub const fn is_right(self) -> bool {
        matches!(self, LegId::FrontRight | LegId::RearRight)
    }
}

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LegId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        LegId::ALL
            .into_iter()
            .find(|id| lower == id.name() || lower == id.short_name())
            .ok_or_else(|| format!("unknown leg '{}', expected one of fl, fr, rl, rr", s))
    }
}

/// 一个控制周期实际下发的命令
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegCommand {
    /// 逻辑关节角
    pub logical: JointAngles,
    /// 物理角（shoulder, arm, wrist）
    pub physical: [Deg; 3],
    /// 脉宽（shoulder, arm, wrist）
    pub pulses: [u16; 3],
}

impl fmt::Display for LegCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, role) in JointRole::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={} ({} µs)", role, self.physical[i], self.pulses[i])?;
        }
        Ok(())
    }
}

/// 单腿：IK 求解器 + 三个舵机
pub struct Leg<A: ServoActuator> {
    id: LegId,
    solver: IkSolver,
    shoulder: Limb<A>,
    arm: Limb<A>,
    wrist: Limb<A>,
}

impl<A: ServoActuator> Leg<A> {
    /// 按配置创建三个舵机并依次归中（shoulder → arm → wrist）
    ///
    /// `make_actuator` 为每个舵机提供执行器。
    pub fn new<F>(id: LegId, config: &LegConfig, mut make_actuator: F) -> Result<Self, SdkError>
    where
        F: FnMut(JointRole, &LimbConfig) -> A,
    {
        let mut bind = |role: JointRole| -> Result<Limb<A>, SdkError> {
            let limb_config = *config.limb(role);
            let actuator = make_actuator(role, &limb_config);
            Limb::new(role, limb_config, actuator).map_err(|source| {
                if source.is_config_error() {
                    SdkError::InvalidLeg { leg: id, source }
                } else {
                    SdkError::Servo(source)
                }
            })
        };

        let shoulder = bind(JointRole::Shoulder)?;
        let arm = bind(JointRole::Arm)?;
        let wrist = bind(JointRole::Wrist)?;
        debug!(leg = %id, "leg initialized");

        Ok(Self {
            id,
            solver: IkSolver::new(),
            shoulder,
            arm,
            wrist,
        })
    }

    /// 仅求解逻辑关节角
    pub fn solve(&self, target: FootTarget) -> Result<JointAngles, SdkError> {
        Ok(self.solver.calc_angles(target)?)
    }

    /// 逻辑关节角 → 物理角，并检查全部可下发
    pub fn physical_angles(&self, angles: JointAngles) -> Result<[Deg; 3], SdkError> {
        let mut physical = [Deg::ZERO; 3];
        for (slot, limb) in physical.iter_mut().zip(self.limbs()) {
            let angle = limb.convert_angle(angles[limb.role().joint()]);
            *slot = limb.check_angle(angle)?;
        }
        Ok(physical)
    }

    /// 下发一组逻辑关节角
    ///
    /// 越界时不写任何舵机；执行器错误时立即返回，已写入的舵机不回滚。
    pub fn apply(&mut self, angles: JointAngles) -> Result<LegCommand, SdkError> {
        let physical = self.physical_angles(angles).inspect_err(|err| {
            warn!(leg = %self.id, %angles, error = %err, "joint angles rejected");
        })?;

        let pulses = [
            self.shoulder.move_to_angle(physical[0])?,
            self.arm.move_to_angle(physical[1])?,
            self.wrist.move_to_angle(physical[2])?,
        ];

        Ok(LegCommand {
            logical: angles,
            physical,
            pulses,
        })
    }

    /// 求解 → 换算 → 下发
    pub fn reach(&mut self, target: FootTarget) -> Result<LegCommand, SdkError> {
        let angles = self.solve(target).inspect_err(|err| {
            warn!(leg = %self.id, %target, error = %err, "foot target rejected");
        })?;
        self.apply(angles)
    }

    /// 三个舵机回到中位
    pub fn home(&mut self) -> Result<[u16; 3], SdkError> {
        Ok([self.shoulder.home()?, self.arm.home()?, self.wrist.home()?])
    }

    pub fn id(&self) -> LegId {
        self.id
    }

    /// 三个舵机（shoulder, arm, wrist）
    pub fn limbs(&self) -> [&Limb<A>; 3] {
        [&self.shoulder, &self.arm, &self.wrist]
    }

    pub fn limb(&self, role: JointRole) -> &Limb<A> {
        match role {
            JointRole::Shoulder => &self.shoulder,
            JointRole::Arm => &self.arm,
            JointRole::Wrist => &self.wrist,
        }
    }
}

impl<A: ServoActuator> fmt::Display for Leg<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} leg", self.id)?;
        for limb in self.limbs() {
            writeln!(f, "  {}", limb)?;
        }
        Ok(())
    }
}
