//! 舵机绑定（Limb）
//!
//! 一个 `Limb` 独占一个执行器，记录当前/目标位置，并把物理角度换算为原生脉宽下发。
//!
//! # 生命周期
//!
//! 1. 构造时校验配置（中位必须在 `[0, 180]`），绑定通道，立即归中
//! 2. 控制循环中反复调用 [`Limb::move_to_angle`]
//!
//! # 示例
//!
//! ```rust
//! use spotmicro_kinematics::Deg;
//! use spotmicro_servo::{JointRole, Limb, LimbConfig, RecordingActuator, RotationLimit};
//!
//! let config = LimbConfig::new(1, 0.0, RotationLimit::Deg180);
//! let mut arm = Limb::new(JointRole::Arm, config, RecordingActuator::new()).unwrap();
//! assert_eq!(arm.actuator().last_pulse(), Some(1477));
//!
//! arm.move_to_logical(Deg(45.0)).unwrap();
//! assert_eq!(arm.target_position(), Deg(45.0));
//! ```

use crate::actuator::ServoActuator;
use crate::config::LimbConfig;
use crate::error::ServoError;
use crate::hooks::{HookManager, LimbEvent};
use crate::pulse::{MAX_ANGLE, angle_to_pulse, pulse_to_angle};
use crate::role::{JointRole, RotationLimit};
use spotmicro_kinematics::Deg;
use std::fmt;
use tracing::{debug, trace};

/// 舵机绑定
pub struct Limb<A: ServoActuator> {
    role: JointRole,
    config: LimbConfig,
    center_position: Deg,
    current_position: Deg,
    target_position: Deg,
    actuator: A,
    hooks: HookManager,
}

impl<A: ServoActuator> Limb<A> {
    /// 创建并归中
    ///
    /// # 错误
    ///
    /// - 中位超出 `[0, 180]`：`ServoError::CenterOutOfRange`
    /// - 绑定或写入失败：`ServoError::Actuator`
    pub fn new(role: JointRole, config: LimbConfig, actuator: A) -> Result<Self, ServoError> {
        Self::with_hooks(role, config, actuator, HookManager::new())
    }

    /// 创建并归中，同时注册回调
    pub fn with_hooks(
        role: JointRole,
        config: LimbConfig,
        mut actuator: A,
        hooks: HookManager,
    ) -> Result<Self, ServoError> {
        config.validate()?;
        actuator.attach(config.channel)?;

        let center = config.center();
        let pulse_us = angle_to_pulse(center);
        actuator.write_pulse(pulse_us)?;

        debug!(
            %role,
            channel = config.channel,
            offset = config.offset,
            center = center.0,
            rotation_limit = config.rotation_limit.degrees(),
            "limb homed"
        );

        let limb = Self {
            role,
            config,
            center_position: center,
            current_position: center,
            target_position: center,
            actuator,
            hooks,
        };
        limb.hooks.trigger_homed(&limb.event(center, pulse_us));
        Ok(limb)
    }

    /// 逻辑关节角 → 本舵机的物理角（不做范围检查）
    #[inline]
    pub fn convert_angle(&self, logical: Deg) -> Deg {
        self.role
            .convert(logical, self.config.offset(), self.config.rotation_limit)
    }

    /// 检查物理角度可以下发
    pub fn check_angle(&self, angle: Deg) -> Result<Deg, ServoError> {
        if !angle.within(Deg::ZERO, MAX_ANGLE) {
            return Err(ServoError::AngleOutOfRange {
                role: self.role,
                angle: angle.0,
            });
        }
        Ok(angle)
    }

    /// 移动到物理角度，返回写入的脉宽
    ///
    /// 即发即弃：不等待舵机到位。越界或 NaN 角度在写入前被拒绝，不做限幅。
    pub fn move_to_angle(&mut self, angle: Deg) -> Result<u16, ServoError> {
        let angle = self.check_angle(angle)?;
        let pulse_us = angle_to_pulse(angle);

        self.target_position = angle;
        self.actuator.write_pulse(pulse_us)?;
        self.current_position = angle;

        trace!(
            role = %self.role,
            channel = self.config.channel,
            angle = angle.0,
            pulse_us,
            quantized = pulse_to_angle(pulse_us).0,
            "pulse written"
        );
        self.hooks.trigger_command(&self.event(angle, pulse_us));
        Ok(pulse_us)
    }

    /// 换算逻辑角后移动
    pub fn move_to_logical(&mut self, logical: Deg) -> Result<u16, ServoError> {
        self.move_to_angle(self.convert_angle(logical))
    }

    /// 回到中位
    pub fn home(&mut self) -> Result<u16, ServoError> {
        self.move_to_angle(self.center_position)
    }

    fn event(&self, angle: Deg, pulse_us: u16) -> LimbEvent {
        LimbEvent {
            role: self.role,
            channel: self.config.channel,
            angle,
            pulse_us,
        }
    }

    pub fn role(&self) -> JointRole {
        self.role
    }

    pub fn channel(&self) -> u8 {
        self.config.channel
    }

    pub fn offset(&self) -> Deg {
        self.config.offset()
    }

    pub fn rotation_limit(&self) -> RotationLimit {
        self.config.rotation_limit
    }

    pub fn config(&self) -> &LimbConfig {
        &self.config
    }

    /// 中位（90 + 安装偏置）
    pub fn center_position(&self) -> Deg {
        self.center_position
    }

    /// 最近一次成功下发的物理角度
    pub fn current_position(&self) -> Deg {
        self.current_position
    }

    /// 最近一次请求的物理角度
    pub fn target_position(&self) -> Deg {
        self.target_position
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

}

impl<A: ServoActuator> fmt::Display for Limb<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - center position: {} angle offset: {} channel: {} rotation limit: {}",
            self.role,
            self.center_position,
            self.offset(),
            self.config.channel,
            self.config.rotation_limit
        )
    }
}

impl<A: ServoActuator + fmt::Debug> fmt::Debug for Limb<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Limb")
            .field("role", &self.role)
            .field("config", &self.config)
            .field("current_position", &self.current_position)
            .field("target_position", &self.target_position)
            .field("actuator", &self.actuator)
            .finish()
    }
}
