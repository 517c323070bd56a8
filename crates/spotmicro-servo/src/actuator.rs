//! 执行器抽象
//!
//! [`ServoActuator`] 是舵机驱动的最小能力集：绑定通道、写入原生脉宽。
//! 真实硬件驱动（PWM 外设、PCA9685 等）在本 crate 之外实现。
//!
//! [`RecordingActuator`] 只记录命令，不驱动硬件，用于测试和 dry-run。

use crate::pulse::{MAX_PULSE_US, MIN_PULSE_US};
use thiserror::Error;
use tracing::trace;

/// 执行器错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActuatorError {
    /// 尚未绑定通道
    #[error("Actuator not attached to a channel")]
    NotAttached,

    /// 底层写入失败
    #[error("Write failed: {0}")]
    Write(String),
}

/// 舵机执行器
///
/// # 语义
///
/// - `write_pulse` 是即发即弃命令：舵机固件异步完成运动，本接口不等待到位
/// - 实现必须是非阻塞的单次外设写
pub trait ServoActuator {
    /// 绑定到通道
    fn attach(&mut self, channel: u8) -> Result<(), ActuatorError>;

    /// 写入原生脉宽（µs）
    fn write_pulse(&mut self, pulse_us: u16) -> Result<(), ActuatorError>;
}

impl<A: ServoActuator + ?Sized> ServoActuator for Box<A> {
    fn attach(&mut self, channel: u8) -> Result<(), ActuatorError> {
        (**self).attach(channel)
    }

    fn write_pulse(&mut self, pulse_us: u16) -> Result<(), ActuatorError> {
        (**self).write_pulse(pulse_us)
    }
}

/// 记录型执行器
///
/// 保存绑定的通道与所有写入的脉宽，不做任何 I/O。
#[derive(Debug, Clone, Default)]
pub struct RecordingActuator {
    channel: Option<u8>,
    pulses: Vec<u16>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 绑定的通道
    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    /// 所有写入过的脉宽（按时间顺序）
    pub fn pulses(&self) -> &[u16] {
        &self.pulses
    }

    /// 最近一次写入的脉宽
    pub fn last_pulse(&self) -> Option<u16> {
        self.pulses.last().copied()
    }
}

impl ServoActuator for RecordingActuator {
    fn attach(&mut self, channel: u8) -> Result<(), ActuatorError> {
        self.channel = Some(channel);
        Ok(())
    }

    fn write_pulse(&mut self, pulse_us: u16) -> Result<(), ActuatorError> {
        let channel = self.channel.ok_or(ActuatorError::NotAttached)?;
        if !(MIN_PULSE_US..=MAX_PULSE_US).contains(&pulse_us) {
            trace!(channel, pulse_us, "pulse outside servo range");
        }
        self.pulses.push(pulse_us);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_actuator() {
        let mut actuator = RecordingActuator::new();
        assert_eq!(
            actuator.write_pulse(1500).unwrap_err(),
            ActuatorError::NotAttached
        );

        actuator.attach(3).unwrap();
        actuator.write_pulse(1477).unwrap();
        actuator.write_pulse(2400).unwrap();

        assert_eq!(actuator.channel(), Some(3));
        assert_eq!(actuator.pulses(), &[1477, 2400]);
        assert_eq!(actuator.last_pulse(), Some(2400));
    }

    #[test]
    fn test_boxed_actuator() {
        let mut boxed: Box<dyn ServoActuator> = Box::new(RecordingActuator::new());
        boxed.attach(0).unwrap();
        boxed.write_pulse(554).unwrap();
    }

    #[test]
    fn test_actuator_error_display() {
        assert_eq!(
            format!("{}", ActuatorError::Write("i2c nack".to_string())),
            "Write failed: i2c nack"
        );
    }
}
