//! # SpotMicro Servo
//!
//! 逻辑关节角到舵机命令的一层：
//!
//! - `role` - 关节角色与左右镜像的角度约定
//! - `pulse` - 角度到原生脉宽的线性映射
//! - `actuator` - 执行器抽象（硬件驱动在外部实现）
//! - `limb` - 舵机绑定：归中、范围检查、下发命令
//! - `hooks` - 命令回调
//! - `config` - 舵机绑定配置
//!
//! 单线程同步模型：每个 `Limb` 独占自己的执行器，所有方法都是立即返回的单次写入。

pub mod actuator;
pub mod config;
pub mod error;
pub mod hooks;
pub mod limb;
pub mod pulse;
pub mod role;

pub use actuator::{ActuatorError, RecordingActuator, ServoActuator};
pub use config::LimbConfig;
pub use error::ServoError;
pub use hooks::{HookManager, LimbCallback, LimbEvent};
pub use limb::Limb;
pub use pulse::{MAX_PULSE_US, MIN_PULSE_US, angle_to_pulse, pulse_to_angle};
pub use role::{JointRole, RotationLimit};
