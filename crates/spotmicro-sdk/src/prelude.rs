//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use spotmicro_sdk::prelude::*;
//! ```

// SDK 层
pub use crate::config::{LegConfig, RobotConfig};
pub use crate::leg::{Leg, LegCommand, LegId};

// 运动学层
pub use spotmicro_kinematics::{Deg, FootTarget, IkSolver, JointAngles, LegJoint};

// 舵机层
pub use spotmicro_servo::{
    JointRole, Limb, LimbConfig, RecordingActuator, RotationLimit, ServoActuator,
};

// 错误类型
pub use crate::error::SdkError;
pub use spotmicro_kinematics::KinematicsError;
pub use spotmicro_servo::{ActuatorError, ServoError};
