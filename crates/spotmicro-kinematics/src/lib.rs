//! # SpotMicro Kinematics
//!
//! 四足机器人单腿的闭式逆运动学。
//!
//! ## 模块
//!
//! - `units` - 强类型角度单位（`Deg` / `Rad`）
//! - `geometry` - 机身连杆尺寸常量
//! - `types` - 足端目标、关节角
//! - `solver` - IK 求解器
//! - `error` - 求解错误
//!
//! 本 crate 只做纯计算，不依赖任何舵机或硬件层。

pub mod error;
pub mod geometry;
pub mod solver;
pub mod types;
pub mod units;

pub use error::KinematicsError;
pub use geometry::{HIP_LENGTH, LEG_LENGTH, WRIST_LENGTH};
pub use solver::IkSolver;
pub use types::{FootTarget, JointAngles, LegJoint};
pub use units::{Deg, Rad};
