//! SpotMicro SDK - 四足机器人单腿逆运动学与舵机控制
//!
//! # 架构设计
//!
//! 从底层到高层：
//!
//! - **运动学层** (`spotmicro-kinematics`): 足端目标 → 三个逻辑关节角
//! - **舵机层** (`spotmicro-servo`): 逻辑角 → 物理角 → 脉宽，舵机绑定
//! - **SDK 层** (本 crate): 单腿管线 [`Leg`]、整机配置 [`RobotConfig`]
//!
//! # 快速开始
//!
//! ```rust
//! use spotmicro_sdk::prelude::*;
//!
//! let solver = IkSolver::new();
//! let angles = solver.calc_angles(FootTarget::new(150.0, 0.0, 0.0)).unwrap();
//! println!("{}", angles);
//! ```
//!
//! 控制循环、步态规划不在本 SDK 范围内，调用方负责按周期调用 [`Leg::reach`]。

pub mod config;
pub mod error;
pub mod leg;

// Prelude 模块
pub mod prelude;

// 下层 crate 通过模块路径访问
pub use spotmicro_kinematics as kinematics;
pub use spotmicro_servo as servo;

pub use config::{LegConfig, RobotConfig};
pub use error::SdkError;
pub use leg::{Leg, LegCommand, LegId};

use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 读取 `RUST_LOG`，未设置时使用 `default_directive`（如 `"info"`）。
/// 日志写到 stderr，stdout 留给命令输出。
/// 重复调用是安全的：已安装全局 subscriber 时直接返回。
pub fn init_logger(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
