//! 腿部几何常量
//!
//! 这些尺寸由机身机械结构决定，不是运行时输入。

/// 髋关节水平偏置长度（mm）
pub const HIP_LENGTH: f64 = 50.0;

/// 大腿段长度 L1（mm）
pub const LEG_LENGTH: f64 = 111.1;

/// 小腿段长度 L2（mm）
pub const WRIST_LENGTH: f64 = 118.5;
