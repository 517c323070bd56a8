//! 单个舵机的绑定参数

use crate::error::ServoError;
use crate::pulse::MAX_ANGLE;
use crate::role::RotationLimit;
use serde::{Deserialize, Serialize};
use spotmicro_kinematics::Deg;

/// 舵机绑定配置
///
/// TOML 示例：
///
/// ```toml
/// channel = 4
/// offset = -6.0
/// rotation_limit = 270
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimbConfig {
    /// 执行器通道号
    pub channel: u8,

    /// 安装偏置（度，有符号）
    #[serde(default)]
    pub offset: f64,

    /// 机械行程（180 或 270）
    #[serde(default = "default_rotation_limit")]
    pub rotation_limit: RotationLimit,
}

fn default_rotation_limit() -> RotationLimit {
    RotationLimit::Deg180
}

impl LimbConfig {
    pub const fn new(channel: u8, offset: f64, rotation_limit: RotationLimit) -> Self {
        Self {
            channel,
            offset,
            rotation_limit,
        }
    }

    /// 安装偏置
    #[inline]
    pub fn offset(&self) -> Deg {
        Deg(self.offset)
    }

    /// 中位 = 90 + 安装偏置
    #[inline]
    pub fn center(&self) -> Deg {
        Deg::DEG_90 + self.offset()
    }

    /// 检查中位在 `[0, 180]` 内
    pub fn validate(&self) -> Result<(), ServoError> {
        let center = self.center();
        if !center.within(Deg::ZERO, MAX_ANGLE) {
            return Err(ServoError::CenterOutOfRange {
                offset: self.offset,
                center: center.0,
            });
        }
        Ok(())
    }
}
