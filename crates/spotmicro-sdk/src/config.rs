//! 整机舵机配置
//!
//! 四条腿、十二个舵机的绑定参数，以 TOML 保存：
//!
//! ```toml
//! [front_left.shoulder]
//! channel = 0
//! offset = 0.0
//! rotation_limit = 180
//!
//! [front_left.arm]
//! channel = 1
//! offset = -4.0
//! rotation_limit = 180
//! # ...
//! ```
//!
//! 加载时立即校验（行程、中位、通道冲突），配置错误不会拖到控制周期里才暴露。

use crate::error::SdkError;
use crate::leg::LegId;
use serde::{Deserialize, Serialize};
use spotmicro_servo::{JointRole, LimbConfig, RotationLimit};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 单腿三个舵机的配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegConfig {
    pub shoulder: LimbConfig,
    pub arm: LimbConfig,
    pub wrist: LimbConfig,
}

impl LegConfig {
    /// 连续三个通道，统一行程，零偏置
    pub const fn contiguous(first_channel: u8, rotation_limit: RotationLimit) -> Self {
        Self {
            shoulder: LimbConfig::new(first_channel, 0.0, rotation_limit),
            arm: LimbConfig::new(first_channel + 1, 0.0, rotation_limit),
            wrist: LimbConfig::new(first_channel + 2, 0.0, rotation_limit),
        }
    }

    pub fn limb(&self, role: JointRole) -> &LimbConfig {
        match role {
            JointRole::Shoulder => &self.shoulder,
            JointRole::Arm => &self.arm,
            JointRole::Wrist => &self.wrist,
        }
    }

    pub fn limb_mut(&mut self, role: JointRole) -> &mut LimbConfig {
        match role {
            JointRole::Shoulder => &mut self.shoulder,
            JointRole::Arm => &mut self.arm,
            JointRole::Wrist => &mut self.wrist,
        }
    }
}

/// 整机配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    pub front_left: LegConfig,
    pub front_right: LegConfig,
    pub rear_left: LegConfig,
    pub rear_right: LegConfig,
}

impl Default for RobotConfig {
    /// 通道 0-11 依次分配；右侧腿镜像安装（270° 行程）
    fn default() -> Self {
        Self {
            front_left: LegConfig::contiguous(0, RotationLimit::Deg180),
            front_right: LegConfig::contiguous(3, RotationLimit::Deg270),
            rear_left: LegConfig::contiguous(6, RotationLimit::Deg180),
            rear_right: LegConfig::contiguous(9, RotationLimit::Deg270),
        }
    }
}

impl RobotConfig {
    pub fn leg(&self, id: LegId) -> &LegConfig {
        match id {
            LegId::FrontLeft => &self.front_left,
            LegId::FrontRight => &self.front_right,
            LegId::RearLeft => &self.rear_left,
            LegId::RearRight => &self.rear_right,
        }
    }

    pub fn leg_mut(&mut self, id: LegId) -> &mut LegConfig {
        match id {
            LegId::FrontLeft => &mut self.front_left,
            LegId::FrontRight => &mut self.front_right,
            LegId::RearLeft => &mut self.rear_left,
            LegId::RearRight => &mut self.rear_right,
        }
    }

    /// 校验所有舵机中位，并检查通道不重复
    pub fn validate(&self) -> Result<(), SdkError> {
        let mut channels = HashSet::new();
        for id in LegId::ALL {
            let leg = self.leg(id);
            for role in JointRole::ALL {
                let limb = leg.limb(role);
                limb.validate()
                    .map_err(|source| SdkError::InvalidLeg { leg: id, source })?;
                if !channels.insert(limb.channel) {
                    return Err(SdkError::DuplicateChannel {
                        channel: limb.channel,
                    });
                }
            }
        }
        Ok(())
    }

    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(text: &str) -> Result<Self, SdkError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> Result<String, SdkError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SdkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "robot config loaded");
        Ok(config)
    }

    /// 保存到文件（先校验）
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SdkError> {
        self.validate()?;
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|source| SdkError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
