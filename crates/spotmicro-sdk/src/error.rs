//! SDK 错误类型定义

use crate::leg::LegId;
use spotmicro_kinematics::KinematicsError;
use spotmicro_servo::ServoError;
use std::path::PathBuf;
use thiserror::Error;

/// SDK 错误类型
///
/// 三类核心错误各自对应一个变体：
///
/// - 几何不可达 → [`SdkError::Kinematics`]
/// - 物理角越界、配置无效、执行器失败 → [`SdkError::Servo`]
/// - 配置文件读写 → `Io` / `ConfigParse` / `ConfigSerialize`
#[derive(Error, Debug)]
pub enum SdkError {
    /// 逆运动学求解失败
    #[error("Kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),

    /// 舵机层错误
    #[error("Servo error: {0}")]
    Servo(#[from] ServoError),

    /// 同一通道被多个舵机占用
    #[error("Channel {channel} assigned to more than one servo")]
    DuplicateChannel {
        /// 通道号
        channel: u8,
    },

    /// 某条腿的配置无效
    #[error("Invalid configuration for {leg} leg: {source}")]
    InvalidLeg {
        /// 腿
        leg: LegId,
        /// 原因
        #[source]
        source: ServoError,
    },

    /// 配置文件读写失败
    #[error("I/O error on {path}: {source}")]
    Io {
        /// 文件路径
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// TOML 序列化失败
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl SdkError {
    /// 是否为配置错误（初始化阶段即失败）
    pub fn is_config_error(&self) -> bool {
        match self {
            Self::Servo(err) => err.is_config_error(),
            Self::DuplicateChannel { .. }
            | Self::InvalidLeg { .. }
            | Self::ConfigParse(_)
            | Self::ConfigSerialize(_) => true,
            Self::Kinematics(_) | Self::Io { .. } => false,
        }
    }
}
