//! 配置路径与公共参数

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use spotmicro_sdk::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// 默认配置文件路径：`<config_dir>/spotmicro/robot.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法确定配置目录"))?;
    path.push("spotmicro");
    path.push("robot.toml");
    Ok(path)
}

/// 解析配置路径（命令行参数优先）
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// 加载整机配置
///
/// 显式指定的文件必须存在；默认位置没有文件时使用内置默认配置。
pub fn load_robot_config(explicit: Option<&Path>) -> Result<RobotConfig> {
    if let Some(path) = explicit {
        return RobotConfig::load(path)
            .with_context(|| format!("加载配置失败: {}", path.display()));
    }

    let path = default_config_path()?;
    if !path.exists() {
        info!(path = %path.display(), "no config file, using built-in defaults");
        return Ok(RobotConfig::default());
    }

    RobotConfig::load(&path).with_context(|| format!("加载配置失败: {}", path.display()))
}

/// 足端目标参数（mm）
#[derive(Args, Debug, Clone, Copy)]
pub struct TargetArgs {
    /// 高度（髋部到地面，必须为正）
    #[arg(short = 'z', long, allow_negative_numbers = true)]
    pub z: f64,

    /// 侧向偏移
    #[arg(short = 'y', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y: f64,

    /// 前后偏移
    #[arg(short = 'x', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x: f64,
}

impl TargetArgs {
    pub fn target(&self) -> FootTarget {
        FootTarget::new(self.z, self.y, self.x)
    }
}

/// 输出格式
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
