//! 配置管理命令
//!
//! 用于生成、查看、校验整机舵机配置

use crate::utils::resolve_config_path;
use anyhow::{Context, Result};
use clap::Subcommand;
use spotmicro_sdk::prelude::*;
use std::fs;
use std::path::PathBuf;

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 写入默认配置
    Init {
        /// 配置文件路径
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// 覆盖已有文件
        #[arg(long)]
        force: bool,
    },

    /// 打印配置内容
    Show {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// 校验配置
    Check {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

impl ConfigCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            ConfigCommand::Init { path, force } => Self::init_(path, force),
            ConfigCommand::Show { path } => Self::show_(path),
            ConfigCommand::Check { path } => Self::check_(path),
        }
    }

    fn init_(path: Option<PathBuf>, force: bool) -> Result<()> {
        let path = resolve_config_path(path.as_deref())?;
        if path.exists() && !force {
            anyhow::bail!("配置文件已存在: {}（使用 --force 覆盖）", path.display());
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("创建配置目录失败")?;
        }

        RobotConfig::default().save(&path)?;
        println!("✅ 已写入默认配置: {}", path.display());
        Ok(())
    }

    fn show_(path: Option<PathBuf>) -> Result<()> {
        let path = resolve_config_path(path.as_deref())?;
        let config = RobotConfig::load(&path)?;
        print!("{}", config.to_toml_string()?);
        Ok(())
    }

    fn check_(path: Option<PathBuf>) -> Result<()> {
        let path = resolve_config_path(path.as_deref())?;
        let config = RobotConfig::load(&path)?;

        println!("配置文件: {}", path.display());
        for id in LegId::ALL {
            let leg = config.leg(id);
            for role in JointRole::ALL {
                let limb = leg.limb(role);
                println!(
                    "  {:<11} {:<8} ch{:<2} offset {:+6.1}° center {:>6.1}° limit {}",
                    id.name(),
                    role.name(),
                    limb.channel,
                    limb.offset,
                    limb.center().0,
                    limb.rotation_limit
                );
            }
        }
        println!("✅ 配置有效");
        Ok(())
    }
}
