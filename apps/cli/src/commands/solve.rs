//! 逆运动学求解命令

use crate::utils::{OutputFormat, TargetArgs};
use anyhow::{Context, Result};
use clap::Args;
use spotmicro_sdk::prelude::*;

/// 求解命令参数
#[derive(Args, Debug)]
pub struct SolveCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SolveCommand {
    pub fn execute(&self) -> Result<()> {
        let target = self.target.target();
        let angles = IkSolver::new()
            .calc_angles(target)
            .with_context(|| format!("无法求解目标 {}", target))?;

        match self.format {
            OutputFormat::Table => {
                println!("目标: {}", target);
                for (joint, angle) in angles.iter() {
                    println!("  {:<6} {:>9.4}°", joint.name(), angle.0);
                }
            },
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&angles)?);
            },
        }

        Ok(())
    }
}
