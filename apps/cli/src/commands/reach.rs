//! 完整管线命令（dry-run）
//!
//! 用记录型执行器代替真实舵机，打印每个舵机将收到的物理角和脉宽。

use crate::utils::{OutputFormat, TargetArgs, load_robot_config};
use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use spotmicro_sdk::prelude::*;
use std::path::PathBuf;

/// 管线命令参数
#[derive(Args, Debug)]
pub struct ReachCommand {
    /// 腿（fl / fr / rl / rr）
    #[arg(short, long, default_value = "fl")]
    pub leg: LegId,

    #[command(flatten)]
    pub target: TargetArgs,

    /// 配置文件（默认 `<config_dir>/spotmicro/robot.toml`）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ReachCommand {
    pub fn execute(&self) -> Result<()> {
        let robot = load_robot_config(self.config.as_deref())?;
        let mut leg = Leg::new(self.leg, robot.leg(self.leg), |_, _| RecordingActuator::new())
            .with_context(|| format!("初始化 {} 腿失败", self.leg))?;

        let target = self.target.target();
        let command = leg
            .reach(target)
            .with_context(|| format!("{} 腿无法到达 {}", self.leg, target))?;

        match self.format {
            OutputFormat::Table => {
                println!("{} 腿 → {}", self.leg, target);
                println!("  逻辑角: {}", command.logical);
                for (i, limb) in leg.limbs().iter().enumerate() {
                    println!(
                        "  {:<8} ch{:<2} {:>9.4}° {:>5} µs",
                        limb.role().name(),
                        limb.channel(),
                        command.physical[i].0,
                        command.pulses[i]
                    );
                }
            },
            OutputFormat::Json => {
                let servos: Vec<_> = leg
                    .limbs()
                    .iter()
                    .enumerate()
                    .map(|(i, limb)| {
                        json!({
                            "role": limb.role(),
                            "channel": limb.channel(),
                            "angle": command.physical[i].0,
                            "pulse_us": command.pulses[i],
                        })
                    })
                    .collect();
                let output = json!({
                    "leg": self.leg,
                    "logical": command.logical,
                    "servos": servos,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            },
        }

        Ok(())
    }
}
