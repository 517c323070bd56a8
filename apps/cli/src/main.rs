//! # SpotMicro CLI
//!
//! Command-line interface for SpotMicro leg kinematics.
//!
//! ```bash
//! # 只求解逻辑关节角
//! spotmicro-cli solve -z 150 -y 0 -x 0
//!
//! # 完整管线（dry-run，不驱动硬件）
//! spotmicro-cli reach --leg fl -z 150 -y -10
//!
//! # 生成默认舵机配置
//! spotmicro-cli config init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

use commands::{ConfigCommand, ReachCommand, SolveCommand};

/// SpotMicro CLI - 四足机器人单腿工具
#[derive(Parser, Debug)]
#[command(name = "spotmicro-cli")]
#[command(about = "Command-line interface for SpotMicro leg kinematics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 求解三个逻辑关节角
    Solve {
        #[command(flatten)]
        args: SolveCommand,
    },

    /// 求解并换算为舵机命令（dry-run）
    Reach {
        #[command(flatten)]
        args: ReachCommand,
    },

    /// 舵机配置管理
    #[command(subcommand)]
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    spotmicro_sdk::init_logger("warn,spotmicro_cli=info");

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { args } => args.execute(),
        Commands::Reach { args } => args.execute(),
        Commands::Config(cmd) => cmd.execute(),
    }
}
