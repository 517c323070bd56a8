//! 命令定义和实现

pub mod config;
pub mod reach;
pub mod solve;

pub use config::ConfigCommand;
pub use reach::ReachCommand;
pub use solve::SolveCommand;
