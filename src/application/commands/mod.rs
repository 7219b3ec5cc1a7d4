//! 应用层 - 命令（写操作）

mod summary_commands;

pub mod handlers;

pub use summary_commands::*;
