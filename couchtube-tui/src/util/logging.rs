//! 日志初始化
//!
//! TUI 占用了整个终端，日志只能写到文件：
//! `<cache_dir>/couchtube/couchtube.log`。`RUST_LOG` 优先于配置里的级别。

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// 日志文件路径
pub fn log_file_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("couchtube")
        .join("couchtube.log")
}

/// 初始化文件日志，返回日志路径
pub fn init_logging(default_level: &str) -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialized")?;

    Ok(path)
}
