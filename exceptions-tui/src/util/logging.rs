//! 日志初始化
//!
//! TUI 占用了终端，所以日志只写入文件：
//!     <config_dir>/exceptions-tui/exceptions-tui.log
//!
//! 通过 RUST_LOG 控制级别（默认 info）。
//! 各模块使用 `log` 宏，记录经 tracing-log 桥接到 tracing-subscriber。

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE: &str = "exceptions-tui.log";

/// 初始化文件日志
pub fn init_logging(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    tracing::info!("Logging to {}", dir.join(LOG_FILE).display());
    Ok(())
}
