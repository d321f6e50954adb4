//┌─────────────────────────────────────────────────────────────────────────┐
//│                           主循环 (app.rs)                                │
//│                                                                         │
//│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//│    │ 遥控按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//│         ▲          └─────────┘     └────▲─────┘     └────┬────┘         │
//│         │                               │                │              │
//│         │          ┌─────────┐     ┌────┴─────┐          ▼              │
//│         │          │  Util   │     │ Backend  │     ┌──────────┐        │
//│         │          │  层     │     │ 抓取任务  │     │  Model   │        │
//│         │          └─────────┘     └──────────┘     └────┬─────┘        │
//│         │          ┌─────────┐                           │              │
//│         └──────────│  View   │ ◀── 读取状态 ──────────────┘              │
//│           屏幕输出  │   层    │                                          │
//│                    └─────────┘                                          │
//└─────────────────────────────────────────────────────────────────────────┘

//! Util 层：基础设施
//!
//! 与业务逻辑无关的代码：终端的初始化与恢复、文件日志。
//!
//!     src/util/mod.rs
//!         mod logging;        // env_logger 写入缓存目录下的日志文件
//!         mod terminal;       // 原始模式 + 备用屏幕
//!
//! 终端在 main.rs 中最后初始化、最先恢复；`app::run` 返回错误时
//! 也会先恢复终端再把错误交给调用方，否则终端会停留在原始模式。

mod logging;
mod terminal;

pub use logging::{init_logging, log_file_path};
pub use terminal::{init_terminal, restore_terminal, Term};
