//! CouchTube TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 遥控器按键处理 (`event/`)
//! - **Backend**: 配置与后台抓取 (`backend/`)
//!
//!
//! main.rs
//! CouchTube TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()      // 读取配置，首次运行时写出默认配置
//!     init_logging()                  // 日志写入文件，终端归 TUI 使用
//!     tokio Runtime                   // 后台抓取任务运行在这里
//!     create_source() / create_playback()
//!     init_terminal()                 // 最后初始化终端，之前的错误直接打印到 stderr
//!     App::new() + app.start()        // 打开趋势页，焦点落在 Home
//!     app::run()                      // 运行 app.rs 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::{Context, Result};
use couchtube_core::{create_playback, FeedService};
use couchtube_provider::create_source;
use log::{info, warn};
use tokio::sync::mpsc;

use backend::{ConfigService, LocalConfigService, VideoService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 配置
    let config_service = LocalConfigService::from_env();
    let config_exists = config_service.path().exists();
    let config = config_service.load().with_context(|| {
        format!(
            "Invalid configuration file {}",
            config_service.path().display()
        )
    })?;

    // 2. 日志
    let log_path = init_logging(&config.log_level)?;
    info!("CouchTube v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Logging to {}", log_path.display());
    info!("Config: {}", config_service.path().display());

    if !config_exists {
        if let Err(e) = config_service.save(&config) {
            warn!("Could not write default config: {e:#}");
        }
    }

    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);
    info!(
        "Language: {}, region: {}",
        i18n::current_language().display_name(),
        config.region
    );

    // 3. 后台运行时与服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let source = create_source(&config.source_settings()).context("Invalid API instances")?;
    let feeds = FeedService::new(source, config.region.clone());
    let player = create_playback(&config.playback).context("Invalid playback settings")?;
    info!("Playback backend: {}", player.name());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let loader = Arc::new(VideoService::new(feeds, runtime.handle().clone(), tx));

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并打开首页
    let mut app = model::App::new(loader, player);
    if let Ok(size) = terminal.size() {
        app.set_viewport(ratatui::layout::Rect::new(0, 0, size.width, size.height));
    }
    app.start();

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 7. 恢复终端（无论成功失败都执行）
    drop(app);
    restore_terminal(&mut terminal)?;

    runtime.shutdown_background();
    info!("Bye");

    // 8. 返回结果
    result
}
