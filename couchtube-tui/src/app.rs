//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时 `App::start()` 已经打开趋势页并聚焦侧边栏的 Home，
//! 此后主循环大约每 100 ms 执行一次（取决于有无按键）：
//!
//! loop {
//!
//!     app.set_viewport(terminal.size())             // 终端尺寸变化时重新布局
//!     terminal.draw(|f| view::render(&app, f))      // 渲染 UI
//!     if app.should_quit { break }                  // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {           // 先消费后台抓取结果
//!         update::update(&mut app, msg)                 // 过期代次在 update 层丢弃
//!     }
//!     if let Some(event) = poll_event() {           // 轮询按键，在此等待 100ms
//!         let msg = handle_event(event, &app);          // 按键 → 遥控器命令 → 消息
//!         update::update(&mut app, msg)                 // 更新状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 同步布局到当前终端尺寸
        let size = terminal.size()?;
        app.set_viewport(Rect::new(0, 0, size.width, size.height));

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 后台结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        // 5. 轮询按键（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
