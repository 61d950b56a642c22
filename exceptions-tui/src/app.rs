//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!     should_quit: false,                 // 决定应用是否应该退出
//!     view: ExceptionsView,               // 尚未收到快照，页面显示 "加载中"
//!     selected: 0,                        // 当前选中第几行
//!     modal: ModalState { active: None }, // 无弹窗
//!     status_message: None,               // 状态栏消息
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     notices.try_recv()                              // store 的提示 → AppMessage::Notice
//!     states.has_changed()                            // store 的新快照 → AppMessage::StateChanged
//!                                                     // watch 只保留最新值，落后的中间快照直接跳过
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use exceptions_core::ExceptionsFragmentState;
use tokio::sync::{mpsc, watch};

use crate::backend::StoreNotice;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    states: &mut watch::Receiver<Arc<ExceptionsFragmentState>>,
    notices: &mut mpsc::UnboundedReceiver<StoreNotice>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 接收 store 推送
        while let Ok(notice) = notices.try_recv() {
            update::update(app, AppMessage::Notice(notice));
        }
        if states.has_changed().unwrap_or(false) {
            let state = states.borrow_and_update().clone();
            update::update(app, AppMessage::StateChanged(state));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
