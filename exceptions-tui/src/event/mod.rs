//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!             - 有弹窗打开时，调用 handle_modal_keys 处理
//!               （弹窗中的字符输入优先于全局快捷键）
//!             - 全局快捷键（q / Ctrl+C / ? / Esc），就地处理
//!             - 其余按键交给 handle_content_keys，翻译为 ContentMessage
//!
//!
//!     常用键盘映射：
//!         ↑/k ↓/j     → SelectPrevious / SelectNext
//!         Home / End  → SelectFirst / SelectLast
//!         d / Delete  → Delete
//!         D           → DeleteAll（先弹出确认框）
//!         l           → LearnMore
//!         a           → Add
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
