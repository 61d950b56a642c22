//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达：
//!     - 键盘事件由 src/event/handler.rs 翻译为 AppMessage
//!     - store 推送的新快照由 src/app.rs 包装为 AppMessage::StateChanged
//!     - store 的提示由 src/app.rs 包装为 AppMessage::Notice
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod content;        // 例外列表面板中的子消息
//!         mod modal;          // 弹窗相关的子消息
//!
//!         pub use app::AppMessage;
//!
//!
//! 最后，Message 传入 Update 层进行处理。
//!     去往 src/update/mod.rs 吧
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
