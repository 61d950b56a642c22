//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是 UI 状态的 “唯一真相来源”。
//! 注意：例外列表本身的业务状态属于 store，这里只持有
//!     - ExceptionsView：最近一次应用的快照 + 已渲染的行
//!     - selected：当前选中的行
//!     - modal：弹窗
//!     - status_message：状态栏消息
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 弹窗等页面状态
//!
//!
//! 使用：
//!     - 在 main.rs 中创建：let mut app = model::App::new(interactor, requests);
//!     - 在 update/mod.rs 中修改：app.should_quit = true;
//!     - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{Modal, ModalState};
