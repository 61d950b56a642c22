//! 页面状态模块

mod modal;

pub use modal::{Modal, ModalState};
