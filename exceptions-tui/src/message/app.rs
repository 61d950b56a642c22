//! 应用主消息枚举

use std::sync::Arc;

use exceptions_core::ExceptionsFragmentState;

use super::{ContentMessage, ModalMessage};
use crate::backend::StoreNotice;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// store 发布了新的状态快照
    StateChanged(Arc<ExceptionsFragmentState>),

    /// store 的提示消息
    Notice(StoreNotice),

    /// 返回（关闭弹窗 / 清除状态栏）
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
