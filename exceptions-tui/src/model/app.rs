//! 应用主状态结构

use std::sync::Arc;

use exceptions_core::{ExceptionsView, ExceptionsViewInteractor, RowId};
use tokio::sync::mpsc::UnboundedSender;

use super::ModalState;
use crate::backend::StoreRequest;
use crate::i18n::t;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 例外列表视图（持有适配器和交互器）
    pub view: ExceptionsView,

    /// 当前选中的行下标
    pub selected: usize,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 交互器之外的 store 请求（添加例外）
    pub requests: UnboundedSender<StoreRequest>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        interactor: Arc<dyn ExceptionsViewInteractor>,
        requests: UnboundedSender<StoreRequest>,
    ) -> Self {
        Self {
            should_quit: false,
            view: ExceptionsView::new(interactor, t().exceptions.learn_more),
            selected: 0,
            status_message: None,
            modal: ModalState::new(),
            requests,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 已渲染的行数
    pub fn row_count(&self) -> usize {
        self.view.adapter().item_count()
    }

    /// 当前选中行的 `RowId`
    pub fn selected_row(&self) -> Option<RowId> {
        self.view.adapter().rows().get(self.selected).map(|row| row.id())
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.row_count().saturating_sub(1);
    }
}
