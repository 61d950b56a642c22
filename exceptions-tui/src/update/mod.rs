//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 例外列表子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理（content、modal）。
//!
//!
//! 注意：例外列表的业务状态不在这里修改。
//!     删除 / 全部删除 / 了解更多 经 ExceptionsView 的交互器发往 store；
//!     store 处理完后推送新快照，再以 AppMessage::StateChanged 回到这里，
//!     由 ExceptionsView::update 应用最小补丁。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;

use std::sync::Arc;

use exceptions_core::ExceptionsFragmentState;

use crate::backend::StoreNotice;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::StateChanged(state) => {
            apply_state(app, state);
        }

        AppMessage::Notice(notice) => match notice {
            StoreNotice::Info(text) | StoreNotice::Error(text) => app.set_status(text),
        },

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            }
            app.clear_status();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 应用 store 推送的快照，尽量让选中项跟随原来的行
fn apply_state(app: &mut App, state: Arc<ExceptionsFragmentState>) {
    let selected_row = app.selected_row();

    app.view.update(state);

    let adapter = app.view.adapter();
    app.selected = match selected_row.and_then(|row| adapter.position_of(row)) {
        Some(position) => position,
        // 选中的行被删除：停在原位置，越界时退到最后一行
        None => app.selected.min(adapter.item_count().saturating_sub(1)),
    };
}

#[cfg(test)]
mod tests {
    use exceptions_core::{ChannelInteractor, ExceptionsAction, ExceptionsItem};
    use tokio::sync::mpsc;

    use super::*;
    use crate::backend::StoreRequest;
    use crate::message::{ContentMessage, ModalMessage};
    use crate::model::Modal;

    struct Harness {
        app: App,
        actions: mpsc::UnboundedReceiver<ExceptionsAction>,
        requests: mpsc::UnboundedReceiver<StoreRequest>,
    }

    fn harness() -> Harness {
        let (action_tx, actions) = mpsc::unbounded_channel();
        let (request_tx, requests) = mpsc::unbounded_channel();
        Harness {
            app: App::new(Arc::new(ChannelInteractor::new(action_tx)), request_tx),
            actions,
            requests,
        }
    }

    fn item(host: &str) -> ExceptionsItem {
        ExceptionsItem::new(host).unwrap()
    }

    fn state(hosts: &[&str]) -> Arc<ExceptionsFragmentState> {
        let items = hosts.iter().map(|h| item(h)).collect();
        Arc::new(ExceptionsFragmentState::new(items).unwrap())
    }

    #[test]
    fn quit_sets_flag() {
        let mut h = harness();
        update(&mut h.app, AppMessage::Quit);
        assert!(h.app.should_quit);
    }

    #[test]
    fn selection_follows_row_across_reorder() {
        let mut h = harness();
        update(&mut h.app, AppMessage::StateChanged(state(&["a.com", "b.com", "c.com"])));
        update(&mut h.app, AppMessage::Content(ContentMessage::SelectLast));
        assert_eq!(h.app.selected, 2);

        update(&mut h.app, AppMessage::StateChanged(state(&["c.com", "a.com", "b.com"])));
        assert_eq!(h.app.selected, 0);
    }

    #[test]
    fn selection_clamps_when_selected_row_removed() {
        let mut h = harness();
        update(&mut h.app, AppMessage::StateChanged(state(&["a.com", "b.com"])));
        update(&mut h.app, AppMessage::Content(ContentMessage::SelectNext));

        update(&mut h.app, AppMessage::StateChanged(state(&["a.com"])));
        assert_eq!(h.app.selected, 0);

        update(&mut h.app, AppMessage::StateChanged(state(&[])));
        assert_eq!(h.app.selected, 0);
    }

    #[test]
    fn delete_sends_selected_item() {
        let mut h = harness();
        update(&mut h.app, AppMessage::StateChanged(state(&["a.com", "b.com"])));
        update(&mut h.app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut h.app, AppMessage::Content(ContentMessage::Delete));

        assert_eq!(h.actions.try_recv().ok(), Some(ExceptionsAction::DeleteOne(item("b.com"))));
        // 视图本身不变，等待 store 的新快照
        assert_eq!(h.app.row_count(), 2);
    }

    #[test]
    fn delete_all_requires_confirmation() {
        let mut h = harness();
        update(&mut h.app, AppMessage::StateChanged(state(&["a.com"])));
        update(&mut h.app, AppMessage::Content(ContentMessage::DeleteAll));

        assert_eq!(h.app.modal.active, Some(Modal::ConfirmDeleteAll { focus: 0 }));
        assert!(h.actions.try_recv().is_err());

        // 焦点在 "取消" 时确认等于关闭
        update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(!h.app.modal.is_open());
        assert!(h.actions.try_recv().is_err());

        update(&mut h.app, AppMessage::Content(ContentMessage::DeleteAll));
        update(&mut h.app, AppMessage::Modal(ModalMessage::ToggleDeleteFocus));
        update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));
        assert_eq!(h.actions.try_recv().ok(), Some(ExceptionsAction::DeleteAll));
        assert!(!h.app.modal.is_open());
    }

    #[test]
    fn delete_all_is_ignored_when_empty() {
        let mut h = harness();
        update(&mut h.app, AppMessage::StateChanged(state(&[])));
        update(&mut h.app, AppMessage::Content(ContentMessage::DeleteAll));
        assert!(!h.app.modal.is_open());
    }

    #[test]
    fn learn_more_goes_through_interactor() {
        let mut h = harness();
        update(&mut h.app, AppMessage::Content(ContentMessage::LearnMore));
        assert_eq!(h.actions.try_recv().ok(), Some(ExceptionsAction::LearnMore));
    }

    #[test]
    fn add_modal_validates_before_sending() {
        let mut h = harness();
        update(&mut h.app, AppMessage::Content(ContentMessage::Add));

        update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(matches!(
            h.app.modal.active,
            Some(Modal::AddException { error: Some(_), .. })
        ));
        assert!(h.requests.try_recv().is_err());

        for c in "Example.com".chars() {
            update(&mut h.app, AppMessage::Modal(ModalMessage::Input(c)));
        }
        update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));

        assert_eq!(
            h.requests.try_recv().ok(),
            Some(StoreRequest::Add("Example.com".to_string()))
        );
        assert!(!h.app.modal.is_open());
    }

    #[test]
    fn notice_shows_in_status_bar() {
        let mut h = harness();
        update(&mut h.app, AppMessage::Notice(StoreNotice::Error("boom".to_string())));
        assert_eq!(h.app.status_message.as_deref(), Some("boom"));

        update(&mut h.app, AppMessage::GoBack);
        assert!(h.app.status_message.is_none());
    }
}
