//! 内容面板更新逻辑

use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.select_previous(),
        ContentMessage::SelectNext => app.select_next(),
        ContentMessage::SelectFirst => app.select_first(),
        ContentMessage::SelectLast => app.select_last(),

        ContentMessage::Delete => {
            if !app.view.click_delete_row(app.selected) {
                log::debug!("Nothing to delete at row {}", app.selected);
            }
        }

        ContentMessage::DeleteAll => {
            // 只有 "全部删除" 可见时才弹出确认框
            if app.view.widgets().delete_all.is_visible() {
                app.modal.show_confirm_delete_all();
            }
        }

        ContentMessage::LearnMore => app.view.click_learn_more(),

        ContentMessage::Add => app.modal.show_add_exception(),
    }
}
