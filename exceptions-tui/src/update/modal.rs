//! 弹窗更新逻辑

use exceptions_core::ExceptionsItem;

use crate::backend::StoreRequest;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => handle_simple_modal(app, &msg),
        Modal::ConfirmDeleteAll { .. } => handle_confirm_delete_all(app, msg),
        Modal::AddException { .. } => handle_add_exception(app, msg),
    }
}

/// 处理只能关闭的弹窗
fn handle_simple_modal(app: &mut App, msg: &ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}

/// 处理确认删除所有例外弹窗
fn handle_confirm_delete_all(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDeleteAll { ref mut focus }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => app.modal.close(),

        ModalMessage::ToggleDeleteFocus => {
            *focus = 1 - *focus;
        }

        ModalMessage::Confirm => {
            let confirmed = *focus == 1;
            app.modal.close();
            if confirmed && !app.view.click_delete_all() {
                log::debug!("Delete all ignored: list is not visible");
            }
        }

        ModalMessage::Input(_) | ModalMessage::Backspace => {}
    }
}

/// 处理添加例外弹窗
fn handle_add_exception(app: &mut App, msg: ModalMessage) {
    let Some(Modal::AddException {
        ref mut input,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => app.modal.close(),

        ModalMessage::Input(c) => {
            input.push(c);
            *error = None;
        }

        ModalMessage::Backspace => {
            input.pop();
            *error = None;
        }

        ModalMessage::Confirm => {
            // 先在本地校验，store 侧还会再做一次规范化
            if let Err(e) = ExceptionsItem::new(input) {
                *error = Some(e.to_string());
                return;
            }
            let request = StoreRequest::Add(input.trim().to_string());
            app.modal.close();
            if app.requests.send(request).is_err() {
                log::warn!("Exceptions store is gone, dropping add request");
                app.set_status("Exceptions store is not running");
            }
        }

        ModalMessage::ToggleDeleteFocus => {}
    }
}
