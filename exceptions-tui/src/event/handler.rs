//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::{DefaultKeymap, KeyBinding};
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    handle_content_keys(&key)
}

/// 处理例外列表的按键
fn handle_content_keys(key: &KeyEvent) -> AppMessage {
    let msg = if KeyBinding::any(&DefaultKeymap::NAV_UP, key) {
        ContentMessage::SelectPrevious
    } else if KeyBinding::any(&DefaultKeymap::NAV_DOWN, key) {
        ContentMessage::SelectNext
    } else if DefaultKeymap::NAV_FIRST.matches(key) {
        ContentMessage::SelectFirst
    } else if DefaultKeymap::NAV_LAST.matches(key) {
        ContentMessage::SelectLast
    } else if KeyBinding::any(&DefaultKeymap::ACTION_DELETE, key) {
        ContentMessage::Delete
    } else if DefaultKeymap::ACTION_DELETE_ALL.matches(key) {
        ContentMessage::DeleteAll
    } else if DefaultKeymap::ACTION_LEARN_MORE.matches(key) {
        ContentMessage::LearnMore
    } else if DefaultKeymap::ACTION_ADD.matches(key) {
        ContentMessage::Add
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Content(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let msg = match modal {
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => ModalMessage::Close,
            _ => return AppMessage::Noop,
        },

        Modal::ConfirmDeleteAll { .. } => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                ModalMessage::ToggleDeleteFocus
            }
            KeyCode::Enter => ModalMessage::Confirm,
            _ => return AppMessage::Noop,
        },

        Modal::AddException { .. } => match key.code {
            KeyCode::Enter => ModalMessage::Confirm,
            KeyCode::Backspace => ModalMessage::Backspace,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                ModalMessage::Input(c)
            }
            _ => return AppMessage::Noop,
        },
    };
    AppMessage::Modal(msg)
}
