//! 快捷键配置
//!
//! 定义快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// SHIFT 不参与比较：大写字母和 `?` 之类的符号在不同终端上
    /// 可能带也可能不带 SHIFT 修饰。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code
            && key.modifiers.difference(KeyModifiers::SHIFT)
                == self.modifiers.difference(KeyModifiers::SHIFT)
    }

    /// 检查按键事件是否匹配任意一个绑定
    pub fn any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
        bindings.iter().any(|binding| binding.matches(key))
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 列表导航
    pub const NAV_UP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const NAV_DOWN: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const NAV_FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const NAV_LAST: KeyBinding = KeyBinding::key(KeyCode::End);

    // 操作
    pub const ACTION_DELETE: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Char('d')),
        KeyBinding::key(KeyCode::Delete),
    ];
    pub const ACTION_DELETE_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('D'));
    pub const ACTION_LEARN_MORE: KeyBinding = KeyBinding::key(KeyCode::Char('l'));
    pub const ACTION_ADD: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
}
