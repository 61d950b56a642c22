//! 例外列表视图控制器
//!
//! 构造时一次性完成静态设置（控件结构、适配器、"了解更多" 的下划线与点击绑定），
//! 之后只通过 `update` 接收 store 推送的不可变快照。
//! 视图从不修改业务状态，所有用户动作都经交互器发出。

use std::sync::Arc;

use crate::adapter::{ExceptionsAdapter, RenderPatch};
use crate::interactor::ExceptionsViewInteractor;
use crate::types::ExceptionsFragmentState;

/// 控件可见性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Visible,
    #[default]
    Gone,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    fn from_bool(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Gone
        }
    }
}

/// 视图层的两种可见状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewVisibility {
    /// 显示空状态，隐藏列表
    Empty,
    /// 显示列表，隐藏空状态
    Populated,
}

/// 文本标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub underlined: bool,
}

/// 视图持有的控件引用（构造时一次性建立）
#[derive(Debug, Clone)]
pub struct ExceptionsWidgets {
    pub empty_view: Visibility,
    pub list: Visibility,
    pub delete_all: Visibility,
    pub learn_more: Label,
}

/// 例外列表视图
pub struct ExceptionsView {
    widgets: ExceptionsWidgets,
    adapter: ExceptionsAdapter,
    interactor: Arc<dyn ExceptionsViewInteractor>,
    state: Option<Arc<ExceptionsFragmentState>>,
}

impl ExceptionsView {
    pub fn new(interactor: Arc<dyn ExceptionsViewInteractor>, learn_more_text: &str) -> Self {
        let widgets = ExceptionsWidgets {
            empty_view: Visibility::Gone,
            list: Visibility::Gone,
            delete_all: Visibility::Gone,
            learn_more: Label {
                text: learn_more_text.to_string(),
                underlined: true,
            },
        };

        Self {
            widgets,
            adapter: ExceptionsAdapter::new(interactor.clone()),
            interactor,
            state: None,
        }
    }

    /// 应用新的状态快照
    ///
    /// 幂等：身份序列相同的快照不会改变已渲染的行。
    pub fn update(&mut self, state: Arc<ExceptionsFragmentState>) -> RenderPatch {
        let populated = !state.is_empty();
        self.widgets.empty_view = Visibility::from_bool(!populated);
        self.widgets.list = Visibility::from_bool(populated);
        self.widgets.delete_all = Visibility::from_bool(populated);

        let patch = self.adapter.update_data(state.items());
        log::debug!(
            "Exceptions view updated: {} item(s), patch {patch:?}",
            state.len()
        );

        // 只保留最近一次快照
        self.state = Some(state);
        patch
    }

    /// 当前可见状态；首次 `update` 之前为 `None`
    pub fn visibility(&self) -> Option<ViewVisibility> {
        self.state.as_ref().map(|state| {
            if state.is_empty() {
                ViewVisibility::Empty
            } else {
                ViewVisibility::Populated
            }
        })
    }

    // ========== 用户动作 ==========

    /// 点击 "了解更多"
    pub fn click_learn_more(&self) {
        self.interactor.on_learn_more();
    }

    /// 点击 "全部删除"（仅在列表可见时生效）
    pub fn click_delete_all(&self) -> bool {
        if !self.widgets.delete_all.is_visible() {
            return false;
        }
        self.interactor.on_delete_all();
        true
    }

    /// 点击某一行的删除按钮
    pub fn click_delete_row(&self, position: usize) -> bool {
        self.adapter.on_delete_at(position)
    }

    // ========== 读取 ==========

    pub fn widgets(&self) -> &ExceptionsWidgets {
        &self.widgets
    }

    pub fn adapter(&self) -> &ExceptionsAdapter {
        &self.adapter
    }

    pub fn state(&self) -> Option<&ExceptionsFragmentState> {
        self.state.as_deref()
    }
}
