//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 例外列表页面文本
    pub exceptions: ExceptionsTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub loading: &'static str,
}

/// 键盘提示动作词
pub struct HintTexts {
    pub select: &'static str,
    pub delete: &'static str,
    pub delete_all: &'static str,
    pub learn_more: &'static str,
    pub add: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub switch: &'static str,
}

/// 例外列表页面文本
pub struct ExceptionsTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub learn_more: &'static str,
    pub empty: &'static str,
    pub empty_hint: &'static str,
    pub delete_all_button: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub confirm_delete_all_title: &'static str,
    pub confirm_delete_all_message: &'static str,
    pub add_title: &'static str,
    pub add_label: &'static str,
    pub add_placeholder: &'static str,
    pub help_title: &'static str,
    pub help_close: &'static str,
    pub help_items: HelpItems,
}

/// 帮助弹窗中的动作说明
pub struct HelpItems {
    pub move_up_down: &'static str,
    pub jump: &'static str,
    pub delete_one: &'static str,
    pub delete_all: &'static str,
    pub add: &'static str,
    pub learn_more: &'static str,
    pub quit: &'static str,
}
