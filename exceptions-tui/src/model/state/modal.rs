//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助
    Help,
    /// 确认删除所有例外
    ConfirmDeleteAll {
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 添加例外
    AddException {
        /// 输入的 host 或 URL
        input: String,
        /// 校验错误
        error: Option<String>,
    },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动弹窗（None = 无弹窗）
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    /// 显示确认删除所有例外弹窗（默认焦点在 "取消"）
    pub fn show_confirm_delete_all(&mut self) {
        self.show(Modal::ConfirmDeleteAll { focus: 0 });
    }

    /// 显示添加例外弹窗
    pub fn show_add_exception(&mut self) {
        self.show(Modal::AddException {
            input: String::new(),
            error: None,
        });
    }
}
