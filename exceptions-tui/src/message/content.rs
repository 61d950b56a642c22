//! 内容面板消息
//!
//! 例外列表中的操作：选择、删除、全部删除、了解更多、添加

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 操作 ==========
    /// 删除当前选中项
    Delete,
    /// 删除所有例外（先弹出确认框）
    DeleteAll,
    /// 了解更多
    LearnMore,
    /// 添加例外
    Add,
}
