//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, ExceptionsTexts, HelpItems, HintTexts, ModalTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "站点例外",
        cancel: "取消",
        delete: "删除",
        loading: "加载中...",
    },

    hints: HintTexts {
        select: "选择",
        delete: "删除",
        delete_all: "全部删除",
        learn_more: "了解更多",
        add: "添加",
        help: "帮助",
        quit: "退出",
        confirm: "确认",
        close: "关闭",
        switch: "切换",
    },

    exceptions: ExceptionsTexts {
        title: "例外",
        description: "您已为这些网站停用防护。",
        learn_more: "了解更多",
        empty: "例外可让您为选定的网站停用跟踪保护。",
        empty_hint: "按 a 添加网站。",
        delete_all_button: "删除所有例外",
    },

    modal: ModalTexts {
        confirm_delete_all_title: "删除所有例外",
        confirm_delete_all_message: "所有网站都将重新启用防护。",
        add_title: "添加例外",
        add_label: "网站",
        add_placeholder: "example.com",
        help_title: "帮助",
        help_close: "按 Esc 关闭帮助",
        help_items: HelpItems {
            move_up_down: "上下移动",
            jump: "第一项/最后一项",
            delete_one: "删除选中的例外",
            delete_all: "删除所有例外",
            add: "添加例外",
            learn_more: "了解更多",
            quit: "退出",
        },
    },
};
