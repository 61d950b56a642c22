//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ExceptionsTexts, HelpItems, HintTexts, ModalTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Site Exceptions",
        cancel: "Cancel",
        delete: "Delete",
        loading: "Loading...",
    },

    hints: HintTexts {
        select: "Select",
        delete: "Delete",
        delete_all: "Delete all",
        learn_more: "Learn more",
        add: "Add",
        help: "Help",
        quit: "Quit",
        confirm: "Confirm",
        close: "Close",
        switch: "Switch",
    },

    exceptions: ExceptionsTexts {
        title: "Exceptions",
        description: "You have disabled protection for these websites.",
        learn_more: "Learn more",
        empty: "Exceptions let you disable tracking protection for selected sites.",
        empty_hint: "Press a to add a site.",
        delete_all_button: "Delete all exceptions",
    },

    modal: ModalTexts {
        confirm_delete_all_title: "Delete all exceptions",
        confirm_delete_all_message: "Protection will be turned back on for every site.",
        add_title: "Add exception",
        add_label: "Site",
        add_placeholder: "example.com",
        help_title: "Help",
        help_close: "Press Esc to close the help",
        help_items: HelpItems {
            move_up_down: "Move up/down",
            jump: "First/last",
            delete_one: "Delete selected exception",
            delete_all: "Delete all exceptions",
            add: "Add exception",
            learn_more: "Learn more",
            quit: "Quit",
        },
    },
};
