//! 主题和样式定义

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题（配置文件中写作 "dark" / "light"）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }

    /// 该主题的配色
    pub fn colors(self) -> &'static ThemeColors {
        match self {
            Theme::Dark => &ThemeColors::DARK,
            Theme::Light => &ThemeColors::LIGHT,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::Relaxed);
}

/// 获取当前主题的颜色方案
pub fn colors() -> &'static ThemeColors {
    let theme = match CURRENT_THEME.load(Ordering::Relaxed) {
        0 => Theme::Dark,
        _ => Theme::Light,
    };
    theme.colors()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// "了解更多" 链接
    pub link: Color,
    /// 状态栏消息、"全部删除"
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub const DARK: Self = Self {
        bg: Color::Rgb(28, 27, 34),
        fg: Color::Rgb(251, 251, 254),
        border: Color::Rgb(72, 70, 82),
        border_focused: Color::Rgb(128, 235, 255),
        highlight: Color::Rgb(89, 42, 203),
        selected_bg: Color::Rgb(66, 65, 77),
        selected_fg: Color::White,
        link: Color::Rgb(0, 221, 255),
        warning: Color::Rgb(255, 189, 79),
        error: Color::Rgb(255, 132, 128),
        muted: Color::Rgb(143, 143, 157),
    };

    /// 浅色主题
    pub const LIGHT: Self = Self {
        bg: Color::Rgb(249, 249, 251),
        fg: Color::Rgb(21, 20, 26),
        border: Color::Rgb(207, 207, 216),
        border_focused: Color::Rgb(0, 96, 223),
        highlight: Color::Rgb(89, 42, 203),
        selected_bg: Color::Rgb(224, 224, 230),
        selected_fg: Color::Black,
        link: Color::Rgb(0, 96, 223),
        warning: Color::Rgb(167, 52, 30),
        error: Color::Rgb(197, 0, 66),
        muted: Color::Rgb(91, 91, 102),
    };
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 选中行样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 弹窗中获得焦点的按钮
    pub fn button_focused(accent: Color) -> Style {
        Style::default()
            .fg(colors().bg)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(220, 220, 228))
    }
}
