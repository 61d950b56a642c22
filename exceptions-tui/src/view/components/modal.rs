//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::ConfirmDeleteAll { focus } => render_confirm_delete_all(frame, *focus),
        Modal::AddException { input, error } => {
            render_add_exception(frame, input, error.as_deref());
        }
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 画出弹窗外框，返回内容区域
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, accent: Style) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(accent)
        .style(Style::default().bg(colors().bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 渲染确认删除所有例外弹窗
fn render_confirm_delete_all(frame: &mut Frame, focus: usize) {
    let c = colors();
    let texts = t();

    let area = centered_rect(56, 8, frame.area());
    let inner = modal_frame(
        frame,
        area,
        texts.modal.confirm_delete_all_title,
        Style::default().fg(c.error),
    );

    let cancel_style = if focus == 0 {
        Styles::button_focused(c.fg)
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if focus == 1 {
        Styles::button_focused(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.modal.confirm_delete_all_message),
            Style::default().fg(c.fg),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染添加例外弹窗
fn render_add_exception(frame: &mut Frame, input: &str, error: Option<&str>) {
    let c = colors();
    let texts = t();

    let area = centered_rect(56, 9, frame.area());
    let inner = modal_frame(
        frame,
        area,
        texts.modal.add_title,
        Style::default().fg(c.border_focused),
    );

    let input_line = if input.is_empty() {
        Line::from(vec![
            Span::styled("  ▎", Style::default().fg(c.highlight)),
            Span::styled(texts.modal.add_placeholder, Style::default().fg(c.muted)),
        ])
    } else {
        Line::styled(format!("  {input}▎"), Style::default().fg(c.highlight))
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.modal.add_label),
            Style::default().fg(c.muted),
        ),
        input_line,
        Line::from(""),
    ];
    if let Some(error) = error {
        lines.push(Line::styled(format!("  {error}"), Style::default().fg(c.error)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let texts = t();
    let items = &texts.modal.help_items;

    let area = centered_rect(50, 14, frame.area());
    let inner = modal_frame(
        frame,
        area,
        texts.modal.help_title,
        Style::default().fg(c.border_focused),
    );

    let key_style = Style::default().fg(c.warning).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(c.fg);
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    let lines = vec![
        Line::from(""),
        row("↑↓/jk", items.move_up_down),
        row("Home/End", items.jump),
        row("d/Del", items.delete_one),
        row("D", items.delete_all),
        row("a", items.add),
        row("l", items.learn_more),
        row("q", items.quit),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.modal.help_close),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
