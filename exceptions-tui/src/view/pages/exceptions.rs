//! 例外列表页面视图

use std::borrow::Cow;

use exceptions_core::ViewVisibility;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 行首缩进 + 选中标记的宽度
const ROW_PREFIX_WIDTH: usize = 4;

/// 渲染例外列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 说明 + 了解更多
            Constraint::Min(1),    // 列表 / 空状态
            Constraint::Length(1), // 全部删除
        ])
        .split(area);

    render_header(app, frame, chunks[0]);

    match app.view.visibility() {
        None => render_loading(frame, chunks[1]),
        Some(ViewVisibility::Empty) => render_empty(frame, chunks[1]),
        Some(ViewVisibility::Populated) => render_list(app, frame, chunks[1]),
    }

    if app.view.widgets().delete_all.is_visible() {
        render_delete_all(frame, chunks[2]);
    }
}

/// 渲染说明文字和 "了解更多" 链接
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let label = &app.view.widgets().learn_more;

    let mut link_style = Style::default().fg(c.link);
    if label.underlined {
        link_style = link_style.add_modifier(Modifier::UNDERLINED);
    }

    let lines = vec![
        Line::styled(
            format!("  {}", t().exceptions.description),
            Style::default().fg(c.fg),
        ),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(label.text.as_str(), link_style),
            Span::styled(" (l)", Style::default().fg(c.muted)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染加载中（尚未收到第一份快照）
fn render_loading(frame: &mut Frame, area: Rect) {
    let line = Line::styled(
        format!("  {}", t().common.loading),
        Style::default().fg(colors().muted),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.exceptions.empty), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.exceptions.empty_hint),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染例外列表（按适配器当前的行序列）
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let max_width = usize::from(area.width).saturating_sub(ROW_PREFIX_WIDTH);

    let items: Vec<ListItem> = app
        .view
        .adapter()
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = i == app.selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("  {marker}"), style),
                Span::styled(truncate(row.item().host(), max_width), style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(List::new(items), area, &mut state);
}

/// 渲染 "全部删除" 按钮
fn render_delete_all(frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled("[D] ", Styles::hint_key()),
        Span::styled(
            t().exceptions.delete_all_button,
            Style::default().fg(c.warning),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 按显示宽度截断文本，超出时以 "…" 结尾
fn truncate(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    // 连省略号都放不下
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    Cow::Owned(out)
}
