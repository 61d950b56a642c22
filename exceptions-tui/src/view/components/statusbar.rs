//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    match &app.modal.active {
        Some(Modal::ConfirmDeleteAll { .. }) => {
            vec![("←→", h.switch), ("Enter", h.confirm), ("Esc", h.close)]
        }
        Some(Modal::AddException { .. }) => vec![("Enter", h.confirm), ("Esc", h.close)],
        Some(Modal::Help) => vec![("Esc", h.close)],
        None => {
            let mut hints = Vec::new();
            if app.row_count() > 0 {
                hints.push(("↑↓", h.select));
                hints.push(("d", h.delete));
            }
            if app.view.widgets().delete_all.is_visible() {
                hints.push(("D", h.delete_all));
            }
            hints.push(("l", h.learn_more));
            hints.push(("a", h.add));
            hints.push(("?", h.help));
            hints.push(("q", h.quit));
            hints
        }
    }
}
