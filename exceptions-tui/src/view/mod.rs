//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一轮主循环都会整体重绘一次（ratatui 会在内部做差量输出）。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 状态栏、弹窗
//!         mod layout;         // 主布局：标题栏 + 内容区 + 状态栏
//!         mod pages;          // 例外列表页面
//!         pub mod theme;      // 主题与常用样式
//!
//!
//! 例外列表的显示完全由 ExceptionsView 的控件状态决定：
//!     - widgets().empty_view / list 决定显示空状态还是列表
//!     - widgets().delete_all 决定是否显示 "全部删除"
//!     - widgets().learn_more 的文本与下划线在构造时一次性确定
//!     - adapter().rows() 是已应用补丁的行序列
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use exceptions_core::{ChannelInteractor, ExceptionsFragmentState, ExceptionsItem};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    use super::*;

    fn app_with(hosts: Option<&[&str]>) -> App {
        let (actions, _) = mpsc::unbounded_channel();
        let (requests, _) = mpsc::unbounded_channel();
        let mut app = App::new(Arc::new(ChannelInteractor::new(actions)), requests);
        if let Some(hosts) = hosts {
            let items = hosts
                .iter()
                .map(|h| ExceptionsItem::new(h).unwrap())
                .collect();
            app.view
                .update(Arc::new(ExceptionsFragmentState::new(items).unwrap()));
        }
        app
    }

    /// 渲染到测试后端，并把缓冲区拼成一个字符串
    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();

        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn shows_loading_before_first_snapshot() {
        let screen = draw(&app_with(None), 70, 16);
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Delete all exceptions"));
    }

    #[test]
    fn empty_state_hides_list_and_delete_all() {
        let screen = draw(&app_with(Some(&[])), 100, 16);
        assert!(screen.contains("Exceptions let you disable tracking protection"));
        assert!(!screen.contains("Delete all exceptions"));
    }

    #[test]
    fn populated_state_lists_hosts_in_order() {
        let screen = draw(&app_with(Some(&["example.com", "example.org"])), 70, 16);
        let com = screen.find("example.com").unwrap();
        let org = screen.find("example.org").unwrap();
        assert!(com < org);
        assert!(screen.contains("Delete all exceptions"));
        assert!(screen.contains("Learn more"));
        assert!(!screen.contains("Exceptions let you disable"));
    }

    #[test]
    fn learn_more_is_underlined() {
        let app = app_with(Some(&["example.com"]));
        let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let buffer = terminal.backend().buffer();

        let underlined = buffer
            .content()
            .iter()
            .filter(|cell| {
                cell.modifier
                    .contains(ratatui::style::Modifier::UNDERLINED)
            })
            .map(ratatui::buffer::Cell::symbol)
            .collect::<String>();
        assert!(underlined.contains("Learnmore") || underlined.contains("Learn more"));
    }

    #[test]
    fn confirm_modal_renders_on_top() {
        let mut app = app_with(Some(&["example.com"]));
        app.modal.show_confirm_delete_all();
        let screen = draw(&app, 80, 20);
        assert!(screen.contains("Protection will be turned back on"));
        assert!(screen.contains("Cancel"));
    }

    #[test]
    fn add_modal_shows_validation_error() {
        let mut app = app_with(Some(&[]));
        app.modal.show(crate::model::Modal::AddException {
            input: "::".to_string(),
            error: Some("bad input".to_string()),
        });
        let screen = draw(&app, 80, 20);
        assert!(screen.contains("Add exception"));
        assert!(screen.contains("bad input"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app_with(Some(&["a-very-long-host-name-that-will-not-fit.example.com"]));
        app.modal.show_help();
        draw(&app, 12, 4);
    }
}
