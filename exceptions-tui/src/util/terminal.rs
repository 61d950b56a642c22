//! 终端初始化和清理

use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端（raw mode + 备用屏幕）
///
/// 同时安装 panic hook：panic 时先恢复终端，再交给默认 hook 打印信息，
/// 否则 panic 信息会被备用屏幕吞掉。
pub fn init_terminal() -> Result<Term> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    log::debug!("Terminal initialized");
    Ok(terminal)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log::debug!("Terminal restored");
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        // 尽力而为，忽略恢复过程中的错误
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        log::error!("Panic: {info}");
        default_hook(info);
    }));
}
