//! Site Exceptions TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、仓库与 store 任务 (`backend/`)
//!
//! 例外列表本身（快照、最小补丁、交互器）由 `exceptions-core` 提供。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入配置目录下的文件，不占用终端
//!     load config             // 语言、主题、"了解更多" 地址、初始例外项
//!     Runtime::new()          // store 任务运行在 tokio 上，UI 主循环保持同步
//!     spawn_store()           // 启动 store，拿到交互器与快照通道
//!     init_terminal()         // raw mode + 备用屏幕
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use exceptions_core::ExceptionsService;

use backend::{
    get_config_dir, spawn_store, BrowserNavigator, ConfigService, InMemoryExceptionsRepository,
    LocalConfigService, StoreHandle,
};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<()> {
    // 1. 日志
    init_logging(&get_config_dir())?;
    log::info!("Starting exceptions-tui v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置（首次运行时写入默认配置）
    let config_service = LocalConfigService::new();
    let first_run = !config_service.path().exists();
    let config = config_service.load()?;
    if first_run {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Failed to write default config: {e:#}");
        }
    }

    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unknown language {:?}, falling back to en-US", config.language);
        Language::default()
    });
    set_language(language);
    set_theme(config.theme);
    log::info!("Language {}, theme {:?}", language.code(), config.theme);

    // 3. store
    let runtime = tokio::runtime::Runtime::new()?;
    let guard = runtime.enter();

    let repository = Arc::new(InMemoryExceptionsRepository::seeded(&config.seed_exceptions));
    let service = ExceptionsService::new(repository);
    let (handle, store_task) =
        spawn_store(service, Arc::new(BrowserNavigator), config.learn_more_url);
    let StoreHandle {
        interactor,
        requests,
        mut states,
        mut notices,
    } = handle;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(interactor, requests);
    let result = app::run(&mut terminal, &mut app, &mut states, &mut notices);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 关闭所有发送端，等待 store 退出
    drop(app);
    drop(guard);
    if let Err(e) = runtime.block_on(store_task) {
        log::error!("Exceptions store task failed: {e}");
    }

    result
}
