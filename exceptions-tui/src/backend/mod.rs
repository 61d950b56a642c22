//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! 有模块结构：
//!     mod config_service;           // 配置文件加载/保存
//!     mod exceptions_repository;    // 内存例外项仓库（实现 core 的 ExceptionsRepository）
//!     mod navigator;                // "了解更多" 的浏览器跳转
//!     mod store;                    // tokio 上运行的 store 任务
//!
//! 数据流：
//!     视图 → ChannelInteractor → (mpsc) → store 任务 → ExceptionsService
//!                                                  ↓
//!     app.rs 主循环 ← (watch，只保留最新) ← 新的状态快照
//!

mod config_service;
mod exceptions_repository;
mod navigator;
mod store;

pub use config_service::{get_config_dir, ConfigService, LocalConfigService};
pub use exceptions_repository::InMemoryExceptionsRepository;
pub use navigator::BrowserNavigator;
pub use store::{spawn_store, StoreHandle, StoreNotice, StoreRequest};
