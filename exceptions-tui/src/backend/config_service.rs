//! 配置服务
//!
//! 配置文件为 JSON，位于 `<config_dir>/exceptions-tui/config.json`。
//! 文件不存在时使用默认配置；文件损坏时返回错误。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 默认的 "了解更多" 页面
pub const DEFAULT_LEARN_MORE_URL: &str =
    "https://support.mozilla.org/kb/enhanced-tracking-protection-firefox-android";

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("exceptions-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    /// "了解更多" 打开的地址
    pub learn_more_url: String,
    /// 启动时载入的例外项（host 或 URL）
    pub seed_exceptions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            learn_more_url: DEFAULT_LEARN_MORE_URL.to_string(),
            seed_exceptions: Vec::new(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置路径
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join(CONFIG_FILE))
    }

    /// 使用指定配置路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
