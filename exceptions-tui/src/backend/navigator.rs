//! 导航服务
//!
//! "了解更多" 的实际跳转。失败只记录日志并回报给状态栏，
//! 不会影响视图状态。

use anyhow::Result;

/// 导航 trait
pub trait Navigator: Send + Sync {
    /// 打开外部帮助页面
    fn open(&self, url: &str) -> Result<()>;
}

/// 使用系统浏览器打开
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, url: &str) -> Result<()> {
        log::info!("Opening {url} in the system browser");
        webbrowser::open(url)?;
        Ok(())
    }
}
