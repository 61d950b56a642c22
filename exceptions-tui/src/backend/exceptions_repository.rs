//! 例外项仓库
//!
//! 实现 exceptions-core 的 `ExceptionsRepository` trait
//! 数据只存在内存中（启动时由配置文件中的 seedExceptions 填充）

use async_trait::async_trait;
use exceptions_core::traits::ExceptionsRepository;
use exceptions_core::types::ExceptionsItem;
use exceptions_core::CoreResult;
use tokio::sync::Mutex;

/// 内存例外项仓库
pub struct InMemoryExceptionsRepository {
    store: Mutex<Vec<ExceptionsItem>>,
}

impl InMemoryExceptionsRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Vec::new()),
        }
    }

    /// 从 host / URL 列表创建，跳过无效与重复项
    pub fn seeded(inputs: &[String]) -> Self {
        let mut items: Vec<ExceptionsItem> = Vec::with_capacity(inputs.len());
        for input in inputs {
            match ExceptionsItem::new(input) {
                Ok(item) if items.iter().any(|i| i.same_identity(&item)) => {
                    log::warn!("Skipping duplicate seed exception: {input}");
                }
                Ok(item) => items.push(item),
                Err(e) => log::warn!("Skipping seed exception {input:?}: {e}"),
            }
        }
        Self {
            store: Mutex::new(items),
        }
    }
}

impl Default for InMemoryExceptionsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExceptionsRepository for InMemoryExceptionsRepository {
    async fn find_all(&self) -> CoreResult<Vec<ExceptionsItem>> {
        Ok(self.store.lock().await.clone())
    }

    async fn add(&self, item: &ExceptionsItem) -> CoreResult<bool> {
        let mut store = self.store.lock().await;
        if store.iter().any(|i| i.same_identity(item)) {
            return Ok(false);
        }
        store.push(item.clone());
        Ok(true)
    }

    async fn delete(&self, id: &str) -> CoreResult<bool> {
        let mut store = self.store.lock().await;
        let before = store.len();
        store.retain(|i| i.id() != id);
        Ok(store.len() != before)
    }

    async fn delete_all(&self) -> CoreResult<()> {
        self.store.lock().await.clear();
        Ok(())
    }
}
