//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::interactor::{ExceptionsAction, ExceptionsViewInteractor};
use crate::services::ExceptionsService;
use crate::traits::ExceptionsRepository;
use crate::types::{ExceptionsFragmentState, ExceptionsItem};

/// 按 host 批量构造例外项
pub fn items(hosts: &[&str]) -> Vec<ExceptionsItem> {
    hosts
        .iter()
        .map(|host| ExceptionsItem::new(host).unwrap())
        .collect()
}

/// 按 host 构造状态快照
pub fn state(hosts: &[&str]) -> Arc<ExceptionsFragmentState> {
    Arc::new(ExceptionsFragmentState::new(items(hosts)).unwrap())
}

// ===== RecordingInteractor =====

/// 记录所有调用的交互器
#[derive(Default)]
pub struct RecordingInteractor {
    actions: Mutex<Vec<ExceptionsAction>>,
}

impl RecordingInteractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<ExceptionsAction> {
        self.actions.lock().unwrap().clone()
    }

    fn record(&self, action: ExceptionsAction) {
        self.actions.lock().unwrap().push(action);
    }
}

impl ExceptionsViewInteractor for RecordingInteractor {
    fn on_learn_more(&self) {
        self.record(ExceptionsAction::LearnMore);
    }

    fn on_delete_all(&self) {
        self.record(ExceptionsAction::DeleteAll);
    }

    fn on_delete_one(&self, item: &ExceptionsItem) {
        self.record(ExceptionsAction::DeleteOne(item.clone()));
    }
}

// ===== MockExceptionsRepository =====

#[derive(Default)]
pub struct MockExceptionsRepository {
    items: RwLock<Vec<ExceptionsItem>>,
    /// 如果 Some，delete 时返回此错误（用于测试失败路径）
    delete_error: RwLock<Option<String>>,
}

impl MockExceptionsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ExceptionsItem>) -> Self {
        Self {
            items: RwLock::new(items),
            delete_error: RwLock::new(None),
        }
    }

    pub async fn set_delete_error(&self, err: Option<String>) {
        *self.delete_error.write().await = err;
    }
}

#[async_trait]
impl ExceptionsRepository for MockExceptionsRepository {
    async fn find_all(&self) -> CoreResult<Vec<ExceptionsItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn add(&self, item: &ExceptionsItem) -> CoreResult<bool> {
        let mut items = self.items.write().await;
        if items.iter().any(|i| i.same_identity(item)) {
            return Ok(false);
        }
        items.push(item.clone());
        Ok(true)
    }

    async fn delete(&self, id: &str) -> CoreResult<bool> {
        if let Some(ref msg) = *self.delete_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| i.id() != id);
        Ok(items.len() != before)
    }

    async fn delete_all(&self) -> CoreResult<()> {
        if let Some(ref msg) = *self.delete_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.items.write().await.clear();
        Ok(())
    }
}

/// 创建带 mock 仓库的服务
pub fn create_test_service(hosts: &[&str]) -> (ExceptionsService, Arc<MockExceptionsRepository>) {
    let repository = Arc::new(MockExceptionsRepository::with_items(items(hosts)));
    (ExceptionsService::new(repository.clone()), repository)
}
