//! 例外项管理服务
//!
//! store 侧的业务逻辑：执行交互器发来的动作，并返回新的状态快照。

use std::sync::Arc;

use crate::error::CoreResult;
use crate::interactor::ExceptionsAction;
use crate::traits::ExceptionsRepository;
use crate::types::{ExceptionsFragmentState, ExceptionsItem};

/// 例外项管理服务
pub struct ExceptionsService {
    repository: Arc<dyn ExceptionsRepository>,
}

impl ExceptionsService {
    /// 创建服务实例
    #[must_use]
    pub fn new(repository: Arc<dyn ExceptionsRepository>) -> Self {
        Self { repository }
    }

    /// 读取当前状态
    pub async fn current_state(&self) -> CoreResult<ExceptionsFragmentState> {
        ExceptionsFragmentState::new(self.repository.find_all().await?)
    }

    /// 执行一个动作
    ///
    /// # Returns
    /// * `Some(state)` - 动作改变（或可能改变）了状态
    /// * `None` - 动作不涉及状态（如 "了解更多"）
    pub async fn handle(
        &self,
        action: &ExceptionsAction,
    ) -> CoreResult<Option<ExceptionsFragmentState>> {
        match action {
            ExceptionsAction::LearnMore => Ok(None),
            ExceptionsAction::DeleteAll => self.delete_all().await.map(Some),
            ExceptionsAction::DeleteOne(item) => self.delete_one(item).await.map(Some),
        }
    }

    /// 删除单个例外项（已不存在时为无操作）
    pub async fn delete_one(&self, item: &ExceptionsItem) -> CoreResult<ExceptionsFragmentState> {
        if !self.repository.delete(item.id()).await? {
            log::debug!("Exception already absent: {}", item.id());
        }
        self.current_state().await
    }

    /// 删除所有例外项
    pub async fn delete_all(&self) -> CoreResult<ExceptionsFragmentState> {
        self.repository.delete_all().await?;
        self.current_state().await
    }

    /// 添加例外项（输入可以是 host 或 URL）
    pub async fn add_exception(&self, input: &str) -> CoreResult<ExceptionsFragmentState> {
        let item = ExceptionsItem::new(input)?;
        if !self.repository.add(&item).await? {
            log::debug!("Exception already present: {}", item.id());
        }
        self.current_state().await
    }
}
