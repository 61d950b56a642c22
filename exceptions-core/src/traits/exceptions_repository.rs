//! 例外项存储抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ExceptionsItem;

/// 例外项仓库 Trait
///
/// 平台实现:
/// - TUI: `InMemoryExceptionsRepository`
#[async_trait]
pub trait ExceptionsRepository: Send + Sync {
    /// 按存储顺序获取所有例外项
    async fn find_all(&self) -> CoreResult<Vec<ExceptionsItem>>;

    /// 追加例外项
    ///
    /// # Returns
    /// * `true` - 已添加
    /// * `false` - 同身份的项已存在（不做修改）
    async fn add(&self, item: &ExceptionsItem) -> CoreResult<bool>;

    /// 按身份删除
    ///
    /// # Returns
    /// * `false` - 该项不存在
    async fn delete(&self, id: &str) -> CoreResult<bool>;

    /// 删除所有例外项
    async fn delete_all(&self) -> CoreResult<()>;
}
