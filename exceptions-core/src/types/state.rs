//! 例外列表状态快照

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ExceptionsItem;
use crate::error::{CoreError, CoreResult};

/// 例外列表的不可变状态快照
///
/// 由 store 构造，视图只读取。顺序即渲染顺序，视图层不重新排序。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFragmentState")]
pub struct ExceptionsFragmentState {
    items: Vec<ExceptionsItem>,
}

#[derive(Deserialize)]
struct RawFragmentState {
    items: Vec<ExceptionsItem>,
}

impl TryFrom<RawFragmentState> for ExceptionsFragmentState {
    type Error = CoreError;

    fn try_from(raw: RawFragmentState) -> CoreResult<Self> {
        Self::new(raw.items)
    }
}

impl ExceptionsFragmentState {
    /// 创建快照，拒绝重复身份
    pub fn new(items: Vec<ExceptionsItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CoreError::DuplicateIdentity(item.id().to_string()));
            }
        }
        Ok(Self { items })
    }

    /// 空快照
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ExceptionsItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 是否包含指定身份的项
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// 两个快照的身份序列是否一致（忽略显示属性）
    pub fn same_identities(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.same_identity(b))
    }
}
