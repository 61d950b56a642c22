//! 例外列表适配器
//!
//! 持有当前已渲染的行序列，并在新数据到达时应用最小补丁：
//! 未受影响的行保持同一个 `RowId`，不会被重建。

mod diff;

use std::sync::Arc;

use crate::interactor::ExceptionsViewInteractor;
use crate::types::ExceptionsItem;

pub use diff::{compute_patch, PatchOp, RenderPatch};

/// 已渲染行的稳定标识（行被创建时分配，移动/重新绑定时不变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

/// 一个已渲染的行
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    item: ExceptionsItem,
}

impl Row {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn item(&self) -> &ExceptionsItem {
        &self.item
    }
}

/// 行级别的累计统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdapterStats {
    pub created: usize,
    pub destroyed: usize,
    pub moved: usize,
    pub rebound: usize,
    pub resets: usize,
}

/// 例外列表适配器
pub struct ExceptionsAdapter {
    rows: Vec<Row>,
    interactor: Arc<dyn ExceptionsViewInteractor>,
    next_row_id: u64,
    stats: AdapterStats,
}

impl ExceptionsAdapter {
    pub fn new(interactor: Arc<dyn ExceptionsViewInteractor>) -> Self {
        Self {
            rows: Vec::new(),
            interactor,
            next_row_id: 0,
            stats: AdapterStats::default(),
        }
    }

    /// 用新的有序序列替换当前数据，返回实际应用的补丁
    pub fn update_data(&mut self, new_items: &[ExceptionsItem]) -> RenderPatch {
        let current: Vec<ExceptionsItem> = self.rows.iter().map(|row| row.item.clone()).collect();
        let patch = compute_patch(&current, new_items);

        match &patch {
            RenderPatch::Unchanged => {}
            RenderPatch::Reset => self.reset(new_items),
            RenderPatch::Ops(ops) => {
                for op in ops {
                    self.apply(op);
                }
            }
        }

        debug_assert!(
            self.rows.len() == new_items.len()
                && self.rows.iter().zip(new_items).all(|(row, item)| row.item == *item),
            "adapter rows diverged from the applied sequence"
        );
        log::trace!("Exceptions adapter applied {patch:?}");

        patch
    }

    fn reset(&mut self, items: &[ExceptionsItem]) {
        self.stats.destroyed += self.rows.len();
        self.stats.resets += 1;
        let rows: Vec<Row> = items.iter().map(|item| self.create_row(item)).collect();
        self.rows = rows;
    }

    fn apply(&mut self, op: &PatchOp) {
        match op {
            PatchOp::Remove { at } => {
                self.rows.remove(*at);
                self.stats.destroyed += 1;
            }
            PatchOp::Move { from, to } => {
                let row = self.rows.remove(*from);
                self.rows.insert(*to, row);
                self.stats.moved += 1;
            }
            PatchOp::Insert { at, item } => {
                let row = self.create_row(item);
                self.rows.insert(*at, row);
            }
            PatchOp::Change { at, item } => {
                if let Some(row) = self.rows.get_mut(*at) {
                    row.item = item.clone();
                    self.stats.rebound += 1;
                }
            }
        }
    }

    fn create_row(&mut self, item: &ExceptionsItem) -> Row {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        self.stats.created += 1;
        Row {
            id,
            item: item.clone(),
        }
    }

    // ========== 行绑定 ==========

    /// 点击某一行的删除按钮
    ///
    /// 在调用时按 `RowId` 解析该行当前的 item，
    /// 因此行被移动或重新绑定后依然删除正确的项。
    pub fn on_delete_row(&self, row_id: RowId) -> bool {
        match self.rows.iter().find(|row| row.id == row_id) {
            Some(row) => {
                self.interactor.on_delete_one(&row.item);
                true
            }
            None => {
                log::debug!("Delete requested for a row that is no longer rendered: {row_id:?}");
                false
            }
        }
    }

    /// 点击指定位置行的删除按钮
    pub fn on_delete_at(&self, position: usize) -> bool {
        match self.rows.get(position) {
            Some(row) => self.on_delete_row(row.id),
            None => {
                log::debug!("Delete requested at out-of-range position {position}");
                false
            }
        }
    }

    // ========== 读取 ==========

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn item_count(&self) -> usize {
        self.rows.len()
    }

    pub fn items(&self) -> impl Iterator<Item = &ExceptionsItem> {
        self.rows.iter().map(|row| &row.item)
    }

    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn position_of(&self, row_id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == row_id)
    }

    pub fn stats(&self) -> AdapterStats {
        self.stats
    }
}
