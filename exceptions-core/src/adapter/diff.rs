//! 最小渲染补丁计算
//!
//! 以身份为键比较新旧两个有序序列，生成把旧序列变为新序列的
//! 最少 remove / move / insert 操作，以及同身份但属性变化时的 change。
//!
//! 补丁中的操作按顺序作用于一个 `Vec`：
//!
//! 1. `Remove`：按旧下标从大到小删除消失的项
//! 2. `Move`：只移动不在最长递增子序列（LIS）中的项，`from`/`to` 均为当前下标
//! 3. `Insert`：按新下标从小到大插入新项
//! 4. `Change`：按最终下标重新绑定属性变化的项

use std::collections::{HashMap, HashSet};

use crate::types::ExceptionsItem;

/// 单个补丁操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOp {
    /// 删除当前下标处的行
    Remove { at: usize },
    /// 取出 `from` 处的行，再插入到 `to`（`to` 为取出之后的下标）
    Move { from: usize, to: usize },
    /// 在 `at` 处创建新行
    Insert { at: usize, item: ExceptionsItem },
    /// 重新绑定 `at` 处的行（身份不变，属性变化）
    Change { at: usize, item: ExceptionsItem },
}

/// 一次 `update_data` 的渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPatch {
    /// 身份序列与属性都没有变化
    Unchanged,
    /// 整体重建（没有可复用的行，或无法计算最小补丁）
    Reset,
    /// 最小补丁
    Ops(Vec<PatchOp>),
}

impl RenderPatch {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// 补丁中的操作（`Unchanged` / `Reset` 为空）
    pub fn ops(&self) -> &[PatchOp] {
        match self {
            Self::Ops(ops) => ops,
            Self::Unchanged | Self::Reset => &[],
        }
    }
}

/// 计算从 `old` 到 `new` 的渲染补丁
pub fn compute_patch(old: &[ExceptionsItem], new: &[ExceptionsItem]) -> RenderPatch {
    // 身份重复时无法按身份定位，退化为整体重建
    if has_duplicates(old) || has_duplicates(new) {
        log::warn!("Duplicate exception identities in render input, falling back to reset");
        return RenderPatch::Reset;
    }

    match (old.is_empty(), new.is_empty()) {
        (true, true) => return RenderPatch::Unchanged,
        (true, false) | (false, true) => return RenderPatch::Reset,
        (false, false) => {}
    }

    let old_index: HashMap<&str, usize> = index_by_id(old);
    let new_index: HashMap<&str, usize> = index_by_id(new);

    let mut ops = Vec::new();

    // 1. 删除
    let mut cur: Vec<&str> = old.iter().map(ExceptionsItem::id).collect();
    for (at, item) in old.iter().enumerate().rev() {
        if !new_index.contains_key(item.id()) {
            ops.push(PatchOp::Remove { at });
            cur.remove(at);
        }
    }

    // 2. 移动：LIS 之外的公共项
    let common: Vec<&str> = new
        .iter()
        .map(ExceptionsItem::id)
        .filter(|id| old_index.contains_key(id))
        .collect();
    let mut pos: HashMap<&str, usize> = cur.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let positions: Vec<usize> = common
        .iter()
        .filter_map(|id| pos.get(id).copied())
        .collect();
    let stable: HashSet<&str> = longest_increasing_subsequence(&positions)
        .into_iter()
        .map(|i| common[i])
        .collect();

    let mut prev_common: Option<&str> = None;
    for &id in &common {
        if !stable.contains(id) {
            if let Some(&from) = pos.get(id) {
                cur.remove(from);
                let to = prev_common
                    .and_then(|prev| pos.get(prev).copied())
                    .map_or(0, |p| if p > from { p } else { p + 1 });
                cur.insert(to, id);
                // 只有 from..=to 之间的下标发生变化
                let (lo, hi) = (from.min(to), from.max(to));
                for (i, &moved) in cur.iter().enumerate().take(hi + 1).skip(lo) {
                    pos.insert(moved, i);
                }
                if from != to {
                    ops.push(PatchOp::Move { from, to });
                }
            }
        }
        prev_common = Some(id);
    }

    // 3. 插入
    for (at, item) in new.iter().enumerate() {
        if !old_index.contains_key(item.id()) {
            ops.push(PatchOp::Insert {
                at,
                item: item.clone(),
            });
        }
    }

    // 4. 属性变化
    for (at, item) in new.iter().enumerate() {
        if let Some(&old_at) = old_index.get(item.id()) {
            if old[old_at] != *item {
                ops.push(PatchOp::Change {
                    at,
                    item: item.clone(),
                });
            }
        }
    }

    if ops.is_empty() {
        RenderPatch::Unchanged
    } else {
        RenderPatch::Ops(ops)
    }
}

fn index_by_id(items: &[ExceptionsItem]) -> HashMap<&str, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id(), i))
        .collect()
}

fn has_duplicates(items: &[ExceptionsItem]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().any(|item| !seen.insert(item.id()))
}

/// 返回 `seq` 的一个最长严格递增子序列（以 `seq` 的下标表示）
fn longest_increasing_subsequence(seq: &[usize]) -> Vec<usize> {
    // tails[k]：长度为 k+1 的递增子序列的最小结尾在 seq 中的下标
    let mut tails: Vec<usize> = Vec::new();
    let mut parent: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let k = tails.partition_point(|&t| seq[t] < value);
        if k > 0 {
            parent[i] = Some(tails[k - 1]);
        }
        if k == tails.len() {
            tails.push(i);
        } else {
            tails[k] = i;
        }
    }

    let mut result = Vec::with_capacity(tails.len());
    let mut next = tails.last().copied();
    while let Some(i) = next {
        result.push(i);
        next = parent[i];
    }
    result.reverse();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(hosts: &[&str]) -> Vec<ExceptionsItem> {
        hosts
            .iter()
            .map(|h| ExceptionsItem::new(h).unwrap())
            .collect()
    }

    /// 把补丁作用到一份身份列表上
    fn apply(old: &[ExceptionsItem], patch: &RenderPatch, new: &[ExceptionsItem]) -> Vec<ExceptionsItem> {
        match patch {
            RenderPatch::Unchanged => old.to_vec(),
            RenderPatch::Reset => new.to_vec(),
            RenderPatch::Ops(ops) => {
                let mut cur = old.to_vec();
                for op in ops {
                    match op {
                        PatchOp::Remove { at } => {
                            cur.remove(*at);
                        }
                        PatchOp::Move { from, to } => {
                            let row = cur.remove(*from);
                            cur.insert(*to, row);
                        }
                        PatchOp::Insert { at, item } => cur.insert(*at, item.clone()),
                        PatchOp::Change { at, item } => cur[*at] = item.clone(),
                    }
                }
                cur
            }
        }
    }

    fn count_moves(patch: &RenderPatch) -> usize {
        patch
            .ops()
            .iter()
            .filter(|op| matches!(op, PatchOp::Move { .. }))
            .count()
    }

    #[test]
    fn identical_sequences_are_unchanged() {
        let a = items(&["example.com", "example.org"]);
        assert_eq!(compute_patch(&a, &a.clone()), RenderPatch::Unchanged);
    }

    #[test]
    fn empty_transitions_reset() {
        let a = items(&["example.com"]);
        assert_eq!(compute_patch(&[], &a), RenderPatch::Reset);
        assert_eq!(compute_patch(&a, &[]), RenderPatch::Reset);
        assert_eq!(compute_patch(&[], &[]), RenderPatch::Unchanged);
    }

    #[test]
    fn duplicate_input_resets() {
        let old = items(&["a.com"]);
        let new = vec![old[0].clone(), old[0].clone()];
        assert_eq!(compute_patch(&old, &new), RenderPatch::Reset);
    }

    #[test]
    fn removing_one_item_is_a_single_remove() {
        let old = items(&["example.com", "example.org"]);
        let new = items(&["example.com"]);
        let patch = compute_patch(&old, &new);
        assert_eq!(patch, RenderPatch::Ops(vec![PatchOp::Remove { at: 1 }]));
        assert_eq!(apply(&old, &patch, &new), new);
    }

    #[test]
    fn swap_is_a_single_move() {
        let old = items(&["a.com", "b.com"]);
        let new = items(&["b.com", "a.com"]);
        let patch = compute_patch(&old, &new);
        assert_eq!(count_moves(&patch), 1);
        assert!(patch
            .ops()
            .iter()
            .all(|op| matches!(op, PatchOp::Move { .. })));
        assert_eq!(apply(&old, &patch, &new), new);
    }

    #[test]
    fn rotation_moves_only_the_displaced_item() {
        let old = items(&["a.com", "b.com", "c.com", "d.com"]);
        let new = items(&["b.com", "c.com", "d.com", "a.com"]);
        let patch = compute_patch(&old, &new);
        assert_eq!(count_moves(&patch), 1);
        assert_eq!(apply(&old, &patch, &new), new);
    }

    #[test]
    fn reverse_moves_all_but_one() {
        let old = items(&["a.com", "b.com", "c.com", "d.com", "e.com"]);
        let mut new = old.clone();
        new.reverse();
        let patch = compute_patch(&old, &new);
        assert_eq!(count_moves(&patch), 4);
        assert_eq!(apply(&old, &patch, &new), new);
    }

    #[test]
    fn mixed_remove_insert_move() {
        let old = items(&["a.com", "b.com", "c.com", "d.com"]);
        let new = items(&["d.com", "x.com", "b.com", "y.com", "a.com"]);
        let patch = compute_patch(&old, &new);
        assert_eq!(apply(&old, &patch, &new), new);

        let removes = patch
            .ops()
            .iter()
            .filter(|op| matches!(op, PatchOp::Remove { .. }))
            .count();
        let inserts = patch
            .ops()
            .iter()
            .filter(|op| matches!(op, PatchOp::Insert { .. }))
            .count();
        assert_eq!(removes, 1);
        assert_eq!(inserts, 2);
        // d, b, a 相对旧序列完全逆序，LIS 长度为 1
        assert_eq!(count_moves(&patch), 2);
    }

    #[test]
    fn attribute_change_is_a_rebind_not_a_recreate() {
        let old = items(&["a.com", "b.com"]);
        let new = vec![old[0].clone(), old[1].clone().with_icon("b.png")];
        let patch = compute_patch(&old, &new);
        assert_eq!(
            patch,
            RenderPatch::Ops(vec![PatchOp::Change {
                at: 1,
                item: new[1].clone()
            }])
        );
        assert_eq!(apply(&old, &patch, &new), new);
    }

    #[test]
    fn many_shuffles_reach_target() {
        let base = items(&["a.com", "b.com", "c.com", "d.com", "e.com", "f.com", "g.com"]);
        let orders: [&[usize]; 5] = [
            &[6, 5, 4, 3, 2, 1, 0],
            &[1, 0, 3, 2, 5, 4, 6],
            &[3, 0, 6, 1, 4],
            &[2, 4, 6],
            &[0, 2, 1, 6, 5],
        ];
        for old_order in &orders {
            for new_order in &orders {
                let old: Vec<_> = old_order.iter().map(|&i| base[i].clone()).collect();
                let new: Vec<_> = new_order.iter().map(|&i| base[i].clone()).collect();
                let patch = compute_patch(&old, &new);
                assert_eq!(apply(&old, &patch, &new), new, "{old_order:?} -> {new_order:?}");
            }
        }
    }

    #[test]
    fn long_lists_keep_positions_in_sync() {
        let hosts: Vec<String> = (0..400).map(|i| format!("site{i}.com")).collect();
        let old: Vec<_> = hosts.iter().map(|h| ExceptionsItem::new(h).unwrap()).collect();

        let mut reversed = old.clone();
        reversed.reverse();
        let patch = compute_patch(&old, &reversed);
        assert_eq!(count_moves(&patch), old.len() - 1);
        assert_eq!(apply(&old, &patch, &reversed), reversed);

        // 奇数位倒序、偶数位保持，中间夹杂删除与插入
        let mut mixed: Vec<_> = old.iter().step_by(2).cloned().collect();
        let odd: Vec<_> = old.iter().skip(1).step_by(2).rev().take(150).cloned().collect();
        for (i, item) in odd.into_iter().enumerate() {
            mixed.insert(i * 2 % (mixed.len() + 1), item);
        }
        mixed.push(ExceptionsItem::new("new.example").unwrap());
        let patch = compute_patch(&old, &mixed);
        assert_eq!(apply(&old, &patch, &mixed), mixed);
    }

    #[test]
    fn lis_picks_longest_run() {
        let seq = [3, 0, 1, 4, 2, 5];
        let lis = longest_increasing_subsequence(&seq);
        let values: Vec<usize> = lis.iter().map(|&i| seq[i]).collect();
        assert_eq!(values.len(), 4);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
