//! 视图交互器
//!
//! 视图只通过该 trait 发出意图，不直接调用 store 内部。
//! 所有调用都是单向的：结果（如果有）稍后以新的状态快照经
//! `ExceptionsView::update` 到达，而不是作为返回值。

use tokio::sync::mpsc::UnboundedSender;

use crate::types::ExceptionsItem;

/// 视图交互器 Trait
///
/// 平台实现:
/// - TUI: `ChannelInteractor`（将调用转发为消息）
/// - 测试: `RecordingInteractor`
pub trait ExceptionsViewInteractor: Send + Sync {
    /// 点击 "了解更多" 时调用
    fn on_learn_more(&self);

    /// 请求删除所有例外项
    fn on_delete_all(&self);

    /// 请求删除指定例外项（按身份）
    fn on_delete_one(&self, item: &ExceptionsItem);
}

/// 交互器发出的动作消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionsAction {
    LearnMore,
    DeleteAll,
    DeleteOne(ExceptionsItem),
}

/// 基于消息通道的交互器
///
/// 每次调用都作为 `ExceptionsAction` 发送给 store，
/// 不等待任何确认。
#[derive(Debug, Clone)]
pub struct ChannelInteractor {
    sender: UnboundedSender<ExceptionsAction>,
}

impl ChannelInteractor {
    #[must_use]
    pub fn new(sender: UnboundedSender<ExceptionsAction>) -> Self {
        Self { sender }
    }

    fn dispatch(&self, action: ExceptionsAction) {
        log::debug!("Dispatching exceptions action: {action:?}");
        if let Err(e) = self.sender.send(action) {
            log::warn!("Exceptions store is gone, dropping action: {:?}", e.0);
        }
    }
}

impl ExceptionsViewInteractor for ChannelInteractor {
    fn on_learn_more(&self) {
        self.dispatch(ExceptionsAction::LearnMore);
    }

    fn on_delete_all(&self) {
        self.dispatch(ExceptionsAction::DeleteAll);
    }

    fn on_delete_one(&self, item: &ExceptionsItem) {
        self.dispatch(ExceptionsAction::DeleteOne(item.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn forwards_each_call_as_one_message() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let interactor = ChannelInteractor::new(tx);
        let item = ExceptionsItem::new("example.com").unwrap();

        interactor.on_learn_more();
        interactor.on_delete_one(&item);
        interactor.on_delete_all();

        assert_eq!(rx.try_recv().unwrap(), ExceptionsAction::LearnMore);
        assert_eq!(rx.try_recv().unwrap(), ExceptionsAction::DeleteOne(item));
        assert_eq!(rx.try_recv().unwrap(), ExceptionsAction::DeleteAll);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_channel_is_not_fatal() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let interactor = ChannelInteractor::new(tx);
        interactor.on_delete_all();
    }
}
