//! Store 任务
//!
//! 在 tokio 上运行的 store：
//!     - 从交互器通道接收 `ExceptionsAction`
//!     - 从请求通道接收额外的请求（如添加例外项）
//!     - 通过 `ExceptionsService` 执行，并把新的快照发布到 watch 通道
//!
//! watch 通道只保留最新值，UI 落后时中间状态会被直接覆盖。

use std::sync::Arc;

use exceptions_core::{
    ChannelInteractor, CoreError, ExceptionsAction, ExceptionsFragmentState, ExceptionsService,
};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::navigator::Navigator;

/// 交互器之外的 store 请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreRequest {
    /// 添加例外项（host 或 URL）
    Add(String),
}

/// store 回报给 UI 的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreNotice {
    Info(String),
    Error(String),
}

/// UI 侧持有的 store 句柄
pub struct StoreHandle {
    /// 交给视图的交互器
    pub interactor: Arc<ChannelInteractor>,
    /// 额外请求
    pub requests: mpsc::UnboundedSender<StoreRequest>,
    /// 状态快照（只保留最新）
    pub states: watch::Receiver<Arc<ExceptionsFragmentState>>,
    /// 提示消息
    pub notices: mpsc::UnboundedReceiver<StoreNotice>,
}

struct StoreActor {
    service: ExceptionsService,
    navigator: Arc<dyn Navigator>,
    learn_more_url: String,
    actions: mpsc::UnboundedReceiver<ExceptionsAction>,
    requests: mpsc::UnboundedReceiver<StoreRequest>,
    states: watch::Sender<Arc<ExceptionsFragmentState>>,
    notices: mpsc::UnboundedSender<StoreNotice>,
}

/// 启动 store 任务（需在 tokio 运行时上下文中调用）
pub fn spawn_store(
    service: ExceptionsService,
    navigator: Arc<dyn Navigator>,
    learn_more_url: String,
) -> (StoreHandle, JoinHandle<()>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (notice_tx, notice_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(Arc::new(ExceptionsFragmentState::empty()));

    let actor = StoreActor {
        service,
        navigator,
        learn_more_url,
        actions: action_rx,
        requests: request_rx,
        states: state_tx,
        notices: notice_tx,
    };
    let task = tokio::spawn(actor.run());

    let handle = StoreHandle {
        interactor: Arc::new(ChannelInteractor::new(action_tx)),
        requests: request_tx,
        states: state_rx,
        notices: notice_rx,
    };
    (handle, task)
}

impl StoreActor {
    async fn run(mut self) {
        log::info!("Exceptions store started");
        self.publish_current().await;

        loop {
            tokio::select! {
                Some(action) = self.actions.recv() => self.handle_action(action).await,
                Some(request) = self.requests.recv() => self.handle_request(request).await,
                else => break,
            }
        }

        log::info!("Exceptions store stopped");
    }

    async fn handle_action(&mut self, action: ExceptionsAction) {
        log::debug!("Store received {action:?}");

        if action == ExceptionsAction::LearnMore {
            self.open_learn_more().await;
            return;
        }

        match self.service.handle(&action).await {
            Ok(Some(state)) => self.publish(state),
            Ok(None) => {}
            Err(e) => {
                self.report(&e);
                // 失败时重新发布当前真实状态
                self.publish_current().await;
            }
        }
    }

    async fn handle_request(&mut self, request: StoreRequest) {
        match request {
            StoreRequest::Add(input) => match self.service.add_exception(&input).await {
                Ok(state) => {
                    self.notify(StoreNotice::Info(format!("Added exception: {}", input.trim())));
                    self.publish(state);
                }
                Err(e) => self.report(&e),
            },
        }
    }

    async fn open_learn_more(&self) {
        let navigator = self.navigator.clone();
        let url = self.learn_more_url.clone();
        let result = tokio::task::spawn_blocking(move || navigator.open(&url)).await;

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                log::warn!("Failed to open learn more page: {e}");
                self.notify(StoreNotice::Error(format!("Failed to open browser: {e}")));
            }
            Err(e) => log::error!("Navigator task failed: {e}"),
        }
    }

    async fn publish_current(&self) {
        match self.service.current_state().await {
            Ok(state) => self.publish(state),
            Err(e) => self.report(&e),
        }
    }

    fn publish(&self, state: ExceptionsFragmentState) {
        log::debug!("Publishing exceptions state with {} item(s)", state.len());
        self.states.send_replace(Arc::new(state));
    }

    fn report(&self, e: &CoreError) {
        if e.is_expected() {
            log::warn!("Exceptions store: {e}");
        } else {
            log::error!("Exceptions store: {e}");
        }
        self.notify(StoreNotice::Error(e.to_string()));
    }

    fn notify(&self, notice: StoreNotice) {
        if self.notices.send(notice).is_err() {
            log::debug!("UI is gone, dropping store notice");
        }
    }
}
