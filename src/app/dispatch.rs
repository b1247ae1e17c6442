use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::future::{self, BoxFuture, Either, Future, FutureExt};
use futures::stream::{Stream, StreamExt};
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use super::AppAction;

// Handle to a future sent to the worker; aborting it guarantees its action is never dispatched
pub struct TaskHandle(Option<AbortHandle>);

impl TaskHandle {
    pub fn detached() -> Self {
        Self(None)
    }

    pub fn abort(&self) {
        if let Some(handle) = self.0.as_ref() {
            handle.abort();
        }
    }
}

#[derive(Clone)]
pub struct Worker(Handle);

impl Worker {
    pub fn new(handle: Handle) -> Self {
        Self(handle)
    }

    pub fn send_task<T>(&self, task: T) -> TaskHandle
    where
        T: Future<Output = ()> + Send + 'static,
    {
        TaskHandle(Some(self.0.spawn(task).abort_handle()))
    }
}

pub trait ActionDispatcher {
    fn dispatch(&self, action: AppAction);
    fn dispatch_async(&self, action: BoxFuture<'static, Option<AppAction>>) -> TaskHandle;
    fn box_clone(&self) -> Box<dyn ActionDispatcher>;
}

// Counts the dispatched futures still alive, and signals each one's end
#[derive(Clone)]
struct TaskTracker {
    running: Arc<AtomicUsize>,
    ended: UnboundedSender<()>,
}

struct TrackedTask(TaskTracker);

impl TaskTracker {
    fn new() -> (Self, UnboundedReceiver<()>) {
        let (ended, receiver) = unbounded();
        let tracker = Self {
            running: Arc::new(AtomicUsize::new(0)),
            ended,
        };
        (tracker, receiver)
    }

    fn track(&self) -> TrackedTask {
        self.running.fetch_add(1, Ordering::SeqCst);
        TrackedTask(self.clone())
    }

    fn is_idle(&self) -> bool {
        self.running.load(Ordering::SeqCst) == 0
    }
}

// Dropped when the future completes or is aborted
impl Drop for TrackedTask {
    fn drop(&mut self) {
        self.0.running.fetch_sub(1, Ordering::SeqCst);
        self.0.ended.unbounded_send(()).ok();
    }
}

#[derive(Clone)]
pub struct ActionDispatcherImpl {
    sender: UnboundedSender<AppAction>,
    worker: Worker,
    tracker: Option<TaskTracker>,
}

impl ActionDispatcherImpl {
    pub fn new(sender: UnboundedSender<AppAction>, worker: Worker) -> Self {
        Self {
            sender,
            worker,
            tracker: None,
        }
    }
}

impl ActionDispatcher for ActionDispatcherImpl {
    fn dispatch(&self, action: AppAction) {
        if let Err(e) = self.sender.unbounded_send(action) {
            error!("could not dispatch action: {}", e);
        }
    }

    fn dispatch_async(&self, action: BoxFuture<'static, Option<AppAction>>) -> TaskHandle {
        let clone = self.sender.clone();
        let tracked = self.tracker.as_ref().map(TaskTracker::track);
        self.worker.send_task(async move {
            if let Some(action) = action.await {
                if let Err(e) = clone.unbounded_send(action) {
                    warn!("dispatch loop is gone: {}", e);
                }
            }
            drop(tracked);
        })
    }

    fn box_clone(&self) -> Box<dyn ActionDispatcher> {
        Box::new(self.clone())
    }
}

#[derive(Debug)]
pub enum AppMessage {
    Action(AppAction),
    Input(String),
    // Input is exhausted and no action is left to handle
    Quit,
}

pub struct DispatchLoop {
    receiver: UnboundedReceiver<AppAction>,
    sender: UnboundedSender<AppAction>,
    tracker: TaskTracker,
    ended: UnboundedReceiver<()>,
}

impl DispatchLoop {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded::<AppAction>();
        let (tracker, ended) = TaskTracker::new();
        Self {
            receiver,
            sender,
            tracker,
            ended,
        }
    }

    pub fn make_dispatcher(&self, worker: Worker) -> Box<dyn ActionDispatcher> {
        Box::new(ActionDispatcherImpl {
            sender: self.sender.clone(),
            worker,
            tracker: Some(self.tracker.clone()),
        })
    }

    // Messages are handled one at a time until the handler breaks.
    // Once input ends, queued actions and running futures are drained before Quit.
    pub async fn attach<S, F>(self, mut input: S, mut handler: F)
    where
        S: Stream<Item = String> + Unpin,
        F: FnMut(AppMessage) -> ControlFlow<()>,
    {
        let Self {
            mut receiver,
            sender,
            tracker,
            mut ended,
        } = self;
        let mut input_ended = false;

        loop {
            let message = if !input_ended {
                match future::select(receiver.next(), input.next()).await {
                    Either::Left((Some(action), _)) => AppMessage::Action(action),
                    Either::Left((None, _)) => AppMessage::Quit,
                    Either::Right((Some(line), _)) => AppMessage::Input(line),
                    Either::Right((None, _)) => {
                        debug!("input ended");
                        input_ended = true;
                        continue;
                    }
                }
            } else {
                // read before the queue: futures send their action before they count as ended
                let idle = tracker.is_idle();
                match receiver.next().now_or_never() {
                    Some(Some(action)) => AppMessage::Action(action),
                    Some(None) => AppMessage::Quit,
                    None if idle => AppMessage::Quit,
                    None => match future::select(receiver.next(), ended.next()).await {
                        Either::Left((Some(action), _)) => AppMessage::Action(action),
                        Either::Left((None, _)) => AppMessage::Quit,
                        Either::Right(_) => continue,
                    },
                }
            };

            if handler(message).is_break() {
                break;
            }
        }

        drop(sender);
    }
}

impl Default for DispatchLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::app::state::SearchAction;
    use futures::channel::oneshot;
    use futures::stream;

    fn query_of(action: &AppAction) -> Option<&str> {
        match action {
            AppAction::SearchAction(SearchAction::QueryChanged(query)) => Some(query),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_dispatch_async_sends_result() {
        let (sender, mut receiver) = unbounded();
        let dispatcher = ActionDispatcherImpl::new(sender, Worker::new(Handle::current()));

        dispatcher.dispatch_async(Box::pin(async {
            Some(AppAction::from(SearchAction::QueryChanged(
                "octocat".to_string(),
            )))
        }));

        let action = receiver.next().await.unwrap();
        assert_eq!(query_of(&action), Some("octocat"));
    }

    #[tokio::test]
    async fn test_aborted_task_never_dispatches() {
        let (sender, mut receiver) = unbounded();
        let dispatcher = ActionDispatcherImpl::new(sender, Worker::new(Handle::current()));
        let (mut stale_sender, stale_receiver) = oneshot::channel::<()>();

        let stale = dispatcher.dispatch_async(Box::pin(async move {
            stale_receiver.await.ok()?;
            Some(AppAction::from(SearchAction::QueryChanged(
                "stale".to_string(),
            )))
        }));
        stale.abort();
        // resolves once the aborted task has been dropped
        stale_sender.cancellation().await;

        dispatcher.dispatch_async(Box::pin(async {
            Some(AppAction::from(SearchAction::QueryChanged(
                "latest".to_string(),
            )))
        }));

        let action = receiver.next().await.unwrap();
        assert_eq!(query_of(&action), Some("latest"));
        assert!(stale_sender.send(()).is_err());
    }

    #[tokio::test]
    async fn test_loop_interleaves_input_and_actions() {
        let dispatch_loop = DispatchLoop::new();
        let dispatcher = dispatch_loop.make_dispatcher(Worker::new(Handle::current()));
        dispatcher.dispatch(AppAction::Start);

        let mut seen = vec![];
        dispatch_loop
            .attach(stream::iter(vec!["octocat".to_string()]), |message| {
                seen.push(format!("{:?}", message));
                if let AppMessage::Quit = message {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await;

        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&"Action(Start)".to_string()));
        assert!(seen.contains(&"Input(\"octocat\")".to_string()));
        assert_eq!(seen.last().map(String::as_str), Some("Quit"));
    }

    #[tokio::test]
    async fn test_end_of_input_waits_for_running_futures() {
        let dispatch_loop = DispatchLoop::new();
        let dispatcher = dispatch_loop.make_dispatcher(Worker::new(Handle::current()));

        let mut seen = vec![];
        dispatch_loop
            .attach(stream::iter(vec!["octocat".to_string()]), |message| {
                if let AppMessage::Input(query) = &message {
                    let query = query.clone();
                    dispatcher.dispatch_async(Box::pin(async move {
                        for _ in 0..5 {
                            tokio::task::yield_now().await;
                        }
                        Some(AppAction::from(SearchAction::QueryChanged(query)))
                    }));
                }
                seen.push(format!("{:?}", message));
                if let AppMessage::Quit = message {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await;

        assert_eq!(
            seen,
            vec![
                "Input(\"octocat\")".to_string(),
                "Action(SearchAction(QueryChanged(\"octocat\")))".to_string(),
                "Quit".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_end_of_input_skips_aborted_futures() {
        let dispatch_loop = DispatchLoop::new();
        let dispatcher = dispatch_loop.make_dispatcher(Worker::new(Handle::current()));

        let mut seen = vec![];
        dispatch_loop
            .attach(stream::iter(vec!["octocat".to_string()]), |message| {
                if let AppMessage::Input(_) = &message {
                    let task = dispatcher
                        .dispatch_async(Box::pin(future::pending::<Option<AppAction>>()));
                    task.abort();
                }
                seen.push(format!("{:?}", message));
                if let AppMessage::Quit = message {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await;

        assert_eq!(seen.last().map(String::as_str), Some("Quit"));
        assert_eq!(seen.len(), 2);
    }
}
