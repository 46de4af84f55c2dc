//! OperationRunner - Local loading/error tracking around one operation
//!
//! Mirrors what a UI trigger needs: a spinner flag, the last failure to
//! show, and hooks for what to do after each outcome.

use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::ApiError;
use crate::store::ErrorState;

use super::client::{join_settled, PromptClient};
use super::operations::RemoteOperation;

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Optional hooks fired after an invocation settles
///
/// Exactly one of `on_success` / `on_error` fires, then `on_finally`.
#[derive(Default)]
pub struct RunCallbacks {
    on_success: Option<Callback>,
    on_error: Option<Callback>,
    on_finally: Option<Callback>,
}

impl RunCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn on_finally(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_finally = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for RunCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunCallbacks")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_finally", &self.on_finally.is_some())
            .finish()
    }
}

fn fire(callback: Option<Callback>) {
    if let Some(f) = callback {
        f();
    }
}

/// Loading/error state of a runner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerStatus {
    /// Invocations that have started but not yet settled
    pub in_flight: usize,
    pub error: ErrorState,
}

impl RunnerStatus {
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }
}

/// Runs one kind of remote operation, tracking its own loading/error
///
/// Clones share status, so a clone can be moved into a spawned task.
#[derive(Clone)]
pub struct OperationRunner<O: RemoteOperation> {
    client: PromptClient,
    operation: O,
    status: Arc<watch::Sender<RunnerStatus>>,
}

impl<O: RemoteOperation> OperationRunner<O> {
    pub fn new(client: PromptClient, operation: O) -> Self {
        let (tx, _rx) = watch::channel(RunnerStatus::default());
        Self {
            client,
            operation,
            status: Arc::new(tx),
        }
    }

    pub fn operation(&self) -> &O {
        &self.operation
    }

    pub fn status(&self) -> RunnerStatus {
        self.status.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        self.status.borrow().loading()
    }

    pub fn error(&self) -> ErrorState {
        self.status.borrow().error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RunnerStatus> {
        self.status.subscribe()
    }

    /// Invoke the operation once
    ///
    /// Status moves to loading with a cleared error before the call and
    /// back once it settles; callbacks fire after the matching status
    /// change. The call and callbacks run on their own task, so they
    /// complete even if the returned future is dropped.
    pub async fn run(&self, arg: O::Arg, callbacks: RunCallbacks) -> Result<O::Output, ApiError> {
        let RunCallbacks {
            on_success,
            on_error,
            on_finally,
        } = callbacks;

        self.status.send_modify(|status| {
            status.in_flight += 1;
            status.error = ErrorState::NotAttempted;
        });

        let settle = self.client.settle(self.operation.clone(), arg);
        let tracked = Arc::clone(&self.status);

        join_settled(tokio::spawn(async move {
            let result = settle.await;

            match &result {
                Ok(_) => {
                    tracked.send_modify(|status| status.error = ErrorState::Succeeded);
                    fire(on_success);
                }
                Err(error) => {
                    tracked.send_modify(|status| status.error = ErrorState::Failed(error.clone()));
                    fire(on_error);
                }
            }

            tracked.send_modify(|status| status.in_flight = status.in_flight.saturating_sub(1));
            fire(on_finally);

            result
        }))
        .await
    }
}
