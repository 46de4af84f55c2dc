//! PromptClient - Dispatches remote operations into a store
//!
//! Drives the three phases of every operation: started before the call,
//! then succeeded or failed once it settles.

use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{ApiError, NewPrompt, Prompt, PromptChanges, PromptUpdate};
use crate::ports::PromptApi;
use crate::store::{PromptStore, StoreEvent};

use super::operations::{AddPrompt, FetchPrompts, RemoteOperation, RemovePrompt, UpdatePrompt};

/// Pairs an API with the store its results are reduced into
#[derive(Clone)]
pub struct PromptClient {
    api: Arc<dyn PromptApi>,
    store: PromptStore,
}

impl PromptClient {
    pub fn new<A: PromptApi + 'static>(api: A, store: PromptStore) -> Self {
        Self::from_arc(Arc::new(api), store)
    }

    pub fn from_arc(api: Arc<dyn PromptApi>, store: PromptStore) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &PromptStore {
        &self.store
    }

    /// Run `operation` and reduce its result into the store
    ///
    /// The failure is both stored and returned; nothing is retried. The
    /// call runs on its own task, so dropping the returned future does not
    /// cancel it and its result is still reduced.
    pub async fn dispatch<O: RemoteOperation>(
        &self,
        operation: &O,
        arg: O::Arg,
    ) -> Result<O::Output, ApiError> {
        join_settled(tokio::spawn(self.settle(operation.clone(), arg))).await
    }

    /// Mark `operation` started now and return the call plus its reduction
    pub(crate) fn settle<O: RemoteOperation>(
        &self,
        operation: O,
        arg: O::Arg,
    ) -> impl Future<Output = Result<O::Output, ApiError>> + Send + 'static {
        let kind = operation.kind();
        let ticket = self.store.begin(kind);
        let api = Arc::clone(&self.api);
        let store = self.store.clone();

        async move {
            match operation.execute(api.as_ref(), arg).await {
                Ok(output) => {
                    debug!(operation = %kind, ticket = ticket.0, "operation succeeded");
                    store.dispatch(StoreEvent::Succeeded {
                        ticket,
                        outcome: operation.outcome(&output),
                    });
                    Ok(output)
                }
                Err(error) => {
                    warn!(operation = %kind, ticket = ticket.0, error = %error, "operation failed");
                    store.dispatch(StoreEvent::Failed {
                        kind,
                        ticket,
                        error: error.clone(),
                    });
                    Err(error)
                }
            }
        }
    }

    pub async fn fetch_prompts(&self) -> Result<Vec<Prompt>, ApiError> {
        self.dispatch(&FetchPrompts, ()).await
    }

    pub async fn add_prompt(&self, input: NewPrompt) -> Result<Prompt, ApiError> {
        self.dispatch(&AddPrompt, input).await
    }

    pub async fn update_prompt(&self, input: PromptUpdate) -> Result<PromptChanges, ApiError> {
        self.dispatch(&UpdatePrompt, input).await
    }

    pub async fn remove_prompt(&self, item: Prompt) -> Result<Prompt, ApiError> {
        self.dispatch(&RemovePrompt, item).await
    }
}

/// Await a spawned settle, re-raising a panic from inside it
pub(crate) async fn join_settled<T>(
    handle: JoinHandle<Result<T, ApiError>>,
) -> Result<T, ApiError> {
    match handle.await {
        Ok(result) => result,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(ApiError::Network(format!("operation task stopped: {e}"))),
    }
}
