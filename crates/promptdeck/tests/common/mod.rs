//! Shared fakes for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use promptdeck::{ApiError, Prompt, PromptApi, PromptPatch};

pub fn prompt(id: &str, created_at: i64) -> Prompt {
    Prompt {
        id: id.to_string(),
        title: format!("Title {id}"),
        body: format!("Body of {id}"),
        created_at: Some(created_at),
        updated_at: None,
    }
}

pub fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

/// Backend kept in memory, behaving like json-server for `/prompts`
#[derive(Default)]
pub struct InMemoryPromptApi {
    prompts: Mutex<Vec<Prompt>>,
    failure: Mutex<Option<ApiError>>,
}

impl InMemoryPromptApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts: Mutex::new(prompts),
            failure: Mutex::new(None),
        }
    }

    /// Make every call fail with `error` until `recover` is called
    pub fn fail_with(&self, error: ApiError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn stored(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn insert(&self, prompt: Prompt) {
        self.prompts.lock().unwrap().push(prompt);
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            body: "{}".to_string(),
        }
    }
}

#[async_trait]
impl PromptApi for InMemoryPromptApi {
    async fn list(&self) -> Result<Vec<Prompt>, ApiError> {
        self.check()?;
        Ok(self.stored())
    }

    async fn create(&self, prompt: &Prompt) -> Result<Prompt, ApiError> {
        self.check()?;
        self.insert(prompt.clone());
        Ok(prompt.clone())
    }

    async fn patch(&self, id: &str, patch: &PromptPatch) -> Result<(), ApiError> {
        self.check()?;
        let mut prompts = self.prompts.lock().unwrap();
        let stored = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(Self::not_found)?;
        stored.title = patch.title.clone();
        stored.body = patch.body.clone();
        stored.updated_at = Some(patch.updated_at);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.check()?;
        let mut prompts = self.prompts.lock().unwrap();
        let before = prompts.len();
        prompts.retain(|p| p.id != id);
        if prompts.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

type Gate = oneshot::Receiver<Result<(), ApiError>>;

/// Wraps a backend so each call waits for the test to release it
///
/// Calls take gates in the order they are made. Releasing a gate with
/// `Err` fails that call without reaching the backend.
pub struct GatedApi {
    inner: Arc<InMemoryPromptApi>,
    gates: Mutex<VecDeque<Gate>>,
}

impl GatedApi {
    pub fn new(inner: Arc<InMemoryPromptApi>) -> Self {
        Self {
            inner,
            gates: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a gate for the next ungated call
    pub fn gate(&self) -> oneshot::Sender<Result<(), ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    fn next_gate(&self) -> Option<Gate> {
        self.gates.lock().unwrap().pop_front()
    }

    async fn wait(&self) -> Result<(), ApiError> {
        let Some(gate) = self.next_gate() else {
            return Ok(());
        };
        match gate.await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Network("gate dropped".to_string())),
        }
    }
}

#[async_trait]
impl PromptApi for GatedApi {
    async fn list(&self) -> Result<Vec<Prompt>, ApiError> {
        self.wait().await?;
        self.inner.list().await
    }

    async fn create(&self, prompt: &Prompt) -> Result<Prompt, ApiError> {
        self.wait().await?;
        self.inner.create(prompt).await
    }

    async fn patch(&self, id: &str, patch: &PromptPatch) -> Result<(), ApiError> {
        self.wait().await?;
        self.inner.patch(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.wait().await?;
        self.inner.delete(id).await
    }
}
