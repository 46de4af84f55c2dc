//! Remote Operations
//!
//! Each operation is one call to the `PromptApi` plus a pure transform of
//! its response. Operations never touch the store themselves; the
//! dispatcher reduces their `Outcome`.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{now_millis, ApiError, NewPrompt, Prompt, PromptChanges, PromptUpdate};
use crate::ports::PromptApi;
use crate::store::{OperationKind, Outcome};

/// A unit of remote work the dispatcher and runner can drive
#[async_trait]
pub trait RemoteOperation: Clone + Send + Sync + 'static {
    type Arg: Send + 'static;
    type Output: Clone + Send + 'static;

    fn kind(&self) -> OperationKind;

    /// Perform the call and transform its result
    async fn execute(&self, api: &dyn PromptApi, arg: Self::Arg)
        -> Result<Self::Output, ApiError>;

    /// What the store should apply on success
    fn outcome(&self, output: &Self::Output) -> Outcome;
}

/// Newest first by `created_at`, missing timestamps last
pub fn sort_newest_first(prompts: &mut [Prompt]) {
    prompts.sort_by_key(|p| std::cmp::Reverse(p.created_at_or_zero()));
}

/// GET the whole collection, sorted newest first
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchPrompts;

#[async_trait]
impl RemoteOperation for FetchPrompts {
    type Arg = ();
    type Output = Vec<Prompt>;

    fn kind(&self) -> OperationKind {
        OperationKind::FetchAll
    }

    async fn execute(&self, api: &dyn PromptApi, _arg: ()) -> Result<Vec<Prompt>, ApiError> {
        let mut prompts = api.list().await?;
        sort_newest_first(&mut prompts);
        Ok(prompts)
    }

    fn outcome(&self, output: &Vec<Prompt>) -> Outcome {
        Outcome::Fetched(output.clone())
    }
}

/// POST a new record built client-side; the server echo is canonical
#[derive(Debug, Clone, Copy, Default)]
pub struct AddPrompt;

#[async_trait]
impl RemoteOperation for AddPrompt {
    type Arg = NewPrompt;
    type Output = Prompt;

    fn kind(&self) -> OperationKind {
        OperationKind::Create
    }

    async fn execute(&self, api: &dyn PromptApi, input: NewPrompt) -> Result<Prompt, ApiError> {
        let payload = Prompt::from_new(input);
        let created = api.create(&payload).await?;

        if created.id != payload.id {
            warn!(sent = %payload.id, echoed = %created.id, "server changed prompt id");
        }

        Ok(created)
    }

    fn outcome(&self, output: &Prompt) -> Outcome {
        Outcome::Created(output.clone())
    }
}

/// PATCH title/body with a fresh `updated_at`
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdatePrompt;

#[async_trait]
impl RemoteOperation for UpdatePrompt {
    type Arg = PromptUpdate;
    type Output = PromptChanges;

    fn kind(&self) -> OperationKind {
        OperationKind::Update
    }

    async fn execute(
        &self,
        api: &dyn PromptApi,
        input: PromptUpdate,
    ) -> Result<PromptChanges, ApiError> {
        let changes = PromptChanges::new(input, now_millis());
        api.patch(&changes.id, &changes.patch()).await?;
        Ok(changes)
    }

    fn outcome(&self, output: &PromptChanges) -> Outcome {
        Outcome::Updated(output.clone())
    }
}

/// DELETE a record; resolves with the item that was passed in
#[derive(Debug, Clone, Copy, Default)]
pub struct RemovePrompt;

#[async_trait]
impl RemoteOperation for RemovePrompt {
    type Arg = Prompt;
    type Output = Prompt;

    fn kind(&self) -> OperationKind {
        OperationKind::Delete
    }

    async fn execute(&self, api: &dyn PromptApi, item: Prompt) -> Result<Prompt, ApiError> {
        api.delete(&item.id).await?;
        Ok(item)
    }

    fn outcome(&self, output: &Prompt) -> Outcome {
        Outcome::Removed(output.clone())
    }
}
