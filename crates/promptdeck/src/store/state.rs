//! Store state and its reducer

use tracing::{debug, warn};

use crate::domain::{ApiError, Prompt, PromptChanges, PromptInState};

/// Which remote operation an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    FetchAll,
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::FetchAll => write!(f, "fetch_all"),
            OperationKind::Create => write!(f, "create"),
            OperationKind::Update => write!(f, "update"),
            OperationKind::Delete => write!(f, "delete"),
        }
    }
}

/// Result of the last attempted operation
///
/// `NotAttempted` covers both "never tried" and "attempt in flight".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorState {
    #[default]
    NotAttempted,
    Succeeded,
    Failed(ApiError),
}

impl ErrorState {
    pub fn is_failed(&self) -> bool {
        matches!(self, ErrorState::Failed(_))
    }

    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            ErrorState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<String> {
        self.failure().map(ApiError::message)
    }
}

/// Monotonic number handed out when an operation starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

/// Successful result of a remote operation, as the store consumes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Fetched(Vec<Prompt>),
    Created(Prompt),
    Updated(PromptChanges),
    Removed(Prompt),
}

impl Outcome {
    pub fn kind(&self) -> OperationKind {
        match self {
            Outcome::Fetched(_) => OperationKind::FetchAll,
            Outcome::Created(_) => OperationKind::Create,
            Outcome::Updated(_) => OperationKind::Update,
            Outcome::Removed(_) => OperationKind::Delete,
        }
    }
}

/// Everything that can change the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Started {
        kind: OperationKind,
        ticket: Ticket,
    },
    Succeeded {
        ticket: Ticket,
        outcome: Outcome,
    },
    Failed {
        kind: OperationKind,
        ticket: Ticket,
        error: ApiError,
    },
    SetExpanded {
        id: String,
        expanded: bool,
    },
}

/// Snapshot of the prompts store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptsState {
    pub is_loading: bool,
    /// Newest first
    pub data: Vec<PromptInState>,
    pub error: ErrorState,
    /// Ticket of the newest fetch whose data was applied
    pub(crate) last_fetch: Option<Ticket>,
}

impl PromptsState {
    pub fn find(&self, id: &str) -> Option<&PromptInState> {
        self.data.iter().find(|item| item.id() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.data.iter().position(|item| item.id() == id)
    }

    /// Apply one event
    pub fn reduce(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Started { kind, ticket } => {
                debug!(operation = %kind, ticket = ticket.0, "operation started");
                self.is_loading = true;
                self.error = ErrorState::NotAttempted;
            }
            StoreEvent::Succeeded { ticket, outcome } => {
                self.is_loading = false;
                self.error = ErrorState::Succeeded;
                self.apply_outcome(ticket, outcome);
            }
            StoreEvent::Failed {
                kind,
                ticket,
                error,
            } => {
                debug!(operation = %kind, ticket = ticket.0, error = %error, "operation failed");
                self.is_loading = false;
                self.error = ErrorState::Failed(error);
            }
            StoreEvent::SetExpanded { id, expanded } => match self.position(&id) {
                Some(index) => self.data[index].expanded = expanded,
                None => debug!(id = %id, "expand target not found"),
            },
        }
    }

    fn apply_outcome(&mut self, ticket: Ticket, outcome: Outcome) {
        match outcome {
            Outcome::Fetched(prompts) => {
                if self.last_fetch.is_some_and(|last| ticket < last) {
                    debug!(ticket = ticket.0, "dropping stale fetch result");
                    return;
                }
                self.last_fetch = Some(ticket);
                self.data = prompts.into_iter().map(PromptInState::from).collect();
            }
            Outcome::Created(prompt) => {
                if let Some(index) = self.position(&prompt.id) {
                    warn!(id = %prompt.id, "created prompt id already present, replacing");
                    self.data.remove(index);
                }
                self.data.insert(0, PromptInState::from(prompt));
            }
            Outcome::Updated(changes) => match self.position(&changes.id) {
                Some(index) => changes.merge_into(&mut self.data[index].prompt),
                None => debug!(id = %changes.id, "updated prompt not found"),
            },
            Outcome::Removed(prompt) => {
                self.data.retain(|item| item.id() != prompt.id);
            }
        }
    }
}
