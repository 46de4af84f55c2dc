//! PromptStore - Shared handle to the prompts state
//!
//! State lives in a `watch` channel: every event is reduced inside a
//! single `send_modify`, so readers see either the state before or after
//! it, never a mix.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use super::state::{OperationKind, PromptsState, StoreEvent, Ticket};

/// Cloneable handle; clones share the same state
#[derive(Debug, Clone)]
pub struct PromptStore {
    state: Arc<watch::Sender<PromptsState>>,
    next_ticket: Arc<AtomicU64>,
}

impl PromptStore {
    pub fn new() -> Self {
        Self::with_state(PromptsState::default())
    }

    /// Start from a pre-populated state
    pub fn with_state(state: PromptsState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            state: Arc::new(tx),
            next_ticket: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> PromptsState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every applied event
    pub fn subscribe(&self) -> watch::Receiver<PromptsState> {
        self.state.subscribe()
    }

    /// Reduce one event into the state
    pub fn dispatch(&self, event: StoreEvent) {
        self.state.send_modify(|state| state.reduce(event));
    }

    /// Record the start of an operation and hand out its ticket
    pub fn begin(&self, kind: OperationKind) -> Ticket {
        let ticket = Ticket(self.next_ticket.fetch_add(1, Ordering::Relaxed));
        self.dispatch(StoreEvent::Started { kind, ticket });
        ticket
    }

    /// Set the presentation-only `expanded` flag; no-op for unknown ids
    pub fn set_expanded(&self, id: &str, expanded: bool) {
        self.dispatch(StoreEvent::SetExpanded {
            id: id.to_string(),
            expanded,
        });
    }

    /// Flip `expanded`; returns the new value, or `None` if the id is unknown
    pub fn toggle_expanded(&self, id: &str) -> Option<bool> {
        let mut toggled = None;
        self.state.send_modify(|state| {
            let expanded = state.find(id).map(|item| !item.expanded);
            if let Some(expanded) = expanded {
                state.reduce(StoreEvent::SetExpanded {
                    id: id.to_string(),
                    expanded,
                });
            }
            toggled = expanded;
        });
        toggled
    }
}

impl Default for PromptStore {
    fn default() -> Self {
        Self::new()
    }
}
