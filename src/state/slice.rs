// ============================================================================
// SLICE - Per-entity state and its lifecycle transitions
// ============================================================================
// `apply` is the only way a slice changes. Each entity operation produces a
// pending event when dispatched and exactly one settled event (fulfilled
// variant or `Rejected`) when it resolves.
// ============================================================================

use crate::models::Entity;
use crate::services::entity_service::{success_message, OperationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Fulfilled,
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliceEvent<E> {
    Pending(OperationKind),
    Created { entity: E, message: Option<String> },
    Listed(Vec<E>),
    Fetched(E),
    Updated { entity: E, message: Option<String> },
    Deleted { id: String, message: Option<String> },
    StatusToggled(E),
    Rejected { op: OperationKind, reason: String },
    /// Dismisses the error/success banner
    ClearMessages,
}

impl<E> SliceEvent<E> {
    /// Operation and lifecycle phase, `None` for `ClearMessages`
    pub fn lifecycle(&self) -> Option<(OperationKind, Phase)> {
        match self {
            SliceEvent::Pending(op) => Some((*op, Phase::Pending)),
            SliceEvent::Created { .. } => Some((OperationKind::Create, Phase::Fulfilled)),
            SliceEvent::Listed(_) => Some((OperationKind::ListAll, Phase::Fulfilled)),
            SliceEvent::Fetched(_) => Some((OperationKind::GetOne, Phase::Fulfilled)),
            SliceEvent::Updated { .. } => Some((OperationKind::Update, Phase::Fulfilled)),
            SliceEvent::Deleted { .. } => Some((OperationKind::Delete, Phase::Fulfilled)),
            SliceEvent::StatusToggled(_) => Some((OperationKind::ToggleStatus, Phase::Fulfilled)),
            SliceEvent::Rejected { op, .. } => Some((*op, Phase::Rejected)),
            SliceEvent::ClearMessages => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceState<E> {
    /// Insertion order, except that creates are prepended
    pub items: Vec<E>,
    /// Set by get-one and update only
    pub selected: Option<E>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<E> Default for SliceState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            loading: false,
            error: None,
            success: None,
        }
    }
}

impl<E: Entity> SliceState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: SliceEvent<E>) {
        match event {
            SliceEvent::Pending(op) => {
                self.loading = true;
                if op.clears_messages_on_start() {
                    self.clear_messages();
                }
            }
            SliceEvent::Created { entity, message } => {
                self.loading = false;
                self.items.insert(0, entity);
                self.set_success(success_message::<E>(OperationKind::Create, message));
            }
            SliceEvent::Listed(items) => {
                self.loading = false;
                self.items = items;
            }
            SliceEvent::Fetched(entity) => {
                self.loading = false;
                self.selected = Some(entity);
            }
            SliceEvent::Updated { entity, message } => {
                // `items` keeps the old copy until the next list-all
                self.loading = false;
                self.selected = Some(entity);
                self.set_success(success_message::<E>(OperationKind::Update, message));
            }
            SliceEvent::Deleted { id, message } => {
                self.loading = false;
                self.items.retain(|item| item.id() != id);
                self.set_success(success_message::<E>(OperationKind::Delete, message));
            }
            SliceEvent::StatusToggled(entity) => {
                self.loading = false;
                if let Some(slot) = self.items.iter_mut().find(|item| item.id() == entity.id()) {
                    *slot = entity;
                }
            }
            SliceEvent::Rejected { reason, .. } => {
                self.loading = false;
                self.success = None;
                self.error = Some(reason);
            }
            SliceEvent::ClearMessages => self.clear_messages(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn set_success(&mut self, message: Option<String>) {
        if message.is_some() {
            self.error = None;
            self.success = message;
        }
    }

    fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }
}
