// ============================================================================
// ENTITY VIEWMODEL - Operations routed through the entity's slice
// ============================================================================
// Views call these; each call runs the service operation and applies the
// matching lifecycle transitions to the injected store.
// ============================================================================

use thiserror::Error;

use crate::models::{Entity, ValidationError};
use crate::services::entity_service::{Deleted, EntityService, OperationKind, Saved};
use crate::services::transport::Transport;
use crate::state::{SliceEvent, SliceStore};

/// Why a form submit did not produce an entity
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Blocked before dispatch; the store was not touched
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The operation ran and was rejected; the reason is in the slice too
    #[error("{0}")]
    Rejected(String),
}

pub struct EntityViewModel<E, T> {
    service: EntityService<E, T>,
    store: SliceStore<E>,
}

impl<E, T> Clone for EntityViewModel<E, T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            store: self.store.clone(),
        }
    }
}

impl<E: Entity, T: Transport> EntityViewModel<E, T> {
    pub fn new(service: EntityService<E, T>, store: SliceStore<E>) -> Self {
        Self { service, store }
    }

    pub fn store(&self) -> &SliceStore<E> {
        &self.store
    }

    pub fn service(&self) -> &EntityService<E, T> {
        &self.service
    }

    pub async fn list_all(&self) -> Result<Vec<E>, String> {
        self.store
            .run(OperationKind::ListAll, self.service.list_all(), |items: &Vec<E>| {
                SliceEvent::Listed(items.clone())
            })
            .await
    }

    pub async fn get_one(&self, id: &str) -> Result<E, String> {
        self.store
            .run(OperationKind::GetOne, self.service.get_one(id), |entity: &E| {
                SliceEvent::Fetched(entity.clone())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Deleted, String> {
        self.store
            .run(OperationKind::Delete, self.service.delete(id), |deleted: &Deleted| {
                SliceEvent::Deleted {
                    id: deleted.id.clone(),
                    message: deleted.message.clone(),
                }
            })
            .await
    }

    pub async fn toggle_status(&self, id: &str, status: Option<bool>) -> Result<E, String> {
        self.store
            .run(
                OperationKind::ToggleStatus,
                self.service.toggle_status(id, status),
                |entity: &E| SliceEvent::StatusToggled(entity.clone()),
            )
            .await
    }

    pub fn clear_messages(&self) {
        self.store.clear_messages();
    }

    pub(crate) async fn run_create<F>(&self, operation: F) -> Result<E, SubmitError>
    where
        F: std::future::Future<Output = Result<Saved<E>, String>>,
    {
        self.store
            .run(OperationKind::Create, operation, |saved: &Saved<E>| SliceEvent::Created {
                entity: saved.entity.clone(),
                message: saved.message.clone(),
            })
            .await
            .map(|saved| saved.entity)
            .map_err(SubmitError::Rejected)
    }

    pub(crate) async fn run_update<F>(&self, operation: F) -> Result<E, SubmitError>
    where
        F: std::future::Future<Output = Result<Saved<E>, String>>,
    {
        self.store
            .run(OperationKind::Update, operation, |saved: &Saved<E>| SliceEvent::Updated {
                entity: saved.entity.clone(),
                message: saved.message.clone(),
            })
            .await
            .map(|saved| saved.entity)
            .map_err(SubmitError::Rejected)
    }
}
