// ============================================================================
// ENTITY SERVICE - CRUD + status operations shared by every resource
// ============================================================================
// Every operation resolves to a normalized payload or rejects with a plain
// string (server `message`, else a fixed fallback). Transport errors never
// escape this module.
// ============================================================================

use std::marker::PhantomData;
use std::rc::Rc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::models::envelope::split_envelope;
use crate::models::{display_label, Entity, ResponseEnvelope};
use crate::services::transport::{Method, MultipartForm, Payload, Transport};

/// Entity operations, also the lifecycle keys of a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    ListAll,
    GetOne,
    Update,
    Delete,
    ToggleStatus,
}

impl OperationKind {
    /// Rejection reason used when the server sends no `message`
    pub fn failure_fallback(&self, label: &str) -> String {
        match self {
            OperationKind::Create => format!("Internal error in {} create", label),
            OperationKind::ListAll => format!("Internal error in fetch {}", label),
            OperationKind::GetOne => format!("Internal error in fetch single {}", label),
            OperationKind::Update => format!("Failed to update {}", label),
            OperationKind::Delete => format!("Failed to delete {}", label),
            OperationKind::ToggleStatus => format!("Internal error in change status {}", label),
        }
    }

    /// Success banner used when the server sends no `message`
    pub fn success_fallback(&self, display_label: &str) -> Option<String> {
        match self {
            OperationKind::Create => Some(format!("{} created successfully", display_label)),
            OperationKind::Update => Some(format!("{} updated successfully", display_label)),
            OperationKind::Delete => Some(format!("{} deleted successfully", display_label)),
            _ => None,
        }
    }

    /// Whether the pending phase wipes the previous error/success banner
    pub fn clears_messages_on_start(&self) -> bool {
        matches!(
            self,
            OperationKind::Create | OperationKind::Update | OperationKind::GetOne
        )
    }
}

/// Result of create/update: the stored entity plus the server message
#[derive(Debug, Clone, PartialEq)]
pub struct Saved<E> {
    pub entity: E,
    pub message: Option<String>,
}

/// Result of delete
#[derive(Debug, Clone, PartialEq)]
pub struct Deleted {
    pub id: String,
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct DeletedDoc {
    #[serde(rename = "_id")]
    id: String,
}

/// Operations for one resource, over any transport
pub struct EntityService<E, T> {
    transport: Rc<T>,
    _entity: PhantomData<E>,
}

impl<E, T> Clone for EntityService<E, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, T: Transport> EntityService<E, T> {
    pub fn new(transport: Rc<T>) -> Self {
        Self {
            transport,
            _entity: PhantomData,
        }
    }

    /// `POST /{resource}/create` (multipart)
    pub async fn create_with(&self, form: MultipartForm) -> Result<Saved<E>, String> {
        let path = format!("{}/create", E::RESOURCE);
        let (data, message) = self
            .call(OperationKind::Create, Method::Post, &path, Payload::Multipart(form))
            .await?;
        let entity = self.decode::<E>(OperationKind::Create, data)?;
        log::info!("✅ {} created: {}", E::LABEL, entity.id());
        Ok(Saved { entity, message })
    }

    /// `GET /{resource}`
    pub async fn list_all(&self) -> Result<Vec<E>, String> {
        let (data, _) = self
            .call(OperationKind::ListAll, Method::Get, E::RESOURCE, Payload::Empty)
            .await?;
        let documents = match data {
            Value::Null => Vec::new(),
            Value::Array(documents) => documents,
            other => {
                log::error!("❌ ListAll {}: expected an array, got {}", E::LABEL, other);
                return Err(OperationKind::ListAll.failure_fallback(E::LABEL));
            }
        };

        // One malformed document only hides its own row
        let total = documents.len();
        let items: Vec<E> = documents
            .into_iter()
            .enumerate()
            .filter_map(|(index, document)| match serde_json::from_value(document) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("⚠️ Skipping {} #{}: {}", E::LABEL, index, e);
                    None
                }
            })
            .collect();
        log::info!("📋 {}/{} {} item(s) fetched", items.len(), total, E::LABEL);
        Ok(items)
    }

    /// `GET /{resource}/:id`
    pub async fn get_one(&self, id: &str) -> Result<E, String> {
        let path = format!("{}/{}", E::RESOURCE, id);
        let (data, _) = self
            .call(OperationKind::GetOne, Method::Get, &path, Payload::Empty)
            .await?;
        if data.is_null() {
            return Err(OperationKind::GetOne.failure_fallback(E::LABEL));
        }
        self.decode(OperationKind::GetOne, data)
    }

    /// `POST /{resource}/update/:id` (multipart)
    pub async fn update_with(&self, id: &str, form: MultipartForm) -> Result<Saved<E>, String> {
        let path = format!("{}/update/{}", E::RESOURCE, id);
        let (data, message) = self
            .call(OperationKind::Update, Method::Post, &path, Payload::Multipart(form))
            .await?;
        let entity = self.decode::<E>(OperationKind::Update, data)?;
        log::info!("✅ {} updated: {}", E::LABEL, entity.id());
        Ok(Saved { entity, message })
    }

    /// `DELETE /{resource}/:id`
    pub async fn delete(&self, id: &str) -> Result<Deleted, String> {
        let path = format!("{}/{}", E::RESOURCE, id);
        log::info!("🗑️ Deleting {} {}", E::LABEL, id);
        let body = self
            .transport
            .request(Method::Delete, &path, Payload::Empty)
            .await
            .map_err(|e| {
                log::error!("❌ delete {} {} failed: {}", E::LABEL, id, e);
                e.into_reason(&OperationKind::Delete.failure_fallback(E::LABEL))
            })?;

        // `data` may be the removed document, a bare id, or absent
        let envelope = serde_json::from_value::<ResponseEnvelope<DeletedDoc>>(body.clone()).ok();
        let message = envelope
            .as_ref()
            .and_then(|env| env.message.clone())
            .or_else(|| body.get("message").and_then(Value::as_str).map(str::to_string));
        let deleted_id = envelope
            .and_then(|env| env.data)
            .map(|doc| doc.id)
            .unwrap_or_else(|| id.to_string());

        Ok(Deleted { id: deleted_id, message })
    }

    /// `PATCH /{resource}/status/:id`, optionally forcing the new status
    pub async fn toggle_status(&self, id: &str, status: Option<bool>) -> Result<E, String> {
        let path = format!("{}/status/{}", E::RESOURCE, id);
        let payload = match status {
            Some(status) => Payload::Json(json!({ "status": status })),
            None => Payload::Empty,
        };
        let (data, _) = self
            .call(OperationKind::ToggleStatus, Method::Patch, &path, payload)
            .await?;
        self.decode(OperationKind::ToggleStatus, data)
    }

    async fn call(
        &self,
        op: OperationKind,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<(Value, Option<String>), String> {
        log::debug!("➡️ {:?} {} {}", op, method.as_str(), path);
        match self.transport.request(method, path, payload).await {
            Ok(body) => Ok(split_envelope(body)),
            Err(e) => {
                log::error!("❌ {:?} {} failed: {}", op, E::LABEL, e);
                Err(e.into_reason(&op.failure_fallback(E::LABEL)))
            }
        }
    }

    fn decode<D: DeserializeOwned>(&self, op: OperationKind, data: Value) -> Result<D, String> {
        serde_json::from_value(data).map_err(|e| {
            log::error!("❌ {:?} {}: unexpected payload: {}", op, E::LABEL, e);
            op.failure_fallback(E::LABEL)
        })
    }
}

/// "Gallery created successfully" style banner for `op`
pub fn success_message<E: Entity>(op: OperationKind, server_message: Option<String>) -> Option<String> {
    server_message
        .filter(|message| !message.is_empty())
        .or_else(|| op.success_fallback(&display_label::<E>()))
}
