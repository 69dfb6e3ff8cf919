#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use gallery_console::models::{Collection, Gallery, Photo, UploadFile};
use gallery_console::services::{
    ApiError, EntityService, Method, MultipartForm, Payload, PreviewHandle, PreviewProvider,
    Transport,
};
use gallery_console::state::SliceStore;
use gallery_console::viewmodels::EntityViewModel;

/// One request as the backend received it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub payload: Payload,
}

impl Recorded {
    pub fn form(&self) -> &MultipartForm {
        match &self.payload {
            Payload::Multipart(form) => form,
            other => panic!("expected multipart body, got {:?}", other),
        }
    }
}

/// In-memory stand-in for the admin backend. Documents are kept as JSON in
/// server order; every response is wrapped in `{ data, message }`.
#[derive(Default)]
pub struct MockBackend {
    galleries: RefCell<Vec<Value>>,
    collections: RefCell<Vec<Value>>,
    photos: RefCell<Vec<Value>>,
    requests: RefCell<Vec<Recorded>>,
    scripted: RefCell<VecDeque<Result<Value, ApiError>>>,
    next_id: Cell<u32>,
}

impl MockBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Next request gets `response` instead of the routed one
    pub fn script(&self, response: Result<Value, ApiError>) {
        self.scripted.borrow_mut().push_back(response);
    }

    pub fn fail_next(&self, status: u16, message: Option<&str>) {
        self.script(Err(ApiError::Http {
            status,
            message: message.map(str::to_string),
        }));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests.borrow().last().cloned().expect("no request recorded")
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn gallery_count(&self) -> usize {
        self.galleries.borrow().len()
    }

    pub fn seed_collection(&self, name: &str) -> String {
        let id = self.new_id("c");
        self.collections.borrow_mut().push(json!({
            "_id": id,
            "collectionName": name,
            "thumbnail": { "url": format!("https://cdn.test/{}.jpg", name.to_lowercase()) },
        }));
        id
    }

    pub fn seed_gallery(&self, name: &str, collection_id: &str, status: bool) -> String {
        let id = self.new_id("g");
        self.galleries.borrow_mut().push(json!({
            "_id": id,
            "galleryName": name,
            "collection": collection_id,
            "images": [{ "_id": format!("{}-img", id), "url": format!("https://cdn.test/{}.jpg", id) }],
            "status": status,
        }));
        id
    }

    fn new_id(&self, prefix: &str) -> String {
        self.next_id.set(self.next_id.get() + 1);
        format!("{}{}", prefix, self.next_id.get())
    }

    fn table(&self, resource: &str) -> Option<&RefCell<Vec<Value>>> {
        match resource {
            "gallery" => Some(&self.galleries),
            "collection" => Some(&self.collections),
            "photos" => Some(&self.photos),
            _ => None,
        }
    }

    fn label(resource: &str) -> &'static str {
        match resource {
            "gallery" => "Gallery",
            "collection" => "Collection",
            _ => "Photos",
        }
    }

    fn not_found(resource: &str) -> ApiError {
        ApiError::Http {
            status: 404,
            message: Some(format!("{} not found", Self::label(resource))),
        }
    }

    fn uploaded(&self, form: &MultipartForm, field: &str) -> Vec<Value> {
        form.files_named(field)
            .map(|file| json!({ "_id": self.new_id("img"), "url": format!("https://cdn.test/{}", file.name) }))
            .collect()
    }

    /// Populates references the way the backend does on reads
    fn present(&self, resource: &str, doc: &Value) -> Value {
        let mut doc = doc.clone();
        match resource {
            "gallery" => {
                let collection_id = doc["collection"].as_str().map(str::to_string);
                if let Some(collection) = collection_id.and_then(|id| self.find("collection", &id)) {
                    doc["collection"] = json!({
                        "_id": collection["_id"],
                        "collectionName": collection["collectionName"],
                    });
                }
            }
            "collection" => {
                let id = doc["_id"].clone();
                let count = self
                    .galleries
                    .borrow()
                    .iter()
                    .filter(|gallery| gallery["collection"] == id)
                    .count();
                doc["galleryCount"] = json!(count);
            }
            _ => {
                let gallery_id = doc["gallery"].as_str().map(str::to_string);
                if let Some(gallery) = gallery_id.and_then(|id| self.find("gallery", &id)) {
                    doc["gallery"] = json!({ "_id": gallery["_id"], "galleryName": gallery["galleryName"] });
                }
            }
        }
        doc
    }

    fn find(&self, resource: &str, id: &str) -> Option<Value> {
        self.table(resource)?
            .borrow()
            .iter()
            .find(|doc| doc["_id"] == id)
            .cloned()
    }

    fn create(&self, resource: &str, form: &MultipartForm) -> Result<Value, ApiError> {
        let doc = match resource {
            "gallery" => json!({
                "_id": self.new_id("g"),
                "galleryName": form.text_value("galleryName").unwrap_or_default(),
                "collection": form.text_value("collection").unwrap_or_default(),
                "images": self.uploaded(form, "images"),
                "status": true,
            }),
            "collection" => json!({
                "_id": self.new_id("c"),
                "collectionName": form.text_value("collectionName").unwrap_or_default(),
                "thumbnail": self.uploaded(form, "thumbnail").into_iter().next(),
            }),
            _ => json!({
                "_id": self.new_id("p"),
                "collection": form.text_value("collection").unwrap_or_default(),
                "gallery": form.text_value("gallery").unwrap_or_default(),
                "images": self.uploaded(form, "images"),
            }),
        };
        self.table(resource).expect("known resource").borrow_mut().push(doc.clone());
        Ok(json!({
            "data": self.present(resource, &doc),
            "message": format!("{} created successfully", Self::label(resource)),
        }))
    }

    fn update(&self, resource: &str, id: &str, form: &MultipartForm) -> Result<Value, ApiError> {
        let mut table = self.table(resource).expect("known resource").borrow_mut();
        let doc = table
            .iter_mut()
            .find(|doc| doc["_id"] == id)
            .ok_or_else(|| Self::not_found(resource))?;

        for field in ["galleryName", "collectionName", "collection", "gallery"] {
            if let Some(value) = form.text_value(field) {
                doc[field] = json!(value);
            }
        }
        let new_images = self.uploaded(form, "images");
        if !new_images.is_empty() {
            if let Some(images) = doc["images"].as_array_mut() {
                images.extend(new_images);
            }
        }
        if let Some(thumbnail) = self.uploaded(form, "thumbnail").into_iter().next() {
            doc["thumbnail"] = thumbnail;
        }

        let doc = doc.clone();
        drop(table);
        Ok(json!({
            "data": self.present(resource, &doc),
            "message": format!("{} updated successfully", Self::label(resource)),
        }))
    }

    fn toggle(&self, resource: &str, id: &str, payload: &Payload) -> Result<Value, ApiError> {
        let mut table = self.table(resource).expect("known resource").borrow_mut();
        let doc = table
            .iter_mut()
            .find(|doc| doc["_id"] == id)
            .ok_or_else(|| Self::not_found(resource))?;

        let next = match payload {
            Payload::Json(body) => body["status"].as_bool().unwrap_or(false),
            _ => !doc["status"].as_bool().unwrap_or(false),
        };
        doc["status"] = json!(next);

        let doc = doc.clone();
        drop(table);
        Ok(json!({ "data": self.present(resource, &doc) }))
    }

    fn delete(&self, resource: &str, id: &str) -> Result<Value, ApiError> {
        let mut table = self.table(resource).expect("known resource").borrow_mut();
        let index = table
            .iter()
            .position(|doc| doc["_id"] == id)
            .ok_or_else(|| Self::not_found(resource))?;
        let doc = table.remove(index);
        Ok(json!({
            "data": doc,
            "message": format!("{} deleted successfully", Self::label(resource)),
        }))
    }

    fn route(&self, method: Method, path: &str, payload: &Payload) -> Result<Value, ApiError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let not_routed = || ApiError::Http {
            status: 404,
            message: Some(format!("Cannot {} /{}", method.as_str(), path)),
        };
        let resource = *segments.first().ok_or_else(not_routed)?;
        if self.table(resource).is_none() {
            return Err(not_routed());
        }

        match (method, &segments[1..]) {
            (Method::Get, []) => {
                let docs: Vec<Value> = self
                    .table(resource)
                    .expect("known resource")
                    .borrow()
                    .iter()
                    .map(|doc| self.present(resource, doc))
                    .collect();
                Ok(json!({ "data": docs }))
            }
            (Method::Get, [id]) => self
                .find(resource, id)
                .map(|doc| json!({ "data": self.present(resource, &doc) }))
                .ok_or_else(|| Self::not_found(resource)),
            (Method::Post, ["create"]) => match payload {
                Payload::Multipart(form) => self.create(resource, form),
                _ => Err(ApiError::Http { status: 400, message: Some("Expected form data".into()) }),
            },
            (Method::Post, ["update", id]) => match payload {
                Payload::Multipart(form) => self.update(resource, id, form),
                _ => Err(ApiError::Http { status: 400, message: Some("Expected form data".into()) }),
            },
            (Method::Patch, ["status", id]) => self.toggle(resource, id, payload),
            (Method::Delete, [id]) => self.delete(resource, id),
            _ => Err(not_routed()),
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockBackend {
    async fn request(&self, method: Method, path: &str, payload: Payload) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(Recorded {
            method,
            path: path.to_string(),
            payload: payload.clone(),
        });
        // Let other in-flight operations reach their pending phase first
        tokio::task::yield_now().await;

        if let Some(scripted) = self.scripted.borrow_mut().pop_front() {
            return scripted;
        }
        self.route(method, path, &payload)
    }
}

pub fn gallery_vm(backend: &Rc<MockBackend>) -> EntityViewModel<Gallery, MockBackend> {
    EntityViewModel::new(EntityService::new(backend.clone()), SliceStore::new())
}

pub fn collection_vm(backend: &Rc<MockBackend>) -> EntityViewModel<Collection, MockBackend> {
    EntityViewModel::new(EntityService::new(backend.clone()), SliceStore::new())
}

pub fn photo_vm(backend: &Rc<MockBackend>) -> EntityViewModel<Photo, MockBackend> {
    EntityViewModel::new(EntityService::new(backend.clone()), SliceStore::new())
}

pub fn jpeg(name: &str) -> UploadFile {
    UploadFile::detached(name, "image/jpeg", 1024)
}

/// Preview provider that hands out `blob:` style names and remembers releases
#[derive(Clone, Default)]
pub struct FakePreviews {
    created: Rc<Cell<usize>>,
    released: Rc<RefCell<Vec<String>>>,
}

impl FakePreviews {
    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn released(&self) -> Vec<String> {
        self.released.borrow().clone()
    }

    pub fn outstanding(&self) -> usize {
        self.created.get() - self.released.borrow().len()
    }
}

impl PreviewProvider for FakePreviews {
    fn create_preview(&self, file: &UploadFile) -> Result<PreviewHandle, String> {
        self.created.set(self.created.get() + 1);
        Ok(PreviewHandle::new(format!("blob:test/{}", file.name)))
    }

    fn release_preview(&self, handle: &PreviewHandle) {
        self.released.borrow_mut().push(handle.as_str().to_string());
    }
}
