// ============================================================================
// APP - Wires transport, stores and view models; mounts the admin view
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{listen_click, mount_point};
use crate::models::{Collection, Gallery, Photo};
use crate::services::{ApiClient, CollectionService, GalleryService, OperationKind, PhotoService};
use crate::state::{task, SliceStore, TaskHandle};
use crate::utils::APP_ROOT_ID;
use crate::viewmodels::{CollectionViewModel, GalleryViewModel, PhotoViewModel};
use crate::views::{handle_list_click, render_gallery_list};

pub struct App {
    root: Element,
    pub galleries: GalleryViewModel<ApiClient>,
    pub collections: CollectionViewModel<ApiClient>,
    pub photos: PhotoViewModel<ApiClient>,
    // Delegated click handler of the root, registered once
    click_listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = mount_point(APP_ROOT_ID)?;

        // One client shared by every service
        let client = Rc::new(ApiClient::new());

        Ok(Self {
            root,
            galleries: GalleryViewModel::new(GalleryService::new(client.clone()), SliceStore::<Gallery>::new()),
            collections: CollectionViewModel::new(
                CollectionService::new(client.clone()),
                SliceStore::<Collection>::new(),
            ),
            photos: PhotoViewModel::new(PhotoService::new(client), SliceStore::<Photo>::new()),
            click_listener: None,
        })
    }

    /// Subscribes the gallery table to its slice and loads the first page.
    /// Listener and subscription are installed on the first call only; row
    /// re-renders never register listeners.
    pub fn render(&mut self) -> Result<TaskHandle, JsValue> {
        if self.click_listener.is_none() {
            let vm = self.galleries.clone();
            self.click_listener = Some(listen_click(&self.root, move |event| {
                handle_list_click(&event, &vm)
            })?);

            let (root, vm) = (self.root.clone(), self.galleries.clone());
            self.galleries.store().subscribe(move || {
                if let Err(e) = render_gallery_list(&root, &vm, "") {
                    log::error!("❌ Gallery list render failed: {:?}", e);
                }
            });
        }
        render_gallery_list(&self.root, &self.galleries, "")?;

        let galleries = self.galleries.clone();
        let collections = self.collections.clone();
        Ok(task::spawn(OperationKind::ListAll, async move {
            // Collections feed the create/edit selects; the error also lands in their slice
            if let Err(e) = collections.list_all().await {
                log::warn!("⚠️ Collections could not be loaded: {}", e);
            }
            galleries.list_all().await
        }))
    }
}
