// ============================================================================
// SLICE STORE - Shared slice container with subscribers
// ============================================================================
// Rc<RefCell> container injected into view models. Writes go through
// `dispatch` only; subscribers run after each transition.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::models::Entity;
use crate::services::entity_service::OperationKind;
use crate::state::slice::{SliceEvent, SliceState};

type Callback = Rc<dyn Fn()>;

pub struct SliceStore<E> {
    state: Rc<RefCell<SliceState<E>>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

// Clones share state and subscribers
impl<E> Clone for SliceStore<E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<E: Entity> Default for SliceStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> SliceStore<E> {
    pub fn new() -> Self {
        Self::with_state(SliceState::new())
    }

    pub fn with_state(state: SliceState<E>) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Apply one lifecycle transition and notify subscribers
    pub fn dispatch(&self, event: SliceEvent<E>) {
        if let Some((op, phase)) = event.lifecycle() {
            log::debug!("🔁 {} {:?} {:?}", E::LABEL, op, phase);
        }
        self.state.borrow_mut().apply(event);
        self.notify();
    }

    pub fn snapshot(&self) -> SliceState<E> {
        self.state.borrow().clone()
    }

    /// Read the current state without cloning it
    pub fn with<R>(&self, reader: impl FnOnce(&SliceState<E>) -> R) -> R {
        reader(&self.state.borrow())
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn clear_messages(&self) {
        self.dispatch(SliceEvent::ClearMessages);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Runs `operation` through the slice lifecycle: pending now, then the
    /// event built by `fulfilled` or a rejection carrying the reason.
    pub async fn run<T, F>(
        &self,
        op: OperationKind,
        operation: F,
        fulfilled: impl FnOnce(&T) -> SliceEvent<E>,
    ) -> Result<T, String>
    where
        F: Future<Output = Result<T, String>>,
    {
        self.dispatch(SliceEvent::Pending(op));
        match operation.await {
            Ok(value) => {
                self.dispatch(fulfilled(&value));
                Ok(value)
            }
            Err(reason) => {
                self.dispatch(SliceEvent::Rejected { op, reason: reason.clone() });
                Err(reason)
            }
        }
    }

    fn notify(&self) {
        // Snapshot the list so a callback may subscribe or read state
        let callbacks: Vec<Callback> = self.subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}
