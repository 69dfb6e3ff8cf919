// ============================================================================
// TASK - Inspectable handle for an operation running in the background
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::services::entity_service::OperationKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Fulfilled,
    Rejected(String),
}

/// Observes the settlement of one dispatched operation. No cancellation:
/// the request runs to completion.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    op: OperationKind,
    status: Rc<RefCell<TaskStatus>>,
}

impl TaskHandle {
    pub fn new(op: OperationKind) -> Self {
        Self {
            op,
            status: Rc::new(RefCell::new(TaskStatus::Pending)),
        }
    }

    pub fn op(&self) -> OperationKind {
        self.op
    }

    pub fn status(&self) -> TaskStatus {
        self.status.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        !matches!(*self.status.borrow(), TaskStatus::Pending)
    }

    fn settle<T>(&self, result: &Result<T, String>) {
        *self.status.borrow_mut() = match result {
            Ok(_) => TaskStatus::Fulfilled,
            Err(reason) => TaskStatus::Rejected(reason.clone()),
        };
    }
}

/// Pairs a handle with a driver future that runs `operation` and records
/// its outcome on the handle.
pub fn tracked<T, F>(op: OperationKind, operation: F) -> (TaskHandle, impl Future<Output = ()>)
where
    F: Future<Output = Result<T, String>>,
{
    let handle = TaskHandle::new(op);
    let observer = handle.clone();
    let driver = async move {
        let result = operation.await;
        observer.settle(&result);
    };
    (handle, driver)
}

/// Runs `operation` on the browser's microtask queue
pub fn spawn<T, F>(op: OperationKind, operation: F) -> TaskHandle
where
    T: 'static,
    F: Future<Output = Result<T, String>> + 'static,
{
    let (handle, driver) = tracked(op, operation);
    wasm_bindgen_futures::spawn_local(driver);
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handle_reports_fulfilled_after_driver_completes() {
        let (handle, driver) = tracked(OperationKind::ListAll, async { Ok::<_, String>(3) });
        assert_eq!(handle.status(), TaskStatus::Pending);
        assert!(!handle.is_settled());

        driver.await;
        assert_eq!(handle.status(), TaskStatus::Fulfilled);
        assert_eq!(handle.op(), OperationKind::ListAll);
    }

    #[tokio::test]
    async fn handle_keeps_rejection_reason() {
        let (handle, driver) = tracked(OperationKind::Delete, async {
            Err::<(), _>("Failed to delete gallery".to_string())
        });
        driver.await;
        assert!(handle.is_settled());
        assert_eq!(handle.status(), TaskStatus::Rejected("Failed to delete gallery".into()));
    }
}
