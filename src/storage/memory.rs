use super::Store;
use crate::errors::{AppError, AppResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    values: HashMap<String, String>,
    audit: Vec<(String, String, String)>,
    fail_writes: bool,
    fail_reads: bool,
}

/// In-memory store. Clones share the same contents, so a clone kept aside
/// can inspect what a repository wrote or hand the data to a new repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value without going through `save`.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `save` fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Make every subsequent `load` fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    /// Operations recorded through `record`, oldest first.
    pub fn audit_operations(&self) -> Vec<String> {
        self.inner
            .borrow()
            .audit
            .iter()
            .map(|(op, _, _)| op.clone())
            .collect()
    }
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(AppError::StorageRead {
                key: key.to_string(),
                reason: "simulated read failure".into(),
            });
        }
        Ok(inner.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(AppError::StorageWrite {
                key: key.to_string(),
                reason: "simulated write failure".into(),
            });
        }
        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn record(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.inner.borrow_mut().audit.push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
        Ok(())
    }
}
