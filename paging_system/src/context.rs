//! Request-scoped page context
//!
//! Each logical request owns one `PageContext` and passes it explicitly to
//! the interceptor. The context holds at most one pending page; setting a new
//! page replaces an uncollected one.

use crate::page::Page;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct PageContext {
    slot: Mutex<Option<Page>>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a page already pending
    pub fn with_page(page: Page) -> Self {
        Self {
            slot: Mutex::new(Some(page)),
        }
    }

    /// Store the page for the next query, replacing any page not yet consumed
    pub fn set(&self, page: Page) {
        *self.lock() = Some(page);
    }

    /// Remove and return the pending page
    pub fn take(&self) -> Option<Page> {
        self.lock().take()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Page>> {
        // Option<Page> has no invariant a panicking holder could break
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
