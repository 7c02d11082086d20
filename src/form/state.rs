//! Shared state of the form.
//!
//! The toll table is loaded once at startup and shared read-only by every
//! calculation the form performs.

use std::sync::Arc;

use crate::config::{TollTable, TollTableLoader};

/// State available to every form handler.
///
/// Cloning is cheap: the toll table is shared behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct FormState {
    table: Arc<TollTable>,
}

impl FormState {
    /// Creates the form state from a loaded toll table.
    pub fn new(loader: TollTableLoader) -> Self {
        Self {
            table: Arc::new(loader.into_table()),
        }
    }

    /// Returns the toll table.
    pub fn table(&self) -> &TollTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_state_is_clone_send_sync() {
        fn assert_shareable<T: Clone + Send + Sync>() {}
        assert_shareable::<FormState>();
    }

    #[test]
    fn test_clones_share_the_table() {
        let state = FormState::new(TollTableLoader::bundled().unwrap());
        let clone = state.clone();
        assert!(std::ptr::eq(state.table(), clone.table()));
    }
}
