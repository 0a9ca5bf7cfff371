//! Contact domain state

use std::sync::Arc;

use folio_delivery::MessageSink;

/// Application state for the Contact domain
#[derive(Clone)]
pub struct ContactState {
    pub sink: Arc<dyn MessageSink>,
}
