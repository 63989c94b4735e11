use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag used to abort an in-flight async write.
///
/// Clones share the same flag. Writers poll it only between objects, so a
/// cancelled write never stops in the middle of an object.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
