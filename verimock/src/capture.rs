use std::sync::Arc;

use parking_lot::Mutex;

/// Something a capture matcher can write an argument into.
pub trait CaptureTarget<T>: Send + Sync {
    fn store(&self, value: T);
}

/// Holds the most recently captured argument.
///
/// Clones share the same cell, so the test keeps one clone and hands the other
/// to [`capture`](crate::capture).
pub struct CaptureSlot<T>(Arc<Mutex<Option<T>>>);

impl<T> CaptureSlot<T> {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(None)))
    }

    pub fn is_captured(&self) -> bool {
        self.0.lock().is_some()
    }

    pub fn clear(&self) {
        *self.0.lock() = None;
    }
}

impl<T: Clone> CaptureSlot<T> {
    /// The last captured value, or `None` when nothing matched yet.
    pub fn captured(&self) -> Option<T> {
        self.0.lock().clone()
    }
}

impl<T> Default for CaptureSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CaptureSlot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Send> CaptureTarget<T> for CaptureSlot<T> {
    fn store(&self, value: T) {
        *self.0.lock() = Some(value);
    }
}

/// Accumulates every captured argument in call order.
///
/// The order is the log's order for calls made from one thread. With
/// concurrent callers, compare against [`MockHandle::log`](crate::MockHandle::log)
/// instead of relying on positions.
pub struct CaptureSequence<T>(Arc<Mutex<Vec<T>>>);

impl<T> CaptureSequence<T> {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl<T: Clone> CaptureSequence<T> {
    pub fn values(&self) -> Vec<T> {
        self.0.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.0.lock().last().cloned()
    }
}

impl<T: PartialEq> CaptureSequence<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.0.lock().contains(value)
    }
}

impl<T> Default for CaptureSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CaptureSequence<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Send> CaptureTarget<T> for CaptureSequence<T> {
    fn store(&self, value: T) {
        self.0.lock().push(value);
    }
}
