use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};

/// A thread-safe, reference-counted handle to shared engine state.
///
/// `MtResource` wraps a value in an `Arc<RwLock<T>>` so several owners can
/// hold the same state: the engine shares its `World` this way, letting the
/// host query voxels while the streamer is the only writer.
///
/// # Examples
///
/// ```
/// use voxel_terrain::core::MtResource;
///
/// let counter = MtResource::new(0);
/// let handle = counter.clone();
///
/// *handle.get_mut() += 1;
/// assert_eq!(*counter.get(), 1);
/// ```
///
/// # Locking
/// - Any number of `get()` guards may be held at once
/// - `get_mut()` is exclusive; hold it only for short mutations
/// - A lock poisoned by a panicking writer is recovered, not propagated
pub struct MtResource<T: Send + Sync> {
    resource: Arc<RwLock<T>>,
}

impl<T: Send + Sync> MtResource<T> {
    /// Creates a new `MtResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Arc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read-only guard that allows reading the contained value.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a mutable guard that allows modifying the contained value.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a read guard if no writer currently holds the lock.
    pub fn try_get(&self) -> Option<RwLockReadGuard<'_, T>> {
        match self.resource.try_read() {
            Ok(guard) => Some(guard),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    /// Number of handles sharing this resource.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.resource)
    }
}

impl<T: Send + Sync> Clone for MtResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}
