use std::sync::atomic::{AtomicU64, Ordering};

/// Counts operations performed on behalf of a caller.
///
/// The tracker is an ordinary value: create one, hand a reference to the routines whose
/// work should be counted, and read or reset it afterwards. The count is atomic so a
/// shared reference can be used from several threads at once.
///
/// ```
/// use gf2::{BitMatrix, OperationTracker, rank_tracked};
///
/// let tracker = OperationTracker::new();
/// let matrix: BitMatrix = "11|11".parse().unwrap();
/// assert_eq!(rank_tracked(&matrix, &tracker), 1);
/// assert_eq!(tracker.get(), 1);
/// tracker.reset();
/// assert_eq!(tracker.get(), 0);
/// ```
#[derive(Debug, Default)]
pub struct OperationTracker {
    count: AtomicU64,
}

impl OperationTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self, by: u64) {
        self.count.fetch_add(by, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
