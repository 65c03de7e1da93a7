use std::sync::atomic::{AtomicU64, Ordering};

/// Issues identifiers for generated records. Shared across concurrent
/// requests, so every implementation must be safe to call from many threads.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> u64;
}

/// Monotonic sequence starting at a given value.
#[derive(Debug)]
pub struct AtomicIdSource {
    next: AtomicU64,
}

impl AtomicIdSource {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for AtomicIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for AtomicIdSource {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn issues_sequential_ids() {
        let ids = AtomicIdSource::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(AtomicIdSource::starting_at(40).next_id(), 40);
    }

    #[test]
    fn concurrent_callers_never_collide() {
        let ids = Arc::new(AtomicIdSource::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..500).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("worker thread should not panic") {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 4000);
    }
}
