//! LRU Tracker Module
//!
//! Keeps cached video ids in recency order so the cache can stay bounded.

use std::collections::VecDeque;

use crate::models::VideoId;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Front = most recently used, back = least recently used.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<VideoId>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks an id as recently used (moves it to the front).
    pub fn touch(&mut self, id: &VideoId) {
        self.remove(id);
        self.order.push_front(id.clone());
    }

    // == Remove ==
    pub fn remove(&mut self, id: &VideoId) {
        self.order.retain(|tracked| tracked != id);
    }

    // == Evict Oldest ==
    /// Returns and forgets the least recently used id, None if empty.
    pub fn evict_oldest(&mut self) -> Option<VideoId> {
        self.order.pop_back()
    }

    /// Returns the least recently used id without removing it.
    #[cfg(test)]
    pub fn peek_oldest(&self) -> Option<&VideoId> {
        self.order.back()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, id: &VideoId) -> bool {
        self.order.iter().any(|tracked| tracked == id)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn vid(seed: char) -> VideoId {
        VideoId::parse(&seed.to_string().repeat(11)).unwrap()
    }

    #[test]
    fn test_lru_new() {
        let lru = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert!(lru.peek_oldest().is_none());
    }

    #[test]
    fn test_lru_first_touched_is_oldest() {
        let mut lru = LruTracker::new();

        lru.touch(&vid('a'));
        lru.touch(&vid('b'));
        lru.touch(&vid('c'));

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&vid('a')));
    }

    #[test]
    fn test_lru_retouch_moves_to_front() {
        let mut lru = LruTracker::new();

        lru.touch(&vid('a'));
        lru.touch(&vid('b'));
        lru.touch(&vid('c'));
        lru.touch(&vid('a'));

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.evict_oldest(), Some(vid('b')));
        assert_eq!(lru.evict_oldest(), Some(vid('c')));
        assert_eq!(lru.evict_oldest(), Some(vid('a')));
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_lru_touch_is_idempotent_on_length() {
        let mut lru = LruTracker::new();

        lru.touch(&vid('x'));
        lru.touch(&vid('x'));
        lru.touch(&vid('x'));

        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruTracker::new();

        lru.touch(&vid('a'));
        lru.touch(&vid('b'));
        lru.remove(&vid('a'));
        // Unknown ids are ignored
        lru.remove(&vid('z'));

        assert_eq!(lru.len(), 1);
        assert!(!lru.contains(&vid('a')));
        assert!(lru.contains(&vid('b')));
    }
}
