use std::collections::{HashSet, VecDeque};

/// FIFO of slugs waiting to be fetched.
///
/// A slug is never queued twice, and a slug that has already been popped is
/// never queued again, so refills cannot make the harvester retest products.
#[derive(Debug, Default)]
pub struct CandidateQueue {
    pending: VecDeque<String>,
    queued: HashSet<String>,
    attempted: HashSet<String>,
}

impl CandidateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append new slugs, skipping ones already queued or attempted. Returns how many were added.
    pub fn refill<I>(&mut self, slugs: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = 0;
        for slug in slugs {
            if self.attempted.contains(&slug) || !self.queued.insert(slug.clone()) {
                continue;
            }
            self.pending.push_back(slug);
            added += 1;
        }
        added
    }

    pub fn pop(&mut self) -> Option<String> {
        let slug = self.pending.pop_front()?;
        self.queued.remove(&slug);
        self.attempted.insert(slug.clone());
        Some(slug)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn attempted(&self) -> usize {
        self.attempted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = CandidateQueue::new();
        assert_eq!(queue.refill(slugs(&["a", "b", "c"])), 3);
        assert_eq!(queue.pop().as_deref(), Some("a"));
        assert_eq!(queue.pop().as_deref(), Some("b"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_refill_skips_queued_and_attempted() {
        let mut queue = CandidateQueue::new();
        queue.refill(slugs(&["a", "b", "b"]));
        assert_eq!(queue.len(), 2);

        queue.pop();
        assert_eq!(queue.refill(slugs(&["a", "b", "c"])), 1);
        assert_eq!(queue.pop().as_deref(), Some("b"));
        assert_eq!(queue.pop().as_deref(), Some("c"));
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
        assert_eq!(queue.attempted(), 3);
    }
}
