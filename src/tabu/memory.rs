//! FIFO memory of recently visited tours.

use crate::tour::Tour;
use std::collections::{HashSet, VecDeque};

/// Short-term tabu memory holding complete tours.
///
/// A bounded FIFO queue paired with a hash set for O(1) membership tests.
/// Pushing beyond `capacity` evicts the oldest entry, so the memory always
/// holds the most recently visited tours. A capacity of 0 retains nothing.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(2);
/// memory.push(vec![0, 1, 2]);
/// memory.push(vec![2, 1, 0]);
/// memory.push(vec![1, 0, 2]); // evicts [0, 1, 2]
///
/// assert!(!memory.contains(&[0, 1, 2]));
/// assert!(memory.contains(&[2, 1, 0]));
/// assert_eq!(memory.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<Tour>,
    members: HashSet<Tour>,
}

impl TabuMemory {
    /// Creates an empty memory that retains at most `capacity` tours.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    /// Whether `tour` is currently tabu.
    pub fn contains(&self, tour: &[usize]) -> bool {
        self.members.contains(tour)
    }

    /// Records a visited tour, evicting the oldest entry once the
    /// memory is over capacity.
    pub fn push(&mut self, tour: Tour) {
        self.members.insert(tour.clone());
        self.queue.push_back(tour);
        while self.queue.len() > self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.members.remove(&oldest);
            }
        }
    }

    /// Number of tours currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the memory holds no tours.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of tours retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_memory_contains_nothing() {
        let memory = TabuMemory::new(5);
        assert!(memory.is_empty());
        assert_eq!(memory.len(), 0);
        assert!(!memory.contains(&[0, 1]));
    }

    #[test]
    fn test_push_and_contains() {
        let mut memory = TabuMemory::new(5);
        memory.push(vec![0, 1, 2]);

        assert!(memory.contains(&[0, 1, 2]));
        assert!(!memory.contains(&[2, 1, 0]));
        assert_eq!(memory.len(), 1);
        assert!(!memory.is_empty());
    }

    #[test]
    fn test_fifo_eviction_order() {
        let mut memory = TabuMemory::new(2);
        memory.push(vec![0, 1]);
        memory.push(vec![1, 0]);
        assert_eq!(memory.len(), 2);

        // Third push evicts the oldest entry, [0, 1].
        memory.push(vec![0, 1, 2]);
        assert_eq!(memory.len(), 2);
        assert!(!memory.contains(&[0, 1]));
        assert!(memory.contains(&[1, 0]));
        assert!(memory.contains(&[0, 1, 2]));
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut memory = TabuMemory::new(0);
        memory.push(vec![0, 1, 2]);

        assert!(memory.is_empty());
        assert!(!memory.contains(&[0, 1, 2]));
    }

    #[test]
    fn test_capacity_accessor() {
        assert_eq!(TabuMemory::new(7).capacity(), 7);
        assert_eq!(TabuMemory::new(0).capacity(), 0);
    }
}
