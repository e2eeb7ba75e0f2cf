use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{Error, Result};

/// A heap slot: the item, its priority and the stamp used to break ties.
#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> Entry<T, P> {
    fn precedes(&self, other: &Self) -> bool {
        (&self.priority, self.seq) < (&other.priority, other.seq)
    }
}

/// Indexed binary min-heap supporting priority changes of queued items.
///
/// Each item may be queued at most once. Items with equal priority leave the
/// queue in the order they were inserted; [`decrease_priority`] counts as a
/// fresh insertion for that purpose.
///
/// [`decrease_priority`]: IndexedPriorityQueue::decrease_priority
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T, P> {
    /// Heap-ordered entries
    heap: Vec<Entry<T, P>>,

    /// Position of each queued item inside `heap`
    positions: FxHashMap<T, usize>,

    /// Next insertion stamp
    next_seq: u64,
}

impl<T, P> Default for IndexedPriorityQueue<T, P> {
    fn default() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: FxHashMap::default(),
            next_seq: 0,
        }
    }
}

impl<T, P> IndexedPriorityQueue<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            next_seq: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued items
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Returns the current priority of a queued item
    pub fn priority(&self, item: &T) -> Option<P> {
        self.positions.get(item).map(|&idx| self.heap[idx].priority)
    }

    /// Queues `item` with the given priority. Fails if it is already queued.
    pub fn insert(&mut self, item: T, priority: P) -> Result<()> {
        if self.positions.contains_key(&item) {
            return Err(Error::DuplicateItem(format!("{:?}", item)));
        }

        let seq = self.stamp();
        let idx = self.heap.len();
        self.positions.insert(item.clone(), idx);
        self.heap.push(Entry { priority, seq, item });
        self.sift_up(idx);
        Ok(())
    }

    /// Removes and returns the item with the smallest priority
    pub fn pop_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.positions.remove(&entry.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(entry.item)
    }

    /// Returns the item with the smallest priority without removing it
    pub fn peek_min(&self) -> Result<&T> {
        self.heap
            .first()
            .map(|entry| &entry.item)
            .ok_or(Error::EmptyQueue)
    }

    /// Moves a queued item to `new_priority`.
    ///
    /// The item is re-stamped, so among items of equal priority it now comes
    /// last. A priority that is not lower than the current one is accepted too.
    pub fn decrease_priority(&mut self, item: &T, new_priority: P) -> Result<()> {
        let idx = *self
            .positions
            .get(item)
            .ok_or_else(|| Error::ItemNotFound(format!("{:?}", item)))?;

        let seq = self.stamp();
        let entry = &mut self.heap[idx];
        entry.priority = new_priority;
        entry.seq = seq;

        let idx = self.sift_up(idx);
        self.sift_down(idx);
        Ok(())
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    fn stamp(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].item.clone(), a);
        self.positions.insert(self.heap[b].item.clone(), b);
    }

    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.heap[idx].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(idx, parent);
            idx = parent;
        }
        idx
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap(idx, smallest);
            idx = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut IndexedPriorityQueue<&'static str, u32>) -> Vec<&'static str> {
        let mut order = Vec::new();
        while !queue.is_empty() {
            order.push(queue.pop_min().unwrap());
        }
        order
    }

    #[test]
    fn pops_in_priority_order() {
        let mut queue = IndexedPriorityQueue::new();
        queue.insert("c", 30).unwrap();
        queue.insert("a", 10).unwrap();
        queue.insert("d", 40).unwrap();
        queue.insert("b", 20).unwrap();

        assert_eq!(queue.size(), 4);
        assert_eq!(queue.peek_min(), Ok(&"a"));
        assert_eq!(drain(&mut queue), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut queue = IndexedPriorityQueue::new();
        for item in ["e", "b", "d", "a", "c"] {
            queue.insert(item, 5).unwrap();
        }

        assert_eq!(drain(&mut queue), vec!["e", "b", "d", "a", "c"]);
    }

    #[test]
    fn decrease_priority_reorders() {
        let mut queue = IndexedPriorityQueue::new();
        queue.insert("a", 10).unwrap();
        queue.insert("b", 20).unwrap();
        queue.insert("c", 30).unwrap();

        queue.decrease_priority(&"c", 5).unwrap();
        assert_eq!(queue.priority(&"c"), Some(5));
        assert_eq!(drain(&mut queue), vec!["c", "a", "b"]);
    }

    #[test]
    fn decrease_priority_counts_as_new_insertion_for_ties() {
        let mut queue = IndexedPriorityQueue::new();
        queue.insert("a", 7).unwrap();
        queue.insert("b", 20).unwrap();
        queue.insert("c", 7).unwrap();

        queue.decrease_priority(&"b", 7).unwrap();
        queue.decrease_priority(&"a", 7).unwrap();

        assert_eq!(drain(&mut queue), vec!["c", "b", "a"]);
    }

    #[test]
    fn raising_a_priority_sinks_the_item() {
        let mut queue = IndexedPriorityQueue::new();
        queue.insert("a", 1).unwrap();
        queue.insert("b", 2).unwrap();
        queue.insert("c", 3).unwrap();

        queue.decrease_priority(&"a", 10).unwrap();
        assert_eq!(drain(&mut queue), vec!["b", "c", "a"]);
    }

    #[test]
    fn rejects_duplicates() {
        let mut queue = IndexedPriorityQueue::new();
        queue.insert("a", 1).unwrap();

        assert_eq!(
            queue.insert("a", 2),
            Err(Error::DuplicateItem("\"a\"".to_string()))
        );
        assert_eq!(queue.size(), 1);
        assert_eq!(queue.priority(&"a"), Some(1));
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue: IndexedPriorityQueue<&str, u32> = IndexedPriorityQueue::new();

        assert_eq!(queue.pop_min(), Err(Error::EmptyQueue));
        assert_eq!(queue.peek_min(), Err(Error::EmptyQueue));
    }

    #[test]
    fn missing_item_errors() {
        let mut queue = IndexedPriorityQueue::new();
        queue.insert("a", 1).unwrap();
        queue.pop_min().unwrap();

        assert!(matches!(
            queue.decrease_priority(&"a", 0),
            Err(Error::ItemNotFound(_))
        ));
        assert!(!queue.contains(&"a"));
    }

    #[test]
    fn matches_sorted_order_on_larger_input() {
        let mut queue = IndexedPriorityQueue::with_capacity(100);
        for i in 0..100u32 {
            queue.insert(i, (i * 37) % 101).unwrap();
        }
        for i in (0..100u32).step_by(3) {
            queue.decrease_priority(&i, i % 5).unwrap();
        }

        let mut expected: Vec<(u32, u32)> = (0..100u32)
            .map(|i| if i % 3 == 0 { (i % 5, i) } else { ((i * 37) % 101, i) })
            .collect();
        expected.sort();

        let mut popped = Vec::new();
        while let Some(item) = queue.peek_min().ok().copied() {
            popped.push(queue.priority(&item).unwrap());
            queue.pop_min().unwrap();
        }

        let expected_priorities: Vec<u32> = expected.iter().map(|(p, _)| *p).collect();
        assert_eq!(popped, expected_priorities);
        assert!(queue.is_empty());
    }
}
