use std::hash::Hash;

use ahash::AHashMap;

use crate::error::{CacheError, Result};

/// Sentinel indices in the `nodes` arena.
const HEAD: usize = 0; // least-frequent end, eviction side
const TAIL: usize = 1; // most-frequent end
const NULL: usize = usize::MAX;

/// A cached entry together with its bookkeeping.
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) frequency: u64,
    pub(crate) weight: u64,
}

struct Node<K, V> {
    /// `None` for the HEAD and TAIL sentinels and for recycled slots.
    entry: Option<Entry<K, V>>,
    /// Index toward HEAD (lower frequency).
    prev: usize,
    /// Index toward TAIL (higher frequency).
    next: usize,
}

/// Weight-bounded sequence of entries kept sorted by access frequency.
///
/// Nodes live in a `Vec<Node<K, V>>` and are linked by index, so the key
/// index stores plain slot numbers instead of pointers that a splice could
/// invalidate.  Walking from HEAD to TAIL yields non-decreasing
/// frequencies; among equal frequencies the earlier insertion comes first
/// and is therefore evicted first.
pub(crate) struct FrequencyList<K, V> {
    /// Index 0 = HEAD sentinel, 1 = TAIL sentinel, 2+ = real entries.
    nodes: Vec<Node<K, V>>,
    /// Maps a key to its index in `nodes`.
    index: AHashMap<K, usize>,
    /// Indices of freed (reusable) slots.
    free_list: Vec<usize>,
    total_weight: u64,
    max_weight: u64,
}

impl<K: Hash + Eq + Clone, V> FrequencyList<K, V> {
    /// Creates an empty list holding at most `max_weight` total weight.
    pub(crate) fn new(max_weight: u64) -> Self {
        let mut nodes: Vec<Node<K, V>> = Vec::with_capacity(16);
        nodes.push(Node {
            entry: None,
            prev: NULL,
            next: TAIL,
        });
        nodes.push(Node {
            entry: None,
            prev: HEAD,
            next: NULL,
        });

        FrequencyList {
            nodes,
            index: AHashMap::new(),
            free_list: Vec::new(),
            total_weight: 0,
            max_weight,
        }
    }

    /// Links `idx` immediately before node `at`.
    fn link_before(&mut self, at: usize, idx: usize) {
        let prev = self.nodes[at].prev;
        self.nodes[idx].prev = prev;
        self.nodes[idx].next = at;
        self.nodes[prev].next = idx;
        self.nodes[at].prev = idx;
    }

    /// Detaches `idx` from its current position in the list.
    fn unlink(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[idx].prev = NULL;
        self.nodes[idx].next = NULL;
    }

    /// Allocates a new node (reusing from the free list when available).
    fn alloc_node(&mut self, entry: Entry<K, V>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            let node = &mut self.nodes[idx];
            node.entry = Some(entry);
            node.prev = NULL;
            node.next = NULL;
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(Node {
                entry: Some(entry),
                prev: NULL,
                next: NULL,
            });
            idx
        }
    }

    /// Returns the first node at or after `from` whose frequency is strictly
    /// greater than `frequency`, or TAIL if there is none.
    fn find_greater(&self, from: usize, frequency: u64) -> usize {
        let mut cur = from;
        while cur != TAIL {
            let node = &self.nodes[cur];
            if let Some(entry) = &node.entry {
                if entry.frequency > frequency {
                    return cur;
                }
            }
            cur = node.next;
        }
        TAIL
    }

    /// Moves `idx` forward so it sits before the first entry with a higher
    /// frequency.  Frequencies only grow here, so the scan never looks back.
    fn reposition(&mut self, idx: usize, frequency: u64) {
        let next = self.nodes[idx].next;
        let target = self.find_greater(next, frequency);
        if target == next {
            return;
        }
        self.unlink(idx);
        self.link_before(target, idx);
    }

    /// Removes the entry at the head of the list (lowest frequency, oldest
    /// among ties) and returns it.
    fn pop_front(&mut self) -> Option<Entry<K, V>> {
        let idx = self.nodes[HEAD].next;
        if idx == TAIL {
            return None;
        }
        self.unlink(idx);
        let entry = self.nodes[idx].entry.take()?;
        self.index.remove(&entry.key);
        self.free_list.push(idx);
        self.total_weight -= entry.weight;
        Some(entry)
    }

    /// Inserts a new entry, evicting from the head until it fits.
    ///
    /// Returns the evicted entries in eviction order.  An existing key is
    /// left untouched and nothing is evicted.  An entry heavier than the
    /// whole list is rejected before any eviction takes place.
    pub(crate) fn insert(
        &mut self,
        key: K,
        value: V,
        weight: u64,
        frequency: u64,
    ) -> Result<Vec<Entry<K, V>>> {
        if weight > self.max_weight {
            return Err(CacheError::OversizedEntry {
                weight,
                max_weight: self.max_weight,
            });
        }
        if self.index.contains_key(&key) {
            return Ok(Vec::new());
        }

        // `weight <= max_weight`, so the subtraction cannot underflow and the
        // loop always terminates once the list is empty.
        let mut evicted = Vec::new();
        while self.total_weight > self.max_weight - weight {
            match self.pop_front() {
                Some(entry) => evicted.push(entry),
                None => break,
            }
        }

        let at = self.find_greater(self.nodes[HEAD].next, frequency);
        let idx = self.alloc_node(Entry {
            key: key.clone(),
            value,
            frequency,
            weight,
        });
        self.link_before(at, idx);
        self.index.insert(key, idx);
        self.total_weight += weight;
        Ok(evicted)
    }

    /// Adds `increment` to the frequency of `key`, restores the ordering and
    /// returns the value.
    pub(crate) fn touch(&mut self, key: &K, increment: u64) -> Option<&V> {
        let idx = *self.index.get(key)?;
        let frequency = {
            let entry = self.nodes[idx].entry.as_mut()?;
            entry.frequency = entry.frequency.saturating_add(increment);
            entry.frequency
        };
        self.reposition(idx, frequency);
        self.nodes[idx].entry.as_ref().map(|e| &e.value)
    }

    /// Right-shifts every frequency by `shift` bits.
    ///
    /// A uniform shift is monotone, so the list stays sorted.
    pub(crate) fn decay(&mut self, shift: u32) {
        for node in &mut self.nodes {
            if let Some(entry) = node.entry.as_mut() {
                entry.frequency >>= shift;
            }
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<&Entry<K, V>> {
        let idx = *self.index.get(key)?;
        self.nodes[idx].entry.as_ref()
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn current_weight(&self) -> u64 {
        self.total_weight
    }

    pub(crate) fn max_weight(&self) -> u64 {
        self.max_weight
    }

    /// Iterates entries from HEAD (next victim) to TAIL.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cur: self.nodes[HEAD].next,
        }
    }
}

pub(crate) struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    cur: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == TAIL {
            return None;
        }
        let node = &self.nodes[self.cur];
        self.cur = node.next;
        node.entry.as_ref()
    }
}
