//! Node storage with stable, generation-checked keys.
//!
//! The pool owns every node; lists only hold the [`NodeKey`] of their first
//! node. Released slots go on a free stack and are reused by later
//! allocations. Growth is fallible: running out of memory is reported as
//! [`ListError::AllocFailed`] instead of aborting.
//!
//! # Pool Invariant
//!
//! A list must always be used with the pool its nodes were allocated from.
//! Passing another pool is memory safe but yields wrong answers.

use tracing::{debug, trace, warn};

use crate::{ListError, NodeKey};

/// Slots are addressed by `u32`; `u32::MAX` is the [`NodeKey::NONE`] sentinel.
const MAX_SLOTS: usize = u32::MAX as usize;

/// A list node: one value and the key of its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub(crate) data: i32,
    pub(crate) next: NodeKey,
}

impl Node {
    #[inline]
    pub(crate) const fn new(data: i32, next: NodeKey) -> Self {
        Self { data, next }
    }

    /// Returns the stored value.
    #[inline]
    pub const fn data(&self) -> i32 {
        self.data
    }

    /// Returns a mutable reference to the stored value.
    #[inline]
    pub fn data_mut(&mut self) -> &mut i32 {
        &mut self.data
    }

    /// Returns the successor's key, or `None` for the tail.
    #[inline]
    pub const fn next(&self) -> Option<NodeKey> {
        self.next.get()
    }

    /// Returns `true` if this node has no successor.
    #[inline]
    pub const fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Growable arena of list nodes.
///
/// # Example
///
/// ```
/// use intlist::{Head, NodePool};
///
/// let mut pool = NodePool::new();
/// let list = Head::new(&mut pool, 7).unwrap();
/// assert_eq!(pool.len(), 1);
///
/// assert_eq!(list.release_all(&mut pool), 1);
/// assert!(pool.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct NodePool {
    slots: Vec<Slot>,
    /// Released slots. Capacity is kept at least `slots.len()` so that
    /// releasing never allocates.
    free: Vec<u32>,
    len: usize,
}

impl NodePool {
    /// Creates an empty pool. Does not allocate.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates a pool with room for at least `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the addressable slot count.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity <= MAX_SLOTS, "capacity exceeds u32 slot space");
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Creates a pool with room for at least `capacity` nodes, reporting
    /// allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ListError> {
        if capacity > MAX_SLOTS {
            return Err(ListError::AllocFailed);
        }
        let mut pool = Self::new();
        pool.slots
            .try_reserve_exact(capacity)
            .and_then(|()| pool.free.try_reserve_exact(capacity))
            .map_err(|err| {
                warn!(capacity, %err, "node pool reservation failed");
                ListError::AllocFailed
            })?;
        Ok(pool)
    }

    /// Returns the number of live nodes across all lists in this pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no node is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the pool can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns `true` if `key` refers to a live node.
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.node(key).is_some()
    }

    /// Returns the node for `key`, or `None` if it was released.
    #[inline]
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.slots
            .get(key.slot())
            .filter(|slot| slot.generation == key.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    /// Returns the node for `key` mutably, or `None` if it was released.
    #[inline]
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.slots
            .get_mut(key.slot())
            .filter(|slot| slot.generation == key.generation())
            .and_then(|slot| slot.node.as_mut())
    }

    /// Appends `value` after `tail` in O(1), returning the new tail's key.
    ///
    /// The caller asserts that `tail` is the last node of its list. No walk is
    /// done to check this; debug builds assert it. Appending after a node
    /// that has a successor cuts that successor (and everything after it)
    /// off the list. The cut nodes stay allocated until the pool is dropped.
    ///
    /// # Errors
    ///
    /// - [`ListError::StaleNode`] if `tail` has been released.
    /// - [`ListError::AllocFailed`] if the pool cannot grow.
    ///
    /// # Example
    ///
    /// ```
    /// use intlist::{Head, NodePool};
    ///
    /// let mut pool = NodePool::new();
    /// let list = Head::new(&mut pool, 1).unwrap();
    /// let mut tail = list.first().unwrap();
    /// for value in 2..=4 {
    ///     tail = pool.tail_append(tail, value).unwrap();
    /// }
    /// assert_eq!(list.to_vec(&pool), vec![1, 2, 3, 4]);
    /// ```
    pub fn tail_append(&mut self, tail: NodeKey, value: i32) -> Result<NodeKey, ListError> {
        let node = self.resolve(tail)?;
        debug_assert!(node.is_tail(), "tail_append after a node with a successor");

        let key = self.try_insert(Node::new(value, NodeKey::NONE))?;
        self.set_next(tail, key);
        Ok(key)
    }

    /// Allocates a slot for `node`.
    pub(crate) fn try_insert(&mut self, node: Node) -> Result<NodeKey, ListError> {
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            debug_assert!(entry.node.is_none(), "free slot {slot} is occupied");
            entry.node = Some(node);
            self.len += 1;
            return Ok(NodeKey::new(slot, entry.generation));
        }

        let slot = self.slots.len();
        if slot >= MAX_SLOTS {
            warn!(slots = slot, "node pool slot space exhausted");
            return Err(ListError::AllocFailed);
        }
        self.reserve_slot()?;

        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        self.len += 1;
        Ok(NodeKey::new(slot as u32, 0))
    }

    /// Releases the node for `key`, returning it by value.
    ///
    /// The returned node still carries its `next` link, so callers read the
    /// successor from the moved-out value rather than from freed storage.
    pub(crate) fn release(&mut self, key: NodeKey) -> Option<Node> {
        let slot = self
            .slots
            .get_mut(key.slot())
            .filter(|slot| slot.generation == key.generation())?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        // Capacity reserved in `reserve_slot`; never reallocates.
        self.free.push(key.slot() as u32);
        self.len -= 1;
        Some(node)
    }

    /// Resolves `key`, mapping a released key to [`ListError::StaleNode`].
    pub(crate) fn resolve(&self, key: NodeKey) -> Result<&Node, ListError> {
        self.node(key).ok_or_else(|| stale(key))
    }

    /// Mutable variant of [`resolve`](Self::resolve).
    pub(crate) fn resolve_mut(&mut self, key: NodeKey) -> Result<&mut Node, ListError> {
        self.node_mut(key).ok_or_else(|| stale(key))
    }

    /// Relinks `key` to `next`. `key` must be live.
    #[inline]
    pub(crate) fn set_next(&mut self, key: NodeKey, next: NodeKey) {
        let node = self.node_mut(key);
        debug_assert!(node.is_some(), "relinking released node {key}");
        if let Some(node) = node {
            node.next = next;
        }
    }

    /// Makes room for one more slot in both the slot array and the free stack.
    fn reserve_slot(&mut self) -> Result<(), ListError> {
        let before = self.slots.capacity();
        let needed = self.slots.len() + 1;

        self.slots
            .try_reserve(1)
            .and_then(|()| self.free.try_reserve(needed - self.free.len()))
            .map_err(|err| {
                warn!(slots = self.slots.len(), %err, "node pool growth failed");
                ListError::AllocFailed
            })?;

        if self.slots.capacity() != before {
            trace!(from = before, to = self.slots.capacity(), "node pool grew");
        }
        Ok(())
    }
}

fn stale(key: NodeKey) -> ListError {
    debug!(%key, "stale node key");
    ListError::StaleNode { key }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let pool = NodePool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.capacity(), 0);
    }

    #[test]
    fn with_capacity_reserves() {
        let pool = NodePool::with_capacity(32);
        assert!(pool.capacity() >= 32);
        assert!(pool.is_empty());

        let pool = NodePool::try_with_capacity(32).unwrap();
        assert!(pool.capacity() >= 32);
    }

    #[test]
    fn try_with_capacity_rejects_oversized() {
        assert_eq!(
            NodePool::try_with_capacity(usize::MAX).unwrap_err(),
            ListError::AllocFailed
        );
    }

    #[test]
    fn insert_get_release() {
        let mut pool = NodePool::new();

        let key = pool.try_insert(Node::new(42, NodeKey::NONE)).unwrap();
        assert_eq!(pool.len(), 1);
        assert!(pool.contains(key));
        assert_eq!(pool.node(key).map(Node::data), Some(42));

        let node = pool.release(key).unwrap();
        assert_eq!(node.data(), 42);
        assert!(node.is_tail());
        assert!(pool.is_empty());
        assert!(!pool.contains(key));
    }

    #[test]
    fn release_twice_is_none() {
        let mut pool = NodePool::new();
        let key = pool.try_insert(Node::new(1, NodeKey::NONE)).unwrap();

        assert!(pool.release(key).is_some());
        assert!(pool.release(key).is_none());
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn reused_slot_rejects_old_key() {
        let mut pool = NodePool::new();
        let old = pool.try_insert(Node::new(1, NodeKey::NONE)).unwrap();
        pool.release(old);

        let new = pool.try_insert(Node::new(2, NodeKey::NONE)).unwrap();
        assert_eq!(old.slot(), new.slot());
        assert_ne!(old, new);

        assert!(pool.node(old).is_none());
        assert_eq!(pool.node(new).map(Node::data), Some(2));
        assert_eq!(
            pool.resolve(old).unwrap_err(),
            ListError::StaleNode { key: old }
        );
    }

    #[test]
    fn none_key_never_resolves() {
        let mut pool = NodePool::new();
        pool.try_insert(Node::new(1, NodeKey::NONE)).unwrap();

        assert!(pool.node(NodeKey::NONE).is_none());
        assert!(pool.release(NodeKey::NONE).is_none());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn free_stack_never_outgrows_reservation() {
        let mut pool = NodePool::new();
        let keys: Vec<_> = (0..100)
            .map(|i| pool.try_insert(Node::new(i, NodeKey::NONE)).unwrap())
            .collect();

        for &key in &keys {
            pool.release(key);
        }
        assert!(pool.free.capacity() >= pool.slots.len());
        assert!(pool.is_empty());

        // Every slot is reused before the pool grows again
        let slots = pool.slots.len();
        for i in 0..100 {
            pool.try_insert(Node::new(i, NodeKey::NONE)).unwrap();
        }
        assert_eq!(pool.slots.len(), slots);
    }

    #[test]
    fn tail_append_links_new_tail() {
        let mut pool = NodePool::new();
        let first = pool.try_insert(Node::new(1, NodeKey::NONE)).unwrap();

        let second = pool.tail_append(first, 2).unwrap();
        assert_eq!(pool.node(first).and_then(Node::next), Some(second));
        assert!(pool.node(second).unwrap().is_tail());
    }

    #[test]
    fn tail_append_stale_key() {
        let mut pool = NodePool::new();
        let key = pool.try_insert(Node::new(1, NodeKey::NONE)).unwrap();
        pool.release(key);

        assert_eq!(
            pool.tail_append(key, 2).unwrap_err(),
            ListError::StaleNode { key }
        );
        assert!(pool.is_empty());
    }

    #[test]
    fn data_mut_writes_through() {
        let mut pool = NodePool::new();
        let key = pool.try_insert(Node::new(1, NodeKey::NONE)).unwrap();

        *pool.node_mut(key).unwrap().data_mut() = 10;
        assert_eq!(pool.node(key).map(Node::data), Some(10));
    }
}
