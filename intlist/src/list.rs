//! Singly linked list over a [`NodePool`].
//!
//! [`Head`] is the whole list: the key of its first node, or the terminal
//! marker when empty. All operations take the pool explicitly, the same way
//! every node lives in the pool and the handle only coordinates keys.
//!
//! # Example
//!
//! ```
//! use intlist::{Head, ListError, NodePool};
//!
//! let mut pool = NodePool::new();
//! let mut list = Head::new(&mut pool, 3).unwrap();
//! list.push(&mut pool, 2).unwrap();
//! list.push(&mut pool, 1).unwrap();
//! list.append(&mut pool, 4).unwrap();
//! assert_eq!(list.display(&pool).to_string(), "[1, 2, 3, 4]");
//!
//! assert_eq!(list.get(&pool, 2), Ok(&3));
//! assert_eq!(list.remove(&mut pool, 2), Ok(3));
//! assert_eq!(list.to_vec(&pool), vec![1, 2, 4]);
//!
//! assert_eq!(
//!     list.get(&pool, 3),
//!     Err(ListError::OutOfRange { index: 3, len: 3 })
//! );
//!
//! list.release_all(&mut pool);
//! assert!(pool.is_empty());
//! ```

use core::fmt;
use core::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{ListError, Node, NodeKey, NodePool};

/// Handle to a singly linked list: its first node, or nothing.
///
/// The handle is move-only. [`release_all`](Self::release_all) consumes it, so
/// a released list cannot be touched again. Dropping a handle without
/// releasing leaves its nodes allocated until the pool itself is dropped.
///
/// # Example
///
/// ```
/// use intlist::{Head, NodePool};
///
/// let mut pool = NodePool::new();
/// let mut list = Head::empty();
/// assert_eq!(list.len(&pool), 0);
///
/// list.insert(&mut pool, 0, 10).unwrap();
/// list.insert(&mut pool, 1, 30).unwrap();
/// list.insert(&mut pool, 1, 20).unwrap();
/// assert_eq!(list.to_vec(&pool), vec![10, 20, 30]);
///
/// *list.get_mut(&mut pool, 1).unwrap() += 5;
/// assert_eq!(list.to_vec(&pool), vec![10, 25, 30]);
/// ```
#[must_use = "a list handle owns pool nodes; release them with `release_all`"]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Head {
    first: NodeKey,
}

impl Head {
    /// Returns the empty list.
    pub const fn empty() -> Self {
        Self {
            first: NodeKey::NONE,
        }
    }

    /// Creates a one-element list holding `value`.
    ///
    /// # Errors
    ///
    /// [`ListError::AllocFailed`] if the pool cannot grow.
    pub fn new(pool: &mut NodePool, value: i32) -> Result<Self, ListError> {
        let first = pool.try_insert(Node::new(value, NodeKey::NONE))?;
        Ok(Self { first })
    }

    /// Builds a list holding `values` in iteration order.
    ///
    /// Each value after the first is linked with
    /// [`NodePool::tail_append`], so building is O(n). On failure every node
    /// allocated so far is released again.
    pub fn from_values<I>(pool: &mut NodePool, values: I) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut head = Self::empty();
        let mut tail = NodeKey::NONE;

        for value in values {
            let linked = if tail.is_none() {
                head.push(pool, value)
            } else {
                pool.tail_append(tail, value)
            };
            match linked {
                Ok(key) => tail = key,
                Err(err) => {
                    head.release_all(pool);
                    return Err(err);
                }
            }
        }
        Ok(head)
    }

    /// Returns `true` if the list has no nodes. O(1).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Returns the first node's key, or `None` if empty.
    #[inline]
    pub const fn first(&self) -> Option<NodeKey> {
        self.first.get()
    }

    /// Counts the nodes by walking the list. O(n).
    pub fn len(&self, pool: &NodePool) -> usize {
        self.nodes(pool).count()
    }

    /// Returns the last node's key, or `None` if empty. O(n).
    pub fn tail(&self, pool: &NodePool) -> Option<NodeKey> {
        self.nodes(pool).last().map(|(key, _)| key)
    }

    /// Pushes `value` in front of the current first node. O(1).
    ///
    /// Returns the key of the new first node.
    pub fn push(&mut self, pool: &mut NodePool, value: i32) -> Result<NodeKey, ListError> {
        let key = pool.try_insert(Node::new(value, self.first))?;
        self.first = key;
        Ok(key)
    }

    /// Appends `value` after the last node. O(n).
    ///
    /// On an empty list this behaves like [`new`](Self::new). Returns the key
    /// of the new tail.
    pub fn append(&mut self, pool: &mut NodePool, value: i32) -> Result<NodeKey, ListError> {
        match self.tail(pool) {
            Some(tail) => pool.tail_append(tail, value),
            None => {
                self.first = pool.try_insert(Node::new(value, NodeKey::NONE))?;
                Ok(self.first)
            }
        }
    }

    /// Inserts `value` so that it ends up at position `index`. O(index).
    ///
    /// `index == 0` pushes, `index == len` appends.
    ///
    /// # Errors
    ///
    /// - [`ListError::OutOfRange`] if `index > len`. The list is unchanged.
    /// - [`ListError::AllocFailed`] if the pool cannot grow.
    pub fn insert(
        &mut self,
        pool: &mut NodePool,
        index: usize,
        value: i32,
    ) -> Result<NodeKey, ListError> {
        if index == 0 {
            return self.push(pool, value);
        }

        let Some((prev, prev_node)) = self.nodes(pool).nth(index - 1) else {
            return Err(self.out_of_range(pool, index));
        };
        let next = prev_node.next;

        let key = pool.try_insert(Node::new(value, next))?;
        pool.set_next(prev, key);
        Ok(key)
    }

    /// Returns the value at `index`. O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `index >= len`.
    pub fn get<'p>(&self, pool: &'p NodePool, index: usize) -> Result<&'p i32, ListError> {
        match self.nodes(pool).nth(index) {
            Some((_, node)) => Ok(&node.data),
            None => Err(self.out_of_range(pool, index)),
        }
    }

    /// Returns the value at `index` for in-place mutation. O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `index >= len`.
    pub fn get_mut<'p>(
        &self,
        pool: &'p mut NodePool,
        index: usize,
    ) -> Result<&'p mut i32, ListError> {
        let Some((key, _)) = self.nodes(pool).nth(index) else {
            return Err(self.out_of_range(pool, index));
        };
        Ok(pool.resolve_mut(key)?.data_mut())
    }

    /// Returns the first node, in list order, whose value equals `key`.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no node holds `key`.
    pub fn search(&self, pool: &NodePool, key: i32) -> Result<NodeKey, ListError> {
        self.nodes(pool)
            .find(|(_, node)| node.data == key)
            .map(|(found, _)| found)
            .ok_or(ListError::NotFound { key })
    }

    /// Releases the first node and returns its value. O(1).
    ///
    /// The successor becomes the new first node. Returns `None` and leaves the
    /// handle empty if the list was already empty.
    pub fn pop(&mut self, pool: &mut NodePool) -> Option<i32> {
        let node = pool.release(self.first)?;
        self.first = node.next;
        Some(node.data)
    }

    /// Releases the node at `index` and returns its value. O(index).
    ///
    /// `index == 0` pops.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if `index >= len`. The list is unchanged.
    pub fn remove(&mut self, pool: &mut NodePool, index: usize) -> Result<i32, ListError> {
        if index == 0 {
            return self.pop(pool).ok_or_else(|| self.out_of_range(pool, index));
        }

        let Some((prev, prev_node)) = self.nodes(pool).nth(index - 1) else {
            return Err(self.out_of_range(pool, index));
        };
        let target = prev_node.next;
        if target.is_none() {
            return Err(self.out_of_range(pool, index));
        }

        let node = pool.resolve(target).copied()?;
        pool.set_next(prev, node.next);
        pool.release(target);
        Ok(node.data)
    }

    /// Releases every node, first to last, and returns how many were
    /// released.
    ///
    /// Each node's successor is taken from the released node itself before
    /// moving on. Consumes the handle.
    pub fn release_all(self, pool: &mut NodePool) -> usize {
        let mut cursor = self.first;
        let mut released = 0;
        while let Some(node) = pool.release(cursor) {
            cursor = node.next;
            released += 1;
        }
        trace!(released, "released list");
        released
    }

    /// Returns an iterator over the values in list order.
    pub fn iter<'p>(&self, pool: &'p NodePool) -> Iter<'p> {
        Iter {
            nodes: self.nodes(pool),
        }
    }

    /// Collects the values in list order.
    pub fn to_vec(&self, pool: &NodePool) -> Vec<i32> {
        self.iter(pool).collect()
    }

    /// Returns a formatter that renders the list as `[1, 2, 3]`.
    pub fn display<'p>(&self, pool: &'p NodePool) -> ListDisplay<'p> {
        ListDisplay {
            first: self.first,
            pool,
        }
    }

    /// Prints the list to stdout as `[1, 2, 3]`, or `[]` when empty.
    pub fn print(&self, pool: &NodePool) {
        println!("{}", self.display(pool));
    }

    #[inline]
    fn nodes<'p>(&self, pool: &'p NodePool) -> Nodes<'p> {
        Nodes {
            pool,
            cursor: self.first,
        }
    }

    #[cold]
    fn out_of_range(&self, pool: &NodePool, index: usize) -> ListError {
        let len = self.len(pool);
        debug!(index, len, "list index out of range");
        ListError::OutOfRange { index, len }
    }
}

/// Walks `(key, node)` pairs from a starting key.
///
/// Stops at the terminal marker, or at a key that no longer resolves.
struct Nodes<'p> {
    pool: &'p NodePool,
    cursor: NodeKey,
}

impl<'p> Iterator for Nodes<'p> {
    type Item = (NodeKey, &'p Node);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor;
        let node = self.pool.node(key)?;
        self.cursor = node.next;
        Some((key, node))
    }
}

impl FusedIterator for Nodes<'_> {}

/// Iterator over list values, created by [`Head::iter`].
pub struct Iter<'p> {
    nodes: Nodes<'p>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.nodes.next().map(|(_, node)| node.data)
    }
}

impl FusedIterator for Iter<'_> {}

/// Renders a list as `[1, 2, 3]`. Created by [`Head::display`].
pub struct ListDisplay<'p> {
    first: NodeKey,
    pool: &'p NodePool,
}

impl fmt::Display for ListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = Nodes {
            pool: self.pool,
            cursor: self.first,
        };
        f.write_str("[")?;
        for (i, (_, node)) in nodes.enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node.data)?;
        }
        f.write_str("]")
    }
}
