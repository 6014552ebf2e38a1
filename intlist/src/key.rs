//! Keys into a [`NodePool`](crate::NodePool).
//!
//! A [`NodeKey`] is a slot index plus the generation the slot had when its
//! node was allocated. The pool bumps a slot's generation on release, so a
//! key that outlives its node no longer resolves, even after the slot has
//! been handed to a new node.

use core::fmt;

/// Stable key of a node in a [`NodePool`](crate::NodePool).
///
/// Keys are `Copy`: they behave like a node reference that can be held and
/// passed around freely. Holding a key does not keep the node alive; once the
/// node is released the key resolves to nothing.
///
/// # Example
///
/// ```
/// use intlist::NodeKey;
///
/// assert!(NodeKey::NONE.is_none());
/// assert!(!NodeKey::NONE.is_some());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    slot: u32,
    generation: u32,
}

impl NodeKey {
    /// Sentinel value representing "no node".
    ///
    /// Used as the terminal marker after the tail and as the handle of the
    /// empty list.
    pub const NONE: Self = Self {
        slot: u32::MAX,
        generation: 0,
    };

    #[inline]
    pub(crate) const fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.slot as usize
    }

    #[inline]
    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.slot == u32::MAX
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel into `None`.
    #[inline]
    pub const fn get(self) -> Option<NodeKey> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl Default for NodeKey {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}v{}", self.slot, self.generation)
        }
    }
}

impl fmt::Debug for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeKey({self})")
    }
}
