//! Singly linked list of integers with index-addressed operations.
//!
//! Nodes live in a [`NodePool`]; a list is just a [`Head`], the key of its
//! first node. This separates storage from structure:
//!
//! ```text
//! NodePool  - owns every node, hands out stable generation-checked keys
//! Head      - one list: the key of its first node, or empty
//! ```
//!
//! Several lists can share one pool. Keys returned by `push`, `append`,
//! `insert` and `search` stay valid until their node is released; after that
//! they resolve to nothing and operations taking them report
//! [`ListError::StaleNode`].
//!
//! # Quick Start
//!
//! ```
//! use intlist::{Head, NodePool};
//!
//! let mut pool = NodePool::new();
//! let mut list = Head::new(&mut pool, 3).unwrap();
//! list.push(&mut pool, 2).unwrap();
//! list.push(&mut pool, 1).unwrap();
//! assert_eq!(list.to_vec(&pool), vec![1, 2, 3]);
//!
//! // Positions are 0-based from the head
//! list.insert(&mut pool, 3, 4).unwrap();
//! assert_eq!(list.get(&pool, 3), Ok(&4));
//!
//! // O(1) appends once the tail is known
//! let tail = list.tail(&pool).unwrap();
//! pool.tail_append(tail, 5).unwrap();
//! assert_eq!(list.display(&pool).to_string(), "[1, 2, 3, 4, 5]");
//!
//! assert_eq!(list.release_all(&mut pool), 5);
//! ```
//!
//! # Errors
//!
//! Failures are returned as [`ListError`] and never modify the list:
//! out-of-range positions, missing search keys, released keys, and pool
//! allocation failure.

#![warn(missing_docs)]

mod error;
pub mod key;
pub mod list;
pub mod pool;

pub use error::ListError;
pub use key::NodeKey;
pub use list::{Head, Iter, ListDisplay};
pub use pool::{Node, NodePool};
