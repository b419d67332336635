//! Suffix-tree index over a single byte text.
//!
//! The tree is built in linear time with Ukkonen's online algorithm and
//! annotated once with per-node string depths, leaf counts and
//! representative suffixes. Two queries run on the annotated tree:
//!
//! - [`SuffixTree::top_k`]: the k-th most frequent substring of a given
//!   length, ties broken lexicographically.
//! - [`SuffixTree::longest_tandem_repeat`]: a longest substring of the
//!   form `αα`, ties broken by earliest start.
//!
//! ```
//! use text_index::SuffixTree;
//!
//! let tree = SuffixTree::build(b"abcabc", b'$').unwrap();
//! assert_eq!(tree.longest_tandem_repeat(), (0, 6));
//!
//! let start = tree.top_k(3, 1).unwrap();
//! assert_eq!(tree.substring(start, 3), b"abc");
//! ```
//!
//! The caller commits to a sentinel byte that does not occur in the
//! input; construction appends it and fails if it collides. Queries
//! never mutate the tree, so a built tree can be read concurrently.

mod annotate;
mod builder;
mod error;
mod node;
mod repeat;
mod text;
mod topk;
mod tree;

pub use error::{IndexError, Result};
pub use node::{ChildMap, Node, NodeId, ROOT};
pub use tree::SuffixTree;
