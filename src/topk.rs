use crate::error::{IndexError, Result};
use crate::node::ROOT;
use crate::tree::SuffixTree;

/// A substring candidate: occurrence count and the start of one
/// occurrence. Candidates for a query length `l` are the highest nodes
/// whose string depth reaches `l`; every suffix below such a node shares
/// the same length-`l` prefix, so the node's leaf count is exactly that
/// prefix's occurrence count.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    count: usize,
    start: usize,
}

/// Start position of the k-th most frequent substring of length `l`.
///
/// Candidates are collected in lexicographic order of their length-`l`
/// prefixes and then stable-sorted by descending count, so equal counts
/// keep lexicographic order and rank `k` resolves deterministically.
pub(crate) fn run(tree: &SuffixTree, l: usize, k: usize) -> Result<usize> {
    let n = tree.len();
    if l == 0 || l >= n {
        return Err(IndexError::OutOfRange { len: l, max: n });
    }

    let mut candidates = collect(tree, l);
    candidates.sort_by(|a, b| b.count.cmp(&a.count));

    if k == 0 || k > candidates.len() {
        return Err(IndexError::NotFound {
            k,
            count: candidates.len(),
        });
    }
    Ok(candidates[k - 1].start)
}

/// Walks the tree in preorder, children in ascending byte order, and
/// emits the first node crossing depth `l` on every path. Preorder
/// guarantees the emission order is the lexicographic order of the
/// candidates' length-`l` prefixes.
///
/// A candidate whose length-`l` prefix would run into the sentinel is
/// not a substring of the input and is dropped; that can only happen at
/// leaves, since an internal node's label occurs at least twice and the
/// sentinel only once.
fn collect(tree: &SuffixTree, l: usize) -> Vec<Candidate> {
    let n = tree.len();
    let mut candidates = Vec::new();
    let mut stack = vec![ROOT];

    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        if node.string_depth() >= l && node.repr_suffix() + l < n {
            candidates.push(Candidate {
                count: node.num_leaves(),
                start: node.repr_suffix(),
            });
        } else {
            for (_, child) in node.children().iter().rev() {
                stack.push(child);
            }
        }
    }

    candidates
}
