use crate::node::{NodeId, ROOT};
use crate::text::Text;
use crate::tree::SuffixTree;

/// Online suffix tree construction, Ukkonen's algorithm.
///
/// The builder owns the tree while it grows and carries the active point
/// across phases: `(active_node, active_edge, active_length)` names the
/// position in the tree where the next suffix has to be extended.
/// `active_edge` is a text index; the byte at it keys the active edge.
///
/// Open leaf ends are represented by `None` in the node records and read
/// as the current frontier, so every leaf grows implicitly when a phase
/// begins. They are finalized to the text length at the end.
pub(crate) struct Builder {
    tree: SuffixTree,
    active_node: NodeId,
    active_edge: usize,
    active_length: usize,
    remaining: usize,
    last_internal: Option<NodeId>,
}

impl Builder {
    pub(crate) fn new(text: Text) -> Builder {
        Builder {
            tree: SuffixTree::with_root(text),
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remaining: 0,
            last_internal: None,
        }
    }

    pub(crate) fn build(mut self) -> SuffixTree {
        let n = self.tree.len();
        for phase in 0..n {
            self.extend(phase);
        }
        // The sentinel mismatches everywhere, so the last phase drains
        // every pending suffix.
        debug_assert_eq!(self.remaining, 0);
        self.tree.finalize_leaf_ends();
        self.tree
    }

    /// Phase `i`: ensures every suffix of `text[..=i]` is present.
    fn extend(&mut self, i: usize) {
        let frontier = i + 1;
        self.remaining += 1;
        self.last_internal = None;

        while self.remaining > 0 {
            if self.active_length == 0 {
                self.active_edge = i;
            }
            let edge_symbol = self.tree.text_at(self.active_edge);

            match self.tree.child(self.active_node, edge_symbol) {
                None => {
                    // No edge for this byte yet: hang a fresh open leaf
                    // off the active node.
                    let leaf = self.tree.alloc_leaf(i);
                    self.tree.set_child(self.active_node, edge_symbol, leaf);
                    self.wire_suffix_link(self.active_node);
                }
                Some(target) => {
                    if self.walk_down(target, frontier) {
                        // The active point moved past `target`; resolve
                        // the new active edge before extending.
                        continue;
                    }

                    let probe = self.tree.node(target).edge_start() + self.active_length;
                    if self.tree.text_at(probe) == self.tree.text_at(i) {
                        // Rule 3: the suffix is already implicitly
                        // present, this phase is done.
                        if self.active_node != ROOT {
                            self.wire_suffix_link(self.active_node);
                        }
                        self.active_length += 1;
                        break;
                    }

                    let split = self.split_edge(target, edge_symbol, i);
                    self.wire_suffix_link(split);
                    self.last_internal = Some(split);
                }
            }

            self.remaining -= 1;
            if self.active_node == ROOT && self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge = i - self.remaining + 1;
            } else if self.active_node != ROOT {
                self.active_node = self.tree.node(self.active_node).suffix_link();
            }
        }
    }

    /// Skip/count: when the active length covers the whole edge into
    /// `target`, step the active point onto `target`. Returns true when
    /// it moved.
    fn walk_down(&mut self, target: NodeId, frontier: usize) -> bool {
        let edge_len = self.tree.node(target).edge_len_at(frontier);
        if self.active_length >= edge_len {
            self.active_edge += edge_len;
            self.active_length -= edge_len;
            self.active_node = target;
            true
        } else {
            false
        }
    }

    /// Splits the edge into `target` at the active length, keeping the
    /// upper part as a new internal node. The new node adopts `target`
    /// and a fresh open leaf for the current phase byte.
    fn split_edge(&mut self, target: NodeId, edge_symbol: u8, i: usize) -> NodeId {
        let target_start = self.tree.node(target).edge_start();
        let split_at = target_start + self.active_length;

        let split = self.tree.alloc_internal(target_start, split_at);
        self.tree.set_child(self.active_node, edge_symbol, split);

        self.tree.node_mut(target).set_edge_start(split_at);
        let target_symbol = self.tree.text_at(split_at);
        self.tree.set_child(split, target_symbol, target);

        let leaf = self.tree.alloc_leaf(i);
        let leaf_symbol = self.tree.text_at(i);
        self.tree.set_child(split, leaf_symbol, leaf);

        split
    }

    /// Wires the suffix link of the internal node created earlier in
    /// this phase, if one is still pending.
    fn wire_suffix_link(&mut self, to: NodeId) {
        if let Some(from) = self.last_internal.take() {
            self.tree.node_mut(from).set_suffix_link(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::SuffixTree;

    #[test]
    fn abab_shape() {
        let tree = SuffixTree::build(b"abab", b'$').unwrap();
        // 5 leaves, internal nodes `ab` and `b`, plus the root.
        assert_eq!(tree.node_count(), 8);
    }

    #[test]
    fn every_suffix_reachable() {
        let tree = SuffixTree::build(b"mississippi", b'$').unwrap();
        let text = tree.text();
        for start in 0..text.len() - 1 {
            assert!(
                tree.contains(&text[start..text.len() - 1]),
                "suffix at {} missing",
                start
            );
        }
    }

    #[test]
    fn suffix_links_point_one_symbol_up() {
        let tree = SuffixTree::build(b"abcabxabcd", b'$').unwrap();
        for id in 1..tree.node_count() {
            let node = tree.node(id);
            if node.is_leaf() {
                continue;
            }
            let label_start = node.repr_suffix();
            let depth = node.string_depth();
            let link = tree.node(node.suffix_link());
            assert_eq!(link.string_depth(), depth - 1);
            assert_eq!(
                tree.substring(link.repr_suffix(), depth - 1),
                tree.substring(label_start + 1, depth - 1)
            );
        }
    }

    #[test]
    fn single_symbol_text() {
        let tree = SuffixTree::build(b"a", b'$').unwrap();
        // Root plus the two leaves `a$` and `$`.
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.suffix_array(), vec![1, 0]);
    }
}
