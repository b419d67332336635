use crate::node::{NodeId, ROOT};
use crate::tree::SuffixTree;

/// Annotation pass, run once between construction and the first query.
///
/// String depth and representative suffix are assigned top-down, leaf
/// counts bottom-up, both with explicit stacks: texts of tens of
/// millions of bytes would overflow the native stack if this recursed.
pub(crate) fn annotate(tree: &mut SuffixTree) {
    let mut preorder: Vec<NodeId> = Vec::with_capacity(tree.node_count());
    let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

    while let Some((id, parent_depth)) = stack.pop() {
        let node = tree.node(id);
        let depth = parent_depth + node.edge_end() - node.edge_start();
        // The path label ends exactly at this edge's end, so one of its
        // occurrences starts `depth` positions before it.
        let repr = node.edge_end() - depth;

        let node = tree.node_mut(id);
        node.set_string_depth(depth);
        node.set_repr_suffix(repr);
        preorder.push(id);

        for (_, child) in tree.node(id).children().iter() {
            stack.push((child, depth));
        }
    }

    // Children precede their parent in reverse preorder.
    for &id in preorder.iter().rev() {
        let node = tree.node(id);
        let leaves = if node.is_leaf() {
            1
        } else {
            node.children()
                .iter()
                .map(|(_, child)| tree.node(child).num_leaves())
                .sum()
        };
        tree.node_mut(id).set_num_leaves(leaves);
    }
}
