use smallvec::SmallVec;

/// Dense arena handle. The arena owns every node; children, suffix links
/// and any other inter-node relation are plain indices into it.
pub type NodeId = usize;

/// Handle of the root node; the arena guarantees it exists.
pub const ROOT: NodeId = 0;

/// Ordered child table: `(first edge byte, child)` pairs kept sorted, so
/// that iteration always runs in ascending byte order. Most nodes have a
/// handful of children, hence the inline capacity.
#[derive(Debug, Clone, Default)]
pub struct ChildMap {
    slots: SmallVec<[(u8, NodeId); 4]>,
}

impl ChildMap {
    /// Child whose edge starts with `symbol`, if any.
    pub fn get(&self, symbol: u8) -> Option<NodeId> {
        self.slots
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .ok()
            .map(|i| self.slots[i].1)
    }

    /// Inserts or replaces the child slot for `symbol`.
    pub(crate) fn set(&mut self, symbol: u8, child: NodeId) {
        match self.slots.binary_search_by_key(&symbol, |&(s, _)| s) {
            Ok(i) => self.slots[i].1 = child,
            Err(i) => self.slots.insert(i, (symbol, child)),
        }
    }

    /// Children in ascending byte order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u8, NodeId)> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A single tree node. The edge label is `text[start..end)`; leaves keep
/// an open end (`None`) that reads as the construction frontier until the
/// builder finalizes every open end to the text length.
///
/// `depth`, `leaves` and `repr` are filled by the annotation pass after
/// construction and never change again.
#[derive(Debug, Clone)]
pub struct Node {
    start: usize,
    end: Option<usize>,
    children: ChildMap,
    link: NodeId,
    depth: usize,
    leaves: usize,
    repr: usize,
}

impl Node {
    fn new(start: usize, end: Option<usize>) -> Node {
        Node {
            start,
            end,
            children: ChildMap::default(),
            link: ROOT,
            depth: 0,
            leaves: 0,
            repr: 0,
        }
    }

    pub(crate) fn root() -> Node {
        Node::new(0, Some(0))
    }

    pub(crate) fn leaf(start: usize) -> Node {
        Node::new(start, None)
    }

    pub(crate) fn internal(start: usize, end: usize) -> Node {
        Node::new(start, Some(end))
    }

    /// Inclusive start of the edge label.
    pub fn edge_start(&self) -> usize {
        self.start
    }

    /// Exclusive end of the edge label. Valid once construction has
    /// finalized the open leaf ends.
    pub fn edge_end(&self) -> usize {
        self.end.expect("edge end read before finalization")
    }

    /// Exclusive edge end while construction is still running: open leaf
    /// ends read as the current frontier.
    pub(crate) fn end_at(&self, frontier: usize) -> usize {
        self.end.unwrap_or(frontier)
    }

    pub(crate) fn edge_len_at(&self, frontier: usize) -> usize {
        self.end_at(frontier) - self.start
    }

    pub(crate) fn set_edge_start(&mut self, start: usize) {
        self.start = start;
    }

    /// Closes an open end; already-closed edges are left alone.
    pub(crate) fn close_edge(&mut self, end: usize) {
        if self.end.is_none() {
            self.end = Some(end);
        }
    }

    /// Suffix link target. Meaningful for internal nodes only; defaults
    /// to the root.
    pub fn suffix_link(&self) -> NodeId {
        self.link
    }

    pub(crate) fn set_suffix_link(&mut self, to: NodeId) {
        self.link = to;
    }

    pub fn children(&self) -> &ChildMap {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut ChildMap {
        &mut self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total length of the path label from the root to this node.
    pub fn string_depth(&self) -> usize {
        self.depth
    }

    /// Number of leaves in this node's subtree; equals the number of
    /// occurrences of the path label in the text.
    pub fn num_leaves(&self) -> usize {
        self.leaves
    }

    /// Start of one suffix represented by a leaf below this node. The
    /// path label occurs at this position.
    pub fn repr_suffix(&self) -> usize {
        self.repr
    }

    pub(crate) fn set_string_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub(crate) fn set_num_leaves(&mut self, leaves: usize) {
        self.leaves = leaves;
    }

    pub(crate) fn set_repr_suffix(&mut self, repr: usize) {
        self.repr = repr;
    }
}
