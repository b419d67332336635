use crate::annotate;
use crate::builder::Builder;
use crate::error::Result;
use crate::node::{Node, NodeId, ROOT};
use crate::repeat;
use crate::text::Text;
use crate::topk;

/// Suffix tree over a single byte text terminated by a caller-chosen
/// sentinel.
///
/// The tree is built once, annotated once, and read-only afterwards: all
/// queries take `&self` and a tree can be shared between threads once
/// construction has returned.
pub struct SuffixTree {
    text: Text,
    nodes: Vec<Node>,
}

impl SuffixTree {
    /// Builds the suffix tree for `input` with `sentinel` appended,
    /// using Ukkonen's online algorithm, and annotates every node with
    /// its string depth, leaf count and a representative suffix.
    ///
    /// Fails with [`IndexError::InvalidInput`](crate::IndexError) if the
    /// input is empty or already contains the sentinel byte.
    ///
    /// # Examples
    /// ```
    /// use text_index::SuffixTree;
    ///
    /// let tree = SuffixTree::build(b"banana", b'$').unwrap();
    /// assert_eq!(tree.len(), 7);
    /// assert!(SuffixTree::build(b"ban$na", b'$').is_err());
    /// ```
    pub fn build(input: &[u8], sentinel: u8) -> Result<SuffixTree> {
        let text = Text::new(input, sentinel)?;
        let mut tree = Builder::new(text).build();
        annotate::annotate(&mut tree);
        Ok(tree)
    }

    pub(crate) fn with_root(text: Text) -> SuffixTree {
        SuffixTree {
            text,
            nodes: vec![Node::root()],
        }
    }

    pub(crate) fn alloc_leaf(&mut self, start: usize) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::leaf(start));
        id
    }

    pub(crate) fn alloc_internal(&mut self, start: usize, end: usize) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::internal(start, end));
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub(crate) fn child(&self, parent: NodeId, symbol: u8) -> Option<NodeId> {
        self.nodes[parent].children().get(symbol)
    }

    pub(crate) fn set_child(&mut self, parent: NodeId, symbol: u8, child: NodeId) {
        self.nodes[parent].children_mut().set(symbol, child);
    }

    pub(crate) fn text_at(&self, index: usize) -> u8 {
        self.text.at(index)
    }

    /// Closes every still-open leaf end at the text length.
    pub(crate) fn finalize_leaf_ends(&mut self) {
        let n = self.text.len();
        for node in &mut self.nodes {
            node.close_edge(n);
        }
    }

    /// Indexed length, including the sentinel.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// The indexed byte sequence, sentinel included.
    pub fn text(&self) -> &[u8] {
        self.text.bytes()
    }

    /// The original input, without the sentinel.
    pub fn input(&self) -> &[u8] {
        self.text.input()
    }

    pub fn sentinel(&self) -> u8 {
        self.text.sentinel()
    }

    /// A view of `text[start..start + len)`.
    pub fn substring(&self, start: usize, len: usize) -> &[u8] {
        self.text.slice(start, start + len)
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The edge label leading into `id`.
    pub fn edge_label(&self, id: NodeId) -> &[u8] {
        let node = self.node(id);
        self.text.slice(node.edge_start(), node.edge_end())
    }

    /// Start position of the k-th most frequent substring of length
    /// exactly `l`, ties broken lexicographically (the smallest wins).
    ///
    /// # Examples
    /// ```
    /// use text_index::SuffixTree;
    ///
    /// let tree = SuffixTree::build(b"abracadabra", b'$').unwrap();
    /// // `a` occurs five times, more than any other single byte.
    /// assert_eq!(tree.top_k(1, 1).unwrap(), 0);
    /// // `abra` is the most frequent substring of length four.
    /// let start = tree.top_k(4, 1).unwrap();
    /// assert_eq!(tree.substring(start, 4), b"abra");
    /// ```
    pub fn top_k(&self, l: usize, k: usize) -> Result<usize> {
        topk::run(self, l, k)
    }

    /// `(start, length)` of a longest substring of the form `αα`, ties
    /// broken by earliest start. `(0, 0)` when the text has no tandem
    /// repeat at all.
    ///
    /// # Examples
    /// ```
    /// use text_index::SuffixTree;
    ///
    /// let tree = SuffixTree::build(b"banana", b'$').unwrap();
    /// assert_eq!(tree.longest_tandem_repeat(), (1, 4)); // `anan`
    /// ```
    pub fn longest_tandem_repeat(&self) -> (usize, usize) {
        repeat::run(self)
    }

    /// Returns true when `pattern` occurs in the indexed text.
    ///
    /// # Examples
    /// ```
    /// use text_index::SuffixTree;
    ///
    /// let tree = SuffixTree::build(b"banana", b'$').unwrap();
    /// assert!(tree.contains(b"nan"));
    /// assert!(!tree.contains(b"nab"));
    /// ```
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.find(pattern).is_some()
    }

    /// Position of one occurrence of `pattern`, found by walking the
    /// tree from the root. Complexity O(|pattern|).
    ///
    /// # Examples
    /// ```
    /// use text_index::SuffixTree;
    ///
    /// let tree = SuffixTree::build(b"banana", b'$').unwrap();
    /// assert_eq!(tree.find(b"nan"), Some(2));
    /// assert_eq!(tree.find(b"xyz"), None);
    /// ```
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        // The pattern is a prefix of the locus node's path label, so it
        // occurs wherever that label occurs.
        self.locus(pattern)
            .map(|id| self.node(id).repr_suffix())
    }

    /// All start positions of `pattern`, ascending.
    ///
    /// # Examples
    /// ```
    /// use text_index::SuffixTree;
    ///
    /// let tree = SuffixTree::build(b"banana", b'$').unwrap();
    /// assert_eq!(tree.find_all(b"ana"), vec![1, 3]);
    /// assert_eq!(tree.find_all(b"a"), vec![1, 3, 5]);
    /// assert!(tree.find_all(b"xyz").is_empty());
    /// ```
    pub fn find_all(&self, pattern: &[u8]) -> Vec<usize> {
        let locus = match self.locus(pattern) {
            Some(id) => id,
            None => return Vec::new(),
        };

        // Every leaf below the locus starts an occurrence.
        let mut starts = Vec::new();
        let mut stack = vec![locus];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                starts.push(node.repr_suffix());
                continue;
            }
            for (_, child) in node.children().iter() {
                stack.push(child);
            }
        }
        starts.sort_unstable();
        starts
    }

    /// Walks the pattern down from the root; returns the node whose
    /// path label the pattern ends in or at.
    fn locus(&self, pattern: &[u8]) -> Option<NodeId> {
        if pattern.is_empty() || pattern.len() >= self.len() {
            return None;
        }

        let mut node_id = ROOT;
        let mut matched = 0;
        while matched < pattern.len() {
            node_id = self.node(node_id).children().get(pattern[matched])?;
            let label = self.edge_label(node_id);
            let take = label.len().min(pattern.len() - matched);
            if label[..take] != pattern[matched..matched + take] {
                return None;
            }
            matched += take;
        }

        Some(node_id)
    }

    /// Suffix start positions in lexicographic order of the suffixes,
    /// read off the leaves left to right.
    pub fn suffix_array(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                order.push(node.repr_suffix());
                continue;
            }
            for (_, child) in node.children().iter().rev() {
                stack.push(child);
            }
        }
        order
    }

    /// Renders the tree with one branch per line. Debugging helper for
    /// small inputs.
    pub fn pretty_print(&self) -> String {
        fn render(tree: &SuffixTree, id: NodeId) -> Vec<String> {
            let text = if id == ROOT {
                String::new()
            } else {
                String::from_utf8_lossy(tree.edge_label(id)).into_owned()
            };

            if tree.node(id).is_leaf() {
                return vec![text];
            }

            let indent = " ".repeat(text.chars().count());
            let children: Vec<NodeId> = tree.node(id).children().iter().map(|(_, c)| c).collect();

            let mut lines = Vec::new();
            for (i, &child) in children.iter().enumerate() {
                for (j, line) in render(tree, child).into_iter().enumerate() {
                    let line = match (i, j) {
                        (0, 0) => format!("{}┳{}", text, line),
                        (_, 0) if i < children.len() - 1 => format!("{}┣{}", indent, line),
                        (_, _) if i < children.len() - 1 => format!("{}┃{}", indent, line),
                        (_, 0) => format!("{}┗{}", indent, line),
                        (_, _) => format!("{} {}", indent, line),
                    };

                    lines.push(line);
                }
            }

            lines
        }

        render(self, ROOT).join("\n")
    }
}
