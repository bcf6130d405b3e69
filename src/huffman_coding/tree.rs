use log::{debug, trace};

use super::code_table::CodeTable;
use super::priority_queue::{Priority, PriorityQueue};
use crate::tools::freq_count::FrequencyTable;

/// A node of the code tree. Parents own their children outright; no subtree is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        weight: u64,
        symbol: u8,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol of a leaf, None for an internal node.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Child selected by a bit: false (0) is left, true (1) is right. Leaves have no children.
    pub fn branch(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn count_nodes(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => 1 + left.count_nodes() + right.count_nodes(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Combine two nodes; `a` is the one that sorts first and becomes the `0` branch.
    /// Weights are bounded by the table total, which `FrequencyTable` keeps within a u64.
    fn merge(a: Node, b: Node) -> Node {
        Node::Internal {
            weight: a.weight() + b.weight(),
            left: Box::new(a),
            right: Box::new(b),
        }
    }
}

/// Huffman code tree. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeTree {
    /// Two or more distinct symbols.
    Branching(Node),
    /// Exactly one distinct symbol: a synthetic root whose `0` branch is that leaf and whose
    /// `1` branch does not exist, so the symbol still gets a 1-bit code.
    Single(Node),
}

impl CodeTree {
    /// Build the tree for a frequency table. Returns None when every count is zero.
    ///
    /// One leaf is queued per present symbol. The two smallest nodes are then repeatedly
    /// merged, the first one extracted going left, until a single root remains.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Option<CodeTree> {
        let mut queue = PriorityQueue::new();
        for (symbol, weight) in freqs.present() {
            queue.insert(Node::Leaf { weight, symbol }, Priority::leaf(weight, symbol));
        }

        match queue.len() {
            0 => {
                debug!("No symbols present, no tree built.");
                None
            }
            1 => {
                let (leaf, _) = queue.extract_min();
                debug!(
                    "Single symbol {} (weight {}), using a synthetic root.",
                    leaf.symbol().unwrap_or_default(),
                    leaf.weight()
                );
                Some(CodeTree::Single(leaf))
            }
            leaves => {
                let mut seq: u16 = 0;
                while queue.len() > 1 {
                    let (a, pa) = queue.extract_min();
                    let (b, pb) = queue.extract_min();
                    let merged = Node::merge(a, b);
                    trace!(
                        "Merge {}: {:?} + {:?} -> weight {}",
                        seq,
                        pa,
                        pb,
                        merged.weight()
                    );
                    let priority = Priority::internal(merged.weight(), seq);
                    queue.insert(merged, priority);
                    seq += 1;
                }
                let (root, _) = queue.extract_min();
                debug!(
                    "Built tree from {} symbols: weight {}, depth {}.",
                    leaves,
                    root.weight(),
                    root.depth()
                );
                Some(CodeTree::Branching(root))
            }
        }
    }

    /// Build the tree directly from input bytes.
    pub fn from_bytes(data: &[u8]) -> Option<CodeTree> {
        CodeTree::from_frequencies(&FrequencyTable::from_bytes(data))
    }

    /// Child of the root selected by a bit. None for the missing `1` branch of a single-symbol root.
    pub fn root_branch(&self, bit: bool) -> Option<&Node> {
        match self {
            CodeTree::Branching(root) => root.branch(bit),
            CodeTree::Single(leaf) => (!bit).then_some(leaf),
        }
    }

    /// Total weight at the root, equal to the length of the input the tree was built from.
    pub fn weight(&self) -> u64 {
        match self {
            CodeTree::Branching(root) => root.weight(),
            CodeTree::Single(leaf) => leaf.weight(),
        }
    }

    /// Number of nodes including the synthetic root of a single-symbol tree.
    pub fn node_count(&self) -> usize {
        match self {
            CodeTree::Branching(root) => root.count_nodes(),
            CodeTree::Single(_) => 2,
        }
    }

    /// Longest code length.
    pub fn depth(&self) -> usize {
        match self {
            CodeTree::Branching(root) => root.depth(),
            CodeTree::Single(_) => 1,
        }
    }

    /// Walk the tree and produce the code for every leaf.
    pub fn code_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }

    /// Indented text view of the tree, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            CodeTree::Branching(root) => render_node(root, 0, "root", &mut out),
            CodeTree::Single(leaf) => {
                out.push_str(&format!("root-> Internal [weight: {}]\n", leaf.weight()));
                render_node(leaf, 1, "0", &mut out);
            }
        }
        out
    }
}

fn render_node(node: &Node, depth: usize, label: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { weight, symbol } => {
            out.push_str(&format!(
                "{}{}-> Leaf: {} [weight: {}]\n",
                indent,
                label,
                crate::tools::report::symbol_label(*symbol),
                weight
            ));
        }
        Node::Internal {
            weight,
            left,
            right,
        } => {
            out.push_str(&format!("{}{}-> Internal [weight: {}]\n", indent, label, weight));
            render_node(left, depth + 1, "0", out);
            render_node(right, depth + 1, "1", out);
        }
    }
}
