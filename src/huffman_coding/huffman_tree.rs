//! Building, coding and serializing the huffman tree.
//!
//! The tree is an owned recursive value: a node is either a leaf holding one byte value, or a pair
//! of boxed children. It has at most 256 leaves, so recursion depth is never a concern.
//!
//! Serialized form (preorder): a leaf is a 1 bit followed by its byte, an internal node is a 0 bit
//! followed by its left then right subtree.
//!
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::tools::freq_count::freqs;

/// Occurrence count of every byte value present in the data.
pub type FrequencyTable = FxHashMap<u8, u32>;

/// Huffman code (left = false, right = true) of every byte value in the tree.
pub type CodeTable = FxHashMap<u8, Vec<bool>>;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Creation order, used to break weight ties in the priority queue.
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    /// Create a leaf for a byte value
    pub fn leaf(sym: u8) -> Node {
        Node::new(0, sym as u32, NodeData::Leaf(sym))
    }

    /// Create an internal node over two subtrees
    pub fn kids(left: Node, right: Node) -> Node {
        Node::new(
            left.weight + right.weight,
            0,
            NodeData::Kids(Box::new(left), Box::new(right)),
        )
    }

    /// True if this node holds a byte value rather than two subtrees.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing sequence, so the max-heap pops the
    /// lightest (and then oldest) node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Count the occurrences of each byte value present in the data.
pub fn get_frequencies(data: &[u8]) -> FrequencyTable {
    freqs(data)
        .iter()
        .enumerate()
        .filter(|(_, &f)| f > 0)
        .map(|(sym, &f)| (sym as u8, f))
        .collect()
}

/// Build the huffman tree by repeatedly merging the two lightest nodes. Returns None for an
/// empty table; a single symbol gives a tree that is just one leaf.
pub fn build_tree(frequencies: &FrequencyTable) -> Option<Node> {
    // Seed the queue in ascending byte order so the result does not depend on hash order.
    let mut syms = frequencies.iter().map(|(&s, &f)| (s, f)).collect::<Vec<_>>();
    syms.sort_unstable();

    let mut heap = syms
        .into_iter()
        .map(|(sym, f)| Node::new(f as u64, sym as u32, NodeData::Leaf(sym)))
        .collect::<BinaryHeap<Node>>();

    // Merged nodes are numbered after the 256 possible leaves.
    let mut seq = 256;
    while heap.len() > 1 {
        let left = heap.pop()?;
        let right = heap.pop()?;
        let mut node = Node::kids(left, right);
        node.seq = seq;
        seq += 1;
        heap.push(node);
    }
    heap.pop()
}

/// Assign codes by walking the tree: left adds a 0, right adds a 1. A tree that is a single
/// leaf gets the one bit code "1".
pub fn build_codes(tree: &Node) -> CodeTable {
    let mut codes = CodeTable::default();
    let mut code = if tree.is_leaf() {
        vec![true]
    } else {
        Vec::with_capacity(16)
    };
    collect_codes(tree, &mut code, &mut codes);
    codes
}

/// Recursively walk the tree and record the path to every leaf.
fn collect_codes(node: &Node, code: &mut Vec<bool>, codes: &mut CodeTable) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            code.push(false);
            collect_codes(left, code, codes);
            code.pop();
            code.push(true);
            collect_codes(right, code, codes);
            code.pop();
        }
        NodeData::Leaf(sym) => {
            codes.insert(*sym, code.clone());
        }
    };
}

/// Write the tree in preorder.
pub fn encode_tree(node: &Node, bw: &mut BitWriter) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            bw.write_bit(false);
            encode_tree(left, bw);
            encode_tree(right, bw);
        }
        NodeData::Leaf(sym) => {
            bw.write_bit(true);
            bw.write_byte(*sym);
        }
    }
}

/// Read a tree written by encode_tree. Returns None if the stream ends first.
pub fn decode_tree(br: &mut BitReader) -> Option<Node> {
    if br.read_bit()? {
        return Some(Node::leaf(br.read_byte()?));
    }
    let left = decode_tree(br)?;
    let right = decode_tree(br)?;
    Some(Node::kids(left, right))
}
