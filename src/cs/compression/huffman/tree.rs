use std::path::Path;

use super::frequency::FrequencyTable;
use super::queue::TreeQueue;
use crate::error::{Error, Result};

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a character and its frequency.
    Leaf { ch: char, freq: usize },
    /// An internal node with left and right children and combined weight.
    Internal {
        weight: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the weight of the node: a leaf's frequency, or the sum over an internal node's leaves.
    pub fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// The character held by a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffmanNode::Leaf { ch, .. } => Some(*ch),
            HuffmanNode::Internal { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Internal { left, .. } => Some(&**left),
            HuffmanNode::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Internal { right, .. } => Some(&**right),
            HuffmanNode::Leaf { .. } => None,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn height(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

/// A rooted Huffman tree together with its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
    weight: usize,
}

impl HuffmanTree {
    /// A single-leaf tree for one `(character, frequency)` pair.
    pub fn leaf(ch: char, freq: usize) -> Self {
        HuffmanTree {
            root: HuffmanNode::Leaf { ch, freq },
            weight: freq,
        }
    }

    /// Pairs two trees under a fresh internal root, `left` on the `0` branch.
    pub fn combine(left: HuffmanTree, right: HuffmanTree) -> Self {
        let weight = left.weight + right.weight;
        HuffmanTree {
            root: HuffmanNode::Internal {
                weight,
                left: Box::new(left.root),
                right: Box::new(right.root),
            },
            weight,
        }
    }

    /// Build the Huffman tree given a frequency table.
    ///
    /// The queue is seeded with one leaf per character in ascending character
    /// order; the two lightest trees are then merged, the first one removed
    /// becoming the left child, until a single tree remains. Among equal
    /// weights the earlier-inserted tree is removed first, so the shape is
    /// fully determined by the table.
    ///
    /// Returns [`Error::NoData`] if the frequency table is empty.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        let mut queue = TreeQueue::new();
        for (ch, freq) in freqs.iter() {
            queue.insert(HuffmanTree::leaf(ch, freq));
        }

        while let Some(first) = queue.remove_min() {
            let Some(second) = queue.remove_min() else {
                log::debug!(
                    "Huffman tree built: {} leaves, weight {}, height {}",
                    first.leaf_count(),
                    first.weight(),
                    first.height()
                );
                return Ok(first);
            };
            log::trace!(
                "Merging trees of weight {} and {}",
                first.weight(),
                second.weight()
            );
            queue.insert(HuffmanTree::combine(first, second));
        }
        Err(Error::NoData)
    }

    /// Counts the characters in the file at `path` and builds their tree.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::build(&FrequencyTable::from_path(path)?)
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    pub fn into_root(self) -> HuffmanNode {
        self.root
    }

    /// Sum of all leaf frequencies.
    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path; zero for a single leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }
}
