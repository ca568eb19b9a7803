//! Layer and node model
//!
//! Layers and nodes are addressed by position (0-based, contiguous), but
//! each carries a stable identifier so presentation mirrors never have to
//! resolve an index that may have shifted under them. Display ordinals are
//! derived from position and recomputed whenever the collection renumbers.

use serde::{Deserialize, Serialize};

/// Stable identifier for a layer. Unique within one collection and never
/// reused, even after the layer is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub(crate) u64);

/// Stable identifier for a node. Unique within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u64);

/// Activation kind attached to a layer.
///
/// The training backend understands `sigmoid` and `relu`; new layers
/// default to `sigmoid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Sigmoid,
    Relu,
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sigmoid => write!(f, "sigmoid"),
            Self::Relu => write!(f, "relu"),
        }
    }
}

/// A single neuron slot within a layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// An ordered group of nodes within the network topology
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    ordinal: usize,
    activation: Activation,
    nodes: Vec<Node>,
}

impl Layer {
    pub(crate) fn new(id: LayerId, ordinal: usize, activation: Activation) -> Self {
        Self {
            id,
            ordinal,
            activation,
            nodes: Vec::new(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    /// 1-based display ordinal. Equals the layer's 0-based position + 1
    /// whenever the collection invariant holds.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Display label, derived from the current ordinal.
    pub fn label(&self) -> String {
        format!("Layer {}", self.ordinal)
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Update the display ordinal. Returns whether it actually changed,
    /// so renumbering can skip mirror callbacks for unmoved layers.
    pub(crate) fn set_ordinal(&mut self, ordinal: usize) -> bool {
        if self.ordinal == ordinal {
            return false;
        }
        self.ordinal = ordinal;
        true
    }

    pub(crate) fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub(crate) fn pop_node(&mut self) -> Option<Node> {
        self.nodes.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_display_matches_wire_names() {
        assert_eq!(Activation::Sigmoid.to_string(), "sigmoid");
        assert_eq!(Activation::Relu.to_string(), "relu");
        assert_eq!(Activation::default(), Activation::Sigmoid);
    }

    #[test]
    fn test_activation_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Activation::Sigmoid).unwrap(),
            "\"sigmoid\""
        );
        let parsed: Activation = serde_json::from_str("\"relu\"").unwrap();
        assert_eq!(parsed, Activation::Relu);
    }

    #[test]
    fn test_layer_label_follows_ordinal() {
        let mut layer = Layer::new(LayerId(0), 2, Activation::Sigmoid);
        assert_eq!(layer.label(), "Layer 2");

        assert!(layer.set_ordinal(1));
        assert_eq!(layer.label(), "Layer 1");

        // Unchanged ordinal reports no change
        assert!(!layer.set_ordinal(1));
    }
}
