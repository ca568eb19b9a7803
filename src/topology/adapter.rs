//! Presentation adapter seam
//!
//! A `LayeredCollection` owns the topology bookkeeping; everything a
//! particular surface needs on top of that (panel labels, diagram glyphs,
//! the outbound data description) lives behind this trait. The collection
//! calls the adapter after its own state is already consistent, and always
//! hands over stable ids, never positions.

use super::layer::{Layer, LayerId, Node, NodeId};

/// Callbacks a mirror implements to track one `LayeredCollection`.
pub trait PresentationAdapter {
    /// A layer was appended. Its ordinal and label are already final;
    /// its nodes arrive through `node_added` afterwards.
    fn layer_added(&mut self, layer: &Layer);

    /// A node was appended to `layer`. The node is already part of the
    /// layer's node sequence.
    fn node_added(&mut self, layer: &Layer, node: &Node);

    /// The layer with this id was removed. Relabeling of the survivors
    /// follows as separate `layer_relabeled` calls.
    fn layer_removed(&mut self, id: LayerId);

    /// The node with this id was removed from the layer with id `layer`.
    fn node_removed(&mut self, layer: LayerId, node: NodeId);

    /// Renumbering moved this layer to a new 1-based ordinal.
    fn layer_relabeled(&mut self, id: LayerId, ordinal: usize, label: &str);
}

/// Adapter-less operation, for headless use of a collection.
impl PresentationAdapter for () {
    fn layer_added(&mut self, _layer: &Layer) {}
    fn node_added(&mut self, _layer: &Layer, _node: &Node) {}
    fn layer_removed(&mut self, _id: LayerId) {}
    fn node_removed(&mut self, _layer: LayerId, _node: NodeId) {}
    fn layer_relabeled(&mut self, _id: LayerId, _ordinal: usize, _label: &str) {}
}
