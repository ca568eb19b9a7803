//! Generic layered collection
//!
//! One implementation backs all three mirrors of the editor. The delicate
//! part is renumbering: every caller addresses layers by the position it
//! read off the screen at click time, so after any removal the survivors
//! must shift down and report new labels before the next call arrives.

use tracing::{debug, warn};

use crate::error::{NetsketchError, Result};

use super::adapter::PresentationAdapter;
use super::layer::{Activation, Layer, LayerId, Node, NodeId};

/// The network may never be emptied below this many layers.
pub const MIN_LAYERS: usize = 1;

/// A layer may never be emptied below this many nodes.
pub const MIN_NODES_PER_LAYER: usize = 1;

/// An ordered collection of layers, each an ordered collection of nodes,
/// mirrored into a presentation surface through `A`.
#[derive(Debug)]
pub struct LayeredCollection<A: PresentationAdapter> {
    layers: Vec<Layer>,
    adapter: A,
    next_layer_id: u64,
    next_node_id: u64,
}

impl<A: PresentationAdapter> LayeredCollection<A> {
    /// Create an empty collection wrapping the given presentation surface.
    pub fn new(adapter: A) -> Self {
        Self {
            layers: Vec::new(),
            adapter,
            next_layer_id: 0,
            next_node_id: 0,
        }
    }

    // === Mutations ===

    /// Append `count` layers, each pre-populated with `nodes_per_layer`
    /// nodes, at the end of the collection. Counts below one are treated
    /// as one, matching the control surface's "add" buttons.
    pub fn append_layers(&mut self, count: usize, nodes_per_layer: usize) {
        let count = count.max(1);
        for _ in 0..count {
            self.append_layer_with(Activation::default(), nodes_per_layer);
        }
    }

    /// Append a single layer with an explicit activation kind. Used when
    /// rebuilding from a wire snapshot, which may carry non-default kinds.
    pub fn append_layer_with(&mut self, activation: Activation, nodes_per_layer: usize) {
        let id = self.alloc_layer_id();
        let ordinal = self.layers.len() + 1;
        let layer = Layer::new(id, ordinal, activation);
        self.adapter.layer_added(&layer);
        self.layers.push(layer);

        let index = self.layers.len() - 1;
        // The index is the layer just pushed, so this cannot be out of range.
        let _ = self.append_nodes(index, nodes_per_layer);
        debug!(ordinal, nodes = nodes_per_layer.max(1), "appended layer");
    }

    /// Append `count` nodes to the layer at `layer_index`.
    pub fn append_nodes(&mut self, layer_index: usize, count: usize) -> Result<()> {
        self.check_layer_index(layer_index)?;
        let count = count.max(1);
        for _ in 0..count {
            let node = Node::new(self.alloc_node_id());
            self.layers[layer_index].push_node(node.clone());
            self.adapter.node_added(&self.layers[layer_index], &node);
        }
        Ok(())
    }

    /// Remove the layer at `layer_index`.
    ///
    /// Returns `Ok(true)` on removal, `Ok(false)` when the minimum-one
    /// guard refuses (the collection is left untouched), and
    /// `Err(LayerOutOfRange)` when the index does not refer to a current
    /// layer. On removal every subsequent layer is renumbered.
    pub fn remove_layer(&mut self, layer_index: usize) -> Result<bool> {
        self.check_layer_index(layer_index)?;
        if !self.can_remove_layer() {
            warn!("the network has to contain at least one layer");
            return Ok(false);
        }

        let layer = self.layers.remove(layer_index);
        self.adapter.layer_removed(layer.id());
        self.renumber();
        debug!(index = layer_index, "removed layer");
        Ok(true)
    }

    /// Remove the last node of the layer at `layer_index`.
    ///
    /// Same contract as `remove_layer`: `Ok(false)` when the layer is
    /// already at its minimum of one node.
    pub fn remove_node(&mut self, layer_index: usize) -> Result<bool> {
        self.check_layer_index(layer_index)?;
        if !self.can_remove_node(layer_index) {
            warn!(
                layer = layer_index,
                "the layer has to contain at least one node"
            );
            return Ok(false);
        }

        let layer = &mut self.layers[layer_index];
        let layer_id = layer.id();
        if let Some(node) = layer.pop_node() {
            self.adapter.node_removed(layer_id, node.id());
            debug!(layer = layer_index, "removed node");
        }
        Ok(true)
    }

    /// Re-derive every layer's display ordinal from its current position.
    /// Idempotent: a second consecutive call changes nothing and emits no
    /// mirror callbacks.
    pub(crate) fn renumber(&mut self) {
        for (i, layer) in self.layers.iter_mut().enumerate() {
            if layer.set_ordinal(i + 1) {
                self.adapter
                    .layer_relabeled(layer.id(), layer.ordinal(), &layer.label());
            }
        }
    }

    // === Guards ===

    /// Whether a layer removal would be allowed right now.
    pub fn can_remove_layer(&self) -> bool {
        self.layers.len() > MIN_LAYERS
    }

    /// Whether a node removal from `layer_index` would be allowed right
    /// now. False for an invalid index; callers that care about the
    /// distinction validate the index first.
    pub fn can_remove_node(&self, layer_index: usize) -> bool {
        self.layers
            .get(layer_index)
            .is_some_and(|l| l.node_count() > MIN_NODES_PER_LAYER)
    }

    pub(crate) fn check_layer_index(&self, index: usize) -> Result<()> {
        if index < self.layers.len() {
            Ok(())
        } else {
            Err(NetsketchError::LayerOutOfRange {
                index,
                layer_count: self.layers.len(),
            })
        }
    }

    pub(crate) fn check_node_index(&self, layer_index: usize, index: usize) -> Result<()> {
        self.check_layer_index(layer_index)?;
        let node_count = self.layers[layer_index].node_count();
        if index < node_count {
            Ok(())
        } else {
            Err(NetsketchError::NodeOutOfRange {
                layer_index,
                index,
                node_count,
            })
        }
    }

    // === Reads ===

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Node count of the layer at `index`.
    pub fn node_count(&self, index: usize) -> Result<usize> {
        self.check_layer_index(index)?;
        Ok(self.layers[index].node_count())
    }

    /// Display label of the layer at `index`, e.g. `"Layer 3"`.
    pub fn label(&self, index: usize) -> Option<String> {
        self.layers.get(index).map(|l| l.label())
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn alloc_layer_id(&mut self) -> LayerId {
        let id = LayerId(self.next_layer_id);
        self.next_layer_id += 1;
        id
    }

    fn alloc_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }
}

impl Default for LayeredCollection<()> {
    fn default() -> Self {
        Self::new(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Adapter that records every callback, for asserting call order and
    /// that unmoved layers get no relabel events.
    #[derive(Debug, Default)]
    struct RecordingAdapter {
        events: Vec<String>,
    }

    impl PresentationAdapter for RecordingAdapter {
        fn layer_added(&mut self, layer: &Layer) {
            self.events.push(format!("layer+ {}", layer.label()));
        }

        fn node_added(&mut self, layer: &Layer, _node: &Node) {
            self.events
                .push(format!("node+ {} #{}", layer.label(), layer.node_count()));
        }

        fn layer_removed(&mut self, id: LayerId) {
            self.events.push(format!("layer- {:?}", id));
        }

        fn node_removed(&mut self, layer: LayerId, _node: NodeId) {
            self.events.push(format!("node- {:?}", layer));
        }

        fn layer_relabeled(&mut self, _id: LayerId, _ordinal: usize, label: &str) {
            self.events.push(format!("relabel {}", label));
        }
    }

    fn collection() -> LayeredCollection<RecordingAdapter> {
        LayeredCollection::new(RecordingAdapter::default())
    }

    #[test]
    fn test_append_layers_from_empty() {
        let mut net = collection();
        net.append_layers(3, 3);

        assert_eq!(net.layer_count(), 3);
        for i in 0..3 {
            assert_eq!(net.node_count(i).unwrap(), 3);
            assert_eq!(net.label(i).unwrap(), format!("Layer {}", i + 1));
        }
    }

    #[test_case(0, 0 => (1, 1); "zero counts are clamped to one")]
    #[test_case(2, 4 => (2, 4); "explicit counts are honored")]
    fn test_append_layers_counts(count: usize, nodes: usize) -> (usize, usize) {
        let mut net = collection();
        net.append_layers(count, nodes);
        (net.layer_count(), net.node_count(0).unwrap())
    }

    #[test]
    fn test_append_nodes_out_of_range() {
        let mut net = collection();
        net.append_layers(2, 1);

        let err = net.append_nodes(5, 1).unwrap_err();
        assert_eq!(err.error_code(), "LAYER_OUT_OF_RANGE");
    }

    #[test]
    fn test_remove_layer_relabels_survivors() {
        let mut net = collection();
        net.append_layers(4, 1);

        assert!(net.remove_layer(1).unwrap());

        assert_eq!(net.layer_count(), 3);
        assert_eq!(net.label(0).unwrap(), "Layer 1");
        assert_eq!(net.label(1).unwrap(), "Layer 2");
        assert_eq!(net.label(2).unwrap(), "Layer 3");

        // Layer 1 never moved, so only the two shifted layers relabel
        let relabels: Vec<_> = net
            .adapter()
            .events
            .iter()
            .filter(|e| e.starts_with("relabel"))
            .collect();
        assert_eq!(relabels, vec!["relabel Layer 2", "relabel Layer 3"]);
    }

    #[test]
    fn test_remove_last_layer_refused() {
        let mut net = collection();
        net.append_layers(1, 2);

        assert!(!net.remove_layer(0).unwrap());
        assert_eq!(net.layer_count(), 1);
        assert_eq!(net.node_count(0).unwrap(), 2);
    }

    #[test]
    fn test_remove_layer_out_of_range() {
        let mut net = collection();
        net.append_layers(2, 1);

        assert!(net.remove_layer(2).is_err());
        assert_eq!(net.layer_count(), 2);
    }

    #[test]
    fn test_remove_node_removes_last() {
        let mut net = collection();
        net.append_layers(1, 3);

        assert!(net.remove_node(0).unwrap());
        assert_eq!(net.node_count(0).unwrap(), 2);
    }

    #[test]
    fn test_remove_only_node_refused() {
        let mut net = collection();
        net.append_layers(2, 1);

        assert!(!net.remove_node(1).unwrap());
        assert_eq!(net.node_count(1).unwrap(), 1);
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let mut net = collection();
        net.append_layers(4, 1);
        net.remove_layer(0).unwrap();

        let labels: Vec<_> = (0..net.layer_count()).map(|i| net.label(i).unwrap()).collect();
        let events_before = net.adapter().events.len();

        net.renumber();
        net.renumber();

        let labels_after: Vec<_> = (0..net.layer_count()).map(|i| net.label(i).unwrap()).collect();
        assert_eq!(labels, labels_after);
        // No further relabel callbacks once ordinals are settled
        assert_eq!(net.adapter().events.len(), events_before);
    }

    #[test]
    fn test_stable_ids_survive_renumbering() {
        let mut net = collection();
        net.append_layers(3, 1);
        let id_last = net.layer(2).unwrap().id();

        net.remove_layer(0).unwrap();

        // The former third layer is now "Layer 2" but keeps its id
        assert_eq!(net.layer(1).unwrap().id(), id_last);
        assert_eq!(net.layer(1).unwrap().label(), "Layer 2");
    }
}
