//! Data mirror
//!
//! Mirrors the topology as the ordered wire description sent to the
//! training service. Keys follow display ordinals, so a renumbering pass
//! rewrites them exactly like the panel rewrites its labels.

use crate::topology::{Activation, Layer, LayerId, Node, NodeId, PresentationAdapter};
use crate::wire::TopologySpec;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DataEntry {
    id: LayerId,
    key: String,
    activation: Activation,
    neurons: usize,
}

/// The outbound-data surface.
#[derive(Debug, Default)]
pub struct DataMirror {
    entries: Vec<DataEntry>,
}

impl DataMirror {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wire keys in order, e.g. `["layer 1", "layer 2"]`.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    /// Neuron count recorded for the layer at `index`.
    pub fn neurons(&self, index: usize) -> Option<usize> {
        self.entries.get(index).map(|e| e.neurons)
    }

    /// Snapshot as the wire shape.
    pub fn to_spec(&self) -> TopologySpec {
        let mut spec = TopologySpec::new();
        for entry in &self.entries {
            spec.push(entry.activation, entry.neurons);
        }
        spec
    }

    fn entry_mut(&mut self, id: LayerId) -> Option<&mut DataEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}

impl PresentationAdapter for DataMirror {
    fn layer_added(&mut self, layer: &Layer) {
        self.entries.push(DataEntry {
            id: layer.id(),
            key: TopologySpec::key_for(layer.ordinal() - 1),
            activation: layer.activation(),
            neurons: 0,
        });
    }

    fn node_added(&mut self, layer: &Layer, _node: &Node) {
        if let Some(entry) = self.entry_mut(layer.id()) {
            entry.neurons += 1;
        }
    }

    fn layer_removed(&mut self, id: LayerId) {
        self.entries.retain(|e| e.id != id);
    }

    fn node_removed(&mut self, layer: LayerId, _node: NodeId) {
        if let Some(entry) = self.entry_mut(layer) {
            entry.neurons = entry.neurons.saturating_sub(1);
        }
    }

    fn layer_relabeled(&mut self, id: LayerId, ordinal: usize, _label: &str) {
        if let Some(entry) = self.entry_mut(id) {
            entry.key = TopologySpec::key_for(ordinal - 1);
        }
    }
}
