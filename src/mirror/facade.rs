//! Synchronized facade
//!
//! Composes one `LayeredCollection` per mirror and forwards every mutating
//! call to all three in the same order with the same arguments, so they
//! advance through identical state transitions. Preconditions (index
//! validity, minimum guards) are checked once, up front, before anything
//! is forwarded: a refused operation must not be partially applied.

use tracing::{debug, warn};

use crate::error::{NetsketchError, Result};
use crate::topology::{Activation, LayeredCollection};
use crate::wire::{ProbeRequest, TopologySpec};

use super::control::ControlPanel;
use super::data::DataMirror;
use super::viewport::ViewportScene;

/// Layers in the session-start topology.
pub const DEFAULT_LAYERS: usize = 3;

/// Nodes per layer in the session-start topology.
pub const DEFAULT_NODES_PER_LAYER: usize = 3;

/// The editor's single source of mutation: three mirrors, one contract.
#[derive(Debug)]
pub struct SynchronizedFacade {
    control: LayeredCollection<ControlPanel>,
    viewport: LayeredCollection<ViewportScene>,
    data: LayeredCollection<DataMirror>,
}

impl SynchronizedFacade {
    /// Create an empty facade. Most callers want
    /// [`with_default_topology`](Self::with_default_topology) or
    /// [`from_spec`](Self::from_spec) instead.
    pub fn new() -> Self {
        Self {
            control: LayeredCollection::new(ControlPanel::default()),
            viewport: LayeredCollection::new(ViewportScene::default()),
            data: LayeredCollection::new(DataMirror::default()),
        }
    }

    /// Create the session-start topology.
    pub fn with_default_topology() -> Self {
        let mut facade = Self::new();
        facade.append_layers(DEFAULT_LAYERS, DEFAULT_NODES_PER_LAYER);
        facade
    }

    /// Rebuild a facade from a wire snapshot.
    pub fn from_spec(spec: &TopologySpec) -> Result<Self> {
        let mut facade = Self::new();
        facade.load(spec)?;
        Ok(facade)
    }

    // === Mutations (forwarded to all three mirrors) ===

    /// Append `count` layers of `nodes_per_layer` nodes each.
    pub fn append_layers(&mut self, count: usize, nodes_per_layer: usize) {
        self.control.append_layers(count, nodes_per_layer);
        self.viewport.append_layers(count, nodes_per_layer);
        self.data.append_layers(count, nodes_per_layer);
        self.check_mirrors();
    }

    /// Append `count` nodes to the layer at `layer_index`.
    pub fn append_nodes(&mut self, layer_index: usize, count: usize) -> Result<()> {
        self.control.check_layer_index(layer_index)?;
        self.control.append_nodes(layer_index, count)?;
        self.viewport.append_nodes(layer_index, count)?;
        self.data.append_nodes(layer_index, count)?;
        self.check_mirrors();
        Ok(())
    }

    /// Remove the layer at `layer_index` from all three mirrors, or from
    /// none of them when the minimum-one guard refuses.
    pub fn remove_layer(&mut self, layer_index: usize) -> Result<bool> {
        self.control.check_layer_index(layer_index)?;
        if !self.control.can_remove_layer() {
            warn!("the network has to contain at least one layer");
            return Ok(false);
        }

        let removed = self.control.remove_layer(layer_index)?
            && self.viewport.remove_layer(layer_index)?
            && self.data.remove_layer(layer_index)?;
        debug_assert!(removed, "guard was checked before forwarding");
        self.check_mirrors();
        Ok(removed)
    }

    /// Remove the last node of the layer at `layer_index` from all three
    /// mirrors, or from none of them.
    pub fn remove_node(&mut self, layer_index: usize) -> Result<bool> {
        self.control.check_layer_index(layer_index)?;
        if !self.control.can_remove_node(layer_index) {
            warn!(
                layer = layer_index,
                "the layer has to contain at least one node"
            );
            return Ok(false);
        }

        let removed = self.control.remove_node(layer_index)?
            && self.viewport.remove_node(layer_index)?
            && self.data.remove_node(layer_index)?;
        debug_assert!(removed, "guard was checked before forwarding");
        self.check_mirrors();
        Ok(removed)
    }

    /// Remove all layers down to the minimum of one, from the last index
    /// down to zero. The final refusal is what leaves the guard layer.
    pub fn wipe(&mut self) {
        debug!("wiping topology");
        for index in (0..self.layer_count()).rev() {
            // The last iteration is refused by the minimum-one guard
            let _ = self.remove_layer(index);
        }
    }

    /// Replace the whole topology with a wire snapshot.
    ///
    /// Wipes down to the one-layer minimum, appends every snapshot layer
    /// behind the leftover guard layer, then removes the guard; the
    /// one-layer invariant holds at every intermediate state. An empty
    /// snapshot is rejected and nothing changes.
    pub fn load(&mut self, spec: &TopologySpec) -> Result<()> {
        if spec.is_empty() {
            return Err(NetsketchError::MalformedTopology {
                reason: "topology has no layers".to_string(),
            });
        }

        self.wipe();
        let had_guard = self.layer_count() > 0;
        for layer in spec.layers() {
            self.append_layer_with(layer.activation, layer.neurons);
        }
        if had_guard {
            let removed = self.remove_layer(0)?;
            debug_assert!(removed, "snapshot layers outnumber the guard");
        }
        self.check_mirrors();
        debug!(layers = self.layer_count(), "loaded topology");
        Ok(())
    }

    fn append_layer_with(&mut self, activation: Activation, nodes_per_layer: usize) {
        self.control.append_layer_with(activation, nodes_per_layer);
        self.viewport.append_layer_with(activation, nodes_per_layer);
        self.data.append_layer_with(activation, nodes_per_layer);
    }

    // === Interaction pass-through (viewport only) ===

    /// Select a node in the viewport and produce the correlated probe
    /// request for the training service. Both indices are validated
    /// against the current topology.
    pub fn select_node(&mut self, layer_index: usize, node_index: usize) -> Result<ProbeRequest> {
        self.viewport.check_node_index(layer_index, node_index)?;
        self.viewport.adapter_mut().select(layer_index, node_index);
        Ok(ProbeRequest::new(layer_index, node_index))
    }

    /// Mark a node hovered.
    pub fn hover_node(&mut self, layer_index: usize, node_index: usize) -> Result<()> {
        self.viewport.check_node_index(layer_index, node_index)?;
        self.viewport.adapter_mut().hover(layer_index, node_index);
        Ok(())
    }

    /// Clear all hover styling.
    pub fn clear_hover(&mut self) {
        self.viewport.adapter_mut().clear_hover();
    }

    // === Reads ===

    pub fn layer_count(&self) -> usize {
        self.control.layer_count()
    }

    pub fn node_count(&self, layer_index: usize) -> Result<usize> {
        self.control.node_count(layer_index)
    }

    /// Display label of the layer at `index`.
    pub fn label(&self, index: usize) -> Option<String> {
        self.control.label(index)
    }

    pub fn control(&self) -> &ControlPanel {
        self.control.adapter()
    }

    pub fn viewport(&self) -> &ViewportScene {
        self.viewport.adapter()
    }

    pub fn data(&self) -> &DataMirror {
        self.data.adapter()
    }

    /// Snapshot of the data mirror in the wire shape.
    pub fn snapshot(&self) -> TopologySpec {
        self.data.adapter().to_spec()
    }

    /// Debug-build check that the three mirrors report identical shapes.
    fn check_mirrors(&self) {
        if cfg!(debug_assertions) {
            debug_assert_eq!(self.control.layer_count(), self.viewport.layer_count());
            debug_assert_eq!(self.control.layer_count(), self.data.layer_count());
            for i in 0..self.control.layer_count() {
                let control = self.control.layer(i).map(|l| l.node_count());
                let viewport = self.viewport.layer(i).map(|l| l.node_count());
                let data = self.data.layer(i).map(|l| l.node_count());
                debug_assert_eq!(control, viewport);
                debug_assert_eq!(control, data);
            }
        }
    }
}

impl Default for SynchronizedFacade {
    fn default() -> Self {
        Self::with_default_topology()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_topology() {
        let facade = SynchronizedFacade::with_default_topology();
        assert_eq!(facade.layer_count(), 3);
        for i in 0..3 {
            assert_eq!(facade.node_count(i).unwrap(), 3);
        }
    }

    #[test]
    fn test_refusal_leaves_all_mirrors_untouched() {
        let mut facade = SynchronizedFacade::new();
        facade.append_layers(1, 1);

        assert!(!facade.remove_layer(0).unwrap());
        assert!(!facade.remove_node(0).unwrap());

        assert_eq!(facade.control().len(), 1);
        assert_eq!(facade.viewport().len(), 1);
        assert_eq!(facade.data().len(), 1);
        assert_eq!(facade.data().neurons(0), Some(1));
    }

    #[test]
    fn test_wipe_leaves_exactly_one_layer() {
        let mut facade = SynchronizedFacade::with_default_topology();
        facade.wipe();

        assert_eq!(facade.layer_count(), 1);
        assert_eq!(facade.label(0).unwrap(), "Layer 1");
        assert_eq!(facade.data().keys(), vec!["layer 1"]);
    }

    #[test]
    fn test_load_replaces_topology() {
        let mut facade = SynchronizedFacade::with_default_topology();

        let mut spec = TopologySpec::new();
        spec.push(Activation::Sigmoid, 2);
        spec.push(Activation::Relu, 5);
        facade.load(&spec).unwrap();

        assert_eq!(facade.layer_count(), 2);
        assert_eq!(facade.node_count(0).unwrap(), 2);
        assert_eq!(facade.node_count(1).unwrap(), 5);
        assert_eq!(facade.snapshot(), spec);
    }

    #[test]
    fn test_load_empty_spec_rejected_and_state_kept() {
        let mut facade = SynchronizedFacade::with_default_topology();
        let err = facade.load(&TopologySpec::new()).unwrap_err();

        assert_eq!(err.error_code(), "MALFORMED_TOPOLOGY");
        assert_eq!(facade.layer_count(), 3);
    }

    #[test]
    fn test_select_node_produces_probe() {
        let mut facade = SynchronizedFacade::with_default_topology();

        let probe = facade.select_node(1, 2).unwrap();
        assert_eq!(probe.layer_index, 1);
        assert_eq!(probe.node_index, 2);
        assert_eq!(facade.viewport().selected(), Some((1, 2)));
    }

    #[test]
    fn test_select_node_out_of_range() {
        let mut facade = SynchronizedFacade::with_default_topology();

        let err = facade.select_node(0, 3).unwrap_err();
        assert_eq!(err.error_code(), "NODE_OUT_OF_RANGE");
        assert_eq!(facade.viewport().selected(), None);
    }
}
