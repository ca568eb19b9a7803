//! Control-panel mirror
//!
//! Mirrors the side-panel layer list: one entry per layer with its label
//! text, a collapsible node list ("Node 1", "Node 2", ...) and a collapsed
//! flag driven by the drop-down button. Node labels never need renumbering
//! because only the last node of a layer can be removed.

use crate::topology::{Layer, LayerId, Node, NodeId, PresentationAdapter};

/// One row of the layer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerEntry {
    id: LayerId,
    label: String,
    collapsed: bool,
    node_labels: Vec<String>,
}

impl LayerEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn node_labels(&self) -> &[String] {
        &self.node_labels
    }
}

/// The control-panel surface.
#[derive(Debug, Default)]
pub struct ControlPanel {
    entries: Vec<LayerEntry>,
}

impl ControlPanel {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&LayerEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[LayerEntry] {
        &self.entries
    }

    /// Labels in display order, top to bottom.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Toggle a layer's node list open or closed. Returns the new
    /// collapsed state, or `None` for an unknown index.
    pub fn toggle_collapsed(&mut self, index: usize) -> Option<bool> {
        let entry = self.entries.get_mut(index)?;
        entry.collapsed = !entry.collapsed;
        Some(entry.collapsed)
    }

    /// Plain-text rendering of the panel, used by the CLI.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.label);
            out.push('\n');
            for node in &entry.node_labels {
                out.push_str("  ");
                out.push_str(node);
                out.push('\n');
            }
        }
        out
    }

    fn entry_mut(&mut self, id: LayerId) -> Option<&mut LayerEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}

impl PresentationAdapter for ControlPanel {
    fn layer_added(&mut self, layer: &Layer) {
        self.entries.push(LayerEntry {
            id: layer.id(),
            label: layer.label(),
            // New layers start with the node list hidden
            collapsed: true,
            node_labels: Vec::new(),
        });
    }

    fn node_added(&mut self, layer: &Layer, _node: &Node) {
        if let Some(entry) = self.entry_mut(layer.id()) {
            let next = entry.node_labels.len() + 1;
            entry.node_labels.push(format!("Node {}", next));
        }
    }

    fn layer_removed(&mut self, id: LayerId) {
        self.entries.retain(|e| e.id != id);
    }

    fn node_removed(&mut self, layer: LayerId, _node: NodeId) {
        if let Some(entry) = self.entry_mut(layer) {
            entry.node_labels.pop();
        }
    }

    fn layer_relabeled(&mut self, id: LayerId, _ordinal: usize, label: &str) {
        if let Some(entry) = self.entry_mut(id) {
            entry.label = label.to_string();
        }
    }
}
