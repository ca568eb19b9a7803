//! Viewport mirror
//!
//! Mirrors the diagram: one column per layer, one glyph per node. Glyphs
//! carry the interaction state the renderer turns into hover/selection
//! styling. At most one glyph is selected at a time; selecting a glyph
//! returns every other selected glyph to idle.

use crate::topology::{Layer, LayerId, Node, NodeId, PresentationAdapter};

/// Interaction state of a node glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeState {
    #[default]
    Idle,
    Hover,
    Selected,
}

/// A single node's visual stand-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeGlyph {
    id: NodeId,
    state: NodeState,
}

impl NodeGlyph {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn state(&self) -> NodeState {
        self.state
    }
}

/// One diagram column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerColumn {
    id: LayerId,
    ordinal: usize,
    glyphs: Vec<NodeGlyph>,
}

impl LayerColumn {
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn glyphs(&self) -> &[NodeGlyph] {
        &self.glyphs
    }
}

/// The diagram surface.
#[derive(Debug, Default)]
pub struct ViewportScene {
    columns: Vec<LayerColumn>,
}

impl ViewportScene {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, index: usize) -> Option<&LayerColumn> {
        self.columns.get(index)
    }

    pub fn columns(&self) -> &[LayerColumn] {
        &self.columns
    }

    /// Position of the currently selected glyph, if any.
    pub fn selected(&self) -> Option<(usize, usize)> {
        for (l, column) in self.columns.iter().enumerate() {
            for (n, glyph) in column.glyphs.iter().enumerate() {
                if glyph.state == NodeState::Selected {
                    return Some((l, n));
                }
            }
        }
        None
    }

    /// Select a glyph, returning every other glyph to idle. Callers
    /// validate indices; out-of-range positions are ignored here.
    pub(crate) fn select(&mut self, layer_index: usize, node_index: usize) {
        for (l, column) in self.columns.iter_mut().enumerate() {
            for (n, glyph) in column.glyphs.iter_mut().enumerate() {
                glyph.state = if (l, n) == (layer_index, node_index) {
                    NodeState::Selected
                } else {
                    NodeState::Idle
                };
            }
        }
    }

    /// Mark a glyph hovered, leaving any selection in place.
    pub(crate) fn hover(&mut self, layer_index: usize, node_index: usize) {
        if let Some(glyph) = self
            .columns
            .get_mut(layer_index)
            .and_then(|c| c.glyphs.get_mut(node_index))
        {
            if glyph.state == NodeState::Idle {
                glyph.state = NodeState::Hover;
            }
        }
    }

    /// Return every hovered glyph to idle (pointer left the diagram).
    pub(crate) fn clear_hover(&mut self) {
        for column in &mut self.columns {
            for glyph in &mut column.glyphs {
                if glyph.state == NodeState::Hover {
                    glyph.state = NodeState::Idle;
                }
            }
        }
    }

    fn column_mut(&mut self, id: LayerId) -> Option<&mut LayerColumn> {
        self.columns.iter_mut().find(|c| c.id == id)
    }
}

impl PresentationAdapter for ViewportScene {
    fn layer_added(&mut self, layer: &Layer) {
        self.columns.push(LayerColumn {
            id: layer.id(),
            ordinal: layer.ordinal(),
            glyphs: Vec::new(),
        });
    }

    fn node_added(&mut self, layer: &Layer, node: &Node) {
        if let Some(column) = self.column_mut(layer.id()) {
            column.glyphs.push(NodeGlyph {
                id: node.id(),
                state: NodeState::Idle,
            });
        }
    }

    fn layer_removed(&mut self, id: LayerId) {
        self.columns.retain(|c| c.id != id);
    }

    fn node_removed(&mut self, layer: LayerId, node: NodeId) {
        if let Some(column) = self.column_mut(layer) {
            column.glyphs.retain(|g| g.id != node);
        }
    }

    fn layer_relabeled(&mut self, id: LayerId, ordinal: usize, _label: &str) {
        if let Some(column) = self.column_mut(id) {
            column.ordinal = ordinal;
        }
    }
}
