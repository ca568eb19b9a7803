//! Mirror Module
//!
//! The three parallel representations of the topology and the facade that
//! keeps them in lock-step:
//! - `ControlPanel`: the button-list surface (labels, drop-downs)
//! - `ViewportScene`: the diagram surface (columns of node glyphs)
//! - `DataMirror`: the outbound wire description
//! - `SynchronizedFacade`: forwards every mutation to all three

mod control;
mod data;
mod facade;
mod viewport;

pub use control::{ControlPanel, LayerEntry};
pub use data::DataMirror;
pub use facade::{SynchronizedFacade, DEFAULT_LAYERS, DEFAULT_NODES_PER_LAYER};
pub use viewport::{LayerColumn, NodeGlyph, NodeState, ViewportScene};
