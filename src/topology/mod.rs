//! Topology Model Module
//!
//! The ordered layers-of-nodes model behind the diagram editor:
//! - `Layer` / `Node`: positional elements with stable identifiers
//! - `LayeredCollection`: the ordered collection with renumbering
//! - `PresentationAdapter`: the seam a mirror implements to stay in step

mod adapter;
mod collection;
mod layer;

pub use adapter::PresentationAdapter;
pub use collection::{LayeredCollection, MIN_LAYERS, MIN_NODES_PER_LAYER};
pub use layer::{Activation, Layer, LayerId, Node, NodeId};
