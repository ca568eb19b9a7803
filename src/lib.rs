//! Netsketch - Synchronized Topology Editor Core
//!
//! Netsketch keeps three parallel representations of an editable
//! neural-network topology in lock-step:
//! 1. Control panel - the layer list with labels and buttons
//! 2. Viewport - the diagram of node glyphs
//! 3. Data mirror - the JSON description sent to the training service
//!
//! # Architecture
//!
//! One generic [`topology::LayeredCollection`] implements the ordered
//! layers-of-nodes bookkeeping (appends, guarded removals, renumbering);
//! each mirror plugs in through a [`topology::PresentationAdapter`]. The
//! [`mirror::SynchronizedFacade`] composes the three collections and
//! forwards every mutation to all of them, all-or-none.

pub mod cli;
pub mod error;
pub mod mirror;
pub mod topology;
pub mod wire;

#[cfg(feature = "training-bridge")]
pub mod bridge;

pub use error::{NetsketchError, Result};
pub use mirror::SynchronizedFacade;
