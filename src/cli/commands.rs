//! CLI command handlers
//!
//! Every mutating command follows the same shape: read the topology file,
//! rebuild the facade from it, apply the operation, write the data-mirror
//! snapshot back. A minimum-guard refusal prints the warning and leaves
//! the file untouched; it is not a process failure.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::mirror::SynchronizedFacade;
use crate::wire::TopologySpec;

/// Create a new topology file with the given shape.
pub fn init(path: &Path, layers: usize, nodes: usize) -> Result<()> {
    let mut facade = SynchronizedFacade::new();
    facade.append_layers(layers, nodes);
    save(path, &facade.snapshot())?;

    println!(
        "created {} ({} layers, {} nodes each)",
        path.display(),
        facade.layer_count(),
        nodes.max(1)
    );
    Ok(())
}

/// Append layers.
pub fn add_layer(path: &Path, count: usize, nodes: usize) -> Result<()> {
    let mut facade = load(path)?;
    facade.append_layers(count, nodes);
    save(path, &facade.snapshot())?;

    println!("network now has {} layers", facade.layer_count());
    Ok(())
}

/// Append nodes to a layer.
pub fn add_node(path: &Path, layer: usize, count: usize) -> Result<()> {
    let mut facade = load(path)?;
    facade.append_nodes(layer, count)?;
    save(path, &facade.snapshot())?;

    println!(
        "{} now has {} nodes",
        facade.label(layer).unwrap_or_default(),
        facade.node_count(layer)?
    );
    Ok(())
}

/// Remove a layer. A minimum-guard refusal is reported, not an error.
pub fn remove_layer(path: &Path, layer: usize) -> Result<()> {
    let mut facade = load(path)?;
    if facade.remove_layer(layer)? {
        save(path, &facade.snapshot())?;
        println!("network now has {} layers", facade.layer_count());
    } else {
        println!("the network has to contain at least one layer");
    }
    Ok(())
}

/// Remove the last node of a layer.
pub fn remove_node(path: &Path, layer: usize) -> Result<()> {
    let mut facade = load(path)?;
    if facade.remove_node(layer)? {
        save(path, &facade.snapshot())?;
        println!(
            "{} now has {} nodes",
            facade.label(layer).unwrap_or_default(),
            facade.node_count(layer)?
        );
    } else {
        println!("the layer has to contain at least one node");
    }
    Ok(())
}

/// Print the control-panel rendering of the topology.
pub fn show(path: &Path) -> Result<()> {
    let facade = load(path)?;
    print!("{}", facade.control().render_text());
    println!("{} layers", facade.layer_count());
    Ok(())
}

/// Send the topology to the training service and store the echoed
/// (possibly adjusted) topology back into the file.
#[cfg(feature = "training-bridge")]
pub fn send(path: &Path, url: Option<&str>) -> Result<()> {
    use crate::bridge::TrainingBridge;

    let mut facade = load(path)?;
    let bridge = match url {
        Some(url) => TrainingBridge::new(url)?,
        None => TrainingBridge::from_env()?,
    };

    let echo = bridge.submit_topology(&facade.snapshot())?;
    facade.load(&echo)?;
    save(path, &facade.snapshot())?;

    println!(
        "training service accepted {} layers",
        facade.layer_count()
    );
    Ok(())
}

fn load(path: &Path) -> Result<SynchronizedFacade> {
    let text = fs::read_to_string(path)?;
    let spec = TopologySpec::from_json(&text)?;
    info!(path = %path.display(), layers = spec.len(), "loaded topology file");
    SynchronizedFacade::from_spec(&spec)
}

fn save(path: &Path, spec: &TopologySpec) -> Result<()> {
    fs::write(path, spec.to_json()?)?;
    info!(path = %path.display(), layers = spec.len(), "saved topology file");
    Ok(())
}
