//! Facade Synchronization Tests
//!
//! End-to-end checks that the three mirrors advance through identical
//! state transitions under arbitrary edit sequences, including refused
//! operations.

use netsketch::mirror::SynchronizedFacade;
use netsketch::topology::Activation;
use netsketch::wire::TopologySpec;

/// Assert all three mirrors report the same shape, and that the control
/// labels / data keys follow the display-ordinal invariant.
fn assert_synchronized(facade: &SynchronizedFacade) {
    let layers = facade.layer_count();
    assert_eq!(facade.control().len(), layers);
    assert_eq!(facade.viewport().len(), layers);
    assert_eq!(facade.data().len(), layers);

    for i in 0..layers {
        let nodes = facade.node_count(i).unwrap();
        assert_eq!(facade.control().entry(i).unwrap().node_labels().len(), nodes);
        assert_eq!(facade.viewport().column(i).unwrap().glyphs().len(), nodes);
        assert_eq!(facade.data().neurons(i), Some(nodes));

        assert_eq!(
            facade.control().entry(i).unwrap().label(),
            format!("Layer {}", i + 1)
        );
        assert_eq!(facade.viewport().column(i).unwrap().ordinal(), i + 1);
        assert_eq!(facade.data().keys()[i], format!("layer {}", i + 1));
    }
}

#[test]
fn test_mirrors_agree_after_edit_sequence() {
    let mut facade = SynchronizedFacade::with_default_topology();
    assert_synchronized(&facade);

    facade.append_layers(2, 4);
    assert_synchronized(&facade);

    facade.append_nodes(0, 2).unwrap();
    assert_synchronized(&facade);

    assert!(facade.remove_layer(1).unwrap());
    assert_synchronized(&facade);

    assert!(facade.remove_node(3).unwrap());
    assert_synchronized(&facade);
}

#[test]
fn test_mirrors_agree_after_refusals() {
    let mut facade = SynchronizedFacade::new();
    facade.append_layers(1, 1);

    // Both guards refuse; nothing may be partially applied
    assert!(!facade.remove_layer(0).unwrap());
    assert!(!facade.remove_node(0).unwrap());
    assert_synchronized(&facade);
    assert_eq!(facade.layer_count(), 1);
    assert_eq!(facade.node_count(0).unwrap(), 1);
}

#[test]
fn test_out_of_range_is_an_error_not_a_refusal() {
    let mut facade = SynchronizedFacade::with_default_topology();

    assert!(facade.remove_layer(3).is_err());
    assert!(facade.append_nodes(7, 1).is_err());
    assert_synchronized(&facade);
}

#[test]
fn test_removal_relabels_every_survivor() {
    let mut facade = SynchronizedFacade::new();
    facade.append_layers(4, 1);

    assert!(facade.remove_layer(1).unwrap());

    assert_eq!(
        facade.control().labels(),
        vec!["Layer 1", "Layer 2", "Layer 3"]
    );
    assert_eq!(
        facade.data().keys(),
        vec!["layer 1", "layer 2", "layer 3"]
    );
    assert_synchronized(&facade);
}

#[test]
fn test_wipe_then_rebuild() {
    let mut facade = SynchronizedFacade::with_default_topology();
    facade.wipe();
    assert_eq!(facade.layer_count(), 1);
    assert_synchronized(&facade);

    facade.append_layers(2, 2);
    assert_eq!(facade.layer_count(), 3);
    assert_synchronized(&facade);
}

#[test]
fn test_snapshot_load_round_trip() {
    let mut facade = SynchronizedFacade::with_default_topology();
    facade.append_layers(1, 5);
    assert!(facade.remove_node(0).unwrap());

    let snapshot = facade.snapshot();

    let rebuilt = SynchronizedFacade::from_spec(&snapshot).unwrap();
    assert_eq!(rebuilt.layer_count(), facade.layer_count());
    for i in 0..facade.layer_count() {
        assert_eq!(
            rebuilt.node_count(i).unwrap(),
            facade.node_count(i).unwrap()
        );
    }
    assert_eq!(rebuilt.snapshot(), snapshot);
    assert_synchronized(&rebuilt);
}

#[test]
fn test_load_keeps_activations() {
    let mut spec = TopologySpec::new();
    spec.push(Activation::Relu, 2);
    spec.push(Activation::Sigmoid, 3);

    let facade = SynchronizedFacade::from_spec(&spec).unwrap();
    assert_eq!(facade.snapshot(), spec);
    assert_synchronized(&facade);
}

#[test]
fn test_selection_survives_unrelated_edits() {
    let mut facade = SynchronizedFacade::with_default_topology();
    facade.select_node(2, 1).unwrap();

    facade.append_layers(1, 1);
    assert_eq!(facade.viewport().selected(), Some((2, 1)));
}

#[test]
fn test_stale_index_after_removal_is_rejected() {
    let mut facade = SynchronizedFacade::new();
    facade.append_layers(2, 1);

    assert!(facade.remove_layer(1).unwrap());

    // The index that was valid a moment ago now points past the end
    let err = facade.remove_layer(1).unwrap_err();
    assert_eq!(err.error_code(), "LAYER_OUT_OF_RANGE");
    assert_synchronized(&facade);
}
