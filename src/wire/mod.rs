//! Wire contract with the training service
//!
//! The data mirror is exchanged as an ordered JSON mapping keyed
//! `"layer 1"`, `"layer 2"`, ... (1-based, contiguous), each value carrying
//! the layer's activation kind and neuron count:
//!
//! ```json
//! {
//!   "layer 1": { "activation": "sigmoid", "neurons": 3 },
//!   "layer 2": { "activation": "sigmoid", "neurons": 3 }
//! }
//! ```
//!
//! The backend either echoes an adjusted topology in the same shape, or
//! streams per-epoch progress correlated to a neuron-activation probe.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{NetsketchError, Result};
use crate::topology::Activation;

/// One layer as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub activation: Activation,
    pub neurons: usize,
}

/// An ordered topology description, the unit exchanged with the training
/// service. Order is positional; keys are derived on serialization and
/// validated on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopologySpec {
    layers: Vec<LayerSpec>,
}

impl TopologySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// The wire key for the layer at a 0-based position.
    pub fn key_for(position: usize) -> String {
        format!("layer {}", position + 1)
    }

    pub fn push(&mut self, activation: Activation, neurons: usize) {
        self.layers.push(LayerSpec {
            activation,
            neurons,
        });
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Serialize to the wire JSON shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse the wire JSON shape. Any parse or validation failure is a
    /// malformed topology; the caller's collections are left untouched.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| NetsketchError::MalformedTopology {
            reason: e.to_string(),
        })
    }
}

impl Serialize for TopologySpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.layers.len()))?;
        for (i, layer) in self.layers.iter().enumerate() {
            map.serialize_entry(&Self::key_for(i), layer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TopologySpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TopologyVisitor;

        impl<'de> Visitor<'de> for TopologyVisitor {
            type Value = TopologySpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ordered map of \"layer n\" entries")
            }

            fn visit_map<M: MapAccess<'de>>(
                self,
                mut access: M,
            ) -> std::result::Result<Self::Value, M::Error> {
                let mut spec = TopologySpec::new();
                while let Some((key, layer)) = access.next_entry::<String, LayerSpec>()? {
                    let expected = TopologySpec::key_for(spec.len());
                    if key != expected {
                        return Err(de::Error::custom(format!(
                            "unexpected topology key `{}`, expected `{}`",
                            key, expected
                        )));
                    }
                    if layer.neurons == 0 {
                        return Err(de::Error::custom(format!(
                            "`{}` has zero neurons",
                            key
                        )));
                    }
                    spec.layers.push(layer);
                }
                if spec.is_empty() {
                    return Err(de::Error::custom("topology has no layers"));
                }
                Ok(spec)
            }
        }

        deserializer.deserialize_map(TopologyVisitor)
    }
}

/// A neuron-activation probe, produced by selecting a node in the
/// viewport. Indices are 0-based; the id correlates progress messages
/// back to this probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeRequest {
    pub request_id: Uuid,
    pub layer_index: usize,
    pub node_index: usize,
}

impl ProbeRequest {
    pub fn new(layer_index: usize, node_index: usize) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            layer_index,
            node_index,
        }
    }
}

/// One per-epoch progress message from the training service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochProgress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    pub outputs: Vec<f64>,
    pub network_decision: String,
    pub label: String,
    pub epoch: u32,
}

impl EpochProgress {
    /// Whether this message answers the given probe.
    pub fn answers(&self, probe: &ProbeRequest) -> bool {
        self.request_id == Some(probe.request_id)
    }
}
