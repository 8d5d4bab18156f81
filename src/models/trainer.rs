// Trainer data models
//
// Persisted layout (trainers.json): a top-level object keyed by user id,
// each value `{"pinventory": {"<name>": <count>, ...}, "timer": <epoch seconds> | false}`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

pub type TrainerData = HashMap<String, TrainerRecord>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainerRecord {
    pub pinventory: Pinventory,
    /// Epoch seconds of the last successful catch; `None` means never caught
    /// and is written to disk as the JSON literal `false`.
    #[serde(with = "timer_repr", default)]
    pub timer: Option<f64>,
}

/// Per-trainer inventory: pokemon name -> owned count.
///
/// Counts are >= 1 for present keys. Iteration order is insertion order, which
/// is what the inventory pages are sliced over, so this is backed by a vec
/// rather than a hash map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pinventory {
    entries: Vec<(String, u64)>,
}

impl Pinventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    /// Increments the count for `name`, inserting it at 1 if absent.
    pub fn add(&mut self, name: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((name.to_string(), 1)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total owned count across the whole inventory.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

impl Serialize for Pinventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Pinventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PinventoryVisitor;

        impl<'de> Visitor<'de> for PinventoryVisitor {
            type Value = Pinventory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of pokemon name to owned count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, count)) = access.next_entry::<String, u64>()? {
                    entries.push((name, count));
                }
                Ok(Pinventory { entries })
            }
        }

        deserializer.deserialize_map(PinventoryVisitor)
    }
}

/// Serde representation for the cooldown timer: a number on disk when set,
/// the literal `false` when the trainer has never caught anything.
mod timer_repr {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(timer: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match timer {
            Some(t) => serializer.serialize_f64(*t),
            None => serializer.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Bool(false) | serde_json::Value::Null => Ok(None),
            serde_json::Value::Number(n) => Ok(n.as_f64()),
            other => Err(D::Error::custom(format!(
                "expected a timestamp or false, got {}",
                other
            ))),
        }
    }
}
