use std::collections::HashMap;

use serde::Deserialize;

use super::{Item, AIR, AIR_TYPE_ID};

/// Server-side item types, keyed by their symbolic id. The same for every protocol
/// version; network ids live in the per-version dictionaries.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    by_string_id: HashMap<String, u16>,
    by_type_id: HashMap<u16, String>,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct ItemRegistryFile(HashMap<String, u16>);

impl ItemRegistry {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u16)>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        registry.register(AIR, AIR_TYPE_ID);
        for (string_id, type_id) in entries {
            registry.register(string_id, type_id);
        }
        registry
    }

    /// Parses `{ "minecraft:stone": 1, ... }`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let file: ItemRegistryFile = serde_json::from_str(json)?;
        Ok(Self::new(file.0))
    }

    fn register(&mut self, string_id: impl Into<String>, type_id: u16) {
        let string_id = string_id.into();
        if let Some(previous) = self.by_type_id.insert(type_id, string_id.clone()) {
            if previous != string_id {
                log::warn!("Item type id {type_id} is shared by {previous} and {string_id}");
                self.by_string_id.remove(&previous);
            }
        }
        self.by_string_id.insert(string_id, type_id);
    }

    pub fn len(&self) -> usize {
        self.by_string_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_string_id.is_empty()
    }

    pub fn type_id(&self, string_id: &str) -> Option<u16> {
        self.by_string_id.get(string_id).copied()
    }

    pub fn string_id(&self, type_id: u16) -> Option<&str> {
        self.by_type_id.get(&type_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.by_string_id
            .iter()
            .map(|(string_id, type_id)| (string_id.as_str(), *type_id))
    }

    /// Creates a single item of the given type, or `None` if the type is not registered.
    pub fn create(&self, string_id: &str, type_data: u16) -> Option<Item> {
        if string_id == AIR {
            return Some(Item::air());
        }
        self.type_id(string_id)
            .map(|type_id| Item::new(type_id, string_id, type_data))
    }
}
