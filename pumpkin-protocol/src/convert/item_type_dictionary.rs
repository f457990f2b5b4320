use std::collections::HashMap;

use itertools::Itertools;
use serde::Deserialize;

use crate::{PROTOCOL_1_20_0, PROTOCOL_1_20_10, PROTOCOL_1_21_0, PROTOCOL_1_21_2};

use super::TypeConversionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTypeEntry {
    pub string_id: String,
    pub numeric_id: i32,
    pub component_based: bool,
}

#[derive(Deserialize)]
struct RequiredItem {
    runtime_id: i32,
    #[serde(default)]
    component_based: bool,
}

/// Maps symbolic item ids to the numeric ids one protocol version uses on the wire.
#[derive(Debug, Clone, Default)]
pub struct ItemTypeDictionary {
    entries: Vec<ItemTypeEntry>,
    string_to_int: HashMap<String, i32>,
    int_to_string: HashMap<i32, String>,
}

impl ItemTypeDictionary {
    pub fn new(entries: Vec<ItemTypeEntry>) -> Self {
        let mut string_to_int = HashMap::with_capacity(entries.len());
        let mut int_to_string = HashMap::with_capacity(entries.len());
        for entry in &entries {
            string_to_int.insert(entry.string_id.clone(), entry.numeric_id);
            int_to_string.insert(entry.numeric_id, entry.string_id.clone());
        }
        Self {
            entries,
            string_to_int,
            int_to_string,
        }
    }

    /// Parses `required_item_list.json`:
    /// `{ "minecraft:stone": { "runtime_id": 1, "component_based": false }, ... }`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let items: HashMap<String, RequiredItem> = serde_json::from_str(json)?;
        let entries = items
            .into_iter()
            .map(|(string_id, item)| ItemTypeEntry {
                string_id,
                numeric_id: item.runtime_id,
                component_based: item.component_based,
            })
            .sorted_by_key(|entry| entry.numeric_id)
            .collect();
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[ItemTypeEntry] {
        &self.entries
    }

    pub fn from_string_id(&self, string_id: &str) -> Result<i32, TypeConversionError> {
        self.string_to_int
            .get(string_id)
            .copied()
            .ok_or_else(|| TypeConversionError::UnknownStringId(string_id.to_string()))
    }

    pub fn from_int_id(&self, numeric_id: i32) -> Result<&str, TypeConversionError> {
        self.int_to_string
            .get(&numeric_id)
            .map(String::as_str)
            .ok_or(TypeConversionError::UnknownNetworkId(numeric_id))
    }

    /// Returns the protocol whose item list `protocol_id` reuses.
    pub const fn convert_protocol(protocol_id: u32) -> u32 {
        match protocol_id {
            PROTOCOL_1_21_2 => PROTOCOL_1_21_0,
            PROTOCOL_1_20_10 => PROTOCOL_1_20_0,
            _ => protocol_id,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_required_item_list() {
        let dictionary = ItemTypeDictionary::from_json(
            r#"{
                "minecraft:shield": { "runtime_id": 355, "component_based": false },
                "minecraft:stone": { "runtime_id": 1 },
                "minecraft:wooden_door": { "runtime_id": -3, "component_based": false }
            }"#,
        )
        .unwrap();

        assert_eq!(dictionary.from_string_id("minecraft:shield").unwrap(), 355);
        assert_eq!(dictionary.from_int_id(1).unwrap(), "minecraft:stone");
        let ids: Vec<i32> = dictionary.entries().iter().map(|e| e.numeric_id).collect();
        assert_eq!(ids, vec![-3, 1, 355]);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let dictionary = ItemTypeDictionary::new(vec![]);
        assert!(matches!(
            dictionary.from_string_id("minecraft:stone"),
            Err(TypeConversionError::UnknownStringId(_))
        ));
        assert!(matches!(
            dictionary.from_int_id(7),
            Err(TypeConversionError::UnknownNetworkId(7))
        ));
    }
}
