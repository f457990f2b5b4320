use std::collections::HashMap;

use serde::Deserialize;

use crate::{PROTOCOL_1_20_0, PROTOCOL_1_20_10, PROTOCOL_1_20_40, PROTOCOL_1_20_50};
use crate::{PROTOCOL_1_21_0, PROTOCOL_1_21_2};

/// A block state's legacy id/meta pair. The state's runtime id is its index in the
/// dictionary.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockStateEntry {
    pub name: String,
    pub meta: u16,
    /// Other metas that resolve to this state, e.g. legacy metas with unused bits set.
    #[serde(default)]
    pub aliases: Vec<u16>,
}

impl BlockStateEntry {
    pub fn new(name: impl Into<String>, meta: u16) -> Self {
        Self {
            name: name.into(),
            meta,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = u16>) -> Self {
        self.aliases.extend(aliases);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlockStateDictionary {
    states: Vec<BlockStateEntry>,
    id_meta_to_state: HashMap<String, HashMap<u16, u32>>,
}

impl BlockStateDictionary {
    pub fn new(states: Vec<BlockStateEntry>) -> Self {
        let mut id_meta_to_state: HashMap<String, HashMap<u16, u32>> = HashMap::new();
        for (state_id, state) in states.iter().enumerate() {
            let metas = id_meta_to_state.entry(state.name.clone()).or_default();
            // The first state claiming an id/meta pair wins
            metas.entry(state.meta).or_insert(state_id as u32);
        }
        // Aliases only fill gaps left by real metas
        for (state_id, state) in states.iter().enumerate() {
            let metas = id_meta_to_state.entry(state.name.clone()).or_default();
            for &alias in &state.aliases {
                metas.entry(alias).or_insert(state_id as u32);
            }
        }
        Self {
            states,
            id_meta_to_state,
        }
    }

    /// Parses `block_state_meta_map.json`, an array of `{ "name", "meta", "aliases"? }`
    /// ordered by runtime id.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, state_id: u32) -> Option<&BlockStateEntry> {
        self.states.get(state_id as usize)
    }

    pub fn get_meta_from_state_id(&self, state_id: u32) -> Option<u16> {
        self.get(state_id).map(|state| state.meta)
    }

    pub fn lookup_state_id_from_id_meta(&self, block_id: &str, meta: u16) -> Option<u32> {
        self.id_meta_to_state.get(block_id)?.get(&meta).copied()
    }

    /// Returns the protocol whose block palette `protocol_id` reuses.
    pub const fn convert_protocol(protocol_id: u32) -> u32 {
        match protocol_id {
            PROTOCOL_1_21_2 => PROTOCOL_1_21_0,
            PROTOCOL_1_20_50 => PROTOCOL_1_20_40,
            PROTOCOL_1_20_10 => PROTOCOL_1_20_0,
            _ => protocol_id,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_state_wins_and_aliases_fill_gaps() {
        let dictionary = BlockStateDictionary::new(vec![
            BlockStateEntry::new("minecraft:log", 0).with_aliases([4]),
            BlockStateEntry::new("minecraft:log", 4),
            BlockStateEntry::new("minecraft:log", 0),
            BlockStateEntry::new("minecraft:log", 1).with_aliases([9]),
        ]);

        assert_eq!(
            dictionary.lookup_state_id_from_id_meta("minecraft:log", 0),
            Some(0)
        );
        assert_eq!(
            dictionary.lookup_state_id_from_id_meta("minecraft:log", 4),
            Some(1)
        );
        assert_eq!(
            dictionary.lookup_state_id_from_id_meta("minecraft:log", 9),
            Some(3)
        );
        assert_eq!(
            dictionary.lookup_state_id_from_id_meta("minecraft:log", 2),
            None
        );
        assert_eq!(
            dictionary.lookup_state_id_from_id_meta("minecraft:dirt", 0),
            None
        );
        assert_eq!(dictionary.get_meta_from_state_id(3), Some(1));
        assert_eq!(dictionary.get_meta_from_state_id(4), None);
    }

    #[test]
    fn parses_meta_map() {
        let dictionary = BlockStateDictionary::from_json(
            r#"[{"name": "minecraft:air", "meta": 0}, {"name": "minecraft:stone", "meta": 1, "aliases": [9]}]"#,
        )
        .unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.lookup_state_id_from_id_meta("minecraft:stone", 9),
            Some(1)
        );
    }
}
