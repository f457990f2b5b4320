use std::collections::HashMap;

use serde::Deserialize;

/// Tells which item ids are also placeable blocks, and under which block id.
#[derive(Debug, Clone, Default)]
pub struct BlockItemIdMap {
    item_to_block: HashMap<String, String>,
    block_to_item: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct BlockToItemFile(HashMap<String, String>);

impl BlockItemIdMap {
    /// Builds the map from `(block id, item id)` pairs.
    pub fn new<I, B, S>(block_to_item: I) -> Self
    where
        I: IntoIterator<Item = (B, S)>,
        B: Into<String>,
        S: Into<String>,
    {
        let mut map = Self::default();
        for (block_id, item_id) in block_to_item {
            let (block_id, item_id) = (block_id.into(), item_id.into());
            map.item_to_block.insert(item_id.clone(), block_id.clone());
            map.block_to_item.insert(block_id, item_id);
        }
        map
    }

    /// Parses `block_id_to_item_id_map.json`: `{ "minecraft:stone": "minecraft:stone", ... }`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let file: BlockToItemFile = serde_json::from_str(json)?;
        Ok(Self::new(file.0))
    }

    pub fn lookup_block_id(&self, item_id: &str) -> Option<&str> {
        self.item_to_block.get(item_id).map(String::as_str)
    }

    pub fn lookup_item_id(&self, block_id: &str) -> Option<&str> {
        self.block_to_item.get(block_id).map(String::as_str)
    }
}
