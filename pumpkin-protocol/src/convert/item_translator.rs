use std::sync::Arc;

use pumpkin_world::item::{BlockItemIdMap, Item, ItemRegistry};

use super::{BlockStateDictionary, ItemTypeDictionary, TypeConversionError};

/// How one item is identified on the wire for a given protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemNetworkId {
    pub id: i32,
    pub meta: u16,
    pub block_runtime_id: Option<u32>,
}

/// Resolves server items to network ids and back for one protocol version. This is the
/// only place that decides how an item is identified on the wire.
#[derive(Debug)]
pub struct ItemTranslator {
    protocol_id: u32,
    dictionary: Arc<ItemTypeDictionary>,
    block_states: Arc<BlockStateDictionary>,
    items: Arc<ItemRegistry>,
    block_items: Arc<BlockItemIdMap>,
}

impl ItemTranslator {
    pub fn new(
        protocol_id: u32,
        dictionary: Arc<ItemTypeDictionary>,
        block_states: Arc<BlockStateDictionary>,
        items: Arc<ItemRegistry>,
        block_items: Arc<BlockItemIdMap>,
    ) -> Self {
        Self {
            protocol_id,
            dictionary,
            block_states,
            items,
            block_items,
        }
    }

    pub fn protocol_id(&self) -> u32 {
        self.protocol_id
    }

    pub fn dictionary(&self) -> &ItemTypeDictionary {
        &self.dictionary
    }

    pub fn block_states(&self) -> &BlockStateDictionary {
        &self.block_states
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn block_items(&self) -> &BlockItemIdMap {
        &self.block_items
    }

    /// Returns `None` if the item does not exist in this protocol version.
    pub fn to_network_id_quiet(&self, item: &Item) -> Option<ItemNetworkId> {
        let id = self.dictionary.from_string_id(item.string_id()).ok()?;
        match self.block_items.lookup_block_id(item.string_id()) {
            Some(block_id) => {
                // Block items carry their variant in the block state, not in the meta
                let block_runtime_id = self
                    .block_states
                    .lookup_state_id_from_id_meta(block_id, item.type_data())?;
                Some(ItemNetworkId {
                    id,
                    meta: 0,
                    block_runtime_id: Some(block_runtime_id),
                })
            }
            None => Some(ItemNetworkId {
                id,
                meta: item.type_data(),
                block_runtime_id: None,
            }),
        }
    }

    pub fn to_network_id(&self, item: &Item) -> Result<ItemNetworkId, TypeConversionError> {
        self.to_network_id_quiet(item)
            .ok_or_else(|| TypeConversionError::UnmappedItem {
                item: item.to_string(),
                protocol: self.protocol_id,
            })
    }

    pub fn from_network_id(
        &self,
        id: i32,
        meta: u16,
        block_runtime_id: Option<u32>,
    ) -> Result<Item, TypeConversionError> {
        let string_id = self.dictionary.from_int_id(id)?;
        let type_data = match block_runtime_id {
            Some(block_runtime_id) => {
                self.block_states
                    .get(block_runtime_id)
                    .ok_or(TypeConversionError::UnknownBlockRuntimeId(block_runtime_id))?
                    .meta
            }
            None => meta,
        };
        self.items
            .create(string_id, type_data)
            .ok_or_else(|| TypeConversionError::UnknownItemType(string_id.to_string()))
    }

    /// Returns the protocol whose mappings `protocol_id` shares. Versions only share
    /// mappings when both the item list and the block palette are the same.
    pub const fn convert_protocol(protocol_id: u32) -> u32 {
        let dictionary_protocol = ItemTypeDictionary::convert_protocol(protocol_id);
        let block_protocol = BlockStateDictionary::convert_protocol(protocol_id);
        if dictionary_protocol == block_protocol {
            dictionary_protocol
        } else {
            protocol_id
        }
    }
}
