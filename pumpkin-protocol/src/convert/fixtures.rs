use std::sync::Arc;

use pumpkin_world::item::{BlockItemIdMap, ItemRegistry};

use super::{
    BlockStateDictionary, BlockStateEntry, ItemTranslator, ItemTypeDictionary, ItemTypeEntry,
    TypeConverter,
};
use crate::{PROTOCOL_1_20_0, PROTOCOL_1_21_0};

pub const PROTOCOL: u32 = PROTOCOL_1_21_0;
/// Predates the breeze rod.
pub const OLD_PROTOCOL: u32 = PROTOCOL_1_20_0;

pub const STONE_TYPE: u16 = 1;
pub const PLANKS_TYPE: u16 = 5;
pub const WOOL_TYPE: u16 = 35;
pub const INFO_UPDATE_TYPE: u16 = 248;
pub const DIAMOND_TYPE: u16 = 264;
pub const SHIELD_TYPE: u16 = 355;
pub const BREEZE_ROD_TYPE: u16 = 1090;
/// Registered on the server but unknown to every protocol version.
pub const MYSTERY_TYPE: u16 = 2000;

pub const STONE_ID: i32 = 1;
pub const PLANKS_ID: i32 = 5;
pub const WOOL_ID: i32 = 35;
pub const INFO_UPDATE_ID: i32 = 248;
pub const DIAMOND_ID: i32 = 304;
pub const SHIELD_ID: i32 = 357;
pub const BREEZE_ROD_ID: i32 = 645;

pub const GRANITE_STATE: u32 = 2;
pub const BIRCH_PLANKS_STATE: u32 = 5;
pub const INFO_UPDATE_STATE: u32 = 6;

pub fn items() -> ItemRegistry {
    ItemRegistry::new([
        ("minecraft:stone", STONE_TYPE),
        ("minecraft:planks", PLANKS_TYPE),
        ("minecraft:wool", WOOL_TYPE),
        ("minecraft:info_update", INFO_UPDATE_TYPE),
        ("minecraft:diamond", DIAMOND_TYPE),
        ("minecraft:shield", SHIELD_TYPE),
        ("minecraft:breeze_rod", BREEZE_ROD_TYPE),
        ("pumpkin:mystery", MYSTERY_TYPE),
    ])
}

pub fn block_items() -> BlockItemIdMap {
    BlockItemIdMap::new([
        ("minecraft:stone", "minecraft:stone"),
        ("minecraft:planks", "minecraft:planks"),
        ("minecraft:info_update", "minecraft:info_update"),
    ])
}

pub fn block_states() -> BlockStateDictionary {
    BlockStateDictionary::new(vec![
        BlockStateEntry::new("minecraft:air", 0),
        BlockStateEntry::new("minecraft:stone", 0),
        BlockStateEntry::new("minecraft:stone", 1),
        BlockStateEntry::new("minecraft:planks", 0),
        BlockStateEntry::new("minecraft:planks", 1),
        // Legacy meta 10 is birch planks with an unused bit set
        BlockStateEntry::new("minecraft:planks", 2).with_aliases([10]),
        BlockStateEntry::new("minecraft:info_update", 0),
    ])
}

pub fn dictionary(protocol: u32) -> ItemTypeDictionary {
    let mut entries = vec![
        ("minecraft:stone", STONE_ID),
        ("minecraft:planks", PLANKS_ID),
        ("minecraft:wool", WOOL_ID),
        ("minecraft:info_update", INFO_UPDATE_ID),
        ("minecraft:diamond", DIAMOND_ID),
        ("minecraft:shield", SHIELD_ID),
    ];
    if protocol >= PROTOCOL_1_21_0 {
        entries.push(("minecraft:breeze_rod", BREEZE_ROD_ID));
    }
    ItemTypeDictionary::new(
        entries
            .into_iter()
            .map(|(string_id, numeric_id)| ItemTypeEntry {
                string_id: string_id.to_string(),
                numeric_id,
                component_based: false,
            })
            .collect(),
    )
}

pub fn translator(protocol: u32) -> Arc<ItemTranslator> {
    Arc::new(ItemTranslator::new(
        protocol,
        Arc::new(dictionary(protocol)),
        Arc::new(block_states()),
        Arc::new(items()),
        Arc::new(block_items()),
    ))
}

pub fn converter(protocol: u32) -> TypeConverter {
    TypeConverter::new(protocol, translator(protocol)).expect("fixture mappings are complete")
}
