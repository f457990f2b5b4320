use std::fmt;

use pumpkin_nbt::{Error as NbtError, NbtCompound};

mod block_item_map;
mod item_registry;
mod named_tag;
mod recipe_ingredient;

pub use block_item_map::BlockItemIdMap;
pub use item_registry::ItemRegistry;
pub use recipe_ingredient::RecipeIngredient;

pub const AIR: &str = "minecraft:air";
pub const AIR_TYPE_ID: u16 = 0;

/// An item as the server sees it. Independent of any protocol version: `type_id` is
/// the server's own numeric type id, not a network id.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    type_id: u16,
    string_id: String,
    // Distinguishes variants sharing one type, e.g. the colour of wool or a block's meta.
    type_data: u16,
    count: u16,
    named_tag: NbtCompound,
}

impl Item {
    pub fn new(type_id: u16, string_id: impl Into<String>, type_data: u16) -> Self {
        Self {
            type_id,
            string_id: string_id.into(),
            type_data,
            count: 1,
            named_tag: NbtCompound::new(),
        }
    }

    pub fn air() -> Self {
        Self {
            type_id: AIR_TYPE_ID,
            string_id: AIR.to_string(),
            type_data: 0,
            count: 0,
            named_tag: NbtCompound::new(),
        }
    }

    /// Air and empty stacks are both "no item".
    pub fn is_null(&self) -> bool {
        self.type_id == AIR_TYPE_ID || self.count == 0
    }

    pub fn type_id(&self) -> u16 {
        self.type_id
    }

    pub fn string_id(&self) -> &str {
        &self.string_id
    }

    pub fn type_data(&self) -> u16 {
        self.type_data
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn set_count(&mut self, count: u16) {
        self.count = count;
    }

    pub fn with_count(mut self, count: u16) -> Self {
        self.count = count;
        self
    }

    pub fn named_tag(&self) -> &NbtCompound {
        &self.named_tag
    }

    pub fn has_named_tag(&self) -> bool {
        !self.named_tag.is_empty()
    }

    /// Replaces the item's NBT. The tag is rejected if it is structurally broken or if
    /// one of the fields the server interprets has the wrong shape.
    pub fn set_named_tag(&mut self, tag: NbtCompound) -> Result<(), NbtError> {
        tag.validate()?;
        named_tag::check_item_fields(&tag)?;
        self.named_tag = tag;
        Ok(())
    }

    pub fn with_named_tag(mut self, tag: NbtCompound) -> Result<Self, NbtError> {
        self.set_named_tag(tag)?;
        Ok(self)
    }

    pub fn custom_name(&self) -> Option<&str> {
        self.named_tag
            .get_compound(named_tag::DISPLAY)
            .and_then(|display| display.get_string(named_tag::DISPLAY_NAME))
            .map(String::as_str)
    }

    pub fn lore(&self) -> Vec<&str> {
        self.named_tag
            .get_compound(named_tag::DISPLAY)
            .and_then(|display| display.get_string_list(named_tag::DISPLAY_LORE).ok())
            .flatten()
            .unwrap_or_default()
    }

    pub fn damage(&self) -> i32 {
        self.named_tag.get_int(named_tag::DAMAGE).unwrap_or(0)
    }

    pub fn is_unbreakable(&self) -> bool {
        self.named_tag
            .get_bool(named_tag::UNBREAKABLE)
            .unwrap_or(false)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item {} ({}:{}) x{}",
            self.string_id, self.type_id, self.type_data, self.count
        )
    }
}
