use pumpkin_nbt::NbtCompound;

/// Written in place of a block runtime id for items that are not blocks.
pub const NO_BLOCK_RUNTIME_ID: u32 = 0;

/// An item stack in the form it is sent over the network.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    /// Network id of the item for the connection's protocol. 0 means no item.
    pub id: i32,
    pub meta: u16,
    pub count: u16,
    /// Only set for items that place a block.
    pub block_runtime_id: Option<u32>,
    pub nbt: Option<NbtCompound>,
    pub can_place_on: Vec<String>,
    pub can_destroy: Vec<String>,
    /// Extra field the client only reads for shields.
    pub shield_blocking_tick: Option<i64>,
}

impl ItemStack {
    pub fn null() -> Self {
        Self {
            id: 0,
            meta: 0,
            count: 0,
            block_runtime_id: None,
            nbt: None,
            can_place_on: Vec::new(),
            can_destroy: Vec::new(),
            shield_blocking_tick: None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.id == 0
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::null()
    }
}
