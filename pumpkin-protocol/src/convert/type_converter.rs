use std::sync::Arc;

use pumpkin_core::{math::morton::morton2d_encode, GameMode};
use pumpkin_nbt::NbtCompound;
use pumpkin_world::item::{Item, RecipeIngredient};

use crate::types::{
    ItemDescriptor, ItemStack, ProtocolGameMode, RecipeIngredient as ProtocolRecipeIngredient,
    RECIPE_INPUT_WILDCARD_META,
};

use super::{
    BlockStateDictionary, ItemNetworkId, ItemTranslator, ItemTypeDictionary, TypeConversionError,
};

/// Written into the NBT of items the client cannot display, holding the real type.
const UNMAPPED_ITEM_TAG: &str = "___Id___";

const SHIELD: &str = "minecraft:shield";
/// Shown to clients in place of items their protocol version doesn't know.
const UNMAPPED_ITEM_FALLBACK: &str = "minecraft:info_update";

/// Converts game modes, recipe ingredients and item stacks between the server's types
/// and what one protocol version expects on the wire.
///
/// A converter never changes after it is built, so one instance can be shared by every
/// connection speaking its protocol.
#[derive(Debug)]
pub struct TypeConverter {
    protocol_id: u32,
    translator: Arc<ItemTranslator>,
    shield_runtime_id: i32,
}

impl TypeConverter {
    pub fn new(
        protocol_id: u32,
        translator: Arc<ItemTranslator>,
    ) -> Result<Self, TypeConversionError> {
        let shield_runtime_id = translator.dictionary().from_string_id(SHIELD)?;
        // Fail here rather than on the first unmapped item
        fallback_network_id(&translator)?;
        Ok(Self {
            protocol_id,
            translator,
            shield_runtime_id,
        })
    }

    pub fn protocol_id(&self) -> u32 {
        self.protocol_id
    }

    pub fn shield_runtime_id(&self) -> i32 {
        self.shield_runtime_id
    }

    pub fn translator(&self) -> &ItemTranslator {
        &self.translator
    }

    fn dictionary(&self) -> &ItemTypeDictionary {
        self.translator.dictionary()
    }

    fn block_states(&self) -> &BlockStateDictionary {
        self.translator.block_states()
    }

    /// Bedrock has no spectator mode in the enum we send, so spectators show up as creative.
    pub fn core_game_mode_to_protocol(&self, game_mode: GameMode) -> i32 {
        match game_mode {
            GameMode::Survival => ProtocolGameMode::Survival,
            GameMode::Creative | GameMode::Spectator => ProtocolGameMode::Creative,
            GameMode::Adventure => ProtocolGameMode::Adventure,
        }
        .id()
    }

    /// Label for the game mode as shown in client UI.
    pub fn protocol_game_mode_name(&self, game_mode: GameMode) -> &'static str {
        match game_mode {
            GameMode::Survival => "Survival",
            GameMode::Adventure => "Adventure",
            GameMode::Creative | GameMode::Spectator => "Creative",
        }
    }

    /// Returns `None` for values that have no server-side game mode; what to do about
    /// them is up to the caller.
    pub fn protocol_game_mode_to_core(&self, game_mode: i32) -> Option<GameMode> {
        match ProtocolGameMode::from_id(game_mode)? {
            ProtocolGameMode::Survival => Some(GameMode::Survival),
            ProtocolGameMode::Creative => Some(GameMode::Creative),
            ProtocolGameMode::Adventure => Some(GameMode::Adventure),
            ProtocolGameMode::CreativeViewer | ProtocolGameMode::SurvivalViewer => {
                Some(GameMode::Spectator)
            }
            ProtocolGameMode::Default => None,
        }
    }

    pub fn core_recipe_ingredient_to_net(
        &self,
        ingredient: Option<&RecipeIngredient>,
    ) -> Result<ProtocolRecipeIngredient, TypeConversionError> {
        let Some(ingredient) = ingredient else {
            return Ok(ProtocolRecipeIngredient::new(None, 0));
        };
        let descriptor = match ingredient {
            RecipeIngredient::MetaWildcard(string_id) => ItemDescriptor::IntIdMeta {
                id: self.dictionary().from_string_id(string_id)?,
                meta: RECIPE_INPUT_WILDCARD_META,
            },
            RecipeIngredient::Exact(item) => {
                let ItemNetworkId {
                    id,
                    mut meta,
                    block_runtime_id,
                } = self.translator.to_network_id(item)?;
                if let Some(block_runtime_id) = block_runtime_id {
                    // Recipes still match blocks by legacy meta
                    meta = self
                        .block_states()
                        .get_meta_from_state_id(block_runtime_id)
                        .unwrap_or_else(|| {
                            panic!(
                                "Block state {block_runtime_id} has no meta value in protocol {}",
                                self.protocol_id
                            )
                        });
                }
                ItemDescriptor::IntIdMeta { id, meta }
            }
            RecipeIngredient::TagWildcard(tag) => ItemDescriptor::Tag(tag.clone()),
        };
        Ok(ProtocolRecipeIngredient::new(Some(descriptor), 1))
    }

    pub fn net_recipe_ingredient_to_core(
        &self,
        ingredient: &ProtocolRecipeIngredient,
    ) -> Result<Option<RecipeIngredient>, TypeConversionError> {
        let Some(descriptor) = &ingredient.descriptor else {
            return Ok(None);
        };
        let (string_id, meta) = match descriptor {
            ItemDescriptor::Tag(tag) => {
                return Ok(Some(RecipeIngredient::TagWildcard(tag.clone())))
            }
            ItemDescriptor::IntIdMeta { id, meta } => (self.dictionary().from_int_id(*id)?, *meta),
            ItemDescriptor::StringIdMeta { id, meta } => (id.as_str(), *meta),
            ItemDescriptor::Molang { .. } | ItemDescriptor::ComplexAlias(_) => {
                return Err(TypeConversionError::UnsupportedDescriptor(
                    descriptor.kind(),
                ))
            }
        };

        if meta == RECIPE_INPUT_WILDCARD_META {
            return Ok(Some(RecipeIngredient::MetaWildcard(string_id.to_string())));
        }

        let mut meta = meta;
        let mut block_runtime_id = None;
        if let Some(block_id) = self.translator.block_items().lookup_block_id(string_id) {
            block_runtime_id = self
                .block_states()
                .lookup_state_id_from_id_meta(block_id, meta);
            if block_runtime_id.is_some() {
                // The block state already carries the variant
                meta = 0;
            }
        }
        let item = self.translator.from_network_id(
            self.dictionary().from_string_id(string_id)?,
            meta,
            block_runtime_id,
        )?;
        Ok(Some(RecipeIngredient::exact(item)))
    }

    /// Never fails: items this protocol version doesn't know are sent as info_update
    /// blocks, tagged with their real type so two different unknown items don't stack.
    pub fn core_item_stack_to_net(&self, item: &Item) -> ItemStack {
        if item.is_null() {
            return ItemStack::null();
        }
        let mut nbt = item.has_named_tag().then(|| item.named_tag().clone());

        let ItemNetworkId {
            id,
            meta,
            block_runtime_id,
        } = match self.translator.to_network_id_quiet(item) {
            Some(network_id) => network_id,
            None => {
                log::debug!(
                    "{item} has no mapping for protocol {}, sending it as {UNMAPPED_ITEM_FALLBACK}",
                    self.protocol_id
                );
                nbt.get_or_insert_with(NbtCompound::new)
                    .put_int(UNMAPPED_ITEM_TAG, unmapped_item_tag_value(item));
                fallback_network_id(&self.translator)
                    .expect("fallback item mapping is checked when the converter is built")
            }
        };

        ItemStack {
            id,
            meta,
            count: item.count(),
            block_runtime_id,
            nbt,
            can_place_on: Vec::new(),
            can_destroy: Vec::new(),
            shield_blocking_tick: (id == self.shield_runtime_id).then_some(0),
        }
    }

    pub fn net_item_stack_to_core(
        &self,
        item_stack: &ItemStack,
    ) -> Result<Item, TypeConversionError> {
        if item_stack.is_null() {
            return Ok(Item::air());
        }
        let mut item = self.translator.from_network_id(
            item_stack.id,
            item_stack.meta,
            item_stack.block_runtime_id,
        )?;
        if let Some(nbt) = &item_stack.nbt {
            item.set_named_tag(nbt.clone())
                .map_err(TypeConversionError::BadItemNbt)?;
        }
        item.set_count(item_stack.count);
        Ok(item)
    }

    /// Reduces a protocol id to the one whose mappings it uses.
    pub const fn convert_protocol(protocol_id: u32) -> u32 {
        ItemTranslator::convert_protocol(protocol_id)
    }
}

fn fallback_network_id(translator: &ItemTranslator) -> Result<ItemNetworkId, TypeConversionError> {
    let fallback = translator
        .items()
        .create(UNMAPPED_ITEM_FALLBACK, 0)
        .ok_or_else(|| TypeConversionError::UnknownItemType(UNMAPPED_ITEM_FALLBACK.to_string()))?;
    translator.to_network_id(&fallback)
}

fn unmapped_item_tag_value(item: &Item) -> i32 {
    morton2d_encode(item.type_id(), item.type_data()) as i32
}
