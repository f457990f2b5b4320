/// Meta value meaning "any variant of this item" in a recipe input.
pub const RECIPE_INPUT_WILDCARD_META: u16 = 0x7fff;

/// Describes which items fit a recipe input slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemDescriptor {
    IntIdMeta { id: i32, meta: u16 },
    Molang { expression: String, version: u8 },
    Tag(String),
    StringIdMeta { id: String, meta: u16 },
    ComplexAlias(String),
}

impl ItemDescriptor {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::IntIdMeta { .. } => "int_id_meta",
            Self::Molang { .. } => "molang",
            Self::Tag(_) => "tag",
            Self::StringIdMeta { .. } => "string_id_meta",
            Self::ComplexAlias(_) => "complex_alias",
        }
    }
}

/// A recipe input slot. An empty slot has no descriptor and a count of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub descriptor: Option<ItemDescriptor>,
    pub count: i32,
}

impl RecipeIngredient {
    pub fn new(descriptor: Option<ItemDescriptor>, count: i32) -> Self {
        Self { descriptor, count }
    }
}
