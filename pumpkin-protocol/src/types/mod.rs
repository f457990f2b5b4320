mod game_mode;
mod item_stack;
mod recipe;

pub use game_mode::ProtocolGameMode;
pub use item_stack::{ItemStack, NO_BLOCK_RUNTIME_ID};
pub use recipe::{ItemDescriptor, RecipeIngredient, RECIPE_INPUT_WILDCARD_META};
