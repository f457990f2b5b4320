use std::fmt;

use super::Item;

/// What a crafting recipe accepts in one input slot. An empty slot is `None` at the
/// use site rather than a variant.
#[derive(Clone, Debug, PartialEq)]
pub enum RecipeIngredient {
    /// Exactly this item type and variant. Build it with [`RecipeIngredient::exact`];
    /// the stack count is not part of an ingredient and converts as 1 either way.
    Exact(Item),
    /// Any variant of the item with this symbolic id.
    MetaWildcard(String),
    /// Any item carrying this item tag.
    TagWildcard(String),
}

impl RecipeIngredient {
    /// Recipe inputs are always matched one at a time, so the count is forced to 1.
    pub fn exact(item: Item) -> Self {
        Self::Exact(item.with_count(1))
    }

    pub fn meta_wildcard(string_id: impl Into<String>) -> Self {
        Self::MetaWildcard(string_id.into())
    }

    pub fn tag_wildcard(tag: impl Into<String>) -> Self {
        Self::TagWildcard(tag.into())
    }
}

impl fmt::Display for RecipeIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(item) => write!(f, "{}:{}", item.string_id(), item.type_data()),
            Self::MetaWildcard(string_id) => write!(f, "{string_id}:*"),
            Self::TagWildcard(tag) => write!(f, "#{tag}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_forces_single_count() {
        let ingredient = RecipeIngredient::exact(Item::new(5, "minecraft:planks", 2).with_count(64));
        let RecipeIngredient::Exact(item) = &ingredient else {
            panic!("expected an exact ingredient");
        };
        assert_eq!(item.count(), 1);
        assert_eq!(ingredient.to_string(), "minecraft:planks:2");
    }

    #[test]
    fn wildcards_display() {
        assert_eq!(
            RecipeIngredient::meta_wildcard("minecraft:wool").to_string(),
            "minecraft:wool:*"
        );
        assert_eq!(
            RecipeIngredient::tag_wildcard("minecraft:logs").to_string(),
            "#minecraft:logs"
        );
    }
}
