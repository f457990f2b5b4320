use pumpkin_nbt::{
    tag_type_name, Error, NbtCompound, NbtTag, BYTE_ID, COMPOUND_ID, INT_ID, LIST_ID, SHORT_ID,
    STRING_ID,
};

pub(super) const DISPLAY: &str = "display";
pub(super) const DISPLAY_NAME: &str = "Name";
pub(super) const DISPLAY_LORE: &str = "Lore";
pub(super) const ENCHANTMENTS: &str = "ench";
pub(super) const ENCHANTMENT_ID: &str = "id";
pub(super) const ENCHANTMENT_LEVEL: &str = "lvl";
pub(super) const DAMAGE: &str = "Damage";
pub(super) const UNBREAKABLE: &str = "Unbreakable";
pub(super) const CAN_PLACE_ON: &str = "CanPlaceOn";
pub(super) const CAN_DESTROY: &str = "CanDestroy";

/// Checks the shape of the NBT fields the server reads back out of an item.
/// Unknown fields are carried along untouched.
pub(super) fn check_item_fields(tag: &NbtCompound) -> Result<(), Error> {
    if let Some(display) = tag.get_compound_checked(DISPLAY)? {
        display.get_checked(DISPLAY_NAME, STRING_ID)?;
        display.get_string_list(DISPLAY_LORE)?;
    }

    if let Some(enchantments) = tag.get_checked(ENCHANTMENTS, LIST_ID)? {
        for entry in enchantments.extract_list().into_iter().flatten() {
            check_enchantment(entry)?;
        }
    }

    if let Some(damage) = tag
        .get_checked(DAMAGE, INT_ID)?
        .and_then(NbtTag::extract_int)
    {
        if damage < 0 {
            return Err(Error::InvalidValue {
                name: DAMAGE.to_string(),
                reason: format!("damage cannot be negative, got {damage}"),
            });
        }
    }

    tag.get_checked(UNBREAKABLE, BYTE_ID)?;
    tag.get_string_list(CAN_PLACE_ON)?;
    tag.get_string_list(CAN_DESTROY)?;
    Ok(())
}

fn check_enchantment(entry: &NbtTag) -> Result<(), Error> {
    let Some(enchantment) = entry.extract_compound() else {
        return Err(Error::UnexpectedTagType {
            name: ENCHANTMENTS.to_string(),
            expected: tag_type_name(COMPOUND_ID),
            found: entry.type_name(),
        });
    };
    for field in [ENCHANTMENT_ID, ENCHANTMENT_LEVEL] {
        if enchantment.get_checked(field, SHORT_ID)?.is_none() {
            return Err(Error::InvalidValue {
                name: ENCHANTMENTS.to_string(),
                reason: format!("enchantment entry is missing \"{field}\""),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use pumpkin_nbt::{Error, NbtCompound, NbtTag};

    use super::check_item_fields;

    fn enchantment(id: i16, level: i16) -> NbtTag {
        let mut entry = NbtCompound::new();
        entry.put("id", id);
        entry.put("lvl", level);
        NbtTag::Compound(entry)
    }

    #[test]
    fn accepts_enchanted_item() {
        let mut tag = NbtCompound::new();
        tag.put("ench", vec![enchantment(9, 5), enchantment(17, 3)]);
        tag.put("CanDestroy", vec![NbtTag::from("minecraft:stone")]);
        tag.put("custom_plugin_data", 42i64);
        assert_eq!(check_item_fields(&tag), Ok(()));
    }

    #[test]
    fn rejects_enchantment_without_level() {
        let mut entry = NbtCompound::new();
        entry.put("id", 9i16);
        let mut tag = NbtCompound::new();
        tag.put("ench", vec![NbtTag::Compound(entry)]);
        assert!(matches!(
            check_item_fields(&tag),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_wrong_field_types() {
        let mut tag = NbtCompound::new();
        tag.put("Damage", "lots");
        assert!(matches!(
            check_item_fields(&tag),
            Err(Error::UnexpectedTagType { .. })
        ));

        let mut tag = NbtCompound::new();
        tag.put("Damage", -1i32);
        assert!(check_item_fields(&tag).is_err());

        let mut tag = NbtCompound::new();
        tag.put("ench", vec![NbtTag::Int(1)]);
        assert!(check_item_fields(&tag).is_err());
    }
}
