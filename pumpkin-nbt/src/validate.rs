use crate::compound::NbtCompound;
use crate::tag::NbtTag;
use crate::{Error, END_ID, MAX_DEPTH};

pub(crate) fn validate_compound(compound: &NbtCompound, depth: usize) -> Result<(), Error> {
    if depth > MAX_DEPTH {
        return Err(Error::TooDeep);
    }
    for (name, tag) in &compound.child_tags {
        if name.len() > u16::MAX as usize {
            return Err(Error::NameTooLong(name.len()));
        }
        validate_tag(name, tag, depth)?;
    }
    Ok(())
}

fn validate_tag(name: &str, tag: &NbtTag, depth: usize) -> Result<(), Error> {
    match tag {
        NbtTag::End => Err(Error::MisplacedEndTag(name.to_string())),
        NbtTag::String(value) if value.len() > u16::MAX as usize => Err(Error::InvalidValue {
            name: name.to_string(),
            reason: format!("string of {} bytes is too long", value.len()),
        }),
        NbtTag::Compound(compound) => validate_compound(compound, depth + 1),
        NbtTag::List(list) => validate_list(name, list, depth + 1),
        _ => Ok(()),
    }
}

fn validate_list(name: &str, list: &[NbtTag], depth: usize) -> Result<(), Error> {
    if depth > MAX_DEPTH {
        return Err(Error::TooDeep);
    }
    let Some(first) = list.first() else {
        return Ok(());
    };
    if first.get_type_id() == END_ID {
        return Err(Error::MisplacedEndTag(name.to_string()));
    }
    for element in list {
        if element.get_type_id() != first.get_type_id() {
            return Err(Error::MixedList {
                name: name.to_string(),
                expected: first.type_name(),
                found: element.type_name(),
            });
        }
        validate_tag(name, element, depth)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::{Error, NbtCompound, NbtTag};

    #[test]
    fn accepts_well_formed_compound() {
        let mut display = NbtCompound::new();
        display.put("Name", "Excalibur");
        display.put("Lore", vec![NbtTag::from("line 1"), NbtTag::from("line 2")]);
        let mut root = NbtCompound::new();
        root.put("display", display);
        root.put("Damage", 3i32);
        root.put("empty", Vec::<NbtTag>::new());

        assert_eq!(root.validate(), Ok(()));
    }

    #[test]
    fn rejects_mixed_lists() {
        let mut root = NbtCompound::new();
        root.put("mixed", vec![NbtTag::Int(1), NbtTag::Short(2)]);

        assert_eq!(
            root.validate(),
            Err(Error::MixedList {
                name: "mixed".to_string(),
                expected: "TAG_Int",
                found: "TAG_Short",
            })
        );
    }

    #[test]
    fn rejects_end_tags() {
        let mut root = NbtCompound::new();
        root.put("end", NbtTag::End);
        assert_eq!(
            root.validate(),
            Err(Error::MisplacedEndTag("end".to_string()))
        );

        let mut nested = NbtCompound::new();
        nested.put("list", vec![NbtTag::End]);
        let mut root = NbtCompound::new();
        root.put("nested", nested);
        assert!(root.validate().is_err());
    }

    #[test]
    fn rejects_excessive_nesting() {
        let mut tag = NbtCompound::new();
        for _ in 0..600 {
            let mut parent = NbtCompound::new();
            parent.put("child", tag);
            tag = parent;
        }
        assert_eq!(tag.validate(), Err(Error::TooDeep));
    }
}
