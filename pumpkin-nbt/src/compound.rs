use crate::tag::NbtTag;
use crate::{tag_type_name, validate, Error, COMPOUND_ID, LIST_ID, STRING_ID};
use std::vec::IntoIter;

#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct NbtCompound {
    pub child_tags: Vec<(String, NbtTag)>,
}

impl NbtCompound {
    pub fn new() -> NbtCompound {
        NbtCompound {
            child_tags: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.child_tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.child_tags.is_empty()
    }

    /// Sets `name` to `value`, replacing any tag already stored under that name.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<NbtTag>) {
        let name = name.into();
        let value = value.into();
        match self.child_tags.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.child_tags.push((name, value)),
        }
    }

    pub fn put_int(&mut self, name: impl Into<String>, value: i32) {
        self.put(name, NbtTag::Int(value));
    }

    pub fn remove(&mut self, name: &str) -> Option<NbtTag> {
        let index = self.child_tags.iter().position(|(key, _)| key == name)?;
        Some(self.child_tags.remove(index).1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NbtTag)> {
        self.child_tags.iter().map(|(key, value)| (key, value))
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&NbtTag> {
        self.child_tags
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Like [`NbtCompound::get`], but fails if the tag exists with a different type.
    pub fn get_checked(&self, name: &str, expected: u8) -> Result<Option<&NbtTag>, Error> {
        match self.get(name) {
            Some(tag) if tag.get_type_id() != expected => Err(Error::UnexpectedTagType {
                name: name.to_string(),
                expected: tag_type_name(expected),
                found: tag.type_name(),
            }),
            tag => Ok(tag),
        }
    }

    pub fn get_byte(&self, name: &str) -> Option<i8> {
        self.get(name).and_then(|tag| tag.extract_byte())
    }

    pub fn get_short(&self, name: &str) -> Option<i16> {
        self.get(name).and_then(|tag| tag.extract_short())
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(|tag| tag.extract_int())
    }

    pub fn get_long(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|tag| tag.extract_long())
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(|tag| tag.extract_bool())
    }

    pub fn get_string(&self, name: &str) -> Option<&String> {
        self.get(name).and_then(|tag| tag.extract_string())
    }

    pub fn get_list(&self, name: &str) -> Option<&Vec<NbtTag>> {
        self.get(name).and_then(|tag| tag.extract_list())
    }

    pub fn get_compound(&self, name: &str) -> Option<&NbtCompound> {
        self.get(name).and_then(|tag| tag.extract_compound())
    }

    /// Reads a list of strings, failing if `name` holds anything else.
    pub fn get_string_list(&self, name: &str) -> Result<Option<Vec<&str>>, Error> {
        let Some(tag) = self.get_checked(name, LIST_ID)? else {
            return Ok(None);
        };
        let mut strings = Vec::new();
        for element in tag.extract_list().into_iter().flatten() {
            let Some(value) = element.extract_string() else {
                return Err(Error::UnexpectedTagType {
                    name: name.to_string(),
                    expected: tag_type_name(STRING_ID),
                    found: element.type_name(),
                });
            };
            strings.push(value.as_str());
        }
        Ok(Some(strings))
    }

    /// Reads a nested compound, failing if `name` holds anything else.
    pub fn get_compound_checked(&self, name: &str) -> Result<Option<&NbtCompound>, Error> {
        Ok(self
            .get_checked(name, COMPOUND_ID)?
            .and_then(NbtTag::extract_compound))
    }

    /// Checks the structural rules every well-formed compound follows: names fit in a
    /// TAG_String, lists are homogeneous, TAG_End only terminates and nesting is bounded.
    pub fn validate(&self) -> Result<(), Error> {
        validate::validate_compound(self, 0)
    }
}

impl FromIterator<(String, NbtTag)> for NbtCompound {
    fn from_iter<T: IntoIterator<Item = (String, NbtTag)>>(iter: T) -> Self {
        let mut compound = NbtCompound::new();
        for (key, value) in iter {
            compound.put(key, value);
        }
        compound
    }
}

impl IntoIterator for NbtCompound {
    type Item = (String, NbtTag);
    type IntoIter = IntoIter<(String, NbtTag)>;

    fn into_iter(self) -> Self::IntoIter {
        self.child_tags.into_iter()
    }
}

impl Extend<(String, NbtTag)> for NbtCompound {
    fn extend<T: IntoIterator<Item = (String, NbtTag)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

// Rust's AsRef is currently not reflexive so we need to implement it manually
impl AsRef<NbtCompound> for NbtCompound {
    fn as_ref(&self) -> &NbtCompound {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn put_replaces_existing_value() {
        let mut compound = NbtCompound::new();
        compound.put_int("id", 1);
        compound.put_int("id", 2);
        assert_eq!(compound.len(), 1);
        assert_eq!(compound.get_int("id"), Some(2));
    }

    #[test]
    fn clone_is_deep() {
        let mut inner = NbtCompound::new();
        inner.put("Name", "Sword");
        let mut compound = NbtCompound::new();
        compound.put("display", inner);

        let mut copy = compound.clone();
        copy.remove("display");
        assert!(copy.is_empty());
        assert_eq!(
            compound
                .get_compound("display")
                .and_then(|display| display.get_string("Name"))
                .map(String::as_str),
            Some("Sword")
        );
    }

    #[test]
    fn checked_getters_report_type_mismatch() {
        let mut compound = NbtCompound::new();
        compound.put("display", "not a compound");
        let err = compound.get_compound_checked("display").unwrap_err();
        assert_eq!(
            err,
            Error::UnexpectedTagType {
                name: "display".to_string(),
                expected: "TAG_Compound",
                found: "TAG_String",
            }
        );
        assert_eq!(compound.get_compound_checked("missing"), Ok(None));
    }

    #[test]
    fn string_list_rejects_other_elements() {
        let mut compound = NbtCompound::new();
        compound.put("Lore", vec![NbtTag::from("a"), NbtTag::from("b")]);
        assert_eq!(
            compound.get_string_list("Lore").unwrap(),
            Some(vec!["a", "b"])
        );

        compound.put("Lore", vec![NbtTag::Int(1)]);
        assert!(compound.get_string_list("Lore").is_err());
    }
}
