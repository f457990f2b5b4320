use bytes::Bytes;

use crate::compound::NbtCompound;
use crate::*;

#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum NbtTag {
    End = END_ID,
    Byte(i8) = BYTE_ID,
    Short(i16) = SHORT_ID,
    Int(i32) = INT_ID,
    Long(i64) = LONG_ID,
    Float(f32) = FLOAT_ID,
    Double(f64) = DOUBLE_ID,
    ByteArray(Bytes) = BYTE_ARRAY_ID,
    String(String) = STRING_ID,
    List(Vec<NbtTag>) = LIST_ID,
    Compound(NbtCompound) = COMPOUND_ID,
    IntArray(Vec<i32>) = INT_ARRAY_ID,
    LongArray(Vec<i64>) = LONG_ARRAY_ID,
}

macro_rules! extract_copy {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        pub fn $fn_name(&self) -> Option<$ty> {
            match self {
                NbtTag::$variant(value) => Some(*value),
                _ => None,
            }
        }
    };
}

macro_rules! extract_ref {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        pub fn $fn_name(&self) -> Option<&$ty> {
            match self {
                NbtTag::$variant(value) => Some(value),
                _ => None,
            }
        }
    };
}

impl NbtTag {
    /// Returns the numeric id associated with the data type.
    pub const fn get_type_id(&self) -> u8 {
        // See https://doc.rust-lang.org/reference/items/enumerations.html#pointer-casting
        unsafe { *(self as *const Self as *const u8) }
    }

    pub const fn type_name(&self) -> &'static str {
        tag_type_name(self.get_type_id())
    }

    extract_copy!(extract_byte, Byte, i8);
    extract_copy!(extract_short, Short, i16);
    extract_copy!(extract_int, Int, i32);
    extract_copy!(extract_long, Long, i64);
    extract_copy!(extract_float, Float, f32);
    extract_copy!(extract_double, Double, f64);
    extract_ref!(extract_string, String, String);
    extract_ref!(extract_list, List, Vec<NbtTag>);
    extract_ref!(extract_compound, Compound, NbtCompound);
    extract_ref!(extract_int_array, IntArray, Vec<i32>);
    extract_ref!(extract_long_array, LongArray, Vec<i64>);

    pub fn extract_bool(&self) -> Option<bool> {
        self.extract_byte().map(|byte| byte != 0)
    }

    pub fn extract_byte_array(&self) -> Option<Bytes> {
        match self {
            // Note: Bytes are free to clone, so we can hand out an owned type
            NbtTag::ByteArray(byte_array) => Some(byte_array.clone()),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for NbtTag {
            fn from(value: $ty) -> Self {
                NbtTag::$variant(value)
            }
        }
    };
}

impl_from!(i8, Byte);
impl_from!(i16, Short);
impl_from!(i32, Int);
impl_from!(i64, Long);
impl_from!(f32, Float);
impl_from!(f64, Double);
impl_from!(String, String);
impl_from!(Vec<NbtTag>, List);
impl_from!(NbtCompound, Compound);
impl_from!(Vec<i32>, IntArray);
impl_from!(Vec<i64>, LongArray);

impl From<&str> for NbtTag {
    fn from(value: &str) -> Self {
        NbtTag::String(value.to_string())
    }
}

impl From<&[u8]> for NbtTag {
    fn from(value: &[u8]) -> Self {
        NbtTag::ByteArray(Bytes::copy_from_slice(value))
    }
}

impl From<bool> for NbtTag {
    fn from(value: bool) -> Self {
        NbtTag::Byte(value as i8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_ids_match_discriminants() {
        assert_eq!(NbtTag::End.get_type_id(), END_ID);
        assert_eq!(NbtTag::Int(5).get_type_id(), INT_ID);
        assert_eq!(NbtTag::from("name").get_type_id(), STRING_ID);
        assert_eq!(NbtTag::List(vec![]).get_type_id(), LIST_ID);
        assert_eq!(NbtTag::LongArray(vec![1]).get_type_id(), LONG_ARRAY_ID);
    }

    #[test]
    fn extractors_only_accept_their_variant() {
        let tag = NbtTag::Short(3);
        assert_eq!(tag.extract_short(), Some(3));
        assert_eq!(tag.extract_int(), None);
        assert_eq!(NbtTag::from(true).extract_bool(), Some(true));
        assert_eq!(tag.type_name(), "TAG_Short");
    }
}
