use thiserror::Error;

pub mod compound;
pub mod tag;
mod validate;

pub use compound::NbtCompound;
pub use tag::NbtTag;

// This NBT crate is inspired from CrabNBT

pub const END_ID: u8 = 0;
pub const BYTE_ID: u8 = 1;
pub const SHORT_ID: u8 = 2;
pub const INT_ID: u8 = 3;
pub const LONG_ID: u8 = 4;
pub const FLOAT_ID: u8 = 5;
pub const DOUBLE_ID: u8 = 6;
pub const BYTE_ARRAY_ID: u8 = 7;
pub const STRING_ID: u8 = 8;
pub const LIST_ID: u8 = 9;
pub const COMPOUND_ID: u8 = 10;
pub const INT_ARRAY_ID: u8 = 11;
pub const LONG_ARRAY_ID: u8 = 12;

/// Maximum nesting of compounds and lists accepted by [`NbtCompound::validate`].
pub const MAX_DEPTH: usize = 512;

/// Returns a readable name for an NBT tag id, used in error messages.
pub const fn tag_type_name(tag_id: u8) -> &'static str {
    match tag_id {
        END_ID => "TAG_End",
        BYTE_ID => "TAG_Byte",
        SHORT_ID => "TAG_Short",
        INT_ID => "TAG_Int",
        LONG_ID => "TAG_Long",
        FLOAT_ID => "TAG_Float",
        DOUBLE_ID => "TAG_Double",
        BYTE_ARRAY_ID => "TAG_ByteArray",
        STRING_ID => "TAG_String",
        LIST_ID => "TAG_List",
        COMPOUND_ID => "TAG_Compound",
        INT_ARRAY_ID => "TAG_IntArray",
        LONG_ARRAY_ID => "TAG_LongArray",
        _ => "TAG_Unknown",
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Expected \"{name}\" to be {expected}, but found {found}")]
    UnexpectedTagType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("List \"{name}\" mixes {expected} and {found} elements")]
    MixedList {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("\"{0}\" contains a TAG_End, which is only valid as a terminator")]
    MisplacedEndTag(String),
    #[error("Tag name is {0} bytes long, which does not fit in a TAG_String")]
    NameTooLong(usize),
    #[error("NBT is nested deeper than {MAX_DEPTH} levels")]
    TooDeep,
    #[error("Invalid value for \"{name}\": {reason}")]
    InvalidValue { name: String, reason: String },
}
