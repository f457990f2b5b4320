//! Translation between the server's own item/game mode types and the values a
//! particular protocol version puts on the wire.

mod block_state_dictionary;
mod error;
mod item_translator;
mod item_type_dictionary;
mod registry;
mod type_converter;

#[cfg(test)]
mod fixtures;

pub use block_state_dictionary::{BlockStateDictionary, BlockStateEntry};
pub use error::TypeConversionError;
pub use item_translator::{ItemNetworkId, ItemTranslator};
pub use item_type_dictionary::{ItemTypeDictionary, ItemTypeEntry};
pub use registry::{ProtocolRegistry, RegistryError};
pub use type_converter::TypeConverter;
