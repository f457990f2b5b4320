use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeConversionError {
    #[error("Bad itemstack NBT data: {0}")]
    BadItemNbt(#[source] pumpkin_nbt::Error),
    #[error("Unknown item string id \"{0}\"")]
    UnknownStringId(String),
    #[error("Unknown item network id {0}")]
    UnknownNetworkId(i32),
    #[error("Item type \"{0}\" is not registered on the server")]
    UnknownItemType(String),
    #[error("Unknown block runtime id {0}")]
    UnknownBlockRuntimeId(u32),
    #[error("{item} cannot be represented in protocol {protocol}")]
    UnmappedItem { item: String, protocol: u32 },
    #[error("Unsupported recipe item descriptor \"{0}\"")]
    UnsupportedDescriptor(&'static str),
    #[error("No item mappings are registered for protocol {0}")]
    UnknownProtocol(u32),
}

impl TypeConversionError {
    /// Whether the error can only have been caused by what a client sent. Everything
    /// else points at incomplete mapping data on our side.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::BadItemNbt(_)
            | Self::UnknownNetworkId(_)
            | Self::UnknownBlockRuntimeId(_)
            | Self::UnsupportedDescriptor(_) => true,
            Self::UnknownStringId(_)
            | Self::UnknownItemType(_)
            | Self::UnmappedItem { .. }
            | Self::UnknownProtocol(_) => false,
        }
    }
}
