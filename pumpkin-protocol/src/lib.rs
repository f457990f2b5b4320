pub mod convert;
pub mod types;

pub const PROTOCOL_1_20_0: u32 = 589;
pub const PROTOCOL_1_20_10: u32 = 594;
pub const PROTOCOL_1_20_30: u32 = 618;
pub const PROTOCOL_1_20_40: u32 = 622;
pub const PROTOCOL_1_20_50: u32 = 630;
pub const PROTOCOL_1_20_60: u32 = 649;
pub const PROTOCOL_1_20_70: u32 = 662;
pub const PROTOCOL_1_20_80: u32 = 671;
pub const PROTOCOL_1_21_0: u32 = 685;
pub const PROTOCOL_1_21_2: u32 = 686;
pub const PROTOCOL_1_21_20: u32 = 712;
pub const PROTOCOL_1_21_30: u32 = 729;

/// To current Bedrock protocol
/// Don't forget to change this when porting
pub const CURRENT_BEDROCK_PROTOCOL: u32 = PROTOCOL_1_21_30;

/// Every protocol version clients may connect with, oldest first.
pub const ACCEPTED_PROTOCOLS: &[u32] = &[
    PROTOCOL_1_20_0,
    PROTOCOL_1_20_10,
    PROTOCOL_1_20_30,
    PROTOCOL_1_20_40,
    PROTOCOL_1_20_50,
    PROTOCOL_1_20_60,
    PROTOCOL_1_20_70,
    PROTOCOL_1_20_80,
    PROTOCOL_1_21_0,
    PROTOCOL_1_21_2,
    PROTOCOL_1_21_20,
    PROTOCOL_1_21_30,
];

pub fn is_accepted_protocol(protocol_id: u32) -> bool {
    ACCEPTED_PROTOCOLS.contains(&protocol_id)
}

/// The game version a protocol id was introduced with (e.g. 729 -> 1.21.30)
pub const fn minecraft_version(protocol_id: u32) -> Option<&'static str> {
    match protocol_id {
        PROTOCOL_1_20_0 => Some("1.20.0"),
        PROTOCOL_1_20_10 => Some("1.20.10"),
        PROTOCOL_1_20_30 => Some("1.20.30"),
        PROTOCOL_1_20_40 => Some("1.20.40"),
        PROTOCOL_1_20_50 => Some("1.20.50"),
        PROTOCOL_1_20_60 => Some("1.20.60"),
        PROTOCOL_1_20_70 => Some("1.20.70"),
        PROTOCOL_1_20_80 => Some("1.20.80"),
        PROTOCOL_1_21_0 => Some("1.21.0"),
        PROTOCOL_1_21_2 => Some("1.21.2"),
        PROTOCOL_1_21_20 => Some("1.21.20"),
        PROTOCOL_1_21_30 => Some("1.21.30"),
        _ => None,
    }
}
