/// Spreads the 16 bits of `value` so that bit `n` lands on bit `2n`.
const fn spread_bits(value: u16) -> u32 {
    let mut x = value as u32;
    x = (x | (x << 8)) & 0x00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333;
    x = (x | (x << 1)) & 0x5555_5555;
    x
}

const fn compact_bits(value: u32) -> u16 {
    let mut x = value & 0x5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF;
    x as u16
}

/// Interleaves the bits of `x` (even positions) and `y` (odd positions) into a Z-order code.
pub const fn morton2d_encode(x: u16, y: u16) -> u32 {
    spread_bits(x) | (spread_bits(y) << 1)
}

pub const fn morton2d_decode(code: u32) -> (u16, u16) {
    (compact_bits(code), compact_bits(code >> 1))
}
