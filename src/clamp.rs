/// Casts an usize to an u32 clamping all excess bits off.
#[allow(clippy::cast_possible_truncation)]
pub const fn clamp_us_to_u32(from: usize) -> u32 {
    from as u32
}

/// Casts an u32 to an u16 clamping all excess bits off.
#[allow(clippy::cast_possible_truncation)]
pub const fn clamp_u32_to_u16(from: u32) -> u16 {
    from as u16
}

/// Casts an u32 to an u8 clamping all excess bits off.
#[allow(clippy::cast_possible_truncation)]
pub const fn clamp_u32_to_u8(from: u32) -> u8 {
    from as u8
}

/// Casts an u32 to an usize. Lossless on 32 and 64 bit targets.
pub const fn clamp_u32_to_us(from: u32) -> usize {
    from as usize
}
