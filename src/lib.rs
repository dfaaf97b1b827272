//! # lzma2rust
//! Memory safe pure Rust no-std streaming LZMA2 decoder
//!
//! The decoder consumes a raw LZMA2 chunk stream (the payload format used
//! inside xz and 7z containers) and reconstructs the uncompressed bytes in a
//! sliding dictionary window. Input can be fed in arbitrarily small pieces;
//! the decoder suspends between whole LZMA symbols and between chunk header
//! bytes and resumes without losing data.
#![no_std]
#![deny(unsafe_code)]
#![deny(
    clippy::correctness,
    clippy::perf,
    clippy::complexity,
    clippy::style,
    clippy::nursery,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::decimal_literal_representation,
    clippy::float_cmp_const,
    clippy::missing_docs_in_private_items,
    clippy::multiple_inherent_impl,
    clippy::unwrap_used,
    clippy::used_underscore_binding
)]

#[cfg(target_pointer_width = "16")]
compile_error!("This crate does not work with 16 bit targets");

#[cfg(feature = "alloc")]
extern crate alloc;

/// LZMA2 framer, LZMA symbol decoder and range decoder.
mod decoder;

/// Features for the Rust Standard Library. (`io::Read` support)
#[cfg(feature = "std")]
mod stl;

/// utility for clamping integers.
mod clamp;

// These are all types that are needed to use this crate to decode an LZMA2 stream.
#[cfg(feature = "std")]
pub use stl::Lzma2Reader;
pub use {
    decoder::lzma2_decode, decoder::FinishMode, decoder::Lzma2Decoder, decoder::Lzma2Error,
    decoder::Lzma2Result, decoder::Status,
};

/// Largest valid stream property byte. `PROP_MAX` itself selects a
/// `u32::MAX` byte dictionary window.
pub const PROP_MAX: u8 = 40;

/// Dictionary window size in bytes selected by a stream property byte,
/// or `None` if the property byte is out of range.
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn dict_size_for_prop(prop: u8) -> Option<u32> {
    if prop > PROP_MAX {
        return None;
    }
    if prop == PROP_MAX {
        return Some(u32::MAX);
    }
    Some((2 | (prop as u32 & 1)) << (prop / 2 + 11))
}
