//! Configurable, unpadded Base32.
//!
//! Bytes are packed five at a time into 40-bit groups and emitted as eight
//! 5-bit symbols from a 32-symbol [`Alphabet`]. A short final group only
//! emits its significant symbols, so no padding characters appear.
//!
//! ```
//! use base32_codec::{Base32Codec, DecodeError};
//!
//! let codec = Base32Codec::new();
//! assert_eq!(codec.encode(b"Gloucester"), "I5WG65LDMVZXIZLS");
//! assert_eq!(codec.decode("i5wg65ldmvzxizls").unwrap(), b"Gloucester");
//! assert!(matches!(codec.decode("#"), Err(DecodeError::InvalidInput { .. })));
//! ```

mod core;
mod encoders;

pub mod prelude;

use std::sync::OnceLock;

pub use crate::core::alphabet::{ALPHABET_SIZE, Alphabet, RFC4648, RFC4648_LOWER};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, DEFAULT_ALPHABET, Settings};
pub use encoders::{
    AlphabetError, AlphabetNotFoundError, Base32Codec, Base32CodecBuilder, DecodeError, TextCodec,
    find_closest_alphabet,
};

fn default_codec() -> &'static Base32Codec {
    static CODEC: OnceLock<Base32Codec> = OnceLock::new();
    CODEC.get_or_init(Base32Codec::new)
}

/// Encodes bytes with the RFC 4648 alphabet.
pub fn encode(data: &[u8]) -> String {
    default_codec().encode(data)
}

/// Decodes RFC 4648 text, ignoring case.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    default_codec().decode(encoded)
}

#[cfg(test)]
mod tests;
