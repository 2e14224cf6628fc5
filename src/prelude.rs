//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base32_codec::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let codec = registry.codec("zbase32").unwrap();
//! let text = codec.encode(b"Hello");
//! assert_eq!(codec.decode(&text).unwrap(), b"Hello");
//! ```

pub use crate::{
    // Core types
    Alphabet,
    AlphabetError,
    // Config
    AlphabetRegistry,
    Base32Codec,
    DecodeError,
    TextCodec,

    decode,
    encode,
};
