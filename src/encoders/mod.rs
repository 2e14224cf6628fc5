pub mod base32;
pub mod errors;

pub use base32::{Base32Codec, Base32CodecBuilder};
pub use errors::{AlphabetError, AlphabetNotFoundError, DecodeError, find_closest_alphabet};

/// A reversible byte-to-text transform.
///
/// This is the capability consumers depend on when they embed binary content
/// (a digest, a serialized payload) in a textual message. Implementors must
/// guarantee `decode(&encode(b)) == Ok(b)` for every byte sequence `b`.
///
/// # Example
///
/// ```
/// use base32_codec::{Base32Codec, TextCodec};
///
/// fn envelope(codec: &dyn TextCodec, payload: &[u8], digest: &[u8]) -> String {
///     format!("{}--{}", codec.encode(payload), codec.encode(digest))
/// }
///
/// let message = envelope(&Base32Codec::new(), b"data", &[0xde, 0xad]);
/// assert_eq!(message, "MRQXIYI--32WQ");
/// ```
pub trait TextCodec {
    /// Encodes raw bytes as text.
    fn encode(&self, data: &[u8]) -> String;

    /// Decodes text produced by [`TextCodec::encode`].
    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError>;
}

impl TextCodec for Base32Codec {
    fn encode(&self, data: &[u8]) -> String {
        Base32Codec::encode(self, data)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        Base32Codec::decode(self, encoded)
    }
}
