use std::collections::HashMap;

use crate::core::alphabet::{ALPHABET_SIZE, Alphabet};
use crate::encoders::errors::{AlphabetError, DecodeError};

/// Raw bytes per encoding group.
const BYTES_PER_GROUP: usize = 5;
/// Symbols per decoding group.
const SYMBOLS_PER_GROUP: usize = 8;
const FORTY_BITS: u64 = (1 << 40) - 1;

/// Unpadded Base32 codec over a configurable alphabet.
///
/// Input is processed in groups of 5 bytes (40 bits) which become 8 symbols.
/// A short final group only emits the symbols that carry input bits, so the
/// output never contains padding characters.
///
/// A codec is immutable once built and can be shared freely across threads.
///
/// # Example
///
/// ```
/// use base32_codec::Base32Codec;
///
/// let codec = Base32Codec::new();
/// assert_eq!(codec.encode(b"Aardvark"), "IFQXEZDWMFZGW");
/// assert_eq!(codec.decode("ifqxezdwmfzgw").unwrap(), b"Aardvark");
/// ```
#[derive(Debug, Clone)]
pub struct Base32Codec {
    alphabet: Alphabet,
    symbol_to_value: HashMap<char, u8>,
    case_sensitive: bool,
}

impl Base32Codec {
    /// RFC 4648 alphabet, case-insensitive decoding.
    pub fn new() -> Self {
        // The RFC 4648 alphabet has no case collisions
        let alphabet = Alphabet::rfc4648();
        Base32Codec {
            symbol_to_value: inverse_lookup(&alphabet, false),
            alphabet,
            case_sensitive: false,
        }
    }

    /// Creates a new Base32CodecBuilder.
    pub fn builder() -> Base32CodecBuilder {
        Base32CodecBuilder::new()
    }

    /// Creates a codec over `alphabet`.
    ///
    /// A case-insensitive codec normalizes the cased symbols of its alphabet to
    /// one case, taken from the first cased symbol, so `encode` never mixes cases.
    ///
    /// # Errors
    ///
    /// When `case_sensitive` is false, returns:
    /// - [`AlphabetError::CaseUnstable`] if a symbol has no single-character
    ///   uppercase or lowercase form
    /// - [`AlphabetError::CaseCollision`] if two symbols differ only by case
    pub fn with_alphabet(alphabet: Alphabet, case_sensitive: bool) -> Result<Self, AlphabetError> {
        let alphabet = if case_sensitive {
            alphabet
        } else {
            check_case_collisions(&alphabet)?;
            canonical_case(&alphabet)?
        };

        Ok(Base32Codec {
            symbol_to_value: inverse_lookup(&alphabet, case_sensitive),
            alphabet,
            case_sensitive,
        })
    }

    /// Returns the alphabet `encode` emits.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns whether decoding distinguishes symbol case.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of symbols `encode` produces for `byte_len` bytes.
    pub fn encoded_len(byte_len: usize) -> usize {
        (byte_len * 8).div_ceil(5)
    }

    /// Number of bytes `decode` produces for `symbol_len` valid symbols.
    pub fn decoded_len(symbol_len: usize) -> usize {
        let full = symbol_len / SYMBOLS_PER_GROUP * BYTES_PER_GROUP;
        full + (symbol_len % SYMBOLS_PER_GROUP) * 5 / 8
    }

    /// Encodes bytes as Base32 text.
    pub fn encode(&self, data: &[u8]) -> String {
        let mut result = String::with_capacity(Self::encoded_len(data.len()));

        for group in data.chunks(BYTES_PER_GROUP) {
            // Missing bytes of a short group are zero
            let forty_bits = group
                .iter()
                .chain(std::iter::repeat(&0u8))
                .take(BYTES_PER_GROUP)
                .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

            let significant = Self::encoded_len(group.len());
            for field in 0..significant {
                let shift = 35 - field * 5;
                let index = ((forty_bits >> shift) & 0x1F) as usize;
                result.push(self.alphabet.symbols()[index]);
            }
        }

        result
    }

    /// Decodes Base32 text back into bytes.
    ///
    /// Every symbol is validated before any bytes are produced.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidInput`] for the first symbol that is not in
    /// the alphabet (after case folding, for a case-insensitive codec).
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let values = self.symbol_values(encoded)?;
        let mut result = Vec::with_capacity(Self::decoded_len(values.len()));

        for group in values.chunks(SYMBOLS_PER_GROUP) {
            let forty_bits = group
                .iter()
                .chain(std::iter::repeat(&0u8))
                .take(SYMBOLS_PER_GROUP)
                .fold(0u64, |acc, &value| (acc << 5) | u64::from(value))
                & FORTY_BITS;

            let significant = group.len() * 5 / 8;
            for field in 0..significant {
                let shift = 32 - field * 8;
                result.push((forty_bits >> shift) as u8);
            }
        }

        Ok(result)
    }

    /// Maps every symbol of `encoded` to its 5-bit value.
    fn symbol_values(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let mut values = Vec::with_capacity(encoded.len());

        for (position, symbol) in encoded.chars().enumerate() {
            let key = if self.case_sensitive {
                symbol
            } else {
                fold_case(symbol)
            };

            match self.symbol_to_value.get(&key) {
                Some(&value) => values.push(value),
                None => {
                    return Err(DecodeError::invalid_input(
                        symbol,
                        position,
                        encoded,
                        &self.alphabet.to_string(),
                    ));
                }
            }
        }

        Ok(values)
    }
}

impl Default for Base32Codec {
    fn default() -> Self {
        Self::new()
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Simple case folding: uppercase, then lowercase, each step only when it
/// maps to a single char. `ς`, `σ` and `Σ` all fold to `σ`.
fn fold_case(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn inverse_lookup(alphabet: &Alphabet, case_sensitive: bool) -> HashMap<char, u8> {
    alphabet
        .symbols()
        .iter()
        .enumerate()
        .map(|(value, &symbol)| {
            let key = if case_sensitive {
                symbol
            } else {
                fold_case(symbol)
            };
            (key, value as u8)
        })
        .collect()
}

/// Every symbol's upper and lower forms must be single chars folding to the
/// symbol's own key, and no two symbols may share a key.
fn check_case_collisions(alphabet: &Alphabet) -> Result<(), AlphabetError> {
    let mut folded: HashMap<char, char> = HashMap::with_capacity(ALPHABET_SIZE);
    for (index, &symbol) in alphabet.symbols().iter().enumerate() {
        let key = fold_case(symbol);
        let stable = match (
            single(symbol.to_uppercase()),
            single(symbol.to_lowercase()),
        ) {
            (Some(upper), Some(lower)) => fold_case(upper) == key && fold_case(lower) == key,
            _ => false,
        };
        if !stable {
            return Err(AlphabetError::CaseUnstable { symbol, index });
        }
        if let Some(first) = folded.insert(key, symbol) {
            return Err(AlphabetError::CaseCollision {
                first,
                second: symbol,
                folded: key,
            });
        }
    }
    Ok(())
}

/// Rewrites the cased symbols of an alphabet that passed
/// `check_case_collisions` in the case of its first cased symbol.
fn canonical_case(alphabet: &Alphabet) -> Result<Alphabet, AlphabetError> {
    let lowercase = match alphabet
        .symbols()
        .iter()
        .find(|c| c.is_lowercase() || c.is_uppercase())
    {
        Some(first) => first.is_lowercase(),
        None => return Ok(alphabet.clone()),
    };

    Alphabet::new(alphabet.symbols().iter().map(|&c| {
        let mapped = if lowercase {
            single(c.to_lowercase())
        } else {
            single(c.to_uppercase())
        };
        mapped.unwrap_or(c)
    }))
}

/// Builder for constructing a Base32Codec with flexible configuration.
///
/// # Example
///
/// ```
/// use base32_codec::Base32Codec;
///
/// let codec = Base32Codec::builder()
///     .alphabet_str("0123456789ABCDEFGHJKMNPQRSTVWXYZ")
///     .case_sensitive(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(codec.encode(b"a"), "C4");
/// ```
#[derive(Debug, Default)]
pub struct Base32CodecBuilder {
    alphabet: Option<Result<Alphabet, AlphabetError>>,
    case_sensitive: Option<bool>,
}

impl Base32CodecBuilder {
    /// Creates a new Base32CodecBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alphabet.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(Ok(alphabet));
        self
    }

    /// Sets the alphabet from a string of symbols; validated on `build`.
    pub fn alphabet_str(mut self, symbols: &str) -> Self {
        self.alphabet = Some(Alphabet::from_str(symbols));
        self
    }

    /// Sets whether decoding is case-sensitive.
    ///
    /// Default is false (case-insensitive).
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Builds the codec. Without an alphabet the RFC 4648 one is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is malformed, or collides with itself
    /// under case folding in a case-insensitive codec.
    pub fn build(self) -> Result<Base32Codec, AlphabetError> {
        let alphabet = self.alphabet.unwrap_or_else(|| Ok(Alphabet::default()))?;
        Base32Codec::with_alphabet(alphabet, self.case_sensitive.unwrap_or(false))
    }
}
