use std::collections::HashMap;
use std::fmt;

use crate::encoders::errors::AlphabetError;

/// Number of symbols in every Base32 alphabet.
pub const ALPHABET_SIZE: usize = 32;

/// RFC 4648 Base32 alphabet: uppercase letters followed by the digits 2-7.
pub const RFC4648: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Lowercase variant of [`RFC4648`].
pub const RFC4648_LOWER: &str = "abcdefghijklmnopqrstuvwxyz234567";

/// An ordered set of exactly 32 distinct printable symbols.
///
/// Index `n` of the alphabet is the symbol for the 5-bit value `n`.
///
/// # Example
///
/// ```
/// use base32_codec::Alphabet;
///
/// let alphabet = Alphabet::from_str("0123456789ABCDEFGHIJKLMNOPQRSTUV").unwrap();
/// assert_eq!(alphabet.symbol(10), Some('A'));
/// assert!(Alphabet::from_str("ABC").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; ALPHABET_SIZE],
}

impl Alphabet {
    /// Creates an alphabet from a sequence of symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are not exactly 32 symbols
    /// - A symbol is whitespace or a control character
    /// - A symbol appears more than once
    pub fn new<I>(chars: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Vec<char> = chars.into_iter().collect();
        let symbols: [char; ALPHABET_SIZE] = chars
            .as_slice()
            .try_into()
            .map_err(|_| AlphabetError::InvalidLength {
                actual: chars.len(),
            })?;

        let mut seen = HashMap::with_capacity(ALPHABET_SIZE);
        for (index, &symbol) in symbols.iter().enumerate() {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(AlphabetError::UnprintableSymbol { symbol, index });
            }
            if let Some(first) = seen.insert(symbol, index) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol,
                    first,
                    second: index,
                });
            }
        }

        Ok(Alphabet { symbols })
    }

    /// Creates an alphabet from a string of symbols.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, AlphabetError> {
        Self::new(s.chars())
    }

    /// The RFC 4648 alphabet (`A-Z2-7`).
    pub fn rfc4648() -> Self {
        Self::from_static(RFC4648)
    }

    /// The lowercase RFC 4648 alphabet (`a-z2-7`).
    pub fn rfc4648_lower() -> Self {
        Self::from_static(RFC4648_LOWER)
    }

    // Only for the compile-time constants above, which are known to be valid.
    fn from_static(s: &'static str) -> Self {
        let mut symbols = ['\0'; ALPHABET_SIZE];
        for (slot, c) in symbols.iter_mut().zip(s.chars()) {
            *slot = c;
        }
        Alphabet { symbols }
    }

    /// Returns the symbol for a 5-bit value, or `None` if `index >= 32`.
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Returns all 32 symbols in order.
    pub fn symbols(&self) -> &[char; ALPHABET_SIZE] {
        &self.symbols
    }

    /// Always 32.
    pub fn len(&self) -> usize {
        ALPHABET_SIZE
    }

    /// Never true; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::rfc4648()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
