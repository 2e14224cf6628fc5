use std::fmt;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a symbol that is not part of the effective alphabet
    InvalidInput {
        symbol: char,
        position: usize,
        input: String,
        valid_symbols: String,
    },
}

impl DecodeError {
    /// Create an InvalidInput error with context.
    ///
    /// `position` is a character index into `input`, not a byte offset.
    pub fn invalid_input(symbol: char, position: usize, input: &str, valid_symbols: &str) -> Self {
        // Truncate long inputs, keeping the offending symbol visible when possible
        let display_input = if input.chars().count() > 60 {
            let truncated: String = input.chars().take(60).collect();
            format!("{}...", truncated)
        } else {
            input.to_string()
        };

        DecodeError::InvalidInput {
            symbol,
            position,
            input: display_input,
            valid_symbols: valid_symbols.to_string(),
        }
    }

    /// The offending symbol.
    pub fn symbol(&self) -> char {
        match self {
            DecodeError::InvalidInput { symbol, .. } => *symbol,
        }
    }

    /// Character position of the offending symbol in the decoded input.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::InvalidInput { position, .. } => *position,
        }
    }

    /// Writes the report shown by `Display`, with or without ANSI colors.
    pub fn write_report(&self, f: &mut dyn fmt::Write, use_color: bool) -> fmt::Result {
        match self {
            DecodeError::InvalidInput {
                symbol,
                position,
                input,
                valid_symbols,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid symbol {:?} at position {}",
                        symbol, position
                    )?;
                } else {
                    writeln!(f, "error: invalid symbol {:?} at position {}", symbol, position)?;
                }
                writeln!(f)?;

                // The caret only makes sense when the symbol survived truncation
                writeln!(f, "  {}", input)?;
                if *position < 60 {
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m valid symbols: {}", valid_symbols)?;
                } else {
                    write!(f, "hint: valid symbols: {}", valid_symbols)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f, should_use_color())
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised while constructing an alphabet or a codec from one.
///
/// These are configuration mistakes, not runtime conditions: a codec that
/// was built successfully never produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet does not have exactly 32 symbols
    InvalidLength { actual: usize },
    /// The same symbol appears twice
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
    /// Whitespace or a control character was used as a symbol
    UnprintableSymbol { symbol: char, index: usize },
    /// A symbol's case mappings are not single chars that fold back to it,
    /// so case-insensitive matching cannot be exact
    CaseUnstable { symbol: char, index: usize },
    /// Two distinct symbols fold to the same symbol in a case-insensitive codec
    CaseCollision {
        first: char,
        second: char,
        folded: char,
    },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::InvalidLength { actual } => {
                write!(f, "alphabet must have exactly 32 symbols, got {}", actual)
            }
            AlphabetError::DuplicateSymbol {
                symbol,
                first,
                second,
            } => write!(
                f,
                "duplicate symbol {:?} in alphabet at positions {} and {}",
                symbol, first, second
            ),
            AlphabetError::UnprintableSymbol { symbol, index } => write!(
                f,
                "symbol {:?} at position {} is whitespace or a control character",
                symbol, index
            ),
            AlphabetError::CaseUnstable { symbol, index } => write!(
                f,
                "symbol {:?} at position {} has no single-character case mapping; use a case-sensitive codec for this alphabet",
                symbol, index
            ),
            AlphabetError::CaseCollision {
                first,
                second,
                folded,
            } => write!(
                f,
                "symbols {:?} and {:?} both fold to {:?}; use a case-sensitive codec for this alphabet",
                first, second, folded
            ),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when an alphabet name is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }

    /// Writes the report shown by `Display`, with or without ANSI colors.
    pub fn write_report(&self, f: &mut dyn fmt::Write, use_color: bool) -> fmt::Result {
        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m alphabet '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`base32-codec --list`\x1b[0m to see all alphabets"
            )?;
        } else {
            write!(f, "      run `base32-codec --list` to see all alphabets")?;
        }

        Ok(())
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f, should_use_color())
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.cmp(b)))
        .map(|(_, candidate)| candidate.clone())
}
