use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::alphabet::{Alphabet, RFC4648};
use crate::encoders::base32::Base32Codec;
use crate::encoders::errors::{AlphabetNotFoundError, find_closest_alphabet};

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 32 symbols of the alphabet, in value order
    pub chars: String,
    /// Whether decoding distinguishes symbol case (default: false)
    #[serde(default)]
    pub case_sensitive: bool,
    /// Human-readable description shown by `--list`
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Builds a codec from this configuration.
    pub fn to_codec(&self) -> Result<Base32Codec, crate::AlphabetError> {
        let alphabet = Alphabet::from_str(&self.chars)?;
        Base32Codec::with_alphabet(alphabet, self.case_sensitive)
    }
}

/// Global settings.
///
/// Fields are optional so an override file only changes what it names.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Alphabet used when none is requested explicitly
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Alphabet used when no settings name one.
pub const DEFAULT_ALPHABET: &str = "rfc4648";

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabets bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/base32-codec/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// An override file that fails to parse is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base32-codec").join("alphabets.toml");
            config.merge_file_if_present(&user_config_path);
        }

        config.merge_file_if_present(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_file_if_present(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(
                    path = %path.display(),
                    alphabets = overrides.alphabets.len(),
                    "merged alphabet overrides"
                );
                self.merge(overrides);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load alphabet config");
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`.
    /// Any setting present in `other` replaces the one in `self`.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
        if let Some(name) = other.settings.default_alphabet {
            self.settings.default_alphabet = Some(name);
        }
    }

    /// Name of the alphabet used when none is requested explicitly.
    pub fn default_alphabet(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or(DEFAULT_ALPHABET)
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// All alphabet names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds the codec for a named alphabet.
    ///
    /// Unknown names produce an [`AlphabetNotFoundError`] with the closest
    /// known name as a suggestion.
    pub fn codec(&self, name: &str) -> Result<Base32Codec, Box<dyn std::error::Error>> {
        let alphabet_config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        alphabet_config
            .to_codec()
            .map_err(|e| format!("invalid alphabet '{}': {}", name, e).into())
    }

    /// Builds the codec for the configured default alphabet.
    pub fn default_codec(&self) -> Result<Base32Codec, Box<dyn std::error::Error>> {
        self.codec(self.default_alphabet())
    }
}

impl Default for AlphabetRegistry {
    fn default() -> Self {
        let mut alphabets = HashMap::new();
        alphabets.insert(
            DEFAULT_ALPHABET.to_string(),
            AlphabetConfig {
                chars: RFC4648.to_string(),
                case_sensitive: false,
                description: None,
            },
        );
        AlphabetRegistry {
            alphabets,
            settings: Settings::default(),
        }
    }
}
