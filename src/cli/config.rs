use base32_codec::{Alphabet, AlphabetRegistry, Base32Codec};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` count.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Loads the registry with user overrides, then the file given on the command line.
pub fn load_registry(
    extra: Option<&str>,
) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let mut registry = AlphabetRegistry::load_with_overrides()?;

    if let Some(path) = extra {
        let expanded = shellexpand::tilde(path);
        let overrides = AlphabetRegistry::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load alphabets from '{}': {}", path, e))?;
        registry.merge(overrides);
    }

    Ok(registry)
}

/// Picks the codec from `--chars`, `--alphabet`, or the configured default.
///
/// `--case-sensitive` only ever tightens matching; a registry alphabet marked
/// case-sensitive stays so.
pub fn resolve_codec(
    registry: &AlphabetRegistry,
    alphabet: Option<&str>,
    chars: Option<&str>,
    case_sensitive: bool,
) -> Result<Base32Codec, Box<dyn std::error::Error>> {
    if let Some(symbols) = chars {
        let codec = Base32Codec::builder()
            .alphabet_str(symbols)
            .case_sensitive(case_sensitive)
            .build()
            .map_err(|e| format!("Invalid alphabet: {}", e))?;
        return Ok(codec);
    }

    let name = alphabet.unwrap_or(registry.default_alphabet());
    let codec = registry.codec(name)?;
    tracing::debug!(alphabet = name, "using registry alphabet");

    // Rebuild from the configured symbols; a case-insensitive codec may have
    // normalized their case
    if case_sensitive && !codec.is_case_sensitive() {
        if let Some(alphabet_config) = registry.get_alphabet(name) {
            let alphabet = Alphabet::from_str(&alphabet_config.chars)?;
            return Ok(Base32Codec::with_alphabet(alphabet, true)?);
        }
    }
    Ok(codec)
}
