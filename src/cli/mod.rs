mod config;

use base32_codec::AlphabetRegistry;
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use config::{init_logging, load_registry, resolve_codec};

#[derive(Parser)]
#[command(name = "base32-codec")]
#[command(version)]
#[command(about = "Unpadded Base32 encoder/decoder with configurable alphabets", long_about = None)]
struct Cli {
    /// File to process (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Named alphabet from the registry (see --list)
    #[arg(short, long, value_name = "NAME")]
    alphabet: Option<String>,

    /// Custom alphabet given as its 32 symbols
    #[arg(long, value_name = "SYMBOLS", conflicts_with = "alphabet")]
    chars: Option<String>,

    /// Treat symbols that differ only by case as different symbols
    #[arg(long)]
    case_sensitive: bool,

    /// Extra alphabets file, merged over the built-in and user alphabets
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// List available alphabets
    #[arg(short, long)]
    list: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = load_registry(cli.config.as_deref())?;

    if cli.list {
        list_alphabets(&registry);
        return Ok(());
    }

    let codec = resolve_codec(
        &registry,
        cli.alphabet.as_deref(),
        cli.chars.as_deref(),
        cli.case_sensitive,
    )?;

    let input_data = if let Some(file_path) = &cli.file {
        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };
    tracing::debug!(bytes = input_data.len(), decode = cli.decode, "read input");

    if cli.decode {
        let text = String::from_utf8(input_data)
            .map_err(|_| "Input data is not valid UTF-8 text for decoding")?;
        let decoded = codec.decode(text.trim())?;
        io::stdout().write_all(&decoded)?;
    } else {
        let encoded = codec.encode(&input_data);
        println!("{}", encoded);
    }

    Ok(())
}

fn list_alphabets(registry: &AlphabetRegistry) {
    println!("Available alphabets:\n");

    for name in registry.names() {
        let Some(alphabet_config) = registry.get_alphabet(&name) else {
            continue;
        };
        let marker = if name == registry.default_alphabet() {
            "*"
        } else {
            " "
        };
        let case = if alphabet_config.case_sensitive {
            "case"
        } else {
            "nocase"
        };
        println!(
            "{} {:<15} {:>6}  {}  {}",
            marker,
            name,
            case,
            alphabet_config.chars,
            alphabet_config.description.as_deref().unwrap_or("")
        );
    }
}
