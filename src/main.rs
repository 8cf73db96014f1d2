use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use unitfmt::{
    format_bytes_with, format_elapsed_secs, format_hertz_with, get_unsigned_int,
    hex_string_to_byte_array, parse_hertz, parse_string, round, Config, PARSE_FAILURE,
};

#[derive(Parser, Debug)]
#[command(name = "unitfmt")]
#[command(about = "Format and parse byte sizes, frequencies and uptimes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Decimal separator for fractional units (default: from LC_ALL / LC_NUMERIC / LANG)
    #[arg(long, global = true)]
    decimal_separator: Option<char>,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format a byte count with IEC units (KiB, MiB, ...)
    Bytes { bytes: u64 },

    /// Format a frequency in hertz with SI units (kHz, MHz, ...)
    Hertz { hertz: u64 },

    /// Format elapsed seconds as "<days> days, HH:MM:SS"
    Elapsed { secs: u64 },

    /// Print the frequency found in TEXT in hertz, or -1 if there is none
    ParseHertz { text: String },

    /// Print the integer after the first ':' in TEXT
    ParseInt {
        text: String,

        /// Value printed when TEXT holds no integer
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        default: i32,
    },

    /// Decode a hex string into space separated bytes
    Hex { text: String },

    /// Round VALUE to PLACES decimals, ties away from zero
    Round {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        places: u32,
    },

    /// Print the unsigned reading of a signed 32-bit pattern
    Unsigned {
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.decimal_separator {
        Some(separator) => Config::from_env().with_decimal_separator(separator),
        None => Config::from_env(),
    };

    let output = match cli.command {
        Commands::Bytes { bytes } => format_bytes_with(bytes, &config),
        Commands::Hertz { hertz } => format_hertz_with(hertz, &config),
        Commands::Elapsed { secs } => format_elapsed_secs(secs),
        Commands::ParseHertz { text } => {
            let hertz = parse_hertz(&text);
            if hertz == PARSE_FAILURE {
                eprintln!("No frequency found in {text:?}");
            }
            hertz.to_string()
        }
        Commands::ParseInt { text, default } => parse_string(&text, default).to_string(),
        Commands::Hex { text } => {
            let bytes = hex_string_to_byte_array(&text)
                .with_context(|| format!("Failed to decode hex string: {text}"))?;
            bytes
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect::<Vec<_>>()
                .join(" ")
        }
        Commands::Round { value, places } => round(value, places).to_string(),
        Commands::Unsigned { value } => get_unsigned_int(value).to_string(),
    };

    match cli.output {
        Some(path) => fs::write(&path, format!("{output}\n"))
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{output}"),
    }

    Ok(())
}
