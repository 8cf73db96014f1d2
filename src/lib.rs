pub mod config;
pub mod error;
pub mod format;
pub mod numeric;
pub mod parse;
pub mod units;

pub use config::Config;
pub use error::HexError;
pub use format::{
    format_bytes, format_bytes_with, format_elapsed_secs, format_hertz, format_hertz_with,
};
pub use numeric::{get_unsigned_int, round};
pub use parse::{hex_string_to_byte_array, parse_hertz, parse_string, PARSE_FAILURE};
