/// Malformed input to [`crate::parse::hex_string_to_byte_array`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    OddLength { len: usize },
    InvalidDigit { index: usize, found: char },
}

impl std::fmt::Display for HexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexError::OddLength { len } => {
                write!(f, "hex string has odd length {len}")
            }
            HexError::InvalidDigit { index, found } => {
                write!(f, "invalid hex digit {found:?} at index {index}")
            }
        }
    }
}

impl std::error::Error for HexError {}
