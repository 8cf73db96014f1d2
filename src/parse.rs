use crate::error::HexError;

/// Frequency suffixes and their scale, as written by [`crate::format::format_hertz`]
const HERTZ_SUFFIXES: &[(&str, u64)] = &[
    ("kHz", 1_000),
    ("MHz", 1_000_000),
    ("GHz", 1_000_000_000),
    ("THz", 1_000_000_000_000),
    ("Hz", 1),
];

/// Returned by [`parse_hertz`] when no frequency is found
pub const PARSE_FAILURE: i64 = -1;

/// Parse a frequency such as `"1.5GHz"` or `"500 Hz"` into hertz.
///
/// The first `<number>[whitespace]<suffix>` in `text` is used, so model
/// strings like `"Intel(R) Core(TM) i7 CPU @ 2.50GHz"` work as well. The
/// number always uses `.` as its decimal point. Fractional hertz are
/// truncated.
///
/// Returns [`PARSE_FAILURE`] (`-1`) when nothing matches or the value does
/// not fit an `i64`.
pub fn parse_hertz(text: &str) -> i64 {
    let text = text.trim();
    let bytes = text.as_bytes();

    (0..bytes.len())
        .filter(|&i| bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()))
        .find_map(|i| hertz_at(&text[i..]))
        .flatten()
        .unwrap_or(PARSE_FAILURE)
}

/// Match a frequency starting exactly at the front of `text`.
///
/// `None` when there is no match; `Some(None)` when the match overflows.
fn hertz_at(text: &str) -> Option<Option<i64>> {
    let int_len = leading_digits(text);
    let (int_part, rest) = text.split_at(int_len);

    let (frac_part, rest) = match rest.strip_prefix('.') {
        Some(after) if leading_digits(after) > 0 => after.split_at(leading_digits(after)),
        _ => ("", rest),
    };

    let rest = rest.trim_start();
    let scale = HERTZ_SUFFIXES
        .iter()
        .find(|(suffix, _)| rest.starts_with(suffix))
        .map(|(_, scale)| *scale)?;

    Some(scale_decimal(int_part, frac_part, scale))
}

/// `int_part.frac_part * scale`, truncated, in exact integer arithmetic
fn scale_decimal(int_part: &str, frac_part: &str, scale: u64) -> Option<i64> {
    let scale = u128::from(scale);
    let whole = int_part.parse::<u128>().ok()?.checked_mul(scale)?;

    // digits beyond the scale's own precision only ever truncate away
    let frac_digits = &frac_part[..frac_part.len().min(12)];
    let fraction = if frac_digits.is_empty() {
        0
    } else {
        let numerator = frac_digits.parse::<u128>().ok()?;
        numerator * scale / 10u128.pow(frac_digits.len() as u32)
    };

    i64::try_from(whole.checked_add(fraction)?).ok()
}

fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parse the integer value of a `"key : value"` line, or return `default`.
///
/// The value field is everything after the first `:`, or the whole text when
/// there is no colon. Leading whitespace is skipped and the run of ASCII digits
/// that follows is parsed; anything after it is ignored.
pub fn parse_string(text: &str, default: i32) -> i32 {
    let field = match text.split_once(':') {
        Some((_, value)) => value,
        None => text,
    };

    let field = field.trim_start();
    let digits = &field[..leading_digits(field)];
    digits.parse().unwrap_or(default)
}

/// Decode a hex string such as `"12af"` into bytes.
///
/// Two characters per byte, high nibble first, upper or lower case.
pub fn hex_string_to_byte_array(text: &str) -> Result<Vec<u8>, HexError> {
    if text.len() % 2 != 0 {
        return Err(HexError::OddLength { len: text.len() });
    }

    let nibbles = text
        .char_indices()
        .map(|(index, found)| {
            found
                .to_digit(16)
                .map(|n| n as u8)
                .ok_or(HexError::InvalidDigit { index, found })
        })
        .collect::<Result<Vec<u8>, HexError>>()?;

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
