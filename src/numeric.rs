use std::fmt::Display;
use std::str::FromStr;

/// Floating point types [`round`] accepts.
///
/// `Display` must print the shortest string that reads back as the same
/// value, without an exponent, which holds for `f32` and `f64`.
pub trait Float: Copy + Display + FromStr {
    fn is_finite(self) -> bool;
}

impl Float for f32 {
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Float for f64 {
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// Round to `decimal_places` fractional digits, ties away from zero.
///
/// Rounding happens on the value's decimal text rather than its binary
/// representation, so `round(42.425f32, 2)` is `42.43` even though the
/// nearest `f32` to 42.425 lies just below it.
pub fn round<F: Float>(value: F, decimal_places: u32) -> F {
    if !value.is_finite() {
        return value;
    }

    let text = value.to_string();
    match round_decimal_str(&text, decimal_places as usize) {
        Some(rounded) => rounded.parse().unwrap_or(value),
        None => value,
    }
}

/// Half-up rounding of a plain decimal literal like `-42.425`.
///
/// Returns `None` when the text already has no more than `places` fractional
/// digits.
fn round_decimal_str(text: &str, places: usize) -> Option<String> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if frac_part.len() <= places {
        return None;
    }

    let round_up = frac_part.as_bytes()[places] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..places].bytes())
        .collect();

    if round_up {
        carry_increment(&mut digits);
    }

    let split = digits.len() - places;
    let mut rounded = String::with_capacity(digits.len() + 2);
    if negative {
        rounded.push('-');
    }
    rounded.push_str(std::str::from_utf8(&digits[..split]).ok()?);
    if places > 0 {
        rounded.push('.');
        rounded.push_str(std::str::from_utf8(&digits[split..]).ok()?);
    }
    Some(rounded)
}

/// Add one to the last digit of an ASCII digit string, growing it on overflow.
fn carry_increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Read a 32-bit pattern as the unsigned number it encodes.
///
/// `-1` (all bits set) becomes `4294967295`.
pub fn get_unsigned_int(x: i32) -> i64 {
    i64::from(x as u32)
}
