use crate::config::{self, Config};
use crate::units::{select_tier, Tier, BYTE_UNITS, HERTZ_UNITS};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Format a magnitude with the best-fitting tier of `table`.
///
/// - Base tier, or no tier reached at all: plain count with `plural`
///   (`"532 bytes"`), or `singular` when the value is exactly 1 and a
///   singular label is given.
/// - Higher tiers: no decimals when evenly divisible (`"1 KiB"`), otherwise
///   one decimal rounded half-up (`"1.3 KiB"`).
///
/// Past the largest tier the top symbol keeps scaling (`"16.0 EiB"`).
pub fn format_scaled_magnitude(
    value: u64,
    table: &[Tier],
    singular: Option<&str>,
    plural: &str,
    decimal_separator: char,
) -> String {
    let Some(tier) = select_tier(value, table).filter(|tier| !tier.is_base()) else {
        return format_base(value, singular, plural);
    };

    if value % tier.divisor == 0 {
        return format!("{} {}", value / tier.divisor, tier.symbol);
    }

    let tenths = tenths_half_up(value, tier.divisor);
    format!(
        "{}{}{} {}",
        tenths / 10,
        decimal_separator,
        tenths % 10,
        tier.symbol
    )
}

fn format_base(value: u64, singular: Option<&str>, plural: &str) -> String {
    match singular {
        Some(label) if value == 1 => format!("1 {label}"),
        _ => format!("{value} {plural}"),
    }
}

/// `value / divisor` in tenths, rounded half-up, without going through floats
fn tenths_half_up(value: u64, divisor: u64) -> u128 {
    let divisor = u128::from(divisor);
    (u128::from(value) * 10 + divisor / 2) / divisor
}

/// Format a byte count with IEC binary units, e.g. `"1.3 KiB"`.
///
/// The decimal separator comes from the process locale; see [`config::global`].
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes, config::global())
}

/// [`format_bytes`] with the decimal separator taken from `config`.
pub fn format_bytes_with(bytes: u64, config: &Config) -> String {
    format_scaled_magnitude(
        bytes,
        &BYTE_UNITS,
        Some("byte"),
        BYTE_UNITS[0].symbol,
        config.decimal_separator,
    )
}

/// Format a frequency with SI units, e.g. `"2.4 GHz"`.
pub fn format_hertz(hertz: u64) -> String {
    format_hertz_with(hertz, config::global())
}

/// [`format_hertz`] with the decimal separator taken from `config`.
pub fn format_hertz_with(hertz: u64, config: &Config) -> String {
    format_scaled_magnitude(
        hertz,
        &HERTZ_UNITS,
        None,
        HERTZ_UNITS[0].symbol,
        config.decimal_separator,
    )
}

/// Format elapsed seconds as `"<days> days, HH:MM:SS"`.
pub fn format_elapsed_secs(secs: u64) -> String {
    let days = secs / SECS_PER_DAY;
    let rem = secs % SECS_PER_DAY;
    let hours = rem / SECS_PER_HOUR;
    let rem = rem % SECS_PER_HOUR;
    let minutes = rem / SECS_PER_MINUTE;
    let seconds = rem % SECS_PER_MINUTE;

    format!("{days} days, {hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Config {
        Config::default()
    }

    fn comma() -> Config {
        Config::default().with_decimal_separator(',')
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(1), "1 byte");
        assert_eq!(format_bytes(532), "532 bytes");
        assert_eq!(format_bytes(1024), "1 KiB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1 GiB");
        assert_eq!(format_bytes(1_099_511_627_776), "1 TiB");
    }

    #[test]
    fn test_format_bytes_with_decimal_separator() {
        let sep = config::global().decimal_separator;
        assert_eq!(format_bytes(1340), format!("1{sep}3 KiB"));
        assert_eq!(format_bytes(2_400_016), format!("2{sep}3 MiB"));
        assert_eq!(format_bytes(2_400_000_000), format!("2{sep}2 GiB"));
        assert_eq!(
            format_bytes(1_099_511_627_776 + 109_951_162_777),
            format!("1{sep}1 TiB")
        );
    }

    #[test]
    fn test_format_bytes_explicit_separator() {
        assert_eq!(format_bytes_with(1340, &point()), "1.3 KiB");
        assert_eq!(format_bytes_with(1340, &comma()), "1,3 KiB");
        // separator never affects whole values
        assert_eq!(format_bytes_with(2048, &comma()), "2 KiB");
    }

    #[test]
    fn test_format_bytes_tier_edges() {
        assert_eq!(format_bytes_with(1023, &point()), "1023 bytes");
        assert_eq!(format_bytes_with(1025, &point()), "1.0 KiB");
        assert_eq!(format_bytes_with(1536, &point()), "1.5 KiB");
        assert_eq!(format_bytes_with(1024 * 1024 - 1, &point()), "1024.0 KiB");
        assert_eq!(format_bytes_with(5 * 1024u64.pow(5), &point()), "5 PiB");
        assert_eq!(format_bytes_with(1024u64.pow(6), &point()), "1 EiB");
    }

    #[test]
    fn test_format_bytes_half_up() {
        // 1.25 KiB exactly
        assert_eq!(format_bytes_with(1280, &point()), "1.3 KiB");
        // 1.2490... KiB
        assert_eq!(format_bytes_with(1279, &point()), "1.2 KiB");
    }

    #[test]
    fn test_format_bytes_beyond_largest_unit() {
        assert_eq!(format_bytes_with(u64::MAX, &point()), "16.0 EiB");
        assert_eq!(format_bytes_with(15 * 1024u64.pow(6), &point()), "15 EiB");
    }

    #[test]
    fn test_format_hertz() {
        assert_eq!(format_hertz(0), "0 Hz");
        assert_eq!(format_hertz(1), "1 Hz");
        assert_eq!(format_hertz(999), "999 Hz");
        assert_eq!(format_hertz(1000), "1 kHz");
        assert_eq!(format_hertz(1000 * 1000), "1 MHz");
        assert_eq!(format_hertz(1000 * 1000 * 1000), "1 GHz");
        assert_eq!(format_hertz(1000u64.pow(4)), "1 THz");
    }

    #[test]
    fn test_format_hertz_fractional() {
        assert_eq!(format_hertz_with(2_400_000_000, &point()), "2.4 GHz");
        assert_eq!(format_hertz_with(1_500, &comma()), "1,5 kHz");
        assert_eq!(format_hertz_with(3_050_000, &point()), "3.1 MHz");
    }

    #[test]
    fn test_format_hertz_upper_tiers() {
        assert_eq!(format_hertz_with(2 * 1000u64.pow(5), &point()), "2 PHz");
        assert_eq!(format_hertz_with(1000u64.pow(6), &point()), "1 EHz");
        assert_eq!(format_hertz_with(u64::MAX, &point()), "18.4 EHz");
    }

    #[test]
    fn test_format_scaled_magnitude_without_base_tier() {
        // below the first threshold the value keeps its base unit
        assert_eq!(
            format_scaled_magnitude(7, &HERTZ_UNITS[1..], None, "Hz", '.'),
            "7 Hz"
        );
        assert_eq!(
            format_scaled_magnitude(1, &BYTE_UNITS[1..], Some("byte"), "bytes", '.'),
            "1 byte"
        );
        assert_eq!(
            format_scaled_magnitude(900, &BYTE_UNITS[1..], Some("byte"), "bytes", '.'),
            "900 bytes"
        );
        assert_eq!(format_scaled_magnitude(3, &[], None, "Hz", '.'), "3 Hz");
    }

    #[test]
    fn test_format_elapsed_secs() {
        assert_eq!(format_elapsed_secs(0), "0 days, 00:00:00");
        assert_eq!(format_elapsed_secs(12345), "0 days, 03:25:45");
        assert_eq!(format_elapsed_secs(123456), "1 days, 10:17:36");
        assert_eq!(format_elapsed_secs(1234567), "14 days, 06:56:07");
    }

    #[test]
    fn test_format_elapsed_secs_large() {
        assert_eq!(format_elapsed_secs(1000 * SECS_PER_DAY + 59), "1000 days, 00:00:59");
        assert_eq!(format_elapsed_secs(SECS_PER_DAY - 1), "0 days, 23:59:59");
    }
}
