/// One entry of a unit table.
///
/// A magnitude belongs to the tier with the largest `threshold` it reaches and
/// is displayed as `magnitude / divisor` followed by `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub threshold: u64,
    pub divisor: u64,
    pub symbol: &'static str,
}

impl Tier {
    const fn new(divisor: u64, symbol: &'static str) -> Self {
        Self {
            threshold: divisor,
            divisor,
            symbol,
        }
    }

    const fn base(symbol: &'static str) -> Self {
        Self {
            threshold: 0,
            divisor: 1,
            symbol,
        }
    }

    pub fn is_base(&self) -> bool {
        self.divisor == 1
    }
}

const KIBI: u64 = 1024;
const KILO: u64 = 1000;

/// IEC binary prefixes (powers of 1024)
pub static BYTE_UNITS: [Tier; 7] = [
    Tier::base("bytes"),
    Tier::new(KIBI, "KiB"),
    Tier::new(KIBI.pow(2), "MiB"),
    Tier::new(KIBI.pow(3), "GiB"),
    Tier::new(KIBI.pow(4), "TiB"),
    Tier::new(KIBI.pow(5), "PiB"),
    Tier::new(KIBI.pow(6), "EiB"),
];

/// SI decimal prefixes (powers of 1000)
pub static HERTZ_UNITS: [Tier; 7] = [
    Tier::base("Hz"),
    Tier::new(KILO, "kHz"),
    Tier::new(KILO.pow(2), "MHz"),
    Tier::new(KILO.pow(3), "GHz"),
    Tier::new(KILO.pow(4), "THz"),
    Tier::new(KILO.pow(5), "PHz"),
    Tier::new(KILO.pow(6), "EHz"),
];

/// Pick the largest tier whose threshold `value` reaches.
///
/// Thresholds are ascending, so this is the last tier not above `value`.
/// Returns `None` only for an empty table or one without a zero threshold.
pub fn select_tier(value: u64, table: &[Tier]) -> Option<&Tier> {
    let idx = table.partition_point(|tier| tier.threshold <= value);
    idx.checked_sub(1).map(|i| &table[i])
}
