use std::env;
use std::sync::OnceLock;

/// Environment variables consulted for the numeric locale, in POSIX precedence order
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_NUMERIC", "LANG"];

/// Languages that write a decimal comma
const COMMA_LANGUAGES: &[&str] = &[
    // Western Europe
    "de", "fr", "es", "it", "pt", "nl", "ca", "eu", "gl",
    // Nordic
    "da", "fi", "is", "nb", "nn", "no", "sv",
    // Central and Eastern Europe
    "cs", "sk", "pl", "hu", "ro", "sl", "hr", "bs", "sr", "bg", "mk", "sq",
    "ru", "uk", "be", "lt", "lv", "et",
    // Other
    "el", "tr", "az", "kk", "ka", "hy", "id", "vi", "af",
];

/// Language/territory pairs that use a decimal point although their language does not
const POINT_TERRITORIES: &[(&str, &str)] = &[
    ("de", "CH"),
    ("de", "LI"),
    ("it", "CH"),
    ("es", "MX"),
    ("es", "US"),
    ("es", "PR"),
    ("es", "GT"),
    ("es", "HN"),
    ("es", "NI"),
    ("es", "PA"),
    ("es", "SV"),
    ("es", "DO"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub decimal_separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}

impl Config {
    /// Resolve the configuration from `LC_ALL`, `LC_NUMERIC` and `LANG`.
    pub fn from_env() -> Self {
        let locale = LOCALE_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())
            .unwrap_or_default();

        Self {
            decimal_separator: decimal_separator_for_locale(&locale),
        }
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }
}

/// The process-wide configuration, read from the environment on first use.
pub fn global() -> &'static Config {
    static GLOBAL: OnceLock<Config> = OnceLock::new();
    GLOBAL.get_or_init(Config::from_env)
}

/// Decimal separator written by a locale such as `de_DE.UTF-8` or `pt-BR`.
///
/// `C`, `POSIX`, empty and unknown names all map to `.`.
pub fn decimal_separator_for_locale(locale: &str) -> char {
    // language[_TERRITORY][.codeset][@modifier]
    let name = locale.split(['.', '@']).next().unwrap_or_default();
    let mut parts = name.split(['_', '-']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let territory = parts.next().unwrap_or_default().to_ascii_uppercase();

    if !COMMA_LANGUAGES.contains(&language.as_str()) {
        return '.';
    }

    if POINT_TERRITORIES
        .iter()
        .any(|(lang, terr)| *lang == language && *terr == territory)
    {
        return '.';
    }

    ','
}
