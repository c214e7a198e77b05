//! Comparison modes used when removing duplicate values
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// How two values are judged equal when deduplicating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UniqueMode {
    /// `PartialEq` on the values themselves.
    #[default]
    Regular,
    /// Textual form parsed as `f64`; unparsable text counts as `0`.
    Numeric,
    /// Textual form compared byte for byte.
    String,
    /// Textual form compared after Unicode lowercasing.
    LocaleString,
}

impl UniqueMode {
    pub const REGULAR_FLAG: i32 = 0;
    pub const NUMERIC_FLAG: i32 = 1;
    pub const STRING_FLAG: i32 = 2;
    pub const LOCALE_STRING_FLAG: i32 = 5;

    /// Maps a legacy integer flag. Unknown flags fall back to `Regular`.
    pub fn from_flag(flag: i32) -> Self {
        match flag {
            Self::NUMERIC_FLAG => Self::Numeric,
            Self::STRING_FLAG => Self::String,
            Self::LOCALE_STRING_FLAG => Self::LocaleString,
            _ => Self::Regular,
        }
    }

    pub fn flag(self) -> i32 {
        match self {
            Self::Regular => Self::REGULAR_FLAG,
            Self::Numeric => Self::NUMERIC_FLAG,
            Self::String => Self::STRING_FLAG,
            Self::LocaleString => Self::LOCALE_STRING_FLAG,
        }
    }

    /// Lenient parse: unknown names become `Regular`.
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "numeric" => Self::Numeric,
            "string" => Self::String,
            "locale-string" | "locale" => Self::LocaleString,
            _ => Self::Regular,
        }
    }
}

impl FromStr for UniqueMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

/// Normalized comparison key for the textual modes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    Text(String),
    Number(u64),
    /// Marks NaN. Compares equal to itself, but the Unique stage never
    /// records it, so every NaN value passes through.
    Unmatched,
}

/// Fingerprint of `value` under a textual mode; `None` for `Regular`.
pub fn fingerprint<V: Display>(mode: UniqueMode, value: &V) -> Option<Fingerprint> {
    match mode {
        UniqueMode::Regular => None,
        UniqueMode::String => Some(Fingerprint::Text(value.to_string())),
        UniqueMode::LocaleString => Some(Fingerprint::Text(value.to_string().to_lowercase())),
        UniqueMode::Numeric => {
            let number = value.to_string().trim().parse::<f64>().unwrap_or(0.0);
            if number.is_nan() {
                Some(Fingerprint::Unmatched)
            } else {
                // -0.0 and 0.0 compare equal
                Some(Fingerprint::Number((number + 0.0).to_bits()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_round_trip_and_fallback() {
        for mode in [
            UniqueMode::Regular,
            UniqueMode::Numeric,
            UniqueMode::String,
            UniqueMode::LocaleString,
        ] {
            assert_eq!(UniqueMode::from_flag(mode.flag()), mode);
        }
        assert_eq!(UniqueMode::from_flag(42), UniqueMode::Regular);
        assert_eq!(UniqueMode::from_flag(-1), UniqueMode::Regular);
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!("numeric".parse::<UniqueMode>(), Ok(UniqueMode::Numeric));
        assert_eq!(UniqueMode::parse_lenient("LOCALE_STRING"), UniqueMode::LocaleString);
        assert_eq!(UniqueMode::parse_lenient("bogus"), UniqueMode::Regular);
    }

    #[test]
    fn test_numeric_fingerprint() {
        assert_eq!(
            fingerprint(UniqueMode::Numeric, &"1.0"),
            fingerprint(UniqueMode::Numeric, &1)
        );
        assert_eq!(
            fingerprint(UniqueMode::Numeric, &"abc"),
            fingerprint(UniqueMode::Numeric, &"-0")
        );
        assert_eq!(fingerprint(UniqueMode::Numeric, &f64::NAN), Some(Fingerprint::Unmatched));
    }

    #[test]
    fn test_text_fingerprints() {
        assert_ne!(
            fingerprint(UniqueMode::String, &"Foo"),
            fingerprint(UniqueMode::String, &"foo")
        );
        assert_eq!(
            fingerprint(UniqueMode::LocaleString, &"Foo"),
            fingerprint(UniqueMode::LocaleString, &"foo")
        );
        assert_eq!(fingerprint(UniqueMode::Regular, &"foo"), None);
    }
}
