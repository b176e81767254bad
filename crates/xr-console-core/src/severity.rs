//! Message severity classification

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Severity of a captured message.
///
/// `All` is a filter wildcard. It never describes a real message, and the
/// renderer refuses to resolve a color for it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Log,
    Error,
    Warning,
    Info,
    Debug,
    #[default]
    All,
}

impl Severity {
    /// The concrete severities a message can carry
    pub const LEVELS: [Severity; 5] = [
        Severity::Log,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn is_wildcard(self) -> bool {
        self == Severity::All
    }

    /// Whether a message of this severity passes `filter`
    pub fn matches(self, filter: Severity) -> bool {
        filter.is_wildcard() || self == filter
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            // trace is the untyped chatter channel
            log::Level::Trace => Severity::Log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Severity::from_str("warning").unwrap(), Severity::Warning);
        assert_eq!(Severity::from_str("ERROR").unwrap(), Severity::Error);
        assert_eq!(Severity::from_str("All").unwrap(), Severity::All);
        assert!(Severity::from_str("warn").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for severity in Severity::LEVELS {
            let text = severity.to_string();
            assert_eq!(Severity::from_str(&text).unwrap(), severity);
        }
        assert_eq!(Severity::Info.to_string(), "info");
    }

    #[test]
    fn test_wildcard_matches_everything() {
        for severity in Severity::LEVELS {
            assert!(severity.matches(Severity::All));
            assert!(severity.matches(severity));
        }
        assert!(!Severity::Info.matches(Severity::Error));
        assert!(!Severity::LEVELS.contains(&Severity::All));
    }

    #[test]
    fn test_from_log_level() {
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Info), Severity::Info);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Debug);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Log);
    }

    #[test]
    fn test_deserialize_lowercase_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            filter: Severity,
        }
        let wrapper: Wrapper = toml::from_str(r#"filter = "debug""#).unwrap();
        assert_eq!(wrapper.filter, Severity::Debug);
    }
}
