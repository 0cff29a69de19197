use crate::{
    logging::LogLevel,
    particles::{DEFAULT_LINK_DISTANCE, DEFAULT_PARTICLE_COUNT},
    typing::DEFAULT_TYPING_TEXT,
};
use serde::Deserialize;
use serde_json::Value;

pub const SITE_CONFIG_ELEMENT_ID: &str = "site-config";
pub const MOUNT_ELEMENT_ID: &str = "app";

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PARTICLE_COUNT_BOUNDS: (i64, i64) = (0, 400);
const LINK_DISTANCE_BOUNDS: (f64, f64) = (10.0, 400.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingError {
    NoDocument,
    MissingMount,
}

impl BindingError {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoDocument => "document_unavailable",
            Self::MissingMount => "mount_point_missing",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub particle_count: usize,
    pub link_distance: f64,
    pub typing_text: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            link_distance: DEFAULT_LINK_DISTANCE,
            typing_text: DEFAULT_TYPING_TEXT.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSiteConfig {
    particle_count: Option<Value>,
    link_distance: Option<Value>,
    typing_text: Option<Value>,
    log_level: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
    Unparsable(String),
    WrongType(&'static str),
    OutOfBounds(&'static str),
    Empty(&'static str),
    UnknownLogLevel(String),
}

impl ConfigIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unparsable(_) => "unparsable",
            Self::WrongType(_) => "wrong_type",
            Self::OutOfBounds(_) => "out_of_bounds",
            Self::Empty(_) => "empty",
            Self::UnknownLogLevel(_) => "unknown_log_level",
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::Unparsable(message) => message.clone(),
            Self::WrongType(field) | Self::OutOfBounds(field) | Self::Empty(field) => {
                (*field).to_string()
            }
            Self::UnknownLogLevel(value) => value.clone(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: Option<&str>) -> (Self, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let parsed = match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(text) => parse_raw(text).unwrap_or_else(|error| {
                issues.push(ConfigIssue::Unparsable(error));
                RawSiteConfig::default()
            }),
            None => RawSiteConfig::default(),
        };

        let defaults = Self::default();
        let particle_count = with_bounds(
            parsed.particle_count,
            Value::as_i64,
            DEFAULT_PARTICLE_COUNT as i64,
            PARTICLE_COUNT_BOUNDS,
            "particleCount",
            &mut issues,
        );
        let particle_count = usize::try_from(particle_count).unwrap_or(defaults.particle_count);
        let link_distance = with_bounds(
            parsed.link_distance,
            Value::as_f64,
            defaults.link_distance,
            LINK_DISTANCE_BOUNDS,
            "linkDistance",
            &mut issues,
        );
        let typing_text = text_field(parsed.typing_text, "typingText", &mut issues);
        let typing_text = match typing_text {
            Some(text) if text.trim().is_empty() => {
                issues.push(ConfigIssue::Empty("typingText"));
                defaults.typing_text
            }
            Some(text) => text,
            None => defaults.typing_text,
        };
        let log_level = match text_field(parsed.log_level, "logLevel", &mut issues) {
            Some(value) => LogLevel::parse(&value).unwrap_or_else(|| {
                issues.push(ConfigIssue::UnknownLogLevel(value));
                defaults.log_level
            }),
            None => defaults.log_level,
        };

        (
            Self {
                particle_count,
                link_distance,
                typing_text,
                log_level,
            },
            issues,
        )
    }
}

// Only a block that is not a JSON object is rejected as a whole.
fn parse_raw(text: &str) -> Result<RawSiteConfig, String> {
    match serde_json::from_str::<Value>(text).map_err(|error| error.to_string())? {
        object @ Value::Object(_) => {
            serde_json::from_value(object).map_err(|error| error.to_string())
        }
        _ => Err("expected a JSON object".to_string()),
    }
}

fn with_bounds<T: PartialOrd + Copy>(
    value: Option<Value>,
    extract: impl Fn(&Value) -> Option<T>,
    default: T,
    bounds: (T, T),
    field: &'static str,
    issues: &mut Vec<ConfigIssue>,
) -> T {
    let Some(value) = value.filter(|value| !value.is_null()) else {
        return default;
    };

    match extract(&value) {
        Some(value) if value >= bounds.0 && value <= bounds.1 => value,
        Some(_) => {
            issues.push(ConfigIssue::OutOfBounds(field));
            default
        }
        None => {
            issues.push(ConfigIssue::WrongType(field));
            default
        }
    }
}

fn text_field(
    value: Option<Value>,
    field: &'static str,
    issues: &mut Vec<ConfigIssue>,
) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Null => None,
        _ => {
            issues.push(ConfigIssue::WrongType(field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_block_yields_defaults() {
        let (config, issues) = SiteConfig::from_json(None);

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.particle_count, 80);
        assert_eq!(config.link_distance, 120.0);
        assert_eq!(config.typing_text, "Portfolio Elone LEVY");
        assert!(issues.is_empty());
    }

    #[test]
    fn valid_overrides_are_applied() {
        let (config, issues) = SiteConfig::from_json(Some(
            r#"{ "particleCount": 40, "linkDistance": 90.5, "typingText": "Hello", "logLevel": "debug" }"#,
        ));

        assert!(issues.is_empty());
        assert_eq!(config.particle_count, 40);
        assert_eq!(config.link_distance, 90.5);
        assert_eq!(config.typing_text, "Hello");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_values_fall_back_per_field() {
        let (config, issues) = SiteConfig::from_json(Some(
            r#"{ "particleCount": 5000, "linkDistance": 2.0, "typingText": "  ", "logLevel": "loud" }"#,
        ));

        assert_eq!(config, SiteConfig::default());
        assert_eq!(
            issues,
            vec![
                ConfigIssue::OutOfBounds("particleCount"),
                ConfigIssue::OutOfBounds("linkDistance"),
                ConfigIssue::Empty("typingText"),
                ConfigIssue::UnknownLogLevel("loud".to_string()),
            ]
        );
    }

    #[test]
    fn one_bad_field_keeps_the_other_overrides() {
        let (config, issues) = SiteConfig::from_json(Some(
            r#"{ "particleCount": -5, "typingText": "Hello", "linkDistance": 90 }"#,
        ));

        assert_eq!(config.particle_count, 80);
        assert_eq!(config.typing_text, "Hello");
        assert_eq!(config.link_distance, 90.0);
        assert_eq!(issues, vec![ConfigIssue::OutOfBounds("particleCount")]);
    }

    #[test]
    fn wrongly_typed_fields_fall_back_individually() {
        let (config, issues) = SiteConfig::from_json(Some(
            r#"{ "particleCount": "80", "linkDistance": "far", "typingText": 7, "logLevel": "warn" }"#,
        ));

        assert_eq!(config.particle_count, 80);
        assert_eq!(config.link_distance, 120.0);
        assert_eq!(config.typing_text, "Portfolio Elone LEVY");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(
            issues,
            vec![
                ConfigIssue::WrongType("particleCount"),
                ConfigIssue::WrongType("linkDistance"),
                ConfigIssue::WrongType("typingText"),
            ]
        );

        let (config, issues) = SiteConfig::from_json(Some(
            r#"{ "particleCount": 80.5, "linkDistance": 1e20, "typingText": null }"#,
        ));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(
            issues,
            vec![
                ConfigIssue::WrongType("particleCount"),
                ConfigIssue::OutOfBounds("linkDistance"),
            ]
        );
    }

    #[test]
    fn non_object_block_is_unparsable() {
        let (config, issues) = SiteConfig::from_json(Some("[40, 90]"));

        assert_eq!(config, SiteConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].as_str(), "unparsable");
    }

    #[test]
    fn unparsable_block_is_reported_and_ignored() {
        let (config, issues) = SiteConfig::from_json(Some("{ particleCount: "));

        assert_eq!(config, SiteConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].as_str(), "unparsable");
    }

    #[test]
    fn blank_block_counts_as_absent() {
        let (config, issues) = SiteConfig::from_json(Some("   \n"));

        assert_eq!(config, SiteConfig::default());
        assert!(issues.is_empty());
    }
}
