use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A build feature that is either switched on/off or switched on with options.
///
/// Mirrors how build options are usually written by hand:
///
/// ```toml
/// [build]
/// analyze = true
/// optimize_css = { safe = true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureToggle {
    Flag(bool),
    Options(Map<String, Value>),
}

impl FeatureToggle {
    pub fn is_enabled(&self) -> bool {
        match self {
            FeatureToggle::Flag(enabled) => *enabled,
            FeatureToggle::Options(_) => true,
        }
    }

    /// Options object for an enabled feature.
    ///
    /// `true` yields an empty object, `false` yields `None`.
    pub fn options(&self) -> Option<Map<String, Value>> {
        match self {
            FeatureToggle::Flag(true) => Some(Map::new()),
            FeatureToggle::Flag(false) => None,
            FeatureToggle::Options(options) => Some(options.clone()),
        }
    }
}

impl Default for FeatureToggle {
    fn default() -> Self {
        FeatureToggle::Flag(false)
    }
}

impl From<bool> for FeatureToggle {
    fn from(enabled: bool) -> Self {
        FeatureToggle::Flag(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_flag_and_object_forms() {
        let flag: FeatureToggle = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(flag, FeatureToggle::Flag(true));

        let options: FeatureToggle = serde_json::from_value(json!({ "safe": true })).unwrap();
        assert!(options.is_enabled());
        assert_eq!(options.options().unwrap()["safe"], json!(true));
    }

    #[test]
    fn disabled_flag_has_no_options() {
        assert!(FeatureToggle::Flag(false).options().is_none());
        assert!(FeatureToggle::Flag(true).options().unwrap().is_empty());
    }
}
