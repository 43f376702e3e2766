mod errors;

use derive_builder::Builder;
pub use errors::*;
use serde::Deserialize;

/// Placeholder name(s) of the OUT cursor(s) a statement returns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(untagged)]
pub enum OutCursorNames {
    #[default]
    None,
    Single(String),
    Multi(Vec<String>),
}

impl OutCursorNames {
    /// Configured placeholder names, skipping empty entries.
    pub fn placeholders(&self) -> Vec<&str> {
        let names = match self {
            OutCursorNames::None => vec![],
            OutCursorNames::Single(name) => vec![name.as_str()],
            OutCursorNames::Multi(names) => names.iter().map(String::as_str).collect(),
        };
        names.into_iter().filter(|name| !name.is_empty()).collect()
    }
}

impl From<&str> for OutCursorNames {
    fn from(name: &str) -> Self {
        OutCursorNames::Single(name.to_string())
    }
}

impl From<Vec<&str>> for OutCursorNames {
    fn from(names: Vec<&str>) -> Self {
        OutCursorNames::Multi(names.into_iter().map(String::from).collect())
    }
}

/// Settings the binder needs from the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Deserialize)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct BindConfig {
    /// Name fragments marking OUT parameters
    pub out_params: Vec<String>,
    /// Name fragments marking function return parameters
    pub function_return_params: Vec<String>,
    pub out_cursor: OutCursorNames,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            out_params: vec!["_out".to_string(), "_io".to_string()],
            function_return_params: vec!["_ret".to_string()],
            out_cursor: OutCursorNames::None,
        }
    }
}

impl BindConfig {
    pub fn builder() -> BindConfigBuilder {
        BindConfigBuilder::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when the parameter name contains any OUT or function return
    /// suffix.
    pub fn is_output_parameter(&self, name: &str) -> bool {
        self.out_params
            .iter()
            .chain(self.function_return_params.iter())
            .filter(|suffix| !suffix.is_empty())
            .any(|suffix| name.contains(suffix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("p_total_out", true)]
    #[test_case("p_cursor_io", true)]
    #[test_case("fn_ret", true)]
    #[test_case("p_out_total", true ; "suffixes match anywhere in the name")]
    #[test_case("p_total", false)]
    fn default_output_parameters(name: &str, expected: bool) {
        assert_eq!(BindConfig::default().is_output_parameter(name), expected);
    }

    #[test]
    fn builder_keeps_defaults_for_unset_fields() {
        let config = BindConfig::builder()
            .out_params(vec!["_o".to_string()])
            .out_cursor("rc")
            .build()
            .unwrap();
        assert_eq!(config.out_params, vec!["_o".to_string()]);
        assert_eq!(config.function_return_params, vec!["_ret".to_string()]);
        assert_eq!(config.out_cursor, OutCursorNames::Single("rc".to_string()));
        assert!(!config.is_output_parameter("p_total"));
        assert!(config.is_output_parameter("p_total_o"));
        assert!(config.is_output_parameter("p_total_out"));
    }

    #[test]
    fn empty_suffixes_never_match() {
        let config = BindConfig::builder()
            .out_params(vec![String::new()])
            .function_return_params(Vec::<String>::new())
            .build()
            .unwrap();
        assert!(!config.is_output_parameter("anything"));
    }

    #[test]
    fn from_json() {
        let config = BindConfig::from_json(
            r#"{"out_params": ["_out"], "out_cursor": ["rc_orders", "rc_items"]}"#,
        )
        .unwrap();
        assert_eq!(config.out_params, vec!["_out".to_string()]);
        assert_eq!(config.function_return_params, vec!["_ret".to_string()]);
        assert_eq!(config.out_cursor.placeholders(), vec!["rc_orders", "rc_items"]);

        let config = BindConfig::from_json(r#"{"out_cursor": "rc"}"#).unwrap();
        assert_eq!(config.out_cursor, OutCursorNames::Single("rc".to_string()));

        let config = BindConfig::from_json(r#"{"out_cursor": null}"#).unwrap();
        assert_eq!(config.out_cursor, OutCursorNames::None);

        assert!(matches!(
            BindConfig::from_json(r#"{"out_params": 1}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn placeholders_skip_empty_names() {
        let names: OutCursorNames = vec!["rc", ""].into();
        assert_eq!(names.placeholders(), vec!["rc"]);
        assert!(OutCursorNames::from("").placeholders().is_empty());
    }
}
