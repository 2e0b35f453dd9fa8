//! Configuration document formats
//!
//! JSON is always supported; YAML support is compiled in behind the
//! default-on `yaml` cargo feature. The format of a document is selected by
//! content, not file extension: JSON is attempted first, then YAML.

use std::fmt;

use serde_json::Value;

/// Format a mapping configuration document was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ConfigFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            #[cfg(feature = "yaml")]
            Self::Yaml => "YAML",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a document into a generic JSON value, detecting the format from
/// the content itself.
///
/// The error message names every format that was attempted, with the parser
/// detail for each.
pub(crate) fn parse_document(content: &str) -> Result<(Value, ConfigFormat), String> {
    let json_err = match serde_json::from_str::<Value>(content) {
        Ok(value) => return Ok((value, ConfigFormat::Json)),
        Err(err) => err,
    };
    parse_yaml_fallback(content, &json_err)
}

#[cfg(feature = "yaml")]
fn parse_yaml_fallback(
    content: &str,
    json_err: &serde_json::Error,
) -> Result<(Value, ConfigFormat), String> {
    match serde_yaml::from_str::<serde_yaml::Value>(content) {
        // Non-string mapping keys surface as a conversion error
        Ok(yaml) => match serde_json::to_value(&yaml) {
            Ok(value) => Ok((value, ConfigFormat::Yaml)),
            Err(err) => Err(format!("invalid YAML document: {err}")),
        },
        Err(yaml_err) => Err(format!("not valid JSON ({json_err}) nor YAML ({yaml_err})")),
    }
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml_fallback(
    _content: &str,
    json_err: &serde_json::Error,
) -> Result<(Value, ConfigFormat), String> {
    Err(format!("not valid JSON ({json_err})"))
}
