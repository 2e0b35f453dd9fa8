//! Output-template inspection
//!
//! The host references mapped fields in its output template as
//! `%(mapped_channel)s`. When no such variable is present the mapper has
//! nothing to contribute and the host can skip the whole pass.

use std::sync::OnceLock;

use regex::Regex;

/// Variable pattern the host's templating uses for mapped fields
const MAPPING_FIELD_PATTERN: &str = r"%\((mapped_\w+)\)s";

fn mapping_field_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MAPPING_FIELD_PATTERN).expect("pattern must compile"))
}

/// Mapped-field variable names referenced by the output template, in order
/// of appearance.
pub fn template_mapping_vars(outtmpl: &str) -> Vec<String> {
    mapping_field_regex()
        .captures_iter(outtmpl)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Whether the output template consumes any mapped field at all.
pub fn template_uses_mapping(outtmpl: &str) -> bool {
    mapping_field_regex().is_match(outtmpl)
}
