//! Permitted pipeline stages for the channel mapper
//!
//! The mapper contributes metadata that the host's output templating reads
//! at download time, so it must run at one of the early, pre-download
//! stages. Any other stage is rejected eagerly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pipeline positions at which the channel mapper may run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Right after metadata extraction, before filtering
    PreProcess,
    /// After the host's match filters have run
    AfterFilter,
    /// Per-video, still before the download starts
    Video,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreProcess => write!(f, "pre_process"),
            Self::AfterFilter => write!(f, "after_filter"),
            Self::Video => write!(f, "video"),
        }
    }
}

impl Stage {
    /// Parse a stage from the host's `when` value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pre_process" => Some(Self::PreProcess),
            "after_filter" => Some(Self::AfterFilter),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    /// List all supported stage names
    pub fn all_names() -> &'static [&'static str] {
        &["pre_process", "after_filter", "video"]
    }
}

/// Validate the stage name the host configured for this plugin.
///
/// The error lists every supported stage.
pub fn validate_stage(name: &str) -> Result<Stage> {
    Stage::parse(name).ok_or_else(|| Error::InvalidStage {
        stage: name.to_string(),
        allowed: Stage::all_names().join(", "),
    })
}
