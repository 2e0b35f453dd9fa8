//! Starter mapping document for first-time setup
//!
//! Writing the starter is an explicit operation the host (or the user) can
//! invoke; loading a mapping never creates one implicitly. A missing config
//! at load time stays a hard error.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};

use crate::error::{Error, Result};

/// The starter document, with placeholder entries the user is expected to
/// replace.
fn starter_document() -> Value {
    json!({
        "uncategorized": {
            "field": {
                "channel": {
                    "MIT OpenCourseWare": "OCW - MIT",
                    "<CHANNEL NAME>": "<NEW CHANNEL NAME>",
                },
            },
        },
        "<CATEGORY>": {
            "home": "<TARGET LOCATION>",
            "temp": "<TEMP LOCATION>",
            "field": {
                "<FIELD NAME>": {
                    "<ORIGINAL FIELD VALUE>": "<NEW FIELD VALUE>",
                },
            },
        },
    })
}

/// Write a starter mapping config to `path`.
///
/// Refuses to overwrite an existing file. Parent directories are created
/// as needed. The document is written as YAML when the path carries a
/// `.yaml`/`.yml` extension and the `yaml` feature is enabled, as
/// pretty-printed JSON otherwise; this extension check applies to this
/// write-side helper only, loading always detects by content.
pub fn write_starter_config(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(Error::starter_write(path, "file already exists"));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|err| Error::starter_write(path, err.to_string()))?;
        }
    }

    let rendered = render(path)?;
    fs::write(path, rendered).map_err(|err| Error::starter_write(path, err.to_string()))?;
    tracing::warn!(?path, "Wrote starter mapping config, edit it before the next run");
    Ok(())
}

fn render(path: &Path) -> Result<String> {
    let document = starter_document();

    #[cfg(feature = "yaml")]
    if matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    ) {
        return serde_yaml::to_string(&document)
            .map_err(|err| Error::starter_write(path, err.to_string()));
    }

    serde_json::to_string_pretty(&document)
        .map(|mut rendered| {
            rendered.push('\n');
            rendered
        })
        .map_err(|err| Error::starter_write(path, err.to_string()))
}
