//! Item-metadata augmentation
//!
//! The host hands each item's metadata over as a JSON object. The mapper
//! reads the raw `channel` value, resolves it against the loaded store, and
//! supplements the object with `mapped_*` keys for the host's output
//! templating. The raw value is only read, never overwritten.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use chanmap_core::{MappingStore, expand_user, resolve};

use crate::error::Result;

/// Metadata key the host's extractor fills with the raw channel name
pub const CHANNEL_KEY: &str = "channel";

/// Metadata key receiving the mapped channel name
pub const MAPPED_CHANNEL_KEY: &str = "mapped_channel";

/// Metadata key receiving the matched category's destination root
pub const MAPPED_HOME_KEY: &str = "mapped_home";

/// Metadata key receiving the matched category's scratch directory
pub const MAPPED_TEMP_KEY: &str = "mapped_temp";

/// The plugin entry point: a loaded store plus the per-item augmentation.
///
/// Constructed once at startup from the single plugin option (the config
/// path) and immutable afterwards; [`apply`](Self::apply) may be called
/// concurrently for any number of items.
#[derive(Debug, Clone)]
pub struct ChannelMapper {
    store: MappingStore,
}

impl ChannelMapper {
    /// Load the mapping configuration from the path given in the plugin
    /// options and build the mapper.
    ///
    /// The path accepts user-home shorthand and relative forms; it is
    /// normalized before the load. Load failures abort the run.
    pub fn from_config(path: impl AsRef<Path>) -> Result<Self> {
        let path = normalize_config_path(path.as_ref());
        let store = MappingStore::load(&path)?;
        Ok(Self { store })
    }

    /// Wrap an already-loaded store.
    pub fn new(store: MappingStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MappingStore {
        &self.store
    }

    /// Resolve the item's channel and write the `mapped_*` keys into its
    /// metadata.
    ///
    /// Returns the list of keys that were added so the host can strip them
    /// after its templating has run (see [`cleanup`]). An unmapped or
    /// missing channel still produces `mapped_channel` (the raw value
    /// verbatim, or an empty string) and no directory hints.
    pub fn apply(&self, info: &mut Map<String, Value>) -> Vec<String> {
        let channel = info
            .get(CHANNEL_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let resolution = resolve(&channel, &self.store);
        tracing::info!(
            original = %channel,
            mapped = %resolution.mapped_channel,
            "Mapped channel"
        );

        let mut added = Vec::with_capacity(3);
        info.insert(
            MAPPED_CHANNEL_KEY.to_string(),
            Value::String(resolution.mapped_channel),
        );
        added.push(MAPPED_CHANNEL_KEY.to_string());

        if let Some(home) = resolution.home_override {
            info.insert(MAPPED_HOME_KEY.to_string(), path_value(home));
            added.push(MAPPED_HOME_KEY.to_string());
        }
        if let Some(temp) = resolution.temp_override {
            info.insert(MAPPED_TEMP_KEY.to_string(), path_value(temp));
            added.push(MAPPED_TEMP_KEY.to_string());
        }

        added
    }
}

/// Remove keys previously added by [`ChannelMapper::apply`].
///
/// The host calls this after its final templating stage so downstream
/// consumers see the item metadata exactly as extracted.
pub fn cleanup(info: &mut Map<String, Value>, keys: &[String]) {
    for key in keys {
        info.remove(key);
    }
}

fn path_value(path: PathBuf) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}

/// Expand user-home shorthand and absolutize the configured config path.
fn normalize_config_path(path: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => expand_user(s),
        None => path.to_path_buf(),
    };
    std::path::absolute(&expanded).unwrap_or(expanded)
}
