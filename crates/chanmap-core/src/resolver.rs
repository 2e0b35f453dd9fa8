//! Per-item category resolution
//!
//! A stateless, single-pass lookup against an immutable [`MappingStore`].
//! Resolution never fails: an unmapped channel is the designed fallback
//! path, not an error, so item-level data variability can never interrupt
//! a batch.

use std::path::PathBuf;

use crate::config::MappingStore;

/// Outcome of resolving one item's channel against the store.
///
/// Created fresh per processed item and discarded once the host has
/// consumed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Replacement channel name, or the raw name verbatim when nothing
    /// matched
    pub mapped_channel: String,
    /// Destination root of the matching category
    pub home_override: Option<PathBuf>,
    /// Scratch directory of the matching category
    pub temp_override: Option<PathBuf>,
}

impl Resolution {
    /// Fallback result: the raw channel passes through, no overrides.
    fn passthrough(channel: &str) -> Self {
        Self {
            mapped_channel: channel.to_string(),
            home_override: None,
            temp_override: None,
        }
    }
}

/// Resolve a raw channel name against the loaded store.
///
/// Categories are scanned in declaration order and the first category whose
/// channel table contains the raw name wins, even when a later category
/// also maps it. The lookup is exact and case-sensitive. A missing or empty
/// channel falls through without scanning.
///
/// Pure with respect to global state: no I/O, no shared mutable state, and
/// identical inputs always produce an identical result, so this may be
/// called concurrently for any number of items.
pub fn resolve(channel: &str, store: &MappingStore) -> Resolution {
    if channel.is_empty() {
        return Resolution::passthrough(channel);
    }

    for category in store.categories() {
        if let Some(mapped) = category.channel_table().and_then(|table| table.get(channel)) {
            return Resolution {
                mapped_channel: mapped.clone(),
                home_override: category.home.clone(),
                temp_override: category.temp.clone(),
            };
        }
    }

    Resolution::passthrough(channel)
}
