//! End-to-end test for the pre-processing flow
//!
//! Exercises the complete path a host pipeline drives: config file on disk
//! -> store load -> stage check -> per-item metadata augmentation ->
//! cleanup after templating.

use chanmap_core::MappingStore;
use chanmap_plugin::{ChannelMapper, cleanup, template_uses_mapping, validate_stage};
use serde_json::{Map, Value, json};
use std::fs;
use tempfile::TempDir;

/// Write the canonical two-category mapping config used across these tests.
fn setup_mapping_config() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mapping.json");
    fs::write(
        &path,
        r#"{
            "online_courses": {
                "home": "/archive/course",
                "temp": "/tmp/yt-dlp",
                "field": {
                    "channel": {
                        "MIT OpenCourseWare": "OpenCourse - MIT",
                        "Stanford Online": "OpenCourse - Stanford"
                    }
                }
            },
            "music": {
                "home": "/archive/music",
                "field": {
                    "channel": {
                        "MIT OpenCourseWare": "Never Reached",
                        "NPR Music": "Tiny Desk"
                    }
                }
            }
        }"#,
    )
    .unwrap();
    (temp, path)
}

fn item(channel: &str) -> Map<String, Value> {
    json!({
        "id": "dQw4w9WgXcQ",
        "channel": channel,
        "title": "Some Video"
    })
    .as_object()
    .unwrap()
    .clone()
}

#[test]
fn full_pre_process_pass() {
    let (_temp, config_path) = setup_mapping_config();

    // Host-side setup: stage check, template check, one-time load
    assert!(validate_stage("pre_process").is_ok());
    assert!(template_uses_mapping("%(mapped_channel)s/%(title)s.%(ext)s"));
    let mapper = ChannelMapper::from_config(&config_path).unwrap();

    // Per-item pass
    let mut info = item("MIT OpenCourseWare");
    let added = mapper.apply(&mut info);

    assert_eq!(info["mapped_channel"], "OpenCourse - MIT");
    assert_eq!(info["mapped_home"], "/archive/course");
    assert_eq!(info["mapped_temp"], "/tmp/yt-dlp");
    // Raw value survives for downstream consumers
    assert_eq!(info["channel"], "MIT OpenCourseWare");

    // After the host's templating, the added keys are stripped again
    cleanup(&mut info, &added);
    assert_eq!(info, item("MIT OpenCourseWare"));
}

#[test]
fn first_declared_category_wins_across_the_whole_flow() {
    let (_temp, config_path) = setup_mapping_config();
    let mapper = ChannelMapper::from_config(&config_path).unwrap();

    // Both categories map this channel; declaration order decides
    let mut info = item("MIT OpenCourseWare");
    mapper.apply(&mut info);
    assert_eq!(info["mapped_channel"], "OpenCourse - MIT");
    assert_eq!(info["mapped_home"], "/archive/course");

    // The second category still serves its own entries
    let mut info = item("NPR Music");
    mapper.apply(&mut info);
    assert_eq!(info["mapped_channel"], "Tiny Desk");
    assert_eq!(info["mapped_home"], "/archive/music");
    // No temp declared for the music category, so no hint is published
    assert!(!info.contains_key("mapped_temp"));
}

#[test]
fn unmapped_items_flow_through_untouched_except_mapped_channel() {
    let (_temp, config_path) = setup_mapping_config();
    let mapper = ChannelMapper::from_config(&config_path).unwrap();

    let mut info = item("Some Other Channel");
    let added = mapper.apply(&mut info);

    assert_eq!(info["mapped_channel"], "Some Other Channel");
    assert!(!info.contains_key("mapped_home"));
    assert!(!info.contains_key("mapped_temp"));
    assert_eq!(added, ["mapped_channel"]);
}

#[test]
fn mapper_is_shared_across_item_workers() {
    let (_temp, config_path) = setup_mapping_config();
    let mapper = std::sync::Arc::new(ChannelMapper::from_config(&config_path).unwrap());

    let handles: Vec<_> = ["MIT OpenCourseWare", "NPR Music", "Unknown"]
        .into_iter()
        .map(|channel| {
            let mapper = std::sync::Arc::clone(&mapper);
            std::thread::spawn(move || {
                let mut info = item(channel);
                mapper.apply(&mut info);
                info["mapped_channel"].as_str().unwrap().to_string()
            })
        })
        .collect();

    let mapped: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(mapped, ["OpenCourse - MIT", "Tiny Desk", "Unknown"]);
}

#[test]
fn store_can_be_queried_directly_by_the_host() {
    let (_temp, config_path) = setup_mapping_config();
    let store = MappingStore::load(&config_path).unwrap();

    let resolution = chanmap_core::resolve("Stanford Online", &store);
    assert_eq!(resolution.mapped_channel, "OpenCourse - Stanford");
    assert_eq!(
        resolution.home_override,
        Some(std::path::PathBuf::from("/archive/course"))
    );
}
