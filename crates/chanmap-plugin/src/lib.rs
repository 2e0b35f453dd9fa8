//! Pipeline plugin surface for chanmap channel mapping
//!
//! This crate is the contract the host pipeline consumes. It sits above
//! `chanmap-core` and owns everything host-facing:
//!
//! - **Stage validation**: the mapper must run before the host downloads
//!   and places files, so only the early metadata stages are accepted.
//! - **Metadata augmentation**: [`ChannelMapper::apply`] resolves one
//!   item's channel and writes the `mapped_*` keys into its metadata
//!   mapping; [`cleanup`] strips them once the host has consumed them.
//! - **Output-template inspection**: detect whether the host's output
//!   template references any `%(mapped_*)s` variable at all.
//! - **Starter config**: an explicit helper writing a commented starter
//!   mapping document for first-time setup.
//!
//! The host provides the CLI and the download machinery; nothing here
//! performs network access or moves files.

pub mod error;
pub mod mapper;
pub mod outtmpl;
pub mod stage;
pub mod template;

pub use error::{Error, Result};
pub use mapper::{
    CHANNEL_KEY, ChannelMapper, MAPPED_CHANNEL_KEY, MAPPED_HOME_KEY, MAPPED_TEMP_KEY, cleanup,
};
pub use outtmpl::{template_mapping_vars, template_uses_mapping};
pub use stage::{Stage, validate_stage};
pub use template::write_starter_config;
