//! Mapping-resolution engine for channel-based media organization
//!
//! This crate is the core of chanmap: it loads a user-supplied mapping
//! configuration into an ordered, immutable [`MappingStore`] and resolves
//! individual items against it, producing the mapped channel name and
//! optional directory overrides the host's output templating consumes.
//!
//! # Architecture
//!
//! ```text
//!            host pipeline (chanmap-plugin)
//!                         |
//!                    chanmap-core
//!                         |
//!            +------------+------------+
//!            |                         |
//!     config (load/validate)    resolver (per item)
//! ```
//!
//! The store is loaded once at startup and shared read-only for the rest of
//! the run; [`resolve`] is a pure function and may be called concurrently
//! from any number of workers.
//!
//! # Example
//!
//! ```ignore
//! use chanmap_core::{MappingStore, resolve};
//!
//! let store = MappingStore::load("~/.config/chanmap/mapping.json")?;
//! let resolution = resolve("MIT OpenCourseWare", &store);
//! println!("{}", resolution.mapped_channel);
//! ```

pub mod config;
pub mod error;
pub mod path;
pub mod resolver;

pub use config::{CHANNEL_FIELD, Category, MappingStore};
pub use error::{Error, Result};
pub use path::expand_user;
pub use resolver::{Resolution, resolve};
