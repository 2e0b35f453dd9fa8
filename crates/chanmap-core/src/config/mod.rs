//! Mapping configuration loading and validation
//!
//! A mapping configuration is a JSON or YAML document whose top level maps
//! category names to category objects:
//!
//! ```json
//! {
//!     "online_courses": {
//!         "home": "/archive/course",
//!         "temp": "/tmp/yt-dlp",
//!         "field": {
//!             "channel": {
//!                 "MIT OpenCourseWare": "OpenCourse - MIT"
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! Every key inside a category is optional. The document is validated
//! strictly at load time into [`Category`] records; nothing is accessed
//! optimistically during per-item resolution. Category iteration order is
//! the declaration order of the source document.

mod format;
mod store;

pub use store::{CHANNEL_FIELD, Category, MappingStore};
