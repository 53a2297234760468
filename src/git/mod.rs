//! Git tag handling and the system-tool backend.

pub mod system;
pub mod tags;

pub use system::SystemTools;
pub use tags::{parse_version_tag, resolve_current_version};
