//! Local File System Helpers
//!
//! Everything that touches the local disk: enumeration, fingerprinting and
//! config directory resolution.

mod config_home;
mod fingerprint;
mod walker;

pub use config_home::{user_config_dir, CONFIG_HOME_VAR};
pub use fingerprint::{ContentFingerprinter, CHUNK_SIZE, MULTIPART_THRESHOLD};
pub use walker::list_files;
