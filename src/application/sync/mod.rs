//! Delta Sync
//!
//! Walks the source directory and uploads every file whose content differs
//! from the object currently stored under its key.
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_site::application::DeltaSyncer;
//!
//! let syncer = DeltaSyncer::new(store);
//! let result = syncer.sync(Path::new("public"), false)?;
//! ```

mod syncer;

pub use syncer::DeltaSyncer;
