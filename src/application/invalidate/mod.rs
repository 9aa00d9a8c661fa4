//! Cache Invalidation
//!
//! Submits CDN invalidations for changed keys, splitting oversized path
//! lists into several requests, and optionally polls them to completion.
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_site::application::CacheInvalidator;
//!
//! let invalidator = CacheInvalidator::new(api, "E2ABCDEF123456");
//! let ids = invalidator.invalidate(&["index.html", "css/style.css"])?;
//! let outcomes = invalidator.wait_all(&ids, DEFAULT_WAIT_TIMEOUT);
//! ```

mod invalidator;

pub use invalidator::{CacheInvalidator, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};
