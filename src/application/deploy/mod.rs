//! Deploy Module
//!
//! Orchestrates one deploy: delta sync, then invalidate what changed.
//!
//! ## Structure
//!
//! - `options` - Per-run settings (`DeployOptions`)
//! - `result` - Outcome types (`DeploySummary`, `InvalidationOutcome`)
//! - `use_case` - Core orchestration (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_site::application::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(syncer, invalidator);
//! let summary = use_case.execute(&DeployOptions::new("public").with_wait(true))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeploySummary, InvalidationOutcome};
pub use use_case::DeployUseCase;
