//! Common test utilities for deploy-site integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and config directories plus a CLI runner
//! - `MemoryStore` / `MemoryCdn`: in-memory port implementations

#![allow(dead_code)]

pub mod env;
pub mod fakes;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fakes::*;
