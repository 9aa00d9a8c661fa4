//! Scenario tests for deploy-site.
//!
//! Each scenario runs the full deploy use case against in-memory ports.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/repeat_deploys.rs"]
mod repeat_deploys;

#[path = "scenarios/large_site.rs"]
mod large_site;
