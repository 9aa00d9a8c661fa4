//! Terminal UI
//!
//! Design tokens, colored text and capability detection shared by the
//! console event sink and the error/summary output.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
