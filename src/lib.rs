//! Enhanced rock weathering carbon removal estimates.
//!
//! Re-exports the workspace crates and adds [`request`], the TOML estimation
//! request format consumed by the `erw` command-line tool.

pub mod request;

pub use erw_components;
pub use erw_core;
