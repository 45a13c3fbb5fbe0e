//! Shared test utilities for the toolenv workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`workspace`]: [`TestWorkspace`] temp directory holding a manifest and
//!   runner command files

pub mod workspace;

pub use workspace::TestWorkspace;
