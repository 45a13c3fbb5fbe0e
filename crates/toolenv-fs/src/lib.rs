//! Filesystem primitives for toolenv
//!
//! Provides streaming line reads for manifest files and locked appends
//! for runner command files.

pub mod constants;
pub mod error;
pub mod io;

pub use constants::ManifestFile;
pub use error::{Error, Result};
pub use io::Lines;
