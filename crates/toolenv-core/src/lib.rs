//! Tool-version manifest parsing for toolenv.
//!
//! Reads an asdf-style `.tool-versions` file, one `<tool> <version>` pair
//! per line, into an insertion-ordered [`ToolVersions`] map.
//!
//! # Example
//!
//! ```
//! use toolenv_core::ToolVersions;
//!
//! let tools = ToolVersions::parse_str("nodejs 20.11.0\npython 3.12.1\n");
//! assert_eq!(tools.version("nodejs"), Some("20.11.0"));
//! assert_eq!(tools.len(), 2);
//! ```

pub mod entry;
pub mod error;
pub mod parser;
pub mod tool_versions;

pub use entry::ToolVersionEntry;
pub use error::{Error, Result};
pub use parser::parse_tool_versions;
pub use tool_versions::ToolVersions;
