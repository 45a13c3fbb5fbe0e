//! File commands (`GITHUB_ENV`, `GITHUB_OUTPUT`)
//!
//! Each value is appended as a heredoc record:
//!
//! ```text
//! NAME<<ghadelimiter_<uuid>
//! value
//! ghadelimiter_<uuid>
//! ```

use std::path::Path;

use toolenv_fs::io;

use crate::{Error, Result};

/// Render a heredoc record with a freshly generated delimiter.
pub fn prepare_key_value_message(key: &str, value: &str) -> Result<String> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    prepare_with_delimiter(key, value, &delimiter)
}

fn prepare_with_delimiter(key: &str, value: &str, delimiter: &str) -> Result<String> {
    if key.contains(delimiter) {
        return Err(Error::InvalidCommandValue {
            field: "name".into(),
            delimiter: delimiter.into(),
        });
    }
    if value.contains(delimiter) {
        return Err(Error::InvalidCommandValue {
            field: "value".into(),
            delimiter: delimiter.into(),
        });
    }

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}"))
}

/// Append a `key`/`value` record to a runner command file.
pub fn issue_file_command(path: &Path, key: &str, value: &str) -> Result<()> {
    let message = prepare_key_value_message(key, value)?;
    io::append_text(path, &format!("{message}\n"))?;
    tracing::debug!(file = %path.display(), key, "issued file command");
    Ok(())
}
