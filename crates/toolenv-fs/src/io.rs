//! Streaming reads and locked appends

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Lazy line iterator over a file.
///
/// Line terminators (`\n` and `\r\n`) are stripped. The file handle is
/// owned by the iterator and closed when it is dropped, whether or not the
/// stream was consumed to the end.
#[derive(Debug)]
pub struct Lines {
    path: PathBuf,
    inner: std::io::Lines<BufReader<File>>,
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|line| line.map_err(|e| Error::io(&self.path, e)))
    }
}

/// Open a file for line-by-line reading.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Lines> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    tracing::trace!(path = %path.display(), "opened for line reading");

    Ok(Lines {
        path: path.to_path_buf(),
        inner: BufReader::new(file).lines(),
    })
}

/// Append text to a file, creating it if needed.
///
/// Holds an exclusive advisory lock for the duration of the write so
/// records from concurrent writers never interleave.
pub fn append_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;

    file.flush().map_err(|e| Error::io(path, e))?;

    FileExt::unlock(&file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    tracing::trace!(path = %path.display(), bytes = content.len(), "appended");
    Ok(())
}
