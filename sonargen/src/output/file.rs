use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::error;

use crate::output::Output;

/// [Output] to a single file. Parent directories are created as needed and an existing file is
/// truncated.
///
/// Writes are buffered. Call [File::flush] to see write errors; a flush on drop only logs them.
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    writer: BufWriter<fs::File>,
}

impl File {
    pub fn create<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        if path.is_dir() {
            return Err(anyhow!("output '{}' is a directory", path.display()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create output directory")?;
        }
        let file = fs::File::create(&path)
            .with_context(|| format!("create output file '{}'", path.display()))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for File {
    fn drop(&mut self) {
        if let Err(err) = self.writer.flush() {
            error!("failed to flush '{}': {}", self.path.display(), err);
        }
    }
}

impl Output for File {
    fn write_str(&mut self, data: &str) -> Result<()> {
        self.writer.write_all(data.as_bytes())?;
        Ok(())
    }
}
