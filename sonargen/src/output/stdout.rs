use std::io::{stdout, Write};

use anyhow::Result;

use crate::output::Output;

#[derive(Debug, Default)]
pub struct StdOut {}

impl Output for StdOut {
    fn write_str(&mut self, data: &str) -> Result<()> {
        stdout().lock().write_all(data.as_bytes())?;
        Ok(())
    }
}
