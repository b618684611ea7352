use std::fmt::{Display, Formatter};

use anyhow::Result;

use crate::output::Output;

/// In-memory [Output].
#[derive(Debug, Default)]
pub struct Buffer {
    data: String,
}

impl Buffer {
    pub fn as_str(&self) -> &str {
        &self.data
    }
}

impl Display for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

impl Output for Buffer {
    fn write_str(&mut self, data: &str) -> Result<()> {
        self.data.push_str(data);
        Ok(())
    }

    fn write(&mut self, data: char) -> Result<()> {
        self.data.push(data);
        Ok(())
    }
}
