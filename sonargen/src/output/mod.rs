use anyhow::Result;

pub use buffer::Buffer;
pub use file::File;
pub use stdout::StdOut;

mod buffer;
mod file;
mod stdout;

/// Destination for the text written by a [crate::Generator].
pub trait Output {
    fn write_str(&mut self, data: &str) -> Result<()>;

    fn write(&mut self, data: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(data.encode_utf8(&mut buf))
    }

    fn newline(&mut self) -> Result<()> {
        self.write('\n')
    }
}
