//! Diagnostic output targets, and the text and JSON forms of vectors and
//! matrices.

use std::fs::File;
use std::io::{Error, ErrorKind, Result, Write};

mod text;
pub use text::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        mod json;
        pub use json::*;
    }
}

/// Destination of the diagnostic output written by [`LuSolver`](crate::algebra::LuSolver).
///
/// Files and user supplied streams share the `Writer` arm.
pub(crate) enum PrintTarget {
    Stdout(std::io::Stdout),
    Buffer(Vec<u8>),
    Writer(Box<dyn Write + Send + Sync>),
    Sink(std::io::Sink),
}

impl PrintTarget {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            PrintTarget::Stdout(out) => out,
            PrintTarget::Buffer(buf) => buf,
            PrintTarget::Writer(w) => w.as_mut(),
            PrintTarget::Sink(sink) => sink,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PrintTarget::Stdout(_) => "stdout",
            PrintTarget::Buffer(_) => "buffer",
            PrintTarget::Writer(_) => "writer",
            PrintTarget::Sink(_) => "sink",
        }
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrintTarget({})", self.name())
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(std::io::stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer().flush()
    }
}

/// Redirection of diagnostic output.  Output goes to stdout until
/// redirected.
pub trait ConfigurablePrintTarget {
    fn print_to_stdout(&mut self);
    /// write to `file`
    fn print_to_file(&mut self, file: File);
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// drop all output
    fn print_to_sink(&mut self);
    /// collect output in memory, see [`get_print_buffer`](Self::get_print_buffer)
    fn print_to_buffer(&mut self);
    /// Output collected since the last call to `print_to_buffer`.  Fails
    /// unless output is being collected.
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::default();
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::Writer(Box::new(file));
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Writer(stream);
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink(std::io::sink());
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(buf) => Ok(String::from_utf8_lossy(buf).into_owned()),
            other => Err(Error::new(
                ErrorKind::Other,
                format!("output goes to {}, not to a buffer", other.name()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom};

    #[test]
    fn test_print_buffer() {
        let mut target = PrintTarget::default();
        assert!(target.get_print_buffer().is_err());

        target.print_to_buffer();
        write!(target, "pivot {}", 3).unwrap();
        assert_eq!(target.get_print_buffer().unwrap(), "pivot 3");

        target.print_to_sink();
        writeln!(target, "discarded").unwrap();
        let err = target.get_print_buffer().unwrap_err();
        assert!(err.to_string().contains("sink"));
    }

    #[test]
    fn test_print_file_and_stream_share_writer() {
        let mut file = tempfile::tempfile().unwrap();
        let mut target = PrintTarget::default();
        target.print_to_file(file.try_clone().unwrap());
        assert_eq!(format!("{:?}", target), "PrintTarget(writer)");

        writeln!(target, "size = {}", 4).unwrap();
        target.flush().unwrap();

        file.seek(SeekFrom::Start(0)).unwrap();
        let mut result = String::new();
        file.read_to_string(&mut result).unwrap();
        assert_eq!(result, "size = 4\n");

        target.print_to_stream(Box::new(std::io::sink()));
        assert_eq!(format!("{:?}", target), "PrintTarget(writer)");
        target.print_to_stdout();
        assert_eq!(format!("{:?}", target), "PrintTarget(stdout)");
    }
}
