use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-based dialogue with the user.
///
/// Every prompt the bank issues goes through `read_line`, and every message
/// it prints goes through `write_line`.
pub trait Console {
    /// Show `prompt` and block until one line of input arrives.
    /// The trailing line terminator is not part of the returned text.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Show one line of output.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// A `Console` over any buffered reader and writer (stdin/stdout, `Cursor`, etc.)
#[derive(Debug)]
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the terminal and hand back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a response",
            ));
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        log::trace!("[console] read {} bytes after prompt {prompt:?}", line.len());
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }
}
