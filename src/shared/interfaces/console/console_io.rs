use std::io::{self, BufRead, Write};

/// Line-oriented prompt/print helper over any reader and writer.
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `label` and reads one trimmed line; `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self.prompt_verbatim(label)?.map(|line| line.trim().to_string()))
    }

    /// Like [`prompt`](Self::prompt) but only strips the line terminator.
    pub fn prompt_verbatim(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let content_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(content_len);
        Ok(Some(line))
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.writer, "{}", text.as_ref())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// `true`, `1` or `yes`, case-insensitive.
pub fn is_affirmative(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value == "1" || value.eq_ignore_ascii_case("yes")
}

/// `y` or `yes`, case-insensitive.
pub fn is_confirmation(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("y") || value.eq_ignore_ascii_case("yes")
}
